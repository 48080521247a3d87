use anyhow::Result;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

use crate::address::to_checksum_address;
use crate::pacer::RequestPacer;
use crate::strategy::options::{Snapshot, StrategyOptions};
use crate::subgraph::{NftPage, NftPageQuery, NftRecord, SubgraphClient};

/// Final result: checksummed address -> accumulated score.
pub type Scores = HashMap<String, f64>;

/// Most owner addresses the subgraph accepts in one `owner_in` filter.
const ADDRESSES_PER_QUERY: usize = 2000;

/// Records requested per page. A page with fewer records means end of data.
const PAGE_SIZE: usize = 1000;

/// Minimum spacing between outbound requests (ceiling of 10 req/s).
const REQUEST_DELAY: Duration = Duration::from_millis(100);

const COLLECTIONS_SUBGRAPHS: &[(&str, &str)] = &[
    ("1", "https://subgraph.decentraland.org/collections-ethereum-mainnet"),
    ("137", "https://subgraph.decentraland.org/collections-matic-mainnet"),
    ("80002", "https://subgraph.decentraland.org/collections-matic-amoy"),
];

fn collections_subgraph(network: &str) -> Option<&'static str> {
    COLLECTIONS_SUBGRAPHS
        .iter()
        .find(|(id, _)| *id == network)
        .map(|(_, url)| *url)
}

/// Score each address by the rarity-weighted count of wearables it owns.
///
/// Every input address appears in the result, checksummed, starting at 0.
/// Networks without a collections subgraph return that zero mapping without
/// issuing any requests. Owned items are fetched in address chunks, one page
/// at a time, paced to [`REQUEST_DELAY`] between requests; each item adds
/// `options.multipliers[rarity]` (0 for unlisted rarities) to its owner's
/// score. Transport failures and malformed input addresses fail the whole
/// invocation — there is no retry and no partial result.
pub async fn wearable_rarity_scores<C: SubgraphClient>(
    client: &C,
    network: &str,
    addresses: &[String],
    options: &StrategyOptions,
    snapshot: Snapshot,
) -> Result<Scores> {
    let mut scores = Scores::with_capacity(addresses.len());
    for address in addresses {
        scores.insert(to_checksum_address(address)?, 0.0);
    }

    let Some(url) = collections_subgraph(network) else {
        debug!(network, "no collections subgraph for network, returning zero scores");
        return Ok(scores);
    };

    let mut pacer = RequestPacer::new(REQUEST_DELAY);

    for chunk in addresses.chunks(ADDRESSES_PER_QUERY) {
        let base_query = NftPageQuery::new(chunk, PAGE_SIZE)
            .collections(options.collections.as_deref())
            .block_number(snapshot.block_number());

        let mut cursor = String::new();
        loop {
            let query = base_query.after(&cursor).render();

            pacer.wait().await;
            let data = client.query(url, &query).await?;

            let page = if data.is_null() {
                NftPage::default()
            } else {
                serde_json::from_value::<NftPage>(data)?
            };
            let records = page.into_records();
            debug!(network, records = records.len(), "fetched nft page");

            for record in &records {
                add_record(&mut scores, record, &options.multipliers)?;
            }

            // Exactly a full page means there may be more; resume after the
            // last id seen.
            if records.len() < PAGE_SIZE {
                break;
            }
            cursor = records.last().map(|r| r.id.clone()).unwrap_or_default();
        }
    }

    Ok(scores)
}

/// Fold one ownership record into the running scores.
///
/// Owners outside the original input set are still recorded, so the result
/// mapping can grow beyond the input addresses. Unknown or missing rarity
/// labels contribute 0 rather than failing.
fn add_record(scores: &mut Scores, record: &NftRecord, multipliers: &HashMap<String, f64>) -> Result<()> {
    let owner = to_checksum_address(&record.owner.id)?;
    let rarity = record
        .search_wearable_rarity
        .as_deref()
        .unwrap_or("")
        .trim()
        .to_lowercase();
    let weight = multipliers.get(&rarity).copied().unwrap_or(0.0);
    *scores.entry(owner).or_insert(0.0) += weight;
    Ok(())
}
