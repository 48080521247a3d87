use serde::Deserialize;

/// One page of the `nfts` query. The subgraph omits the list entirely when
/// nothing matches, which deserializes to `None` and counts as an empty page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NftPage {
    #[serde(default)]
    pub nfts: Option<Vec<NftRecord>>,
}

impl NftPage {
    pub fn into_records(self) -> Vec<NftRecord> {
        self.nfts.unwrap_or_default()
    }
}

/// One item-ownership entry. `id` doubles as the pagination cursor.
#[derive(Debug, Clone, Deserialize)]
pub struct NftRecord {
    pub id: String,
    pub owner: NftOwner,
    /// Rarity label, e.g. "legendary". Absent for items that predate the
    /// rarity field; those score 0.
    #[serde(default, rename = "searchWearableRarity")]
    pub search_wearable_rarity: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NftOwner {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_full_record() {
        let page: NftPage = serde_json::from_value(serde_json::json!({
            "nfts": [
                {
                    "id": "0xcafe-12",
                    "owner": { "id": "0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359" },
                    "searchWearableRarity": "Legendary"
                }
            ]
        }))
        .unwrap();

        let records = page.into_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "0xcafe-12");
        assert_eq!(records[0].search_wearable_rarity.as_deref(), Some("Legendary"));
    }

    #[test]
    fn test_missing_nfts_is_empty_page() {
        let page: NftPage = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(page.into_records().is_empty());

        let page: NftPage = serde_json::from_value(serde_json::json!({ "nfts": null })).unwrap();
        assert!(page.into_records().is_empty());
    }

    #[test]
    fn test_missing_rarity_is_none() {
        let page: NftPage = serde_json::from_value(serde_json::json!({
            "nfts": [{ "id": "0x1-1", "owner": { "id": "0xab" } }]
        }))
        .unwrap();
        assert!(page.into_records()[0].search_wearable_rarity.is_none());
    }
}
