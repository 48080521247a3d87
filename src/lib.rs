//! Voting-power scores from Decentraland wearable ownership.
//!
//! Queries a Decentraland collections subgraph for the wearables and emotes
//! owned by a set of addresses, then weights each owned item by its rarity
//! using a caller-supplied multiplier table. The result is a mapping from
//! checksummed address to score, with every input address present (score 0
//! when the address owns nothing that matters).
//!
//! ```no_run
//! use dcl_wearable_rarity::{wearable_rarity_scores, HttpSubgraphClient, Snapshot, StrategyOptions};
//! use std::collections::HashMap;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let client = HttpSubgraphClient::new();
//! let options = StrategyOptions {
//!     multipliers: HashMap::from([("legendary".to_string(), 5.0)]),
//!     collections: None,
//! };
//! let scores = wearable_rarity_scores(
//!     &client,
//!     "1",
//!     &["0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359".to_string()],
//!     &options,
//!     Snapshot::Latest,
//! )
//! .await?;
//! # Ok(())
//! # }
//! ```

pub mod address;
pub mod pacer;
pub mod strategy;
pub mod subgraph;

pub use address::to_checksum_address;
pub use pacer::RequestPacer;
pub use strategy::{wearable_rarity_scores, Scores, Snapshot, StrategyOptions};
pub use subgraph::{HttpSubgraphClient, SubgraphClient};
