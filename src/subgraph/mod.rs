pub mod client;
pub mod query;
pub mod types;

pub use client::{HttpSubgraphClient, SubgraphClient};
pub use query::NftPageQuery;
pub use types::{NftOwner, NftPage, NftRecord};
