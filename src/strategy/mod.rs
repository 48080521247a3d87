pub mod engine;
pub mod options;

pub use engine::{wearable_rarity_scores, Scores};
pub use options::{Snapshot, StrategyOptions};
