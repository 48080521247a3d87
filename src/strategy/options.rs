use serde::Deserialize;
use std::collections::HashMap;

/// Strategy configuration supplied by the host voting framework.
///
/// Example JSON:
/// ```json
/// {
///   "multipliers": { "common": 1, "epic": 3, "legendary": 5 },
///   "collections": ["0x32b7495895264ac9d0b12d32afd435453458b1c6"]
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct StrategyOptions {
    /// Weight added to an owner's score per owned item, keyed by lowercase
    /// rarity. Rarities not listed here contribute 0 (default: empty, so
    /// every address scores 0).
    #[serde(default)]
    pub multipliers: HashMap<String, f64>,

    /// Optional allow-list of collection ids. When set, only items from
    /// these collections are counted (default: all collections).
    #[serde(default)]
    pub collections: Option<Vec<String>>,
}

/// The chain state to score against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Snapshot {
    /// Latest indexed state.
    Latest,
    /// State as of a specific block.
    Block(u64),
}

impl Snapshot {
    /// Block number to pin queries to, or `None` for latest state.
    pub fn block_number(&self) -> Option<u64> {
        match self {
            Snapshot::Latest => None,
            Snapshot::Block(number) => Some(*number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_options_parse() {
        let options: StrategyOptions = serde_json::from_str("{}").unwrap();
        assert!(options.multipliers.is_empty());
        assert!(options.collections.is_none());
    }

    #[test]
    fn test_full_options_parse() {
        let options: StrategyOptions = serde_json::from_str(
            r#"{
                "multipliers": { "epic": 3, "legendary": 5 },
                "collections": ["0xcollection1"]
            }"#,
        )
        .unwrap();
        assert_eq!(options.multipliers.get("legendary"), Some(&5.0));
        assert_eq!(options.collections.unwrap().len(), 1);
    }

    #[test]
    fn test_snapshot_block_number() {
        assert_eq!(Snapshot::Latest.block_number(), None);
        assert_eq!(Snapshot::Block(17_000_000).block_number(), Some(17_000_000));
    }
}
