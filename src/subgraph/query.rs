use std::fmt::Write;

/// Item types that count towards the score. Everything else the collections
/// subgraph indexes (names, parcels, estates) is ignored.
const ITEM_TYPES: &str = "[wearable_v1, wearable_v2, smart_wearable_v1, emote_v1]";

/// One page of the `nfts` query, built as an immutable value per request.
///
/// Only the cursor changes between pages of the same chunk, so the loop
/// clones the base query and sets a new cursor each round rather than
/// mutating a shared request object.
#[derive(Debug, Clone)]
pub struct NftPageQuery {
    owners: Vec<String>,
    cursor: String,
    collections: Option<Vec<String>>,
    block_number: Option<u64>,
    page_size: usize,
}

impl NftPageQuery {
    /// Start a query for the given owner addresses. Owners are lowercased
    /// here because the subgraph stores addresses in lowercase.
    pub fn new(owners: &[String], page_size: usize) -> Self {
        Self {
            owners: owners.iter().map(|a| a.to_lowercase()).collect(),
            cursor: String::new(),
            collections: None,
            block_number: None,
            page_size,
        }
    }

    /// Restrict results to the given collection ids.
    pub fn collections(mut self, collections: Option<&[String]>) -> Self {
        self.collections = collections.map(|c| c.to_vec());
        self
    }

    /// Pin the query to a historical block. `None` queries latest state.
    pub fn block_number(mut self, block_number: Option<u64>) -> Self {
        self.block_number = block_number;
        self
    }

    /// Return a copy of this query that resumes after `cursor`.
    pub fn after(&self, cursor: &str) -> Self {
        let mut next = self.clone();
        next.cursor = cursor.to_string();
        next
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Render the GraphQL document for this page.
    pub fn render(&self) -> String {
        let mut args = String::new();
        if let Some(block) = self.block_number {
            write!(args, "block: {{number: {}}}, ", block).unwrap();
        }

        write!(
            args,
            "where: {{itemType_in: {}, owner_in: {}, id_gt: {}",
            ITEM_TYPES,
            string_list(&self.owners),
            string_literal(&self.cursor),
        )
        .unwrap();
        if let Some(ref collections) = self.collections {
            write!(args, ", collection_in: {}", string_list(collections)).unwrap();
        }
        write!(
            args,
            "}}, orderBy: id, orderDirection: asc, first: {}",
            self.page_size
        )
        .unwrap();

        format!(
            "{{ nfts({}) {{ id owner {{ id }} searchWearableRarity }} }}",
            args
        )
    }
}

// JSON string/array literals are valid GraphQL literals, so serde_json does
// the escaping for us.
fn string_literal(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_default()
}

fn string_list(items: &[String]) -> String {
    serde_json::to_string(items).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owners() -> Vec<String> {
        vec!["0xAbC0000000000000000000000000000000000001".to_string()]
    }

    #[test]
    fn test_renders_base_query() {
        let query = NftPageQuery::new(&owners(), 1000).render();

        assert!(query.contains(
            "itemType_in: [wearable_v1, wearable_v2, smart_wearable_v1, emote_v1]"
        ));
        assert!(query.contains("owner_in: [\"0xabc0000000000000000000000000000000000001\"]"));
        assert!(query.contains("id_gt: \"\""));
        assert!(query.contains("orderBy: id, orderDirection: asc, first: 1000"));
        assert!(query.contains("id owner { id } searchWearableRarity"));
        assert!(!query.contains("collection_in"));
        assert!(!query.contains("block:"));
    }

    #[test]
    fn test_owner_filter_is_lowercased() {
        let query = NftPageQuery::new(&owners(), 1000).render();
        assert!(!query.contains("0xAbC"));
    }

    #[test]
    fn test_collections_filter_is_optional() {
        let collections = vec!["0xcollection1".to_string(), "0xcollection2".to_string()];
        let query = NftPageQuery::new(&owners(), 1000)
            .collections(Some(&collections))
            .render();
        assert!(query.contains("collection_in: [\"0xcollection1\",\"0xcollection2\"]"));
    }

    #[test]
    fn test_block_pin_is_optional() {
        let query = NftPageQuery::new(&owners(), 1000)
            .block_number(Some(12_345_678))
            .render();
        assert!(query.contains("block: {number: 12345678}"));
    }

    #[test]
    fn test_after_sets_cursor_without_touching_base() {
        let base = NftPageQuery::new(&owners(), 1000);
        let next = base.after("0xdeadbeef-0");

        assert!(next.render().contains("id_gt: \"0xdeadbeef-0\""));
        assert!(base.render().contains("id_gt: \"\""));
    }
}
