use crate::storage::RecordStore;

/// Rights and duties of one country that matched a keyword.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub country: String,
    pub rights: Vec<String>,
    pub duties: Vec<String>,
}

/// Normalise user input into the form matched against: trimmed and lowercased.
pub fn normalize_keyword(keyword: &str) -> String {
    keyword.trim().to_lowercase()
}

fn matching(items: &[String], needle: &str) -> Vec<String> {
    items
        .iter()
        .filter(|item| item.to_lowercase().contains(needle))
        .cloned()
        .collect()
}

/// Case-insensitive substring search over every right and duty.
///
/// Hits come back in store order, and each hit keeps the original list order.
/// Countries without a match are left out; an empty keyword matches everything.
pub fn search(store: &RecordStore, keyword: &str) -> Vec<SearchHit> {
    search_normalized(store, &normalize_keyword(keyword))
}

/// Same as [`search`] for a needle already passed through [`normalize_keyword`].
pub fn search_normalized(store: &RecordStore, needle: &str) -> Vec<SearchHit> {
    store
        .iter()
        .filter_map(|record| {
            let rights = matching(&record.rights, needle);
            let duties = matching(&record.duties, needle);
            if rights.is_empty() && duties.is_empty() {
                return None;
            }
            Some(SearchHit { country: record.name.clone(), rights, duties })
        })
        .collect()
}
