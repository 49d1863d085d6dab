use std::collections::HashSet;
use crate::storage::{CountryRecord, RecordStore};

/// Rights shared between the selected country and one other country.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub other: String,
    pub common: Vec<String>,
}

/// Set intersection of the two records' rights, ordered as they appear in `a`.
pub fn common_rights(a: &CountryRecord, b: &CountryRecord) -> Vec<String> {
    let other: HashSet<&str> = b.rights.iter().map(String::as_str).collect();
    let mut seen = HashSet::new();

    a.rights
        .iter()
        .filter(|right| other.contains(right.as_str()))
        .filter(|right| seen.insert(right.as_str()))
        .cloned()
        .collect()
}

/// Compare `name` against every other country in store order, skipping
/// countries that share no rights with it.
pub fn compare_with_others(store: &RecordStore, name: &str) -> Vec<Comparison> {
    let Some(selected) = store.get(name) else {
        return Vec::new();
    };

    store
        .iter()
        .filter(|other| other.name != selected.name)
        .filter_map(|other| {
            let common = common_rights(selected, other);
            if common.is_empty() {
                None
            } else {
                Some(Comparison { other: other.name.clone(), common })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(name: &str, rights: &[&str]) -> CountryRecord {
        CountryRecord::new(name.to_string(), String::new())
            .with_rights(rights.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_common_rights_follow_first_record_order() {
        let a = record("A", &["r3", "r1", "r2", "r4"]);
        let b = record("B", &["r1", "r2", "r3"]);
        assert_eq!(common_rights(&a, &b), vec!["r3", "r1", "r2"]);
    }

    #[test]
    fn test_common_rights_is_symmetric_as_set() {
        let a = record("A", &["x", "y", "z", "w"]);
        let b = record("B", &["w", "q", "x", "y"]);

        let ab: HashSet<String> = common_rights(&a, &b).into_iter().collect();
        let ba: HashSet<String> = common_rights(&b, &a).into_iter().collect();
        assert_eq!(ab, ba);
        assert_eq!(ab.len(), 3);
    }

    #[test]
    fn test_common_rights_deduplicates() {
        let a = record("A", &["x", "x", "y"]);
        let b = record("B", &["x", "x"]);
        assert_eq!(common_rights(&a, &b), vec!["x"]);
    }

    #[test]
    fn test_compare_with_seeded_store() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::open(dir.path().join("store.json")).unwrap();

        let comparisons = compare_with_others(&store, "Azerbaijan");
        // Seed rights are worded differently per country; the only shared one is
        // the education right, which Turkey lists verbatim.
        assert_eq!(comparisons.len(), 1);
        assert_eq!(comparisons[0].other, "Turkey");
        assert_eq!(comparisons[0].common, vec!["Təhsil hüququ (maddə 42)"]);

        assert!(compare_with_others(&store, "USA").is_empty());
        assert!(compare_with_others(&store, "France").is_empty());
    }
}
