pub mod compare;
pub mod search;

pub use compare::{common_rights, compare_with_others, Comparison};
pub use search::{normalize_keyword, search, search_normalized, SearchHit};
