pub mod cli;
pub mod query;
pub mod storage;

pub use storage::{CountryRecord, RecordStore, StoreError, StoreResult};
pub use query::{Comparison, SearchHit};
pub use cli::CLI;
