pub mod error;
pub mod record;
pub mod seed;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use record::{CountryRecord, RecordBody};
pub use seed::seed_records;
pub use store::RecordStore;
