use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};
use super::error::{StoreError, StoreResult};
use super::record::{CountryRecord, RecordBody};
use super::seed::seed_records;

/// In-memory country store backed by a single JSON file.
///
/// Records keep the order of the JSON object they were loaded from; new
/// countries are appended. Every mutation rewrites the whole file.
pub struct RecordStore {
    path: PathBuf,
    records: Vec<CountryRecord>,
    index: HashMap<String, usize>,
}

impl RecordStore {
    pub const DEFAULT_PATH: &'static str = "country_rights.json";

    /// Open the store at the default location in the working directory.
    pub fn open_default() -> StoreResult<Self> {
        Self::open(Self::DEFAULT_PATH)
    }

    /// Load the store from `path`, or seed and persist it if the file does
    /// not exist yet.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();

        if path.exists() {
            let records = Self::load_records(&path)?;
            info!(path = %path.display(), countries = records.len(), "Loaded country store");
            return Ok(Self::from_records(path, records));
        }

        let store = Self::from_records(path, seed_records());
        store.save()?;
        info!(path = %store.path.display(), "Created country store with seed data");
        Ok(store)
    }

    fn from_records(path: PathBuf, records: Vec<CountryRecord>) -> Self {
        let index = records
            .iter()
            .enumerate()
            .map(|(i, record)| (record.name.clone(), i))
            .collect();
        Self { path, records, index }
    }

    fn load_records(path: &Path) -> StoreResult<Vec<CountryRecord>> {
        let content = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let parse_err = |source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        };

        // serde_json is built with `preserve_order`, so this map iterates in file order.
        let object: Map<String, Value> = serde_json::from_str(&content).map_err(parse_err)?;

        let mut records = Vec::with_capacity(object.len());
        for (name, value) in object {
            let body: RecordBody = serde_json::from_value(value).map_err(parse_err)?;
            records.push(CountryRecord::from_body(name, body));
        }
        Ok(records)
    }

    /// Render the whole store as pretty JSON with 2-space indentation.
    /// Non-ASCII text is emitted as-is.
    pub fn to_json(&self) -> StoreResult<String> {
        let mut object = Map::with_capacity(self.records.len());
        for record in &self.records {
            let value = serde_json::to_value(record.to_body()).map_err(StoreError::Serialize)?;
            object.insert(record.name.clone(), value);
        }
        serde_json::to_string_pretty(&object).map_err(StoreError::Serialize)
    }

    /// Overwrite the backing file with the full store.
    ///
    /// The JSON goes to a sibling temp file first and is renamed over the
    /// target, so a failed write never leaves a truncated store behind.
    /// A symlinked store file is written through to its target.
    pub fn save(&self) -> StoreResult<()> {
        let content = self.to_json()?;
        let target = self.resolved_path();
        let tmp_path = Self::tmp_path(&target);

        if let Err(source) = fs::write(&tmp_path, content) {
            let _ = fs::remove_file(&tmp_path);
            return Err(StoreError::Io { path: tmp_path, source });
        }
        if let Err(source) = fs::rename(&tmp_path, &target) {
            let _ = fs::remove_file(&tmp_path);
            return Err(StoreError::Io { path: target, source });
        }

        debug!(path = %target.display(), countries = self.records.len(), "Saved country store");
        Ok(())
    }

    /// The file a save must replace. Falls back to the configured path when
    /// it does not exist yet.
    fn resolved_path(&self) -> PathBuf {
        fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone())
    }

    fn tmp_path(target: &Path) -> PathBuf {
        let mut name = target
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        target.with_file_name(name)
    }

    /// Add a new country and persist the store.
    ///
    /// Rejects blank and already-present names without touching the store.
    pub fn add(&mut self, record: CountryRecord) -> StoreResult<()> {
        if record.name.trim().is_empty() {
            warn!("Rejected country with empty name");
            return Err(StoreError::EmptyName);
        }
        if self.contains(&record.name) {
            warn!(country = %record.name, "Rejected duplicate country");
            return Err(StoreError::DuplicateCountry(record.name));
        }

        let name = record.name.clone();
        self.index.insert(name.clone(), self.records.len());
        self.records.push(record);

        if let Err(e) = self.save() {
            // Keep memory and disk in step: drop the record that could not be persisted.
            self.records.pop();
            self.index.remove(&name);
            return Err(e);
        }

        info!(country = %name, "Added country");
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&CountryRecord> {
        self.index.get(name).map(|&i| &self.records[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Country names in store order.
    pub fn names(&self) -> Vec<String> {
        self.records.iter().map(|r| r.name.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CountryRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
