use serde::{Serialize, Deserialize};

/// A single country's civic information, keyed by `name` in the store.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryRecord {
    pub name: String,
    pub description: String,
    pub rights: Vec<String>,
    pub duties: Vec<String>,
    pub sources: Vec<String>,
    pub last_updated: String,
}

/// The JSON value stored under a country's name. The name itself is the
/// object key, so it is not repeated here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordBody {
    pub description: String,
    pub rights: Vec<String>,
    pub duties: Vec<String>,
    pub sources: Vec<String>,
    pub last_updated: String,
}

impl CountryRecord {
    pub fn new(name: String, description: String) -> Self {
        Self {
            name,
            description,
            rights: Vec::new(),
            duties: Vec::new(),
            sources: Vec::new(),
            last_updated: String::new(),
        }
    }

    pub fn with_rights(mut self, rights: Vec<String>) -> Self {
        self.rights = rights;
        self
    }

    pub fn with_duties(mut self, duties: Vec<String>) -> Self {
        self.duties = duties;
        self
    }

    pub fn with_sources(mut self, sources: Vec<String>) -> Self {
        self.sources = sources;
        self
    }

    pub fn with_last_updated(mut self, date: impl Into<String>) -> Self {
        self.last_updated = date.into();
        self
    }

    pub fn from_body(name: String, body: RecordBody) -> Self {
        Self {
            name,
            description: body.description,
            rights: body.rights,
            duties: body.duties,
            sources: body.sources,
            last_updated: body.last_updated,
        }
    }

    pub fn to_body(&self) -> RecordBody {
        RecordBody {
            description: self.description.clone(),
            rights: self.rights.clone(),
            duties: self.duties.clone(),
            sources: self.sources.clone(),
            last_updated: self.last_updated.clone(),
        }
    }
}
