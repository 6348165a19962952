//! In-process key store

use std::collections::BTreeMap;

use super::{check_key_name, KeyRecord, Keyring};
use crate::error::{Error, Result};

/// Key store that lives only as long as the process
#[derive(Debug, Default, Clone)]
pub struct MemoryKeyring {
    records: BTreeMap<String, KeyRecord>,
}

impl MemoryKeyring {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a record
    pub fn insert(&mut self, record: KeyRecord) -> Result<()> {
        check_key_name(record.name())?;
        self.records.insert(record.name().to_string(), record);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<KeyRecord> for MemoryKeyring {
    fn from_iter<I: IntoIterator<Item = KeyRecord>>(iter: I) -> Self {
        Self {
            records: iter
                .into_iter()
                .map(|record| (record.name().to_string(), record))
                .collect(),
        }
    }
}

impl Keyring for MemoryKeyring {
    fn backend(&self) -> &'static str {
        "memory"
    }

    fn key(&self, name: &str) -> Result<KeyRecord> {
        self.records
            .get(name)
            .cloned()
            .ok_or_else(|| Error::KeyNotFound(name.to_string()))
    }

    fn list(&self) -> Result<Vec<KeyRecord>> {
        Ok(self.records.values().cloned().collect())
    }
}
