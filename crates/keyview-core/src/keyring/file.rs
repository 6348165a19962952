//! Directory-backed key store
//!
//! Each record is one JSON file named after the key, inside
//! `<home>/keyring-test/`.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::{check_key_name, KeyRecord, Keyring};
use crate::error::{Error, Result};

/// Directory under the home directory holding the records
pub const TEST_KEYRING_DIR: &str = "keyring-test";

const RECORD_EXTENSION: &str = "json";

/// Key store reading one JSON file per record
#[derive(Debug, Clone)]
pub struct FileKeyring {
    dir: PathBuf,
}

impl FileKeyring {
    /// Open the store under `home`; the directory need not exist yet
    pub fn open(home: &Path) -> Self {
        Self {
            dir: home.join(TEST_KEYRING_DIR),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write a record, replacing any record of the same name
    pub fn save(&self, record: &KeyRecord) -> Result<()> {
        check_key_name(record.name())?;
        std::fs::create_dir_all(&self.dir)?;
        let content = serde_json::to_string_pretty(record)?;
        std::fs::write(self.record_path(record.name()), content)?;
        debug!(name = record.name(), "Saved key record");
        Ok(())
    }

    fn record_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", name, RECORD_EXTENSION))
    }

    fn load(&self, path: &Path) -> Result<KeyRecord> {
        let content = std::fs::read_to_string(path)?;
        let record: KeyRecord = serde_json::from_str(&content)?;
        Ok(record)
    }
}

impl Keyring for FileKeyring {
    fn backend(&self) -> &'static str {
        "test"
    }

    fn key(&self, name: &str) -> Result<KeyRecord> {
        if check_key_name(name).is_err() {
            return Err(Error::KeyNotFound(name.to_string()));
        }
        let path = self.record_path(name);
        if !path.exists() {
            return Err(Error::KeyNotFound(name.to_string()));
        }

        let record = self.load(&path)?;
        if record.name() != name {
            return Err(Error::Serialization(format!(
                "{} holds key {}",
                path.display(),
                record.name()
            )));
        }
        Ok(record)
    }

    fn list(&self) -> Result<Vec<KeyRecord>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(RECORD_EXTENSION) {
                continue;
            }
            match self.load(&path) {
                Ok(record) => records.push(record),
                Err(e) => warn!("Skipping unreadable key record {:?}: {}", path, e),
            }
        }
        records.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::Secp256k1PublicKey;
    use crate::hd::DerivationPath;
    use tempfile::TempDir;

    fn record(name: &str) -> KeyRecord {
        KeyRecord::local(name, Secp256k1PublicKey::from_secret(name.as_bytes()).unwrap())
    }

    #[test]
    fn test_save_then_lookup() {
        let home = TempDir::new().unwrap();
        let keyring = FileKeyring::open(home.path());
        let alice = record("alice");
        keyring.save(&alice).unwrap();

        assert_eq!(keyring.key("alice").unwrap(), alice);
        assert_eq!(keyring.key_by_address(&alice.address()).unwrap(), alice);
        assert!(home.path().join("keyring-test/alice.json").exists());
    }

    #[test]
    fn test_list_is_sorted_and_skips_foreign_files() {
        let home = TempDir::new().unwrap();
        let keyring = FileKeyring::open(home.path());
        keyring.save(&record("zed")).unwrap();
        keyring.save(&record("amy")).unwrap();
        std::fs::write(keyring.dir().join("notes.txt"), "hello").unwrap();
        std::fs::write(keyring.dir().join("broken.json"), "{").unwrap();

        let names: Vec<_> = keyring
            .list()
            .unwrap()
            .iter()
            .map(|r| r.name().to_string())
            .collect();
        assert_eq!(names, vec!["amy", "zed"]);
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let home = TempDir::new().unwrap();
        let keyring = FileKeyring::open(&home.path().join("nowhere"));
        assert!(keyring.list().unwrap().is_empty());
        assert!(keyring.key("x").unwrap_err().is_not_found());
    }

    #[test]
    fn test_ledger_path_survives_storage() {
        let home = TempDir::new().unwrap();
        let keyring = FileKeyring::open(home.path());
        let key = Secp256k1PublicKey::from_secret(b"hw").unwrap();
        keyring
            .save(&KeyRecord::ledger("hw", key, DerivationPath::cosmos(0, 2)))
            .unwrap();

        let loaded = keyring.key("hw").unwrap();
        assert_eq!(loaded.path().unwrap(), &DerivationPath::cosmos(0, 2));
    }

    #[test]
    fn test_invalid_multisig_record_is_rejected() {
        let home = TempDir::new().unwrap();
        let keyring = FileKeyring::open(home.path());
        let multi = crate::multisig::aggregate(2, &[record("a"), record("b")]).unwrap();
        let mut json = serde_json::to_value(&multi).unwrap();
        json["name"] = serde_json::json!("broken");
        json["public_key"]["threshold"] = serde_json::json!(5);
        std::fs::create_dir_all(keyring.dir()).unwrap();
        std::fs::write(keyring.dir().join("broken.json"), json.to_string()).unwrap();
        keyring.save(&record("fine")).unwrap();

        assert!(matches!(keyring.key("broken"), Err(Error::Serialization(_))));
        let names: Vec<_> = keyring
            .list()
            .unwrap()
            .iter()
            .map(|r| r.name().to_string())
            .collect();
        assert_eq!(names, vec!["fine"]);
    }
}
