//! Keyed JSON storage for transaction records.
//!
//! One file per key under the data directory. The `transactions` key holds a
//! JSON array of records; a missing file reads as an empty list, a file that
//! fails to parse surfaces as a typed error the UI can turn into a message.

use std::path::PathBuf;

use crate::error::{ResumoError, Result};
use crate::models::TransactionRecord;

pub const TRANSACTIONS_KEY: &str = "transactions";

pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    pub fn transactions_path(&self) -> PathBuf {
        self.key_path(TRANSACTIONS_KEY)
    }

    pub fn read_transactions(&self) -> Result<Vec<TransactionRecord>> {
        let path = self.transactions_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&path)?;
        serde_json::from_str(&content).map_err(|source| ResumoError::MalformedStore {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn write_transactions(&self, records: &[TransactionRecord]) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(records)
            .map_err(|e| ResumoError::Other(format!("serialize failed: {e}")))?;
        std::fs::write(self.transactions_path(), format!("{json}\n"))?;
        Ok(())
    }

    pub fn append_transaction(&self, record: TransactionRecord) -> Result<()> {
        let mut records = self.read_transactions()?;
        records.push(record);
        self.write_transactions(&records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;

    fn rec(amount: &str) -> TransactionRecord {
        TransactionRecord {
            kind: TransactionKind::Expense,
            name: "Mercado".into(),
            amount: amount.into(),
            category: "food".into(),
            date: "2024-05-01".into(),
        }
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path());
        assert!(store.read_transactions().unwrap().is_empty());
    }

    #[test]
    fn test_append_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path());
        store.append_transaction(rec("100")).unwrap();
        store.append_transaction(rec("250.50")).unwrap();
        let records = store.read_transactions().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].amount, "250.50");
    }

    #[test]
    fn test_malformed_file_is_a_typed_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path());
        std::fs::write(store.transactions_path(), "{not json").unwrap();
        let err = store.read_transactions().unwrap_err();
        assert!(matches!(err, ResumoError::MalformedStore { .. }), "got: {err}");
    }

    #[test]
    fn test_write_creates_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("deep").join("data");
        let store = Store::open(&nested);
        store.write_transactions(&[rec("10")]).unwrap();
        assert!(store.transactions_path().exists());
    }
}
