use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::errors::SpesaError;
use crate::ledger::Expense;

/// Persists the expense list as a single JSON document on disk.
///
/// The document is a derived mirror of the in-memory ledger; the ledger
/// rewrites it in full after every mutation.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .map(|dir| dir.join("spesa"))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("expenses.json")
    }

    /// Overwrites the stored document with the full record list.
    pub fn set(&self, records: &[Expense]) -> Result<(), SpesaError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, records)?;
        writer.flush()?;
        Ok(())
    }

    /// Returns the stored records. An absent, unreadable, or corrupt
    /// document yields an empty list so the tracker always starts.
    pub fn get(&self) -> Vec<Expense> {
        if !self.path.exists() {
            return Vec::new();
        }
        match fs::read_to_string(&self.path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Vec::new(),
        }
    }

    /// Removes the expense document. Nothing else in the data directory
    /// is touched.
    pub fn clear(&self) -> Result<(), SpesaError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn expense(id: u64, title: &str, cents: i64, category: &str) -> Expense {
        Expense {
            id,
            title: title.to_string(),
            amount: Decimal::new(cents, 2),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            category: category.to_string(),
        }
    }

    #[test]
    fn round_trip_preserves_fields_and_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("expenses.json"));
        let records = vec![
            expense(1, "Coffee", 350, "food"),
            expense(2, "Bus", 200, "transport"),
            expense(3, "Rent", 10000, "rent"),
        ];
        store.set(&records).unwrap();
        assert_eq!(store.get(), records);
    }

    #[test]
    fn missing_document_yields_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("expenses.json"));
        assert!(store.get().is_empty());
    }

    #[test]
    fn corrupt_document_yields_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("expenses.json");
        fs::write(&path, "not json at all {").unwrap();
        let store = Store::new(path);
        assert!(store.get().is_empty());
    }

    #[test]
    fn clear_removes_only_the_document() {
        let dir = tempfile::tempdir().unwrap();
        let sibling = dir.path().join("other.json");
        fs::write(&sibling, "{}").unwrap();
        let store = Store::new(dir.path().join("expenses.json"));
        store.set(&[expense(1, "Coffee", 350, "food")]).unwrap();
        store.clear().unwrap();
        assert!(store.get().is_empty());
        assert!(sibling.exists());
    }

    #[test]
    fn clear_on_missing_document_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("expenses.json"));
        store.clear().unwrap();
    }
}
