use chrono::NaiveDate;
use clap::ValueEnum;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::SpesaError;
use crate::storage::Store;

/// One recorded expense.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Expense {
    pub id: u64,
    pub title: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub category: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// The in-memory expense list and its operations.
///
/// The ledger exclusively owns the record sequence and writes it through
/// to the [`Store`] after every mutation. Ids come from a monotonic
/// counter seeded from the loaded records, so an id is never handed out
/// twice within a run even after the highest-id record is deleted.
#[derive(Debug)]
pub struct Ledger {
    items: Vec<Expense>,
    next_id: u64,
    store: Store,
}

impl Ledger {
    pub fn load(store: Store) -> Self {
        let items = store.get();
        let next_id = items.iter().map(|item| item.id).max().unwrap_or(0) + 1;
        Self {
            items,
            next_id,
            store,
        }
    }

    pub fn items(&self) -> &[Expense] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Appends a record with a fresh id and persists. Validation (non-empty
    /// fields, positive amount) is the caller's responsibility.
    pub fn add_item(
        &mut self,
        title: String,
        amount: Decimal,
        date: NaiveDate,
        category: String,
    ) -> Result<u64, SpesaError> {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Expense {
            id,
            title,
            amount,
            date,
            category,
        });
        self.store.set(&self.items)?;
        Ok(id)
    }

    /// Removes the record with the given id. Returns whether a record was
    /// removed; an unknown id is a no-op, not an error.
    pub fn delete_item(&mut self, id: u64) -> Result<bool, SpesaError> {
        let Some(pos) = self.items.iter().position(|item| item.id == id) else {
            return Ok(false);
        };
        self.items.remove(pos);
        self.store.set(&self.items)?;
        Ok(true)
    }

    /// Stable in-place sort by amount. `None` leaves the order untouched.
    pub fn sort_by_amount(
        &mut self,
        direction: Option<SortDirection>,
    ) -> Result<(), SpesaError> {
        let Some(direction) = direction else {
            return Ok(());
        };
        match direction {
            SortDirection::Ascending => self.items.sort_by(|a, b| a.amount.cmp(&b.amount)),
            SortDirection::Descending => self.items.sort_by(|a, b| b.amount.cmp(&a.amount)),
        }
        self.store.set(&self.items)?;
        Ok(())
    }

    /// Total amount per category, in insertion order of first occurrence.
    pub fn categories(&self) -> Vec<(String, Decimal)> {
        let mut totals: Vec<(String, Decimal)> = Vec::new();
        for item in &self.items {
            match totals.iter_mut().find(|(label, _)| *label == item.category) {
                Some((_, total)) => *total += item.amount,
                None => totals.push((item.category.clone(), item.amount)),
            }
        }
        totals
    }

    /// Empties the ledger and the persisted document.
    pub fn clear_items(&mut self) -> Result<(), SpesaError> {
        self.items.clear();
        self.store.clear()
    }
}
