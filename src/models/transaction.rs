//! Transaction model
//!
//! A transaction is an expense: a positive amount spent in one category at a
//! point in time. Records are immutable once stored; the only lifecycle
//! operation after creation is deletion by id.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::TransactionId;
use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, assigned by the store
    pub id: TransactionId,

    /// Amount spent (always positive for stored records)
    pub amount: Money,

    /// Spending category
    pub category: Category,

    /// Free-text description
    pub description: String,

    /// Local wall-clock time of the expense
    pub date: NaiveDateTime,
}

impl Transaction {
    /// Create a transaction with a fresh id
    ///
    /// No validation happens here; the store's `add_transaction` is the
    /// validating entry point.
    pub(crate) fn new(
        amount: Money,
        category: Category,
        description: impl Into<String>,
        date: NaiveDateTime,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            amount,
            category,
            description: description.into(),
            date,
        }
    }

    /// Check whether the description contains `needle`, ignoring case
    pub fn matches_search(&self, needle: &str) -> bool {
        needle.is_empty()
            || self
                .description
                .to_lowercase()
                .contains(&needle.to_lowercase())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}] {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.category,
            self.amount
        )
    }
}
