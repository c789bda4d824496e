//! Category totals and rankings

use serde::Serialize;

use crate::models::{Category, Money, Transaction};

/// Amount spent in one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub amount: Money,
}

/// Per-category sums, in order of first appearance in the input
///
/// Categories without any transaction are absent; `get` reports them as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryTotals {
    entries: Vec<CategoryTotal>,
}

impl CategoryTotals {
    /// Amount for a category, zero when the category had no transactions
    pub fn get(&self, category: Category) -> Money {
        self.find(category).map(|e| e.amount).unwrap_or_default()
    }

    /// Check whether any transaction was recorded for the category
    pub fn contains(&self, category: Category) -> bool {
        self.find(category).is_some()
    }

    /// Sum over all categories
    pub fn total(&self) -> Money {
        self.entries.iter().map(|e| e.amount).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn find(&self, category: Category) -> Option<&CategoryTotal> {
        self.entries.iter().find(|e| e.category == category)
    }

    fn add(&mut self, category: Category, amount: Money) {
        match self.entries.iter_mut().find(|e| e.category == category) {
            Some(entry) => entry.amount += amount,
            None => self.entries.push(CategoryTotal { category, amount }),
        }
    }
}

/// Group transactions by category and sum their amounts
pub fn category_totals<'a, I>(transactions: I) -> CategoryTotals
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut totals = CategoryTotals::default();
    for txn in transactions {
        totals.add(txn.category, txn.amount);
    }
    totals
}

/// Sum of all transaction amounts
pub fn total_amount<'a, I>(transactions: I) -> Money
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions.into_iter().map(|t| t.amount).sum()
}

/// Sort totals by amount, largest first, and keep at most `limit` entries
///
/// The sort is stable: equal amounts keep their first-appearance order.
pub fn rank(totals: &CategoryTotals, limit: usize) -> Vec<CategoryTotal> {
    let mut ranked = totals.entries.clone();
    ranked.sort_by(|a, b| b.amount.cmp(&a.amount));
    ranked.truncate(limit);
    ranked
}
