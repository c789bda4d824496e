//! Searching, ordering and period grouping for transaction lists

use chrono::NaiveDateTime;

use crate::models::{Category, Transaction, TransactionPeriod};

/// Search and filter criteria for the transaction list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionQuery {
    /// Case-insensitive substring of the description; empty matches everything
    pub search: String,
    /// Restrict to one category; `None` means all categories
    pub category: Option<Category>,
}

impl TransactionQuery {
    /// Create a query matching every transaction
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by description text
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    /// Filter by category
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Check if a transaction satisfies both criteria
    pub fn matches(&self, txn: &Transaction) -> bool {
        let category_ok = self.category.map_or(true, |c| txn.category == c);
        category_ok && txn.matches_search(&self.search)
    }

    /// Matching transactions, newest first
    pub fn apply<'a, I>(&self, transactions: I) -> Vec<&'a Transaction>
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let matched = transactions.into_iter().filter(|t| self.matches(t));
        sort_newest_first(matched)
    }
}

/// Order transactions by date, newest first; equal dates keep input order
pub fn sort_newest_first<'a, I>(transactions: I) -> Vec<&'a Transaction>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut sorted: Vec<_> = transactions.into_iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

/// The `limit` most recent transactions
pub fn recent<'a, I>(transactions: I, limit: usize) -> Vec<&'a Transaction>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut sorted = sort_newest_first(transactions);
    sorted.truncate(limit);
    sorted
}

/// Transactions sharing one recency bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodGroup<'a> {
    pub period: TransactionPeriod,
    pub transactions: Vec<&'a Transaction>,
}

/// Bucket transactions by `TransactionPeriod` relative to `now`
///
/// Groups appear in the order their period is first seen, and each group
/// keeps the input order. Feed it a newest-first list to get headings from
/// most to least recent.
pub fn group_by_period<'a, I>(transactions: I, now: NaiveDateTime) -> Vec<PeriodGroup<'a>>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut groups: Vec<PeriodGroup<'a>> = Vec::new();
    for txn in transactions {
        let period = TransactionPeriod::classify(txn.date, now);
        match groups.iter_mut().find(|g| g.period == period) {
            Some(group) => group.transactions.push(txn),
            None => groups.push(PeriodGroup {
                period,
                transactions: vec![txn],
            }),
        }
    }
    groups
}

/// Distinct categories present, in order of first appearance
pub fn categories_in_use<'a, I>(transactions: I) -> Vec<Category>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut categories = Vec::new();
    for txn in transactions {
        if !categories.contains(&txn.category) {
            categories.push(txn.category);
        }
    }
    categories
}
