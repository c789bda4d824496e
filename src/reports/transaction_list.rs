//! Transaction List Report
//!
//! Filtered, newest-first listing of transactions grouped by how long ago
//! they happened.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::aggregation::{categories_in_use, group_by_period, TransactionQuery};
use crate::display::transaction::format_transaction_table;
use crate::display::format_currency;
use crate::models::{Category, Money, Transaction, TransactionPeriod};
use crate::store::Snapshot;

/// Transactions falling in one relative period
#[derive(Debug, Clone)]
pub struct PeriodSection {
    pub period: TransactionPeriod,
    pub transactions: Vec<Transaction>,
    pub subtotal: Money,
}

/// Transaction List Report
#[derive(Debug, Clone)]
pub struct TransactionListReport {
    pub query: TransactionQuery,
    /// Sections in newest-first order, empty periods omitted
    pub sections: Vec<PeriodSection>,
    /// Categories present anywhere in the store, for filter choices
    pub available_categories: Vec<Category>,
    pub match_count: usize,
    pub match_total: Money,
}

impl TransactionListReport {
    /// Generate the listing for `query` relative to `now`
    pub fn generate(snapshot: Snapshot<'_>, query: TransactionQuery, now: NaiveDateTime) -> Self {
        let matched = query.apply(snapshot.transactions);
        let match_count = matched.len();

        let sections: Vec<PeriodSection> = group_by_period(matched, now)
            .into_iter()
            .map(|group| {
                let transactions: Vec<Transaction> =
                    group.transactions.into_iter().cloned().collect();
                let subtotal = transactions.iter().map(|t| t.amount).sum();
                PeriodSection {
                    period: group.period,
                    transactions,
                    subtotal,
                }
            })
            .collect();
        let match_total = sections.iter().map(|s| s.subtotal).sum();

        debug!(
            search = query.search.as_str(),
            category = ?query.category,
            matches = match_count,
            "transaction list generated"
        );

        Self {
            query,
            sections,
            available_categories: categories_in_use(snapshot.transactions),
            match_count,
            match_total,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str("Transactions\n");
        output.push_str(&"=".repeat(70));
        output.push('\n');

        let mut filters = Vec::new();
        if !self.query.search.is_empty() {
            filters.push(format!("search \"{}\"", self.query.search));
        }
        if let Some(category) = self.query.category {
            filters.push(format!("category {}", category.label()));
        }
        if !filters.is_empty() {
            output.push_str(&format!("Filter: {}\n", filters.join(", ")));
        }
        output.push_str(&format!(
            "{} matching, {} total\n",
            self.match_count,
            format_currency(self.match_total, currency)
        ));

        if self.sections.is_empty() {
            output.push_str("\nNo transactions found.\n");
            return output;
        }

        for section in &self.sections {
            output.push_str(&format!(
                "\n{} ({})\n",
                section.period,
                format_currency(section.subtotal, currency)
            ));
            let rows: Vec<&Transaction> = section.transactions.iter().collect();
            output.push_str(&format_transaction_table(&rows, currency));
        }

        output
    }
}
