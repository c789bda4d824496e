//! Transaction display formatting
//!
//! Renders transaction lists as tables and single records as detail blocks.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::format::{format_currency, format_date};
use super::report::truncate;
use crate::models::Transaction;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl TransactionRow {
    fn from_transaction(txn: &Transaction, currency: &str) -> Self {
        Self {
            date: format_date(txn.date),
            description: truncate(&txn.description, 28),
            category: txn.category.label().to_string(),
            amount: format_currency(txn.amount, currency),
        }
    }
}

/// Format transactions as a table, amounts right-aligned
pub fn format_transaction_table(transactions: &[&Transaction], currency: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = transactions
        .iter()
        .map(|txn| TransactionRow::from_transaction(txn, currency));
    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::last()).with(Alignment::right()));
    format!("{}\n", table)
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, currency: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", format_date(txn.date)));
    output.push_str(&format!("Amount:      {}\n", format_currency(txn.amount, currency)));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!("Description: {}\n", txn.description));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;

    fn rent() -> Transaction {
        let date = NaiveDate::from_ymd_opt(2023, 7, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        Transaction::new(Money::from_cents(120000), Category::Housing, "Rent", date)
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_transaction_table(&[], "USD"), "No transactions found.\n");
    }

    #[test]
    fn test_table_contains_fields() {
        let txn = rent();
        let table = format_transaction_table(&[&txn], "USD");
        assert!(table.contains("Description"));
        assert!(table.contains("Jul 1, 2023"));
        assert!(table.contains("Housing"));
        assert!(table.contains("$1,200.00"));
    }

    #[test]
    fn test_details() {
        let txn = rent();
        let details = format_transaction_details(&txn, "EUR");
        assert!(details.contains("Amount:      €1,200.00"));
        assert!(details.contains("Description: Rent"));
        assert!(details.starts_with("Transaction: txn-"));
    }
}
