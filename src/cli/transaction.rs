//! Transaction CLI commands

use chrono::NaiveDateTime;

use crate::config::settings::Settings;
use crate::display::{format_currency, format_transaction_details};
use crate::error::TrackerResult;
use crate::store::{NewTransaction, TransactionStore};

/// Record an expense and print it with the updated totals
pub fn handle_add_command(
    store: &mut TransactionStore,
    settings: &Settings,
    amount: f64,
    category: &str,
    description: &str,
    date: NaiveDateTime,
) -> TrackerResult<()> {
    let input = NewTransaction::parse(amount, category, description, date)?;
    let txn = store.add_transaction(input)?;

    let currency = settings.currency_code.as_str();
    println!("Added transaction");
    print!("{}", format_transaction_details(&txn, currency));
    println!();
    println!("Total Spent:  {}", format_currency(store.total_spent(), currency));
    println!("Total Budget: {}", format_currency(store.total_budget(), currency));
    Ok(())
}
