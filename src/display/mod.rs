//! Display formatting for terminal output
//!
//! Provides currency and date formatting plus text helpers for rendering
//! reports and transaction tables.

pub mod format;
pub mod report;
pub mod transaction;

pub use format::{currency_symbol, format_currency, format_date, format_decimal_currency};
pub use transaction::{format_transaction_details, format_transaction_table};
