//! Core data models for the expense tracker
//!
//! This module contains the data structures of the tracking domain:
//! transactions, categories, budgets, money and calendar periods.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;

pub use budget::Budget;
pub use category::Category;
pub use ids::TransactionId;
pub use money::Money;
pub use period::{transaction_period, TimeWindow, TransactionPeriod};
pub use transaction::Transaction;
