//! Expense tracker - budgets and spending analytics over an in-memory ledger
//!
//! This library provides the core of a personal expense tracker: a store of
//! categorised expenses with monthly budget targets, and an aggregation
//! engine deriving every figure the views display from the store's current
//! state.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Core data types (money, categories, transactions, budgets, periods)
//! - `store`: The single owner of transactions and budget targets
//! - `aggregation`: Pure totals, percentages, statuses, windows and trends
//! - `reports`: Dashboard, analytics, budget and transaction list views
//! - `display`: Currency, date and terminal formatting
//! - `config`: Configuration and path management
//! - `cli`: Command handlers for the `expense` binary
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use expense_tracker::aggregation::{budget_status, category_totals, percentage, BudgetStatus};
//! use expense_tracker::models::Category;
//! use expense_tracker::store::{NewTransaction, TransactionStore};
//!
//! let mut store = TransactionStore::new();
//! store.update_budget(Category::Food, 500.0)?;
//!
//! let date = chrono::NaiveDate::from_ymd_opt(2023, 7, 15)
//!     .and_then(|d| d.and_hms_opt(0, 0, 0))
//!     .unwrap();
//! store.add_transaction(NewTransaction::new(45.99, Category::Food, "Grocery shopping", date))?;
//!
//! let snapshot = store.snapshot();
//! let spent = category_totals(snapshot.transactions).get(Category::Food);
//! let pct = percentage(spent, snapshot.budget.target(Category::Food));
//! assert_eq!(budget_status(pct), BudgetStatus::Good);
//! # Ok::<(), expense_tracker::TrackerError>(())
//! ```

pub mod aggregation;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod store;

pub use error::{TrackerError, TrackerResult};
