//! Transaction store
//!
//! The single owner of the canonical transaction list and budget map. Views
//! read through `snapshot()` and change state only through the three mutation
//! entry points, each of which validates fully before touching anything.

mod sample;

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::error::{TrackerError, TrackerResult, ValidationField};
use crate::models::{Budget, Category, Money, Transaction, TransactionId};

/// Input for recording a new expense
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// Amount in currency units, as entered (e.g. 45.99)
    pub amount: f64,
    pub category: Category,
    pub description: String,
    pub date: NaiveDateTime,
}

impl NewTransaction {
    pub fn new(
        amount: f64,
        category: Category,
        description: impl Into<String>,
        date: NaiveDateTime,
    ) -> Self {
        Self {
            amount,
            category,
            description: description.into(),
            date,
        }
    }

    /// Build an input from free text, reporting an unknown category as a
    /// validation error on the `category` field
    pub fn parse(
        amount: f64,
        category: &str,
        description: impl Into<String>,
        date: NaiveDateTime,
    ) -> TrackerResult<Self> {
        Ok(Self::new(amount, parse_category(category)?, description, date))
    }
}

/// Read-only view of the store's state at one moment
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    /// Transactions, most recently added first
    pub transactions: &'a [Transaction],
    pub budget: &'a Budget,
}

/// Owner of all transactions and budget targets
#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    budget: Budget,
}

impl TransactionStore {
    /// Create an empty store with no budget targets
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the demonstration transactions and budget
    pub fn with_sample_data() -> Self {
        Self {
            transactions: sample::transactions(),
            budget: sample::budget(),
        }
    }

    /// Validate and record a new transaction
    ///
    /// On success the record gets a fresh id, is placed at the front of the
    /// list and is returned. On failure nothing changes.
    pub fn add_transaction(&mut self, input: NewTransaction) -> TrackerResult<Transaction> {
        let amount = validate_amount(input.amount).map_err(rejected)?;
        if self.total_spent().checked_add(amount).is_none() {
            return Err(rejected(TrackerError::validation(
                ValidationField::Amount,
                "would overflow the total spent",
            )));
        }
        let description = input.description.trim();
        if description.is_empty() {
            return Err(rejected(TrackerError::validation(
                ValidationField::Description,
                "must not be empty",
            )));
        }

        let txn = Transaction::new(amount, input.category, description, input.date);
        debug!(
            id = %txn.id,
            amount = %txn.amount,
            category = txn.category.as_str(),
            "transaction added"
        );
        self.transactions.insert(0, txn.clone());
        Ok(txn)
    }

    /// Remove the transaction with the given id
    ///
    /// Unknown ids are ignored. Returns the removed record, if any.
    pub fn delete_transaction(&mut self, id: TransactionId) -> Option<Transaction> {
        let position = self.transactions.iter().position(|t| t.id == id);
        match position {
            Some(index) => {
                let removed = self.transactions.remove(index);
                debug!(id = %id, "transaction deleted");
                Some(removed)
            }
            None => {
                debug!(id = %id, "delete ignored for unknown transaction");
                None
            }
        }
    }

    /// Set the monthly target for a category
    ///
    /// The amount must be a finite number of at least zero. Setting zero is
    /// the way to clear a budget; entries are never removed.
    pub fn update_budget(&mut self, category: Category, amount: f64) -> TrackerResult<()> {
        let target = validate_budget(category, amount).map_err(rejected)?;
        self.budget.set(category, target).map_err(rejected)?;
        debug!(category = category.as_str(), target = %target, "budget updated");
        Ok(())
    }

    /// Sum of all transaction amounts, recomputed on each call
    pub fn total_spent(&self) -> Money {
        self.transactions.iter().map(|t| t.amount).sum()
    }

    /// Sum of all budget targets, recomputed on each call
    pub fn total_budget(&self) -> Money {
        self.budget.total()
    }

    /// Current state for read-only consumers
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            transactions: &self.transactions,
            budget: &self.budget,
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn budget(&self) -> &Budget {
        &self.budget
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

/// Parse a category name from user input, logging unknown names like any
/// other rejected input
pub fn parse_category(name: &str) -> TrackerResult<Category> {
    Category::parse(name).map_err(rejected)
}

fn validate_amount(amount: f64) -> TrackerResult<Money> {
    if !amount.is_finite() {
        return Err(TrackerError::validation(
            ValidationField::Amount,
            "must be a finite number",
        ));
    }
    let money = Money::from_decimal(amount).ok_or_else(|| {
        TrackerError::validation(ValidationField::Amount, "is out of range")
    })?;
    if !money.is_positive() {
        return Err(TrackerError::validation(
            ValidationField::Amount,
            "must be greater than zero",
        ));
    }
    Ok(money)
}

fn validate_budget(category: Category, amount: f64) -> TrackerResult<Money> {
    if !amount.is_finite() {
        return Err(TrackerError::validation(
            ValidationField::Budget,
            format!("{} budget must be a finite number", category.as_str()),
        ));
    }
    if amount < 0.0 {
        return Err(TrackerError::validation(
            ValidationField::Budget,
            format!("{} budget cannot be negative", category.as_str()),
        ));
    }
    Money::from_decimal(amount).ok_or_else(|| {
        TrackerError::validation(
            ValidationField::Budget,
            format!("{} budget is out of range", category.as_str()),
        )
    })
}

fn rejected(err: TrackerError) -> TrackerError {
    warn!(error = %err, "input rejected");
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::{budget_status, category_totals, percentage, BudgetStatus};
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn grocery() -> NewTransaction {
        NewTransaction::new(45.99, Category::Food, "Grocery shopping", at(2023, 7, 15))
    }

    #[test]
    fn test_add_assigns_id_and_prepends() {
        let mut store = TransactionStore::new();
        let first = store.add_transaction(grocery()).unwrap();
        let second = store
            .add_transaction(NewTransaction::new(32.5, Category::Transportation, "Gas", at(2023, 7, 14)))
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.transactions()[0].id, second.id);
        assert_eq!(store.transactions()[1].id, first.id);
        assert_eq!(first.amount, Money::from_cents(4599));
        assert_eq!(store.get(first.id), Some(&first));
    }

    #[test]
    fn test_add_trims_description() {
        let mut store = TransactionStore::new();
        let txn = store
            .add_transaction(NewTransaction::new(1.0, Category::Other, "  Coffee ", at(2023, 7, 1)))
            .unwrap();
        assert_eq!(txn.description, "Coffee");
    }

    #[test]
    fn test_add_rejects_negative_amount() {
        let mut store = TransactionStore::with_sample_data();
        let before = store.total_spent();
        let len = store.len();

        let err = store
            .add_transaction(NewTransaction::new(-5.0, Category::Food, "x", at(2023, 7, 1)))
            .unwrap_err();

        assert_eq!(err.field(), Some(ValidationField::Amount));
        assert_eq!(store.total_spent(), before);
        assert_eq!(store.len(), len);
    }

    #[test]
    fn test_add_rejects_zero_and_non_finite_amounts() {
        let mut store = TransactionStore::new();
        for amount in [0.0, 0.004, f64::NAN, f64::INFINITY, -0.0] {
            let err = store
                .add_transaction(NewTransaction::new(amount, Category::Food, "x", at(2023, 7, 1)))
                .unwrap_err();
            assert_eq!(err.field(), Some(ValidationField::Amount), "amount {}", amount);
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_rejects_amount_overflowing_total() {
        let mut store = TransactionStore::new();
        store
            .add_transaction(NewTransaction::new(5e16, Category::Food, "Big", at(2023, 7, 1)))
            .unwrap();

        let err = store
            .add_transaction(NewTransaction::new(5e16, Category::Food, "Bigger", at(2023, 7, 2)))
            .unwrap_err();
        assert_eq!(err.field(), Some(ValidationField::Amount));
        assert_eq!(store.len(), 1);
        assert_eq!(store.total_spent(), Money::from_cents(5_000_000_000_000_000_000));

        let totals = category_totals(store.transactions());
        assert_eq!(totals.total(), store.total_spent());
    }

    #[test]
    fn test_add_rejects_blank_description() {
        let mut store = TransactionStore::new();
        let err = store
            .add_transaction(NewTransaction::new(10.0, Category::Food, "   ", at(2023, 7, 1)))
            .unwrap_err();
        assert_eq!(err.field(), Some(ValidationField::Description));
        assert!(store.is_empty());
    }

    #[test]
    fn test_parse_rejects_unknown_category() {
        let err = NewTransaction::parse(10.0, "groceries", "x", at(2023, 7, 1)).unwrap_err();
        assert_eq!(err.field(), Some(ValidationField::Category));

        let input = NewTransaction::parse(10.0, "Food", "x", at(2023, 7, 1)).unwrap();
        assert_eq!(input.category, Category::Food);
    }

    #[derive(Clone, Default)]
    struct WarnCounter(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for WarnCounter {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::WARN {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn warnings_during(f: impl FnOnce()) -> usize {
        let counter = WarnCounter::default();
        let subscriber = tracing_subscriber::registry().with(counter.clone());
        tracing::subscriber::with_default(subscriber, f);
        counter.0.load(Ordering::SeqCst)
    }

    #[test]
    fn test_rejections_are_logged() {
        let unknown_category = warnings_during(|| {
            assert!(NewTransaction::parse(10.0, "groceries", "x", at(2023, 7, 1)).is_err());
            assert!(parse_category("snacks").is_err());
        });
        assert_eq!(unknown_category, 2);

        let bad_amount = warnings_during(|| {
            let mut store = TransactionStore::new();
            assert!(store
                .add_transaction(NewTransaction::new(-5.0, Category::Food, "x", at(2023, 7, 1)))
                .is_err());
        });
        assert_eq!(bad_amount, 1);

        let accepted = warnings_during(|| {
            assert!(NewTransaction::parse(10.0, "food", "x", at(2023, 7, 1)).is_ok());
        });
        assert_eq!(accepted, 0);
    }

    #[test]
    fn test_add_then_delete_restores_total() {
        let mut store = TransactionStore::with_sample_data();
        let before = store.total_spent();

        let txn = store.add_transaction(grocery()).unwrap();
        assert_eq!(store.total_spent(), before + Money::from_cents(4599));

        let removed = store.delete_transaction(txn.id);
        assert_eq!(removed.map(|t| t.id), Some(txn.id));
        assert_eq!(store.total_spent(), before);
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let mut store = TransactionStore::with_sample_data();
        let len = store.len();
        assert!(store.delete_transaction(TransactionId::new()).is_none());
        assert_eq!(store.len(), len);
    }

    #[test]
    fn test_update_budget() {
        let mut store = TransactionStore::new();
        store.update_budget(Category::Food, 500.0).unwrap();
        store.update_budget(Category::Housing, 1500.0).unwrap();
        assert_eq!(store.total_budget(), Money::from_cents(200000));

        store.update_budget(Category::Food, 0.0).unwrap();
        assert_eq!(store.budget().get(Category::Food), Some(Money::zero()));
        assert_eq!(percentage(Money::from_cents(5000), store.budget().target(Category::Food)), 0.0);
    }

    #[test]
    fn test_update_budget_rejects_invalid() {
        let mut store = TransactionStore::new();
        store.update_budget(Category::Food, 500.0).unwrap();

        for amount in [-1.0, f64::NAN, f64::NEG_INFINITY] {
            let err = store.update_budget(Category::Food, amount).unwrap_err();
            assert_eq!(err.field(), Some(ValidationField::Budget));
        }
        assert_eq!(store.budget().target(Category::Food), Money::from_cents(50000));
    }

    #[test]
    fn test_food_budget_scenario() {
        let mut store = TransactionStore::new();
        store.update_budget(Category::Food, 500.0).unwrap();
        store.add_transaction(grocery()).unwrap();

        let snapshot = store.snapshot();
        let totals = category_totals(snapshot.transactions);
        assert_eq!(totals.get(Category::Food), Money::from_cents(4599));

        let pct = percentage(totals.get(Category::Food), snapshot.budget.target(Category::Food));
        assert!((pct - 9.2).abs() < 0.01);
        assert_eq!(budget_status(pct), BudgetStatus::Good);
    }

    #[test]
    fn test_sample_data() {
        let store = TransactionStore::with_sample_data();
        assert_eq!(store.len(), 8);
        assert_eq!(store.total_spent(), Money::from_cents(188096));
        assert_eq!(store.total_budget(), Money::from_cents(315000));
        assert_eq!(store.budget().len(), Category::ALL.len());
    }
}
