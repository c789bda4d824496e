//! Dashboard Report
//!
//! Summary of the whole store: overall totals, the latest expenses and the
//! categories where the most money went.

use tracing::debug;

use super::budget_overview::CategoryProgress;
use super::{breakdown, CategoryShare};
use crate::aggregation::{budget_status, category_totals, percentage, rank, recent, BudgetStatus};
use crate::display::format_currency;
use crate::display::report::{format_bar, format_percentage, separator, status_marker};
use crate::display::transaction::format_transaction_table;
use crate::models::{Money, Transaction};
use crate::store::Snapshot;

/// Dashboard Report
#[derive(Debug, Clone)]
pub struct DashboardReport {
    pub total_spent: Money,
    pub total_budget: Money,
    pub budget_percentage: f64,
    pub budget_status: BudgetStatus,
    /// Most recent transactions by date
    pub recent: Vec<Transaction>,
    /// Highest-spending categories with their budget usage
    pub top_categories: Vec<CategoryProgress>,
    /// Every category with spending, ranked, with its share of the total
    pub breakdown: Vec<CategoryShare>,
}

impl DashboardReport {
    /// Generate the dashboard for the store's current state
    pub fn generate(snapshot: Snapshot<'_>, recent_limit: usize, top_limit: usize) -> Self {
        let totals = category_totals(snapshot.transactions);
        let total_spent = totals.total();
        let total_budget = snapshot.budget.total();
        let budget_percentage = percentage(total_spent, total_budget);

        let recent: Vec<Transaction> = recent(snapshot.transactions, recent_limit)
            .into_iter()
            .cloned()
            .collect();

        let top_categories = rank(&totals, top_limit)
            .into_iter()
            .map(|entry| CategoryProgress::compute(entry.category, entry.amount, snapshot.budget))
            .collect();

        debug!(
            transactions = snapshot.transactions.len(),
            recent = recent.len(),
            "dashboard generated"
        );

        Self {
            total_spent,
            total_budget,
            budget_percentage,
            budget_status: budget_status(budget_percentage),
            recent,
            top_categories,
            breakdown: breakdown(&totals),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str("Dashboard\n");
        output.push_str(&"=".repeat(70));
        output.push('\n');
        output.push_str(&format!(
            "Total Spent:  {}\n",
            format_currency(self.total_spent, currency)
        ));
        output.push_str(&format!(
            "Total Budget: {}\n",
            format_currency(self.total_budget, currency)
        ));
        output.push_str(&format!(
            "Budget Used:  {} {} [{}]\n\n",
            format_bar(self.budget_percentage, 100.0, 20),
            format_percentage(self.budget_percentage),
            status_marker(self.budget_status),
        ));

        output.push_str("Recent Transactions\n");
        output.push_str(&separator(70));
        output.push('\n');
        let recent: Vec<&Transaction> = self.recent.iter().collect();
        output.push_str(&format_transaction_table(&recent, currency));

        output.push_str("\nTop Spending Categories\n");
        output.push_str(&separator(70));
        output.push('\n');
        if self.top_categories.is_empty() {
            output.push_str("No spending recorded.\n");
        }
        for row in &self.top_categories {
            output.push_str(&format!(
                "{:<16} {:>14} of {:<14} {:>6} [{}]\n",
                row.category.label(),
                format_currency(row.spent, currency),
                row.budget_display(currency),
                format_percentage(row.percentage),
                status_marker(row.status),
            ));
        }

        if !self.breakdown.is_empty() {
            output.push_str("\nExpense Breakdown\n");
            output.push_str(&separator(70));
            output.push('\n');
            for share in &self.breakdown {
                output.push_str(&format!(
                    "{:<16} {} {:>6}\n",
                    share.category.label(),
                    format_bar(share.share, 100.0, 30),
                    format_percentage(share.share),
                ));
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::store::TransactionStore;

    #[test]
    fn test_generate_sample() {
        let store = TransactionStore::with_sample_data();
        let report = DashboardReport::generate(store.snapshot(), 5, 5);

        assert_eq!(report.total_spent, Money::from_cents(188096));
        assert_eq!(report.total_budget, Money::from_cents(315000));
        assert_eq!(report.budget_status, BudgetStatus::Good);

        let descriptions: Vec<&str> = report.recent.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(
            descriptions,
            vec!["Grocery shopping", "Gas", "Movie ticket", "Pharmacy", "New clothes"]
        );

        let top: Vec<Category> = report.top_categories.iter().map(|r| r.category).collect();
        assert_eq!(
            top,
            vec![
                Category::Housing,
                Category::Education,
                Category::Shopping,
                Category::Health,
                Category::Food
            ]
        );
        assert_eq!(report.top_categories[1].status, BudgetStatus::Warning);
        assert_eq!(report.breakdown.len(), 8);
    }

    #[test]
    fn test_category_without_budget() {
        let mut store = TransactionStore::new();
        store
            .add_transaction(crate::store::NewTransaction::new(
                12.0,
                Category::Other,
                "Stamps",
                chrono::NaiveDate::from_ymd_opt(2023, 7, 3)
                    .unwrap()
                    .and_hms_opt(9, 0, 0)
                    .unwrap(),
            ))
            .unwrap();

        let report = DashboardReport::generate(store.snapshot(), 5, 5);
        assert_eq!(report.budget_percentage, 0.0);
        assert_eq!(report.top_categories[0].budget, None);
        assert!(report.format_terminal("USD").contains("No budget set"));
    }

    #[test]
    fn test_empty_store() {
        let store = TransactionStore::new();
        let report = DashboardReport::generate(store.snapshot(), 5, 5);
        assert!(report.recent.is_empty());
        assert!(report.top_categories.is_empty());

        let output = report.format_terminal("USD");
        assert!(output.contains("No transactions found."));
        assert!(output.contains("No spending recorded."));
    }

    #[test]
    fn test_limits_respected() {
        let store = TransactionStore::with_sample_data();
        let report = DashboardReport::generate(store.snapshot(), 2, 3);
        assert_eq!(report.recent.len(), 2);
        assert_eq!(report.top_categories.len(), 3);
    }

    #[test]
    fn test_terminal_format() {
        let store = TransactionStore::with_sample_data();
        let output = DashboardReport::generate(store.snapshot(), 5, 5).format_terminal("USD");
        assert!(output.contains("Total Spent:  $1,880.96"));
        assert!(output.contains("Total Budget: $3,150.00"));
        assert!(output.contains("Grocery shopping"));
        assert!(output.contains("Top Spending Categories"));
    }
}
