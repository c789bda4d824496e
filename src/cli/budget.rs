//! Budget CLI commands
//!
//! Shows per-category budget status and updates targets for the session.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_currency;
use crate::error::TrackerResult;
use crate::reports::BudgetOverviewReport;
use crate::store::{parse_category, TransactionStore};

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Show spending against every category's target
    Show,

    /// Set a category's monthly target, then show the overview
    Set {
        /// Category name (e.g., "food")
        category: String,
        /// Target amount (e.g., "500" or "499.99"); 0 clears the budget
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    store: &mut TransactionStore,
    settings: &Settings,
    cmd: Option<BudgetCommands>,
) -> TrackerResult<()> {
    match cmd.unwrap_or(BudgetCommands::Show) {
        BudgetCommands::Show => {}
        BudgetCommands::Set { category, amount } => {
            let category = parse_category(&category)?;
            store.update_budget(category, amount)?;
            println!(
                "Set {} budget to {}",
                category.label(),
                format_currency(store.budget().target(category), &settings.currency_code)
            );
            println!();
        }
    }

    let report = BudgetOverviewReport::generate(store.snapshot());
    print!("{}", report.format_terminal(&settings.currency_code));

    let danger = report.danger_categories();
    if !danger.is_empty() {
        let names: Vec<&str> = danger.iter().map(|r| r.category.label()).collect();
        println!();
        println!("Over 90% of budget: {}", names.join(", "));
    }

    Ok(())
}
