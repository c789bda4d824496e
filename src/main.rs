use anyhow::Result;
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_add_command, handle_analytics_command, handle_budget_command,
    handle_dashboard_command, handle_transactions_command, initial_store, parse_date,
    parse_datetime, BudgetCommands,
};
use expense_tracker::config::{paths::TrackerPaths, settings::Settings};
use expense_tracker::logging::init_tracing;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Personal expense tracker with budgets and spending analytics",
    long_about = "Track expenses by category, compare spending against monthly \
                  budgets and see how spending changes over time. Data lives in \
                  memory for the session; only settings are stored on disk."
)]
struct Cli {
    /// Reference time for relative periods (YYYY-MM-DDTHH:MM:SS)
    #[arg(long, global = true, env = "EXPENSE_TRACKER_NOW", value_parser = parse_datetime)]
    now: Option<NaiveDateTime>,

    /// Start without the demonstration data
    #[arg(long, global = true)]
    empty: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show totals, recent transactions and top categories
    #[command(alias = "dash")]
    Dashboard,

    /// List transactions grouped by period
    #[command(alias = "txn")]
    Transactions {
        /// Only descriptions containing this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
        /// Only this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show spending analytics for a time window
    Analytics {
        /// week, month or year (defaults to the configured window)
        #[arg(short, long)]
        window: Option<String>,
    },

    /// Show or set budget targets
    Budget {
        #[command(subcommand)]
        command: Option<BudgetCommands>,
    },

    /// Record a new expense
    Add {
        /// Amount (e.g., "45.99")
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// Category name (e.g., "food")
        category: String,
        /// What the money was spent on
        description: String,
        /// Transaction date (YYYY-MM-DD), defaults to now
        #[arg(short, long, value_parser = parse_date)]
        date: Option<NaiveDateTime>,
    },

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the config file
        #[arg(long)]
        save: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let now = cli
        .now
        .unwrap_or_else(|| chrono::Local::now().naive_local());

    let mut store = initial_store(&settings, cli.empty);

    match cli.command {
        Some(Commands::Dashboard) | None => {
            handle_dashboard_command(&store, &settings)?;
        }
        Some(Commands::Transactions { search, category }) => {
            handle_transactions_command(&store, &settings, now, search, category)?;
        }
        Some(Commands::Analytics { window }) => {
            handle_analytics_command(&store, &settings, now, window)?;
        }
        Some(Commands::Budget { command }) => {
            handle_budget_command(&mut store, &settings, command)?;
        }
        Some(Commands::Add {
            amount,
            category,
            description,
            date,
        }) => {
            let date = date.unwrap_or(now);
            handle_add_command(&mut store, &settings, amount, &category, &description, date)?;
        }
        Some(Commands::Config { save }) => {
            if save {
                settings.save(&paths)?;
                println!("Settings saved to {}", paths.settings_file().display());
                println!();
            }
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency:            {}", settings.currency_code);
            println!("  Recent transactions: {}", settings.recent_limit);
            println!("  Top categories:      {}", settings.top_categories_limit);
            println!("  Default window:      {}", settings.default_window);
            println!("  Sample data:         {}", settings.seed_sample_data);
        }
    }

    Ok(())
}
