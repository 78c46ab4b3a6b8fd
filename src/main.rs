use anyhow::Result;
use clap::{Parser, Subcommand};

use outlay::config::Settings;
use outlay::display;
use outlay::error::OutlayError;
use outlay::models::{CategoryFilter, MonthlyBudget, RecurringPayment};
use outlay::seed;
use outlay::store::ExpenseStore;
use outlay::summary::Summary;
use outlay::tui;

#[derive(Parser)]
#[command(
    name = "outlay",
    version,
    about = "Terminal dashboard for tracking monthly spending against a budget",
    long_about = "outlay renders your month at a glance: expenses, recurring \
                  payments, and per-category budget utilization, with a \
                  quick-add form for logging new spending. Everything lives \
                  in memory for the session."
)]
struct Cli {
    /// Start with an empty expense list instead of the demo data
    #[arg(long, global = true)]
    empty: bool,

    /// Currency symbol used for all amounts
    #[arg(long, env = "OUTLAY_CURRENCY_SYMBOL", default_value = "$", global = true)]
    currency_symbol: String,

    /// Date format (strftime) for transaction and recurring lists
    #[arg(long, env = "OUTLAY_DATE_FORMAT", default_value = "%Y-%m-%d", global = true)]
    date_format: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard (the default)
    #[command(alias = "ui")]
    Tui,

    /// Print the dashboard to stdout and exit
    Summary {
        /// Restrict the transaction list to one category
        #[arg(short, long)]
        category: Option<String>,

        /// Emit the computed summary as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings {
        currency_symbol: cli.currency_symbol.clone(),
        date_format: cli.date_format.clone(),
    };

    let budget = seed::budget();
    let (store, recurring) = if cli.empty {
        (ExpenseStore::new(), Vec::new())
    } else {
        (
            ExpenseStore::from_expenses(seed::expenses()),
            seed::recurring(),
        )
    };

    match cli.command {
        Some(Commands::Summary { category, json }) => {
            print_summary(&store, &budget, &recurring, &settings, category, json)
        }
        Some(Commands::Tui) | None => {
            let mut app = tui::App::new(store, budget, recurring, settings);
            tui::run_tui(&mut app)
        }
    }
}

fn print_summary(
    store: &ExpenseStore,
    budget: &MonthlyBudget,
    recurring: &[RecurringPayment],
    settings: &Settings,
    category: Option<String>,
    json: bool,
) -> Result<()> {
    let filter = match category {
        Some(name) => {
            if !budget.contains(&name) {
                return Err(OutlayError::UnknownCategory(name).into());
            }
            CategoryFilter::Category(name)
        }
        None => CategoryFilter::All,
    };

    let summary = Summary::compute(store.expenses(), budget, &filter);

    if json {
        let report = display::SummaryReport::new(summary, budget);
        println!("{}", report.to_json()?);
        return Ok(());
    }

    println!("Expense Overview");
    println!("{}", "=".repeat(60));
    print!("{}", display::format_overview(&summary, budget, settings));
    println!();

    println!("Spending by category");
    println!("{}", "-".repeat(60));
    print!("{}", display::format_budget_rows(&summary.budget_usage, settings));
    println!();

    println!("Upcoming payments");
    println!("{}", "-".repeat(60));
    print!("{}", display::format_recurring(recurring, settings));
    println!();

    match &filter {
        CategoryFilter::All => println!("Transactions"),
        CategoryFilter::Category(name) => println!("Transactions — {}", name),
    }
    println!("{}", "-".repeat(60));
    print!(
        "{}",
        display::format_expense_table(&summary.filtered, settings)
    );

    Ok(())
}
