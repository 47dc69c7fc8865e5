//! Command line front end over the dashboard pipeline and the JSON data file.

use std::{path::PathBuf, sync::Arc};

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};

use spendwise_config::{default_base_dir, Config, ConfigManager};
use spendwise_core::{Clock, DashboardService, SeedData, SystemClock};
use spendwise_domain::{dates, Expense};
use spendwise_storage_json::JsonDataStore;

use crate::{
    errors::AppError,
    report::{render_dashboard, ReportStyle},
};

#[derive(Parser, Debug)]
#[command(name = "spendwise_cli")]
#[command(about = "Budget activity and category spending dashboard")]
pub struct Cli {
    /// Directory holding `config.json` and the data file (also read from `SPENDWISE_HOME`).
    #[arg(long, env = "SPENDWISE_HOME", global = true)]
    pub home: Option<PathBuf>,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print budget totals for the current or given date.
    Dashboard(DashboardArgs),
    /// Pin the date the dashboard treats as today.
    SetDate(SetDateArgs),
    /// Go back to using the real date.
    ClearDate,
    /// Write sample budgets and expenses into an empty data file.
    Seed,
    /// Record a new expense.
    AddExpense(AddExpenseArgs),
}

#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// Date to compute for, `yyyy-MM-dd`.
    #[arg(long)]
    pub date: Option<String>,
}

#[derive(Args, Debug)]
pub struct SetDateArgs {
    /// `yyyy-MM-dd`
    pub date: String,
}

#[derive(Args, Debug)]
pub struct AddExpenseArgs {
    pub name: String,
    pub amount: String,
    pub category: String,
    /// Expense date, `yyyy-MM-dd` or `MM/dd/yyyy`. Defaults to the current date.
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

/// Resolved configuration and paths for one invocation.
struct Context {
    manager: ConfigManager,
    config: Config,
    data_file: PathBuf,
    today: NaiveDate,
}

impl Context {
    fn load(home: Option<PathBuf>, clock: &dyn Clock) -> Result<Self, AppError> {
        let base = home.unwrap_or_else(default_base_dir);
        let manager = ConfigManager::with_base_dir(base.clone())?;
        let config = manager.load()?;
        let data_file = config.resolve_data_file(&base);
        let today = config.current_date(clock.today());
        debug!(base = %base.display(), %today, "cli context loaded");
        Ok(Self {
            manager,
            config,
            data_file,
            today,
        })
    }

    fn store(&self) -> JsonDataStore {
        JsonDataStore::open(&self.data_file).with_seed(SeedData::sample(self.today))
    }
}

/// Runs one command against the system clock, returning the text to print.
pub async fn run(cli: Cli) -> Result<String, AppError> {
    run_with_clock(cli, &SystemClock).await
}

pub async fn run_with_clock(cli: Cli, clock: &dyn Clock) -> Result<String, AppError> {
    let ctx = Context::load(cli.home, clock)?;
    match cli.command {
        Command::Dashboard(args) => {
            let date = match args.date.as_deref() {
                Some(text) => parse_iso(text)?,
                None => ctx.today,
            };
            let service = DashboardService::from_source(Arc::new(ctx.store()));
            let dashboard = service.refresh(date).await?;
            let style = ReportStyle::new(
                ctx.config.currency_symbol(),
                ctx.config.ui_color_enabled && !cli.no_color,
            );
            Ok(render_dashboard(&dashboard, &style))
        }
        Command::SetDate(args) => {
            let date = parse_iso(&args.date)?;
            ctx.manager.set_simulated_date(date)?;
            info!(%date, "simulated date set");
            Ok(format!("Current date set to {}\n", dates::format_iso(date)))
        }
        Command::ClearDate => {
            ctx.manager.clear_simulated_date()?;
            Ok(format!(
                "Simulated date cleared; using {}\n",
                dates::format_iso(clock.today())
            ))
        }
        Command::Seed => {
            let store = ctx.store();
            let path = store.path().display();
            if store.seed_if_empty().await? {
                Ok(format!("Seeded sample data into {path}\n"))
            } else {
                Ok(format!("{path} already has data\n"))
            }
        }
        Command::AddExpense(args) => {
            let date = match args.date.as_deref() {
                Some(text) => parse_expense_day(text)?,
                None => ctx.today,
            };
            let expense = Expense::from_input(
                &args.name,
                &args.amount,
                &args.category,
                date,
                args.notes.as_deref(),
            )?;
            let line = format!(
                "Added {} ({}) {}{:.2} on {}\n",
                expense.name,
                expense.category.display_name(),
                ctx.config.currency_symbol(),
                expense.amount,
                expense.date
            );
            JsonDataStore::open(&ctx.data_file)
                .append_expense(expense)
                .await?;
            Ok(line)
        }
    }
}

fn parse_iso(text: &str) -> Result<NaiveDate, AppError> {
    dates::parse_iso_date(text).ok_or_else(|| AppError::InvalidDate(text.to_string()))
}

fn parse_expense_day(text: &str) -> Result<NaiveDate, AppError> {
    dates::parse_expense_date(text).ok_or_else(|| AppError::InvalidDate(text.to_string()))
}
