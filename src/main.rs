use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use serde::Deserialize;

use self::errors::SpesaError;
use self::format::format_amount;
use self::ledger::{Ledger, SortDirection};
use self::storage::Store;
use self::tui::dashboard::Dashboard;

pub mod errors;
mod format;
mod ledger;
mod parse;
mod storage;
mod tui;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SpesaConfig {
    pub currency: char,
    pub decimal_sep: char,
    pub store_path: Option<PathBuf>,
}

impl Default for SpesaConfig {
    fn default() -> Self {
        Self {
            currency: '$',
            decimal_sep: '.',
            store_path: None,
        }
    }
}

fn parse_config() -> Result<SpesaConfig, SpesaError> {
    let Some(config_dir) = dirs::config_dir() else {
        return Ok(SpesaConfig::default());
    };
    let config_path = config_dir.join("spesa").join("spesa.toml");
    if !config_path.exists() {
        return Ok(SpesaConfig::default());
    }
    let config = std::fs::read_to_string(config_path)?;
    let config: SpesaConfig = toml::from_str(&config)?;
    Ok(config)
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
    /// Expense file to use instead of the configured one
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the interactive dashboard
    Tui,
    /// Record a new expense
    Add {
        title: String,
        amount: String,
        date: NaiveDate,
        category: String,
    },
    /// Print all expenses, optionally sorted by amount
    List {
        #[arg(short, long, value_enum)]
        sort: Option<SortDirection>,
    },
    /// Print the total amount per category
    Categories,
    /// Delete one expense by id
    Delete { id: u64 },
    /// Delete all expenses
    Clear,
}

fn print_expenses(ledger: &Ledger, config: &SpesaConfig) {
    if ledger.is_empty() {
        println!("No expenses recorded");
        return;
    }
    println!(
        "{:>4}  {:<24} {:>12}  {:<14} {}",
        "id", "title", "amount", "category", "date"
    );
    for item in ledger.items() {
        println!(
            "{:>4}  {:<24} {:>12}  {:<14} {}",
            item.id,
            item.title,
            format_amount(item.amount, config),
            item.category,
            item.date
        );
    }
}

fn main() -> Result<(), SpesaError> {
    let args = Args::parse();
    let config = parse_config()?;

    let path = args
        .file
        .or_else(|| config.store_path.clone())
        .unwrap_or_else(Store::default_path);
    let mut ledger = Ledger::load(Store::new(path));

    match args.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            let dashboard = Dashboard::new(ledger, config);
            tui::open_widget(dashboard)?;
        }
        Command::Add {
            title,
            amount,
            date,
            category,
        } => {
            let amount = parse::parse_amount(&amount)?;
            if title.is_empty() || category.is_empty() || amount <= Decimal::ZERO {
                return Err(SpesaError::InvalidArgument(
                    "title, category and a positive amount are required".into(),
                ));
            }
            let id = ledger.add_item(title, amount, date, category)?;
            println!("Recorded expense {id}");
        }
        Command::List { sort } => {
            ledger.sort_by_amount(sort)?;
            print_expenses(&ledger, &config);
        }
        Command::Categories => {
            if ledger.is_empty() {
                println!("No expenses recorded");
            }
            for (label, total) in ledger.categories() {
                println!("{:<16} {:>12}", label, format_amount(total, &config));
            }
        }
        Command::Delete { id } => {
            if ledger.delete_item(id)? {
                println!("Deleted expense {id}");
            } else {
                println!("No expense with id {id}");
            }
        }
        Command::Clear => {
            ledger.clear_items()?;
            println!("All expenses cleared");
        }
    }

    Ok(())
}
