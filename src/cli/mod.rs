pub mod add;
pub mod categories;
pub mod demo;
pub mod init;
pub mod list;
pub mod resume;
pub mod status;

use clap::{Parser, Subcommand};

use crate::error::{ResumoError, Result};
use crate::period::Period;

/// Parse an optional "YYYY-MM" argument into a Period, defaulting to the
/// current calendar month.
pub(crate) fn parse_period_opt(month: &Option<String>) -> Result<Period> {
    match month {
        None => Ok(Period::current()),
        Some(s) => Period::parse(s)
            .ok_or_else(|| ResumoError::Other(format!("Invalid month: {s} (expected YYYY-MM)"))),
    }
}

#[derive(Parser)]
#[command(name = "resumo", about = "Personal-finance category summary CLI.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up resumo: choose a data directory.
    Init {
        /// Path for resumo data (default: ~/Documents/resumo)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Record a transaction.
    Add {
        /// Transaction name, e.g. 'Mercado'
        name: String,
        /// Amount, e.g. 85.50
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
        /// Transaction kind: income or expense
        #[arg(long, default_value = "expense")]
        kind: String,
        /// Category key (see `resumo categories`)
        #[arg(long)]
        category: String,
        /// Date: YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
    },
    /// List stored transactions.
    List {
        /// Month filter: YYYY-MM
        #[arg(long)]
        month: Option<String>,
    },
    /// Category summary for a month — interactive on a TTY, table otherwise.
    Resume {
        /// Month: YYYY-MM (default: current month)
        #[arg(long)]
        month: Option<String>,
        /// Transaction kind: income or expense
        #[arg(long, default_value = "expense")]
        kind: String,
        /// Force plain-text output even on a TTY
        #[arg(long)]
        plain: bool,
    },
    /// List the category catalog.
    Categories,
    /// Load sample transactions to explore resumo.
    Demo,
    /// Show current data directory and store statistics.
    Status,
}
