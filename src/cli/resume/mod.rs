pub mod text;
pub mod view;

use std::io::IsTerminal;

use crate::cli::parse_period_opt;
use crate::error::Result;
use crate::models::{TransactionKind, TransactionRecord};
use crate::store::Store;

pub fn run(month: Option<String>, kind: &str, plain: bool) -> Result<()> {
    let kind: TransactionKind = kind.parse()?;
    let period = parse_period_opt(&month)?;

    if plain || !std::io::stdout().is_terminal() {
        let s = text::render(period, kind)?;
        println!("{s}");
        Ok(())
    } else {
        view::run(period, kind)
    }
}

/// Read the store, degrading a failed or malformed read into an empty list
/// plus a user-visible message instead of aborting the screen.
pub(crate) fn load_records(store: &Store) -> (Vec<TransactionRecord>, Option<String>) {
    match store.read_transactions() {
        Ok(records) => (records, None),
        Err(e) => (Vec::new(), Some(e.to_string())),
    }
}
