use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::catalog;
use crate::cli::parse_period_opt;
use crate::error::Result;
use crate::fmt::money;
use crate::models::TransactionKind;
use crate::settings::get_data_dir;
use crate::store::Store;

pub fn run(month: Option<String>) -> Result<()> {
    let store = Store::open(get_data_dir());
    let mut records = store.read_transactions()?;

    if let Some(ref m) = month {
        let period = parse_period_opt(&Some(m.clone()))?;
        records.retain(|r| r.parsed_date().is_some_and(|d| period.contains(d)));
    }

    if records.is_empty() {
        println!("No transactions found.");
        return Ok(());
    }

    records.sort_by(|a, b| a.date.cmp(&b.date));

    let mut table = Table::new();
    table.set_header(vec!["Date", "Name", "Category", "Amount"]);
    for r in &records {
        let val = r.amount_value();
        let amt = match r.kind {
            TransactionKind::Income => money(val).green().to_string(),
            TransactionKind::Expense => money(val).red().to_string(),
        };
        let cat = catalog::find(&r.category).map(|c| c.name).unwrap_or("\u{2014}");
        table.add_row(vec![
            Cell::new(&r.date),
            Cell::new(&r.name),
            Cell::new(cat),
            Cell::new(amt),
        ]);
    }

    println!("Transactions ({})\n{table}", records.len());
    Ok(())
}
