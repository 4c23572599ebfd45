use chrono::{Local, NaiveDate};

use crate::catalog;
use crate::error::{ResumoError, Result};
use crate::models::{TransactionKind, TransactionRecord};
use crate::settings::get_data_dir;
use crate::store::Store;

pub fn run(name: &str, amount: &str, kind: &str, category: &str, date: Option<&str>) -> Result<()> {
    let kind: TransactionKind = kind.parse()?;

    let value: f64 = amount
        .parse()
        .map_err(|_| ResumoError::BadAmount(amount.to_string()))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(ResumoError::BadAmount(amount.to_string()));
    }

    let def = catalog::find(category)
        .ok_or_else(|| ResumoError::UnknownCategory(category.to_string()))?;

    let date = match date {
        Some(d) => NaiveDate::parse_from_str(d, "%Y-%m-%d")
            .map_err(|_| ResumoError::BadDate(d.to_string()))?,
        None => Local::now().date_naive(),
    };

    let record = TransactionRecord {
        kind,
        name: name.to_string(),
        amount: amount.to_string(),
        category: def.key.to_string(),
        date: date.format("%Y-%m-%d").to_string(),
    };

    let store = Store::open(get_data_dir());
    store.append_transaction(record)?;

    println!(
        "Recorded {} — {} ({}) on {}",
        name,
        crate::fmt::money(value),
        def.name,
        date.format("%Y-%m-%d"),
    );
    Ok(())
}
