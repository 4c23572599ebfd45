use chrono::{Datelike, Local, NaiveDate};

use crate::error::Result;
use crate::models::{TransactionKind, TransactionRecord};
use crate::settings::get_data_dir;
use crate::store::Store;

struct MonthlyTxn {
    day: u32,
    name: &'static str,
    amount: &'static str,
    category: &'static str,
    kind: TransactionKind,
}

/// Transactions generated every month.
const MONTHLY: &[MonthlyTxn] = &[
    MonthlyTxn { day: 5, name: "Salário", amount: "6500.00", category: "salary", kind: TransactionKind::Income },
    MonthlyTxn { day: 6, name: "Aluguel", amount: "1800.00", category: "bills", kind: TransactionKind::Expense },
    MonthlyTxn { day: 8, name: "Supermercado", amount: "640.40", category: "food", kind: TransactionKind::Expense },
    MonthlyTxn { day: 12, name: "Combustível", amount: "320.00", category: "car", kind: TransactionKind::Expense },
    MonthlyTxn { day: 15, name: "Internet", amount: "119.90", category: "bills", kind: TransactionKind::Expense },
];

/// One-off transactions rotated across months by index.
const ROTATING: &[MonthlyTxn] = &[
    MonthlyTxn { day: 18, name: "Cinema", amount: "74.00", category: "leisure", kind: TransactionKind::Expense },
    MonthlyTxn { day: 20, name: "Curso online", amount: "189.90", category: "studies", kind: TransactionKind::Expense },
    MonthlyTxn { day: 22, name: "Tênis novo", amount: "349.99", category: "purchases", kind: TransactionKind::Expense },
    MonthlyTxn { day: 10, name: "Tesouro Direto", amount: "500.00", category: "investments", kind: TransactionKind::Income },
    MonthlyTxn { day: 25, name: "Presente", amount: "120.00", category: "others", kind: TransactionKind::Expense },
    MonthlyTxn { day: 27, name: "Restaurante", amount: "96.50", category: "food", kind: TransactionKind::Expense },
];

/// Clamp a day to the last valid day of the given year/month.
fn clamp_day(year: i32, month: u32, day: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let last_day = next.and_then(|d| d.pred_opt()).map(|d| d.day()).unwrap_or(28);
    day.min(last_day)
}

fn make_record(year: i32, month: u32, txn: &MonthlyTxn) -> TransactionRecord {
    let d = clamp_day(year, month, txn.day);
    TransactionRecord {
        kind: txn.kind,
        name: txn.name.to_string(),
        amount: txn.amount.to_string(),
        category: txn.category.to_string(),
        date: format!("{year:04}-{month:02}-{d:02}"),
    }
}

/// Build 6 months of sample transactions ending at the current month.
fn generate_transactions() -> Vec<TransactionRecord> {
    let today = Local::now().date_naive();
    let mut records = Vec::new();

    for i in 0..6u32 {
        let months_ago = 5 - i;
        let target = today - chrono::Months::new(months_ago);
        let year = target.year();
        let month = target.month();
        let idx = i as usize;

        for txn in MONTHLY {
            records.push(make_record(year, month, txn));
        }
        // Two rotating extras per month, picked by index.
        records.push(make_record(year, month, &ROTATING[idx % ROTATING.len()]));
        records.push(make_record(year, month, &ROTATING[(idx + 3) % ROTATING.len()]));
    }

    records
}

pub fn run() -> Result<()> {
    let store = Store::open(get_data_dir());

    let existing = store.read_transactions()?;
    if !existing.is_empty() {
        println!(
            "Store already has {} transactions — demo data not loaded.",
            existing.len()
        );
        return Ok(());
    }

    let records = generate_transactions();
    let count = records.len();
    store.write_transactions(&records)?;

    println!("Loaded {count} sample transactions. Try `resumo` to browse them.");
    Ok(())
}
