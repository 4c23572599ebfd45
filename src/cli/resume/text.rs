use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::aggregator::summarize;
use crate::cli::resume::load_records;
use crate::error::Result;
use crate::fmt::money;
use crate::models::{CategorySummary, TransactionKind};
use crate::period::Period;
use crate::settings::get_data_dir;
use crate::store::Store;

pub fn render(period: Period, kind: TransactionKind) -> Result<String> {
    let store = Store::open(get_data_dir());
    let (records, warning) = load_records(&store);
    let summaries = summarize(&records, kind, period);
    Ok(format_resume(period, kind, &summaries, warning.as_deref()))
}

pub fn empty_message(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Expense => "Nenhuma saída cadastrada",
        TransactionKind::Income => "Nenhuma entrada cadastrada",
    }
}

fn format_resume(
    period: Period,
    kind: TransactionKind,
    summaries: &[CategorySummary],
    warning: Option<&str>,
) -> String {
    let mut out = format!(
        "Resumo por categoria \u{2014} {} ({})",
        period.label(),
        kind.label()
    );

    if let Some(w) = warning {
        out.push_str(&format!("\n{}", w.yellow()));
    }

    if summaries.is_empty() {
        out.push_str(&format!("\n{}", empty_message(kind).dimmed()));
        return out;
    }

    let total: f64 = summaries.iter().map(|s| s.total).sum();

    let mut table = Table::new();
    table.set_header(vec!["Category", "Amount", "%"]);
    for s in summaries {
        table.add_row(vec![
            Cell::new(s.name),
            Cell::new(&s.total_formatted),
            Cell::new(&s.percent),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total".bold()),
        Cell::new(money(total)),
        Cell::new(""),
    ]);

    out.push_str(&format!("\n{table}"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionRecord;

    fn summaries() -> Vec<CategorySummary> {
        let records = vec![
            TransactionRecord {
                kind: TransactionKind::Expense,
                name: "Mercado".into(),
                amount: "400".into(),
                category: "food".into(),
                date: "2024-05-01".into(),
            },
            TransactionRecord {
                kind: TransactionKind::Expense,
                name: "Combustível".into(),
                amount: "100".into(),
                category: "car".into(),
                date: "2024-05-20".into(),
            },
        ];
        summarize(&records, TransactionKind::Expense, Period::new(2024, 5))
    }

    #[test]
    fn test_format_resume_table() {
        let s = format_resume(Period::new(2024, 5), TransactionKind::Expense, &summaries(), None);
        assert!(s.contains("Maio, 2024"));
        assert!(s.contains("Alimentação"));
        assert!(s.contains("R$ 400,00"));
        assert!(s.contains("80%"));
        assert!(s.contains("R$ 500,00")); // total row
    }

    #[test]
    fn test_format_resume_empty_state() {
        let s = format_resume(Period::new(2024, 5), TransactionKind::Expense, &[], None);
        assert!(s.contains("Nenhuma saída cadastrada"));
        let s = format_resume(Period::new(2024, 5), TransactionKind::Income, &[], None);
        assert!(s.contains("Nenhuma entrada cadastrada"));
    }

    #[test]
    fn test_format_resume_includes_warning() {
        let s = format_resume(
            Period::new(2024, 5),
            TransactionKind::Expense,
            &[],
            Some("Malformed store data in x.json"),
        );
        assert!(s.contains("Malformed store data"));
    }
}
