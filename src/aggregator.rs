//! Per-category aggregation for one (kind, month) selection.

use crate::catalog::CATALOG;
use crate::fmt::{money, percent};
use crate::models::{CategorySummary, TransactionKind, TransactionRecord};
use crate::period::Period;

/// Sum of amounts of records matching the active kind and period.
pub fn filtered_total(records: &[TransactionRecord], kind: TransactionKind, period: Period) -> f64 {
    selected(records, kind, period).map(|r| r.amount_value()).sum()
}

/// Group the matching records by category, in catalog order, keeping only
/// categories with a strictly positive total. A zero filtered total yields
/// no summaries at all, so percentages are always well-defined.
pub fn summarize(
    records: &[TransactionRecord],
    kind: TransactionKind,
    period: Period,
) -> Vec<CategorySummary> {
    let total = filtered_total(records, kind, period);
    if total <= 0.0 {
        return Vec::new();
    }

    let mut summaries = Vec::new();
    for def in CATALOG {
        let category_sum: f64 = selected(records, kind, period)
            .filter(|r| r.category == def.key)
            .map(|r| r.amount_value())
            .sum();

        if category_sum > 0.0 {
            summaries.push(CategorySummary {
                key: def.key,
                name: def.name,
                color: def.color,
                total: category_sum,
                total_formatted: money(category_sum),
                percent: percent(category_sum / total * 100.0),
            });
        }
    }
    summaries
}

fn selected<'a>(
    records: &'a [TransactionRecord],
    kind: TransactionKind,
    period: Period,
) -> impl Iterator<Item = &'a TransactionRecord> {
    records.iter().filter(move |r| {
        r.kind == kind && r.parsed_date().is_some_and(|d| period.contains(d))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(kind: TransactionKind, amount: &str, category: &str, date: &str) -> TransactionRecord {
        TransactionRecord {
            kind,
            name: "test".into(),
            amount: amount.into(),
            category: category.into(),
            date: date.into(),
        }
    }

    fn may_expenses() -> Vec<TransactionRecord> {
        vec![
            rec(TransactionKind::Expense, "100", "food", "2024-05-01"),
            rec(TransactionKind::Expense, "300", "food", "2024-05-15"),
            rec(TransactionKind::Expense, "100", "car", "2024-05-20"),
        ]
    }

    #[test]
    fn test_summarize_groups_and_percents() {
        let out = summarize(&may_expenses(), TransactionKind::Expense, Period::new(2024, 5));
        assert_eq!(out.len(), 2);
        // Catalog lists food before car.
        assert_eq!(out[0].key, "food");
        assert_eq!(out[0].total, 400.0);
        assert_eq!(out[0].percent, "80%");
        assert_eq!(out[0].total_formatted, "R$ 400,00");
        assert_eq!(out[1].key, "car");
        assert_eq!(out[1].total, 100.0);
        assert_eq!(out[1].percent, "20%");
    }

    #[test]
    fn test_totals_match_filtered_total() {
        let records = may_expenses();
        let kind = TransactionKind::Expense;
        let period = Period::new(2024, 5);
        let out = summarize(&records, kind, period);
        let emitted: f64 = out.iter().map(|s| s.total).sum();
        assert_eq!(emitted, filtered_total(&records, kind, period));
    }

    #[test]
    fn test_percents_sum_to_100() {
        let mut records = may_expenses();
        records.push(rec(TransactionKind::Expense, "33.33", "leisure", "2024-05-03"));
        let out = summarize(&records, TransactionKind::Expense, Period::new(2024, 5));
        let sum: f64 = out
            .iter()
            .map(|s| s.percent.trim_end_matches('%').parse::<f64>().unwrap())
            .sum();
        assert!((sum - 100.0).abs() < 1.5, "percents summed to {sum}");
    }

    #[test]
    fn test_filters_by_kind_and_month() {
        let mut records = may_expenses();
        records.push(rec(TransactionKind::Income, "5000", "salary", "2024-05-05"));
        records.push(rec(TransactionKind::Expense, "999", "food", "2024-04-30"));
        records.push(rec(TransactionKind::Expense, "999", "food", "2023-05-10"));

        let out = summarize(&records, TransactionKind::Expense, Period::new(2024, 5));
        assert_eq!(out.iter().find(|s| s.key == "food").unwrap().total, 400.0);
        assert!(out.iter().all(|s| s.key != "salary"));

        let income = summarize(&records, TransactionKind::Income, Period::new(2024, 5));
        assert_eq!(income.len(), 1);
        assert_eq!(income[0].key, "salary");
        assert_eq!(income[0].percent, "100%");
    }

    #[test]
    fn test_no_match_yields_no_summaries() {
        let out = summarize(&may_expenses(), TransactionKind::Expense, Period::new(2024, 7));
        assert!(out.is_empty());
        let out = summarize(&[], TransactionKind::Expense, Period::new(2024, 5));
        assert!(out.is_empty());
    }

    #[test]
    fn test_zero_total_yields_no_summaries() {
        // Unparseable amounts count as zero; a zero filtered total must not
        // produce divide-by-zero percentages.
        let records = vec![rec(TransactionKind::Expense, "oops", "food", "2024-05-01")];
        assert!(summarize(&records, TransactionKind::Expense, Period::new(2024, 5)).is_empty());
    }

    #[test]
    fn test_non_finite_amount_counts_as_zero() {
        // Overflowing exponents parse to infinity; such records must not
        // poison the totals or the currency formatting.
        let records = vec![rec(TransactionKind::Expense, "1e999", "food", "2024-05-01")];
        assert!(summarize(&records, TransactionKind::Expense, Period::new(2024, 5)).is_empty());

        let mut records = may_expenses();
        records.push(rec(TransactionKind::Expense, "inf", "bills", "2024-05-09"));
        let out = summarize(&records, TransactionKind::Expense, Period::new(2024, 5));
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].percent, "80%");
        assert!(out.iter().all(|s| s.key != "bills"));
    }

    #[test]
    fn test_zero_sum_category_omitted() {
        let mut records = may_expenses();
        records.push(rec(TransactionKind::Expense, "0", "leisure", "2024-05-08"));
        let out = summarize(&records, TransactionKind::Expense, Period::new(2024, 5));
        assert!(out.iter().all(|s| s.key != "leisure"));
    }

    #[test]
    fn test_small_share_gets_two_decimals() {
        let records = vec![
            rec(TransactionKind::Expense, "995", "food", "2024-05-01"),
            rec(TransactionKind::Expense, "5", "car", "2024-05-02"),
        ];
        let out = summarize(&records, TransactionKind::Expense, Period::new(2024, 5));
        assert_eq!(out[1].percent, "0.50%");
    }

    #[test]
    fn test_unknown_category_still_counts_in_total() {
        // A record pointing at a key missing from the catalog never gets its
        // own summary, but its amount still dilutes the other shares.
        let records = vec![
            rec(TransactionKind::Expense, "300", "food", "2024-05-01"),
            rec(TransactionKind::Expense, "100", "misc", "2024-05-02"),
        ];
        let out = summarize(&records, TransactionKind::Expense, Period::new(2024, 5));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].percent, "75%");
    }
}
