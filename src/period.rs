use chrono::{Datelike, Local, NaiveDate};

const MONTH_NAMES: &[&str] = &[
    "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho",
    "Julho", "Agosto", "Setembro", "Outubro", "Novembro", "Dezembro",
];

/// A selected month/year. Backward navigation is unrestricted; forward
/// navigation stops at the current calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub year: i32,
    pub month: u32, // 1-12
}

impl Period {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn current() -> Self {
        let now = Local::now().date_naive();
        Self { year: now.year(), month: now.month() }
    }

    /// One month back, rolling January into the previous December.
    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    /// One month forward, or `None` when the selection is already at (or
    /// somehow past) the current calendar month — future months have no data.
    pub fn next(self) -> Option<Self> {
        if self >= Self::current() {
            return None;
        }
        if self.month == 12 {
            Some(Self { year: self.year + 1, month: 1 })
        } else {
            Some(Self { year: self.year, month: self.month + 1 })
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Header label, e.g. "Agosto, 2026".
    pub fn label(&self) -> String {
        let name = MONTH_NAMES.get((self.month - 1) as usize).unwrap_or(&"???");
        format!("{}, {}", name, self.year)
    }

    /// Parse a "YYYY-MM" argument.
    pub fn parse(s: &str) -> Option<Self> {
        let (y, m) = s.split_once('-')?;
        let year: i32 = y.parse().ok()?;
        let month: u32 = m.parse().ok()?;
        if (1..=12).contains(&month) {
            Some(Self::new(year, month))
        } else {
            None
        }
    }
}

impl PartialOrd for Period {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Period {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month).cmp(&(other.year, other.month))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prev_rolls_year_boundary() {
        assert_eq!(Period::new(2024, 1).prev(), Period::new(2023, 12));
        assert_eq!(Period::new(2024, 6).prev(), Period::new(2024, 5));
    }

    #[test]
    fn test_prev_always_succeeds_from_current() {
        let now = Period::current();
        let back = now.prev();
        assert!(back < now);
    }

    #[test]
    fn test_next_rejected_at_current_month() {
        assert_eq!(Period::current().next(), None);
    }

    #[test]
    fn test_next_rejected_in_the_future() {
        let future = Period::new(Period::current().year + 1, 1);
        assert_eq!(future.next(), None);
    }

    #[test]
    fn test_next_allowed_in_the_past() {
        let two_back = Period::current().prev().prev();
        assert_eq!(two_back.next(), Some(Period::current().prev()));
    }

    #[test]
    fn test_next_rolls_year_boundary() {
        // December of two years ago is always safely in the past.
        let dec = Period::new(Period::current().year - 2, 12);
        assert_eq!(dec.next(), Some(Period::new(dec.year + 1, 1)));
    }

    #[test]
    fn test_contains() {
        let p = Period::new(2024, 5);
        assert!(p.contains(NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()));
        assert!(!p.contains(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()));
        assert!(!p.contains(NaiveDate::from_ymd_opt(2023, 5, 15).unwrap()));
    }

    #[test]
    fn test_label() {
        assert_eq!(Period::new(2024, 5).label(), "Maio, 2024");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Period::parse("2024-05"), Some(Period::new(2024, 5)));
        assert_eq!(Period::parse("2024-13"), None);
        assert_eq!(Period::parse("maio"), None);
    }
}
