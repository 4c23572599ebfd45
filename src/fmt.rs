/// Format a float as Brazilian currency with thousands separators: R$ 1.234,56
pub fn money(val: f64) -> String {
    let negative = val < 0.0;
    let abs = val.abs();
    let cents = format!("{:.2}", abs);
    let parts: Vec<&str> = cents.split('.').collect();
    let int_part = parts[0];
    let dec_part = parts[1];

    let mut with_seps = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_seps.push('.');
        }
        with_seps.push(c);
    }
    let with_seps: String = with_seps.chars().rev().collect();

    if negative {
        format!("-R$ {with_seps},{dec_part}")
    } else {
        format!("R$ {with_seps},{dec_part}")
    }
}

/// Format a share of the filtered total: two decimal places below 1%,
/// whole percents otherwise.
pub fn percent(pct: f64) -> String {
    if pct < 1.0 {
        format!("{pct:.2}%")
    } else {
        format!("{pct:.0}%")
    }
}
