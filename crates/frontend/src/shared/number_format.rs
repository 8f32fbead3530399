//! Display formatting for dashboard figures

/// Placeholder for values that cannot be computed
pub const NOT_AVAILABLE: &str = "N/A";

/// Money in thousands with one decimal: 1850.0 -> "$1.9K"
pub fn format_money_k(value: f64) -> String {
    format!("${:.1}K", value / 1000.0)
}

/// Like [`format_money_k`], "N/A" when absent
pub fn format_money_k_opt(value: Option<f64>) -> String {
    value
        .map(format_money_k)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Integer with comma group separators: 12345 -> "12,345"
pub fn format_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}

/// Percentage with one decimal: 12.345 -> "12.3%", "N/A" when absent
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}%", v),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Arrow for the direction of a change, empty for zero
pub fn change_arrow(value: f64) -> &'static str {
    if value > 0.0 {
        "\u{2191}"
    } else if value < 0.0 {
        "\u{2193}"
    } else {
        ""
    }
}

/// Change against the previous quarter: "↑12.3%", "↓83.3%" or "N/A"
pub fn format_change(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}{:.1}%", change_arrow(v), v.abs()),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Caption under a headline card: "↑12.3% vs last quarter" or "N/A vs last quarter"
pub fn format_change_caption(value: Option<f64>) -> String {
    format!("{} vs last quarter", format_change(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money_k() {
        assert_eq!(format_money_k(1850.0), "$1.9K");
        assert_eq!(format_money_k(0.0), "$0.0K");
        assert_eq!(format_money_k(250_000.0), "$250.0K");
        assert_eq!(format_money_k_opt(None), "N/A");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(Some(12.345)), "12.3%");
        assert_eq!(format_percent(None), "N/A");
    }

    #[test]
    fn test_format_change() {
        assert_eq!(format_change(Some(-250.0 / 3.0)), "\u{2193}83.3%");
        assert_eq!(format_change(Some(20.0)), "\u{2191}20.0%");
        assert_eq!(format_change(Some(0.0)), "0.0%");
        assert_eq!(format_change(None), "N/A");
    }

    #[test]
    fn test_format_change_caption() {
        assert_eq!(format_change_caption(Some(12.34)), "\u{2191}12.3% vs last quarter");
        assert_eq!(format_change_caption(Some(-5.0)), "\u{2193}5.0% vs last quarter");
        assert_eq!(format_change_caption(None), "N/A vs last quarter");
    }
}
