/// Formats a whole-unit amount with thousands separators, e.g. `₦1,234,500`.
pub fn format_currency(value: f64, symbol: &str) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }

    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}{}{}", sign, symbol, group_thousands(rounded.abs() as u64))
}

pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1_234_500.0, "₦"), "₦1,234,500");
        assert_eq!(format_currency(5_000_000.0, "₦"), "₦5,000,000");
        assert_eq!(format_currency(999.6, "$"), "$1,000");
        assert_eq!(format_currency(12.0, "₦"), "₦12");
        assert_eq!(format_currency(0.0, "₦"), "₦0");
    }

    #[test]
    fn test_format_currency_edge_values() {
        assert_eq!(format_currency(-1_000.0, "₦"), "-₦1,000");
        assert_eq!(format_currency(-0.2, "₦"), "₦0");
        assert_eq!(format_currency(f64::NAN, "₦"), "n/a");
        assert_eq!(format_currency(f64::INFINITY, "₦"), "n/a");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(100), "100");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(123_456_789), "123,456,789");
    }
}
