//! Amount display formatting.

/// Format an amount with thousands grouping and at most two decimal places.
/// Whole amounts drop the fraction entirely, matching how the ledgers are
/// usually entered.
pub fn format_amount(amount: f64) -> String {
    let negative = amount < 0.0;
    let rounded = (amount.abs() * 100.0).round() / 100.0;
    let whole = rounded.trunc() as i64;
    let cents = ((rounded - rounded.trunc()) * 100.0).round() as i64;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if cents != 0 {
        out.push_str(&format!(".{:02}", cents));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(800.0), "800");
        assert_eq!(format_amount(1500.0), "1,500");
        assert_eq!(format_amount(1234567.0), "1,234,567");
    }

    #[test]
    fn keeps_two_decimals_when_fractional() {
        assert_eq!(format_amount(99.5), "99.50");
        assert_eq!(format_amount(0.05), "0.05");
    }

    #[test]
    fn negative_balances() {
        assert_eq!(format_amount(-550.0), "-550");
        assert_eq!(format_amount(-1050.25), "-1,050.25");
    }
}
