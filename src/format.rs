use crate::models::TransactionKind;

pub const CURRENCY_SYMBOL: &str = "$";

pub const INCOME_GLYPH: &str = "💰";
pub const EXPENSE_GLYPH: &str = "💸";

/// Two-decimal currency text. Non-finite input renders as zero.
pub fn format_currency(amount: f64) -> String {
    format!("{CURRENCY_SYMBOL}{}", format_amount(amount))
}

/// Two-decimal number without a symbol, with the same fail-closed rule as
/// [`format_currency`].
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", finite_or_zero(amount))
}

pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", finite_or_zero(value))
}

/// Bounds a percentage to `[0, 100]` for progress-bar widths.
pub fn clamp_percentage(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

pub fn direction_glyph(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Income => INCOME_GLYPH,
        TransactionKind::Expense => EXPENSE_GLYPH,
    }
}

fn finite_or_zero(value: f64) -> f64 {
    // `-0.0` would otherwise print as "-0.00"
    if value.is_finite() && value != 0.0 { value } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_has_two_decimals_and_symbol() {
        assert_eq!(format_currency(45.5), "$45.50");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1234.567), "$1234.57");
        assert_eq!(format_currency(-350.0), "$-350.00");
    }

    #[test]
    fn currency_fails_closed_on_non_finite() {
        assert_eq!(format_currency(f64::NAN), "$0.00");
        assert_eq!(format_currency(f64::INFINITY), "$0.00");
        assert_eq!(format_currency(f64::NEG_INFINITY), "$0.00");
        assert_eq!(format_currency(-0.0), "$0.00");
        assert_eq!(format_amount(f64::NAN), "0.00");
    }

    #[test]
    fn percentage_has_one_decimal() {
        assert_eq!(format_percentage(35.0), "35.0%");
        assert_eq!(format_percentage(142.06), "142.1%");
        assert_eq!(format_percentage(f64::NAN), "0.0%");
    }

    #[test]
    fn clamp_stays_in_bounds() {
        for value in [-20.0, 0.0, 12.5, 80.0, 100.0, 142.0, f64::INFINITY] {
            let clamped = clamp_percentage(value);
            assert!((0.0..=100.0).contains(&clamped), "{value} -> {clamped}");
        }
        assert_eq!(clamp_percentage(12.5), 12.5);
        assert_eq!(clamp_percentage(100.0), 100.0);
        assert_eq!(clamp_percentage(142.0), 100.0);
        assert_eq!(clamp_percentage(-3.0), 0.0);
        assert_eq!(clamp_percentage(f64::NAN), 0.0);
    }

    #[test]
    fn glyph_follows_direction() {
        assert_eq!(direction_glyph(TransactionKind::Income), INCOME_GLYPH);
        assert_eq!(direction_glyph(TransactionKind::Expense), EXPENSE_GLYPH);
    }
}
