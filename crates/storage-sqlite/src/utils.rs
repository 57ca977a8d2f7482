//! Helpers for columns stored as text.

use log::warn;
use rust_decimal::Decimal;
use std::str::FromStr;

use budgetbuddy_core::budgets::BudgetPeriod;

/// Amounts are stored as decimal strings. A value that no longer parses is
/// logged and read as zero.
pub fn parse_stored_decimal(column: &str, raw: &str) -> Decimal {
    Decimal::from_str(raw).unwrap_or_else(|e| {
        warn!("Unreadable decimal in column {}: '{}' ({})", column, raw, e);
        Decimal::ZERO
    })
}

pub fn parse_stored_period(raw: &str) -> BudgetPeriod {
    BudgetPeriod::from_str(raw).unwrap_or_else(|e| {
        warn!("Unreadable budget period '{}': {}", raw, e);
        BudgetPeriod::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_stored_decimal() {
        assert_eq!(parse_stored_decimal("amount", "85.50"), dec!(85.50));
        assert_eq!(parse_stored_decimal("amount", "0.12345678"), dec!(0.12345678));
        assert_eq!(parse_stored_decimal("amount", "garbage"), Decimal::ZERO);
    }

    #[test]
    fn test_parse_stored_period() {
        assert_eq!(parse_stored_period("weekly"), BudgetPeriod::Weekly);
        assert_eq!(parse_stored_period("daily"), BudgetPeriod::Monthly);
    }
}
