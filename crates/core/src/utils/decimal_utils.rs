//! Parsing of user-supplied monetary and quantity strings.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::errors::{Result, ValidationError};

/// Parses `raw` as a decimal with at most `max_scale` fractional digits and
/// an absolute value no greater than `max_magnitude`.
///
/// `field` names the input in the error so callers can report it back.
pub fn parse_amount(field: &str, raw: &str, max_scale: u32, max_magnitude: i64) -> Result<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field.to_string()).into());
    }

    let value = Decimal::from_str(trimmed).map_err(|_| {
        ValidationError::InvalidInput(format!("{}: '{}' is not a valid amount", field, raw))
    })?;

    if value.scale() > max_scale {
        return Err(ValidationError::InvalidInput(format!(
            "{}: at most {} decimal places are allowed",
            field, max_scale
        ))
        .into());
    }

    if value.abs() > Decimal::from(max_magnitude) {
        return Err(ValidationError::InvalidInput(format!(
            "{}: must not exceed {} in absolute value",
            field, max_magnitude
        ))
        .into());
    }

    Ok(value)
}

/// Same as [`parse_amount`] but also rejects negative values.
pub fn parse_non_negative_amount(
    field: &str,
    raw: &str,
    max_scale: u32,
    max_magnitude: i64,
) -> Result<Decimal> {
    let value = parse_amount(field, raw, max_scale, max_magnitude)?;
    if value < Decimal::ZERO {
        return Err(ValidationError::InvalidInput(format!(
            "{}: must not be negative",
            field
        ))
        .into());
    }
    Ok(value)
}

/// Sums `values`, clamping at `Decimal::MAX` / `Decimal::MIN` instead of
/// overflowing.
pub fn saturating_sum<I>(values: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .fold(Decimal::ZERO, |acc, value| acc.saturating_add(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use rust_decimal_macros::dec;

    const LIMIT: i64 = 1_000_000_000_000;

    #[test]
    fn parses_money_strings() {
        assert_eq!(parse_amount("amount", "85.50", 2, LIMIT).unwrap(), dec!(85.50));
        assert_eq!(parse_amount("amount", " 45 ", 2, LIMIT).unwrap(), dec!(45));
        assert_eq!(parse_amount("amount", "-12.25", 2, LIMIT).unwrap(), dec!(-12.25));
    }

    #[test]
    fn rejects_non_numeric_amount() {
        let err = parse_amount("amount", "twelve", 2, LIMIT).unwrap_err();
        match err {
            Error::Validation(ValidationError::InvalidInput(msg)) => {
                assert!(msg.starts_with("amount"))
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn rejects_empty_amount_as_missing() {
        let err = parse_amount("amount", "  ", 2, LIMIT).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::MissingField(ref f)) if f == "amount"
        ));
    }

    #[test]
    fn rejects_excess_precision() {
        assert!(parse_amount("amount", "1.234", 2, LIMIT).is_err());
        assert_eq!(
            parse_amount("amount", "0.12345678", 8, LIMIT).unwrap(),
            dec!(0.12345678)
        );
        assert!(parse_amount("amount", "0.123456789", 8, LIMIT).is_err());
    }

    #[test]
    fn non_negative_rejects_negatives_only() {
        assert!(parse_non_negative_amount("amount", "-1", 2, LIMIT).is_err());
        assert_eq!(parse_non_negative_amount("amount", "0", 2, LIMIT).unwrap(), dec!(0));
        assert_eq!(
            parse_non_negative_amount("amount", "800.00", 2, LIMIT).unwrap(),
            dec!(800)
        );
    }

    #[test]
    fn saturating_sum_clamps_instead_of_overflowing() {
        assert_eq!(saturating_sum([dec!(1.10), dec!(2.20), dec!(-0.30)]), dec!(3.00));
        assert_eq!(saturating_sum([Decimal::MAX, Decimal::MAX]), Decimal::MAX);
        assert_eq!(saturating_sum([Decimal::MIN, dec!(-1)]), Decimal::MIN);
        assert_eq!(saturating_sum(Vec::new()), Decimal::ZERO);
    }

    #[test]
    fn rejects_amounts_beyond_the_magnitude_limit() {
        assert_eq!(
            parse_amount("amount", "1000000000000.00", 2, LIMIT).unwrap(),
            dec!(1000000000000)
        );
        assert!(parse_amount("amount", "1000000000000.01", 2, LIMIT).is_err());
        assert!(parse_amount("amount", "-1000000000000.01", 2, LIMIT).is_err());

        let err = parse_non_negative_amount("amount", "79228162514264337593543950335", 2, LIMIT)
            .unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::InvalidInput(_))));
    }
}
