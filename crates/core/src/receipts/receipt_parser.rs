use chrono::NaiveDate;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

use super::receipts_model::ReceiptHints;

/// Amounts outside (0, MAX_RECEIPT_AMOUNT) are treated as OCR noise.
const MAX_RECEIPT_AMOUNT: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Category names and the merchant keywords that suggest them, checked in order.
const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Groceries",
        &[
            "market",
            "grocery",
            "food",
            "supermarket",
            "walmart",
            "target",
            "whole foods",
            "kroger",
        ],
    ),
    (
        "Transportation",
        &["gas", "fuel", "shell", "exxon", "bp", "parking", "uber", "lyft"],
    ),
    (
        "Dining Out",
        &[
            "restaurant",
            "cafe",
            "pizza",
            "burger",
            "starbucks",
            "mcdonalds",
            "dining",
        ],
    ),
    (
        "Entertainment",
        &["movie", "cinema", "netflix", "spotify", "game", "entertainment"],
    ),
    (
        "Healthcare",
        &["pharmacy", "doctor", "medical", "hospital", "cvs", "walgreens"],
    ),
    (
        "Utilities",
        &["electric", "power", "water", "internet", "phone", "cable"],
    ),
];

lazy_static! {
    static ref AMOUNT_PATTERNS: [Regex; 3] = [
        Regex::new(r"(?i)(?:total|amount|sum)[\s:]*\$?(\d+\.?\d{0,2})")
            .expect("Invalid regex pattern"),
        Regex::new(r"\$(\d+\.\d{2})").expect("Invalid regex pattern"),
        Regex::new(r"(?m)(\d+\.\d{2})\s*$").expect("Invalid regex pattern"),
    ];
    static ref SLASH_DATE: Regex =
        Regex::new(r"(\d{1,2})/(\d{1,2})/(\d{2,4})").expect("Invalid regex pattern");
    static ref DASH_DATE: Regex =
        Regex::new(r"(\d{1,2})-(\d{1,2})-(\d{2,4})").expect("Invalid regex pattern");
    static ref NAMED_MONTH_DATE: Regex =
        Regex::new(r"([A-Za-z]+)\s+(\d{1,2}),?\s+(\d{4})").expect("Invalid regex pattern");
}

/// Guesses amount, date and category from OCR text.
pub fn extract_receipt_hints(ocr_text: &str) -> ReceiptHints {
    let hints = ReceiptHints {
        amount: extract_amount(ocr_text),
        date: extract_date(ocr_text),
        category: suggest_category(ocr_text).map(str::to_string),
    };
    debug!("Extracted receipt hints: {:?}", hints);
    hints
}

fn extract_amount(text: &str) -> Option<Decimal> {
    AMOUNT_PATTERNS.iter().find_map(|pattern| {
        let captures = pattern.captures(text)?;
        let raw = captures.get(1)?.as_str().trim_end_matches('.');
        let amount = Decimal::from_str(raw).ok()?;
        (amount > Decimal::ZERO && amount < MAX_RECEIPT_AMOUNT).then_some(amount)
    })
}

fn extract_date(text: &str) -> Option<NaiveDate> {
    numeric_date(&SLASH_DATE, text)
        .or_else(|| numeric_date(&DASH_DATE, text))
        .or_else(|| named_month_date(text))
}

/// Month-first numeric dates. Two-digit years are read as 20YY.
fn numeric_date(pattern: &Regex, text: &str) -> Option<NaiveDate> {
    pattern.captures_iter(text).find_map(|captures| {
        let month: u32 = captures.get(1)?.as_str().parse().ok()?;
        let day: u32 = captures.get(2)?.as_str().parse().ok()?;
        let year_raw = captures.get(3)?.as_str();
        let mut year: i32 = year_raw.parse().ok()?;
        if year_raw.len() == 2 {
            year += 2000;
        } else if year_raw.len() == 3 {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day)
    })
}

fn named_month_date(text: &str) -> Option<NaiveDate> {
    NAMED_MONTH_DATE.captures_iter(text).find_map(|captures| {
        let normalized = format!(
            "{} {} {}",
            captures.get(1)?.as_str(),
            captures.get(2)?.as_str(),
            captures.get(3)?.as_str()
        );
        NaiveDate::parse_from_str(&normalized, "%B %d %Y")
            .or_else(|_| NaiveDate::parse_from_str(&normalized, "%b %d %Y"))
            .ok()
    })
}

fn suggest_category(text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(category, _)| *category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_total_line_wins() {
        let text = "WHOLE FOODS MARKET\nBananas 1.99\nTOTAL: $42.17\nThank you";
        let hints = extract_receipt_hints(text);
        assert_eq!(hints.amount, Some(dec!(42.17)));
        assert_eq!(hints.category.as_deref(), Some("Groceries"));
    }

    #[test]
    fn test_dollar_amount_when_no_total_keyword() {
        assert_eq!(extract_amount("Paid $18.50 by card"), Some(dec!(18.50)));
    }

    #[test]
    fn test_trailing_amount_at_line_end() {
        assert_eq!(extract_amount("Latte\n4.75\n"), Some(dec!(4.75)));
    }

    #[test]
    fn test_out_of_range_amount_falls_through() {
        // Total exceeds the bound; the dollar amount is used instead.
        let text = "Total 25000.00\nCash $20.00";
        assert_eq!(extract_amount(text), Some(dec!(20.00)));
        assert_eq!(extract_amount("Total 0.00"), None);
    }

    #[test]
    fn test_date_formats() {
        assert_eq!(
            extract_date("Date: 12/25/2023 14:02"),
            NaiveDate::from_ymd_opt(2023, 12, 25)
        );
        assert_eq!(
            extract_date("03-07-2024"),
            NaiveDate::from_ymd_opt(2024, 3, 7)
        );
        assert_eq!(
            extract_date("Visited on March 5, 2024"),
            NaiveDate::from_ymd_opt(2024, 3, 5)
        );
        assert_eq!(
            extract_date("Jan 15 2024"),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        assert_eq!(extract_date("1/2/24"), NaiveDate::from_ymd_opt(2024, 1, 2));
    }

    #[test]
    fn test_invalid_calendar_date_is_skipped() {
        assert_eq!(extract_date("13/45/2024"), None);
    }

    #[test]
    fn test_category_keywords_in_order() {
        assert_eq!(suggest_category("SHELL station #42"), Some("Transportation"));
        assert_eq!(suggest_category("Joe's Pizza"), Some("Dining Out"));
        assert_eq!(suggest_category("CVS Pharmacy"), Some("Healthcare"));
        assert_eq!(suggest_category("City Water Dept"), Some("Utilities"));
        assert_eq!(suggest_category("nothing to see"), None);
    }

    #[test]
    fn test_empty_text_gives_empty_hints() {
        assert!(extract_receipt_hints("").is_empty());
    }
}
