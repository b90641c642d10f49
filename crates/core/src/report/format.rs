//! Text formatting for report cells.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::period::Period;

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Spanish month name, lowercase. `month` is 1-indexed.
#[must_use]
pub fn month_name(month: u32) -> &'static str {
    usize::try_from(month)
        .ok()
        .and_then(|m| m.checked_sub(1))
        .and_then(|i| MONTHS_ES.get(i))
        .copied()
        .unwrap_or("")
}

/// `"marzo 2024"`.
#[must_use]
pub fn period_label(period: &Period) -> String {
    format!("{} {}", month_name(period.month()), period.year())
}

/// `"31/03/2024"`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// `"05 de marzo, 2024"`.
#[must_use]
pub fn format_long_date(date: NaiveDate) -> String {
    use chrono::Datelike;
    format!("{:02} de {}, {}", date.day(), month_name(date.month()), date.year())
}

/// US-dollar style amount: `$1,234.50`, `-$5.00`.
///
/// Halves round away from zero, as browsers do for currency display.
#[must_use]
pub fn format_currency(amount: Decimal) -> String {
    let mut rounded = amount
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);

    let text = rounded.to_string();
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(0), "$0.00")]
    #[case(dec!(5), "$5.00")]
    #[case(dec!(12.5), "$12.50")]
    #[case(dec!(999.999), "$1,000.00")]
    #[case(dec!(1234.5), "$1,234.50")]
    #[case(dec!(1234567.891), "$1,234,567.89")]
    #[case(dec!(0.005), "$0.01")]
    #[case(dec!(-5), "-$5.00")]
    #[case(dec!(-1234.25), "-$1,234.25")]
    #[case(dec!(-0.001), "$0.00")]
    fn test_format_currency(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(format_currency(amount), expected);
    }

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(1), "enero");
        assert_eq!(month_name(12), "diciembre");
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(13), "");
    }

    #[test]
    fn test_dates() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date(date), "05/03/2024");
        assert_eq!(format_long_date(date), "05 de marzo, 2024");
        assert_eq!(period_label(&Period::new(9, 2025).unwrap()), "septiembre 2025");
    }
}
