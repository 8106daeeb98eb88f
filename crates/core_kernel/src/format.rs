//! Display formatting for monetary amounts
//!
//! Formatting is presentation only. Stored amounts and comparisons always
//! use [`Money`] directly.

use crate::money::Money;

/// Renders an amount for people to read
pub trait AmountFormatter: Send + Sync {
    fn format(&self, money: &Money) -> String;
}

/// South African Rand convention: `R 6 750,00`
///
/// Thousands are grouped with spaces and the decimal separator is a comma.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandFormatter;

impl AmountFormatter for RandFormatter {
    fn format(&self, money: &Money) -> String {
        let rounded = money.amount().round_dp(2);
        let digits = format!("{:.2}", rounded.abs());
        let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, ch) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(' ');
            }
            grouped.push(ch);
        }

        let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
        format!("{sign}R {grouped},{cents}")
    }
}
