//! Currency display formatting.
//!
//! Amounts stay `rust_decimal::Decimal` all the way to the display string;
//! floating point never touches revenue.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats amounts with a fixed currency prefix and thousands separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    prefix: String,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::new("$")
    }
}

impl CurrencyFormat {
    /// Creates a formatter using the given prefix (e.g. `"$"`, `"KSh "`).
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Returns the configured prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Renders `amount` rounded to two decimals, e.g. `$45,000.00`.
    #[must_use]
    pub fn format(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        format!("{sign}{}{}", self.prefix, group_thousands(rounded.abs()))
    }
}

/// Inserts `,` between groups of three integer digits, keeping two decimals.
fn group_thousands(amount: Decimal) -> String {
    let text = format!("{amount:.2}");
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{grouped}.{fraction}")
}
