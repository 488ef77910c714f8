//! Money types for unit costs and display totals.
//!
//! Costs arrive as display strings such as `"$5.00"`. They are parsed once,
//! at the boundary, into an exact [`Amount`] held in micro-units (millionths
//! of a dollar). Products and sums of amounts stay exact; only the final
//! step rounds to whole cents, producing a [`Money`] value that formats as
//! `$10.00`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CartError;

/// The currency symbol costs are written with and totals are rendered with.
pub const CURRENCY_SYMBOL: &str = "$";

/// Micro-units in one whole currency unit.
pub const MICROS_PER_UNIT: i64 = 1_000_000;

/// Micro-units in one cent.
pub const MICROS_PER_CENT: i64 = 10_000;

/// Most fractional digits a cost string may carry.
pub const MAX_FRACTION_DIGITS: usize = 6;

/// An exact, unrounded monetary amount in micro-units.
///
/// Outside this crate an amount only comes from [`Amount::parse`], so it is
/// never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Default)]
#[serde(transparent)]
pub struct Amount {
    micros: i64,
}

impl Amount {
    pub(crate) fn from_micros(micros: i64) -> Self {
        Self { micros }
    }

    /// The zero amount.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Amount in micro-units.
    pub fn micros(&self) -> i64 {
        self.micros
    }

    /// Parse a cost display string such as `"$3.50"`, `"3.5"` or `"$12"`.
    ///
    /// A leading [`CURRENCY_SYMBOL`] and surrounding whitespace are accepted.
    /// Signs, digit separators and more than [`MAX_FRACTION_DIGITS`]
    /// fractional digits are rejected.
    ///
    /// ```
    /// use cart_store::money::Amount;
    /// let cost = Amount::parse("$3.50").unwrap();
    /// assert_eq!(cost.micros(), 3_500_000);
    /// ```
    pub fn parse(input: &str) -> Result<Self, CartError> {
        let invalid = || CartError::InvalidCostFormat(input.to_string());

        let trimmed = input.trim();
        let numeral = trimmed
            .strip_prefix(CURRENCY_SYMBOL)
            .unwrap_or(trimmed)
            .trim_start();

        let (whole, fraction) = numeral.split_once('.').unwrap_or((numeral, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !all_digits(fraction) || fraction.len() > MAX_FRACTION_DIGITS {
            return Err(invalid());
        }

        let whole_units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };

        let mut fraction_micros = fraction
            .bytes()
            .fold(0_i64, |acc, b| acc * 10 + i64::from(b - b'0'));
        for _ in fraction.len()..MAX_FRACTION_DIGITS {
            fraction_micros *= 10;
        }

        whole_units
            .checked_mul(MICROS_PER_UNIT)
            .and_then(|m| m.checked_add(fraction_micros))
            .map(Self::from_micros)
            .ok_or_else(invalid)
    }

    /// Multiply by a quantity, returning None on overflow.
    pub fn checked_mul(&self, factor: i64) -> Option<Amount> {
        self.micros.checked_mul(factor).map(Self::from_micros)
    }

    /// Add another amount, returning None on overflow.
    pub fn checked_add(&self, other: &Amount) -> Option<Amount> {
        self.micros.checked_add(other.micros).map(Self::from_micros)
    }

    /// Sum amounts without intermediate rounding, returning None on overflow.
    pub fn try_sum(amounts: impl IntoIterator<Item = Amount>) -> Option<Amount> {
        amounts
            .into_iter()
            .try_fold(Amount::zero(), |acc, a| acc.checked_add(&a))
    }

    /// Round to whole cents, half away from zero.
    pub fn round_to_cents(&self) -> Money {
        let half = MICROS_PER_CENT / 2;
        let cents = if self.micros >= 0 {
            (self.micros / MICROS_PER_CENT) + i64::from(self.micros % MICROS_PER_CENT >= half)
        } else {
            (self.micros / MICROS_PER_CENT) - i64::from(-(self.micros % MICROS_PER_CENT) >= half)
        };
        Money::new(cents)
    }
}

/// A display-grade monetary value in whole cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        let (sign, whole, cents) = self.parts();
        format!("{}{}{}.{:02}", sign, CURRENCY_SYMBOL, whole, cents)
    }

    /// Format as a fixed two-decimal numeral without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let (sign, whole, cents) = self.parts();
        format!("{}{}.{:02}", sign, whole, cents)
    }

    fn parts(&self) -> (&'static str, u64, u64) {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        (sign, abs / 100, abs % 100)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_symbol() {
        assert_eq!(Amount::parse("$5.00").unwrap().micros(), 5_000_000);
        assert_eq!(Amount::parse("$3.50").unwrap().micros(), 3_500_000);
        assert_eq!(Amount::parse(" $ 12 ").unwrap().micros(), 12_000_000);
    }

    #[test]
    fn test_parse_without_symbol() {
        assert_eq!(Amount::parse("15").unwrap().micros(), 15_000_000);
        assert_eq!(Amount::parse("0.5").unwrap().micros(), 500_000);
        assert_eq!(Amount::parse(".25").unwrap().micros(), 250_000);
        assert_eq!(Amount::parse("7.").unwrap().micros(), 7_000_000);
    }

    #[test]
    fn test_parse_sub_cent_precision() {
        assert_eq!(Amount::parse("$0.333333").unwrap().micros(), 333_333);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "$", ".", "$.", "abc", "$-5.00", "-5", "+5", "1,000", "5.00$", "$5.0000001", "1.2.3"] {
            assert!(
                matches!(Amount::parse(input), Err(CartError::InvalidCostFormat(_))),
                "expected {:?} to be rejected",
                input
            );
        }
    }

    #[test]
    fn test_parse_overflow_is_invalid() {
        assert!(matches!(
            Amount::parse("$99999999999999999999"),
            Err(CartError::InvalidCostFormat(_))
        ));
        assert!(matches!(
            Amount::parse("$9999999999999"),
            Err(CartError::InvalidCostFormat(_))
        ));
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(Amount::from_micros(1_004_999).round_to_cents().amount_cents, 100);
        assert_eq!(Amount::from_micros(1_005_000).round_to_cents().amount_cents, 101);
        assert_eq!(Amount::from_micros(-1_005_000).round_to_cents().amount_cents, -101);
        assert_eq!(Amount::zero().round_to_cents().amount_cents, 0);
    }

    #[test]
    fn test_sum_rounds_once() {
        // Three items at 1/3 dollar each: rounding each first would give 0.99.
        let third = Amount::parse("0.333333").unwrap();
        let total = Amount::try_sum([third, third, third]).unwrap();
        assert_eq!(total.round_to_cents().display_amount(), "1.00");
    }

    #[test]
    fn test_sum_overflow() {
        let big = Amount::parse("$9000000000000").unwrap();
        assert!(Amount::try_sum([big, big]).is_none());
        assert_eq!(Amount::try_sum(Vec::new()), Some(Amount::zero()));
    }

    #[test]
    fn test_checked_mul_overflow() {
        assert!(Amount::from_micros(i64::MAX).checked_mul(2).is_none());
        assert_eq!(Amount::from_micros(5).checked_mul(3), Some(Amount::from_micros(15)));
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(4999).display(), "$49.99");
        assert_eq!(Money::new(1000).display(), "$10.00");
        assert_eq!(Money::new(5).display(), "$0.05");
        assert_eq!(Money::new(0).display_amount(), "0.00");
        assert_eq!(Money::new(-250).display(), "-$2.50");
        assert_eq!(format!("{}", Money::new(1350)), "$13.50");
    }
}
