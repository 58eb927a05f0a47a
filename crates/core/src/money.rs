use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-negative transaction amount as printed on a bank statement.
///
/// Statements carry the sign in the debit/credit column, not in the amount,
/// so the constructor always keeps the magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Decimal")]
pub struct Money(Decimal);

impl Money {
    pub fn from_kopecks(kopecks: i64) -> Self {
        Money::from_decimal(Decimal::from(kopecks) / Decimal::from(100))
    }

    pub fn from_decimal(decimal: Decimal) -> Self {
        Money(decimal.abs())
    }

    pub fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Rounds half away from zero to two places, e.g. `0.125` -> `0.13`.
    pub fn rounded(self) -> Self {
        Money(self.0.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Fixed two-decimal rendering without a currency sign: `1500` -> `"1500.00"`.
    pub fn to_fixed(self) -> String {
        let mut value = self.rounded().0;
        value.rescale(2);
        value.to_string()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ₽", self.to_fixed())
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Money::from_decimal(value)
    }
}
