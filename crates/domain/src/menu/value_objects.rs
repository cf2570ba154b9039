//! Value objects for the menu domain.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

fn non_negative(field: &str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::new(field, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(ValidationError::new(
            field,
            format!("must be greater than or equal to 0, got {value}"),
        ));
    }
    Ok(value)
}

/// Price of a menu item in the store's currency.
///
/// Stored as the decimal number that appears in the manifest. Always finite
/// and non-negative; the same check runs when a manifest is loaded and when a
/// new price is supplied.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    /// Creates a price, rejecting negative or non-finite amounts.
    pub fn new(amount: f64) -> Result<Self, ValidationError> {
        non_negative("price", amount).map(Self)
    }

    /// Returns zero.
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Returns the amount.
    pub fn amount(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Price {
    type Error = ValidationError;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

/// Energy content of a menu item, in kilocalories. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Calories(f64);

impl Calories {
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        non_negative("calories", value).map(Self)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Calories {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Calories> for f64 {
    fn from(calories: Calories) -> Self {
        calories.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_accepts_zero_and_positive() {
        assert_eq!(Price::new(0.0).unwrap(), Price::zero());
        assert_eq!(Price::new(4.99).unwrap().amount(), 4.99);
    }

    #[test]
    fn price_rejects_negative() {
        let err = Price::new(-1.0).unwrap_err();
        assert_eq!(err.field, "price");
    }

    #[test]
    fn price_rejects_non_finite() {
        assert!(Price::new(f64::NAN).is_err());
        assert!(Price::new(f64::INFINITY).is_err());
    }

    #[test]
    fn price_display_uses_two_decimals() {
        assert_eq!(Price::new(5.0).unwrap().to_string(), "$5.00");
    }

    #[test]
    fn negative_price_fails_deserialization() {
        let result: Result<Price, _> = serde_json::from_str("-0.5");
        assert!(result.is_err());
    }

    #[test]
    fn calories_reject_negative() {
        let err = Calories::new(-10.0).unwrap_err();
        assert_eq!(err.field, "calories");
        assert_eq!(Calories::new(320.0).unwrap().value(), 320.0);
    }

    #[test]
    fn price_serializes_as_number() {
        let json = serde_json::to_string(&Price::new(3.5).unwrap()).unwrap();
        assert_eq!(json, "3.5");
    }
}
