//! Cart domain models.

use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::MIN_QUANTITY;
use crate::errors::{Result, ValidationError};
use crate::utils::{parse_leading_decimal, parse_leading_int};

/// Clamps a parsed quantity to the valid range `MIN_QUANTITY..=u32::MAX`.
pub fn clamp_quantity(value: i64) -> u32 {
    if value < i64::from(MIN_QUANTITY) {
        MIN_QUANTITY
    } else {
        u32::try_from(value).unwrap_or(u32::MAX)
    }
}

/// Raw quantity as it arrives from a form field or stepper.
#[derive(Debug, Clone, PartialEq)]
pub enum QuantityInput {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl QuantityInput {
    /// Leading-integer parse; fractional numbers truncate toward zero.
    pub fn parse(&self) -> Option<i64> {
        match self {
            QuantityInput::Text(raw) => parse_leading_int(raw),
            QuantityInput::Integer(value) => Some(*value),
            QuantityInput::Float(value) if value.is_finite() => Some(value.trunc() as i64),
            QuantityInput::Float(_) => None,
        }
    }

    /// Resolves to a valid quantity: unparseable input and values below the
    /// floor both become `MIN_QUANTITY`.
    pub fn resolve(&self) -> u32 {
        match self.parse() {
            Some(value) => {
                let quantity = clamp_quantity(value);
                if i64::from(quantity) != value {
                    debug!("Quantity {} clamped to {}", value, quantity);
                }
                quantity
            }
            None => {
                debug!("Unparseable quantity {:?}, using {}", self, MIN_QUANTITY);
                MIN_QUANTITY
            }
        }
    }
}

impl From<&str> for QuantityInput {
    fn from(value: &str) -> Self {
        QuantityInput::Text(value.to_string())
    }
}

impl From<String> for QuantityInput {
    fn from(value: String) -> Self {
        QuantityInput::Text(value)
    }
}

impl From<i64> for QuantityInput {
    fn from(value: i64) -> Self {
        QuantityInput::Integer(value)
    }
}

impl From<i32> for QuantityInput {
    fn from(value: i32) -> Self {
        QuantityInput::Integer(i64::from(value))
    }
}

impl From<u32> for QuantityInput {
    fn from(value: u32) -> Self {
        QuantityInput::Integer(i64::from(value))
    }
}

impl From<f64> for QuantityInput {
    fn from(value: f64) -> Self {
        QuantityInput::Float(value)
    }
}

/// A single line of the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub line_id: String,
    pub unit_price: Decimal,
    pub quantity: u32,
}

impl CartLine {
    /// Strict constructor. Rejects negative unit prices; the quantity is
    /// clamped to the floor.
    pub fn new(line_id: impl Into<String>, unit_price: Decimal, quantity: u32) -> Result<Self> {
        let line_id = line_id.into();
        if line_id.is_empty() {
            return Err(ValidationError::MissingField("line_id".to_string()).into());
        }
        if unit_price.is_sign_negative() && !unit_price.is_zero() {
            return Err(ValidationError::NegativeUnitPrice {
                line_id,
                unit_price,
            }
            .into());
        }
        Ok(Self {
            line_id,
            unit_price,
            quantity: quantity.max(MIN_QUANTITY),
        })
    }

    /// Builds a line from raw page attributes.
    ///
    /// The unit price takes the leading decimal of `raw_unit_price` (0 when
    /// there is none, negatives floored at 0); the quantity follows the
    /// clamp-to-floor policy.
    pub fn from_raw(
        line_id: impl Into<String>,
        raw_unit_price: &str,
        raw_quantity: impl Into<QuantityInput>,
    ) -> Self {
        let unit_price = parse_leading_decimal(raw_unit_price)
            .unwrap_or(Decimal::ZERO)
            .max(Decimal::ZERO);
        Self {
            line_id: line_id.into(),
            unit_price,
            quantity: raw_quantity.into().resolve(),
        }
    }

    /// `unit_price × quantity`, unrounded.
    pub fn line_total(&self) -> Decimal {
        self.unit_price
            .saturating_mul(Decimal::from(self.quantity))
    }
}

/// Outcome of a quantity mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartRecalculation {
    pub line: CartLine,
    pub line_total: Decimal,
    pub grand_total: Decimal,
}

/// Sum of all line totals, unrounded.
pub fn grand_total<'a>(lines: impl IntoIterator<Item = &'a CartLine>) -> Decimal {
    lines
        .into_iter()
        .fold(Decimal::ZERO, |acc, line| acc.saturating_add(line.line_total()))
}
