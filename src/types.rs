//! Core types used throughout GridCommit

use crate::error::{GridCommitError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Economic terms of one order.
///
/// Fields are unsigned integers; untyped input goes through
/// [`TradeParameters::parse`] so nothing fractional or negative reaches the
/// hash engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeParameters {
    pub amount: u64,
    pub min_price: u64,
    pub max_price: u64,
}

impl TradeParameters {
    pub fn new(amount: u64, min_price: u64, max_price: u64) -> Self {
        Self {
            amount,
            min_price,
            max_price,
        }
    }

    /// Parse trade terms from their textual form (form fields, CLI args).
    pub fn parse(amount: &str, min_price: &str, max_price: &str) -> Result<Self> {
        Ok(Self {
            amount: parse_unsigned("amount", amount)?,
            min_price: parse_unsigned("minPrice", min_price)?,
            max_price: parse_unsigned("maxPrice", max_price)?,
        })
    }

    /// Terms in the order they are committed to.
    pub fn as_array(&self) -> [u64; 3] {
        [self.amount, self.min_price, self.max_price]
    }
}

/// Parse a decimal string as a non-negative integer.
///
/// A fractional part is accepted only when it is all zeros (`"100.00"`);
/// anything else is rejected instead of truncated.
pub fn parse_unsigned(field: &str, raw: &str) -> Result<u64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(GridCommitError::InvalidInput(format!("{} is empty", field)));
    }
    if trimmed.starts_with('-') {
        return Err(GridCommitError::InvalidInput(format!(
            "{} must not be negative, got '{}'",
            field, raw
        )));
    }

    let integral = match trimmed.split_once('.') {
        Some((whole, fraction)) => {
            if !fraction.chars().all(|c| c == '0') {
                return Err(GridCommitError::InvalidInput(format!(
                    "{} must be a whole number, got '{}'",
                    field, raw
                )));
            }
            whole
        }
        None => trimmed,
    };

    integral.parse::<u64>().map_err(|e| {
        GridCommitError::InvalidInput(format!(
            "{} is not an unsigned integer ('{}'): {}",
            field, raw, e
        ))
    })
}

/// Market a trade belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeKind {
    Energy,
    Carbon,
}

impl fmt::Display for TradeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeKind::Energy => write!(f, "energy"),
            TradeKind::Carbon => write!(f, "carbon"),
        }
    }
}

impl FromStr for TradeKind {
    type Err = GridCommitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "energy" => Ok(TradeKind::Energy),
            "carbon" => Ok(TradeKind::Carbon),
            other => Err(GridCommitError::InvalidInput(format!(
                "unknown trade kind '{}'",
                other
            ))),
        }
    }
}

/// Order side: Buy or Sell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl FromStr for OrderSide {
    type Err = GridCommitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "buy" => Ok(OrderSide::Buy),
            "sell" => Ok(OrderSide::Sell),
            other => Err(GridCommitError::InvalidInput(format!(
                "unknown order side '{}'",
                other
            ))),
        }
    }
}

/// Order book identifier (sequential, starting at 1)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integral_values() {
        let params = TradeParameters::parse("100", "5", "10").unwrap();
        assert_eq!(params, TradeParameters::new(100, 5, 10));
    }

    #[test]
    fn test_parse_accepts_zero_fraction() {
        let params = TradeParameters::parse("100.00", " 5 ", "10.").unwrap();
        assert_eq!(params, TradeParameters::new(100, 5, 10));
    }

    #[test]
    fn test_parse_rejects_fractional() {
        let result = TradeParameters::parse("1.5", "5", "10");
        assert!(matches!(result, Err(GridCommitError::InvalidInput(_))));
    }

    #[test]
    fn test_parse_rejects_negative() {
        let result = TradeParameters::parse("100", "-5", "10");
        assert!(matches!(result, Err(GridCommitError::InvalidInput(_))));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        for raw in ["abc", "", "0x10", "1e3"] {
            let result = parse_unsigned("amount", raw);
            assert!(
                matches!(result, Err(GridCommitError::InvalidInput(_))),
                "accepted {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_parse_rejects_overflow() {
        let result = parse_unsigned("amount", "18446744073709551616");
        assert!(matches!(result, Err(GridCommitError::InvalidInput(_))));
    }

    #[test]
    fn test_trade_parameters_wire_shape() {
        let params = TradeParameters::new(100, 5, 10);
        let json = serde_json::to_value(params).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "amount": 100, "minPrice": 5, "maxPrice": 10 })
        );
    }

    #[test]
    fn test_trade_kind_from_str() {
        assert_eq!("Energy".parse::<TradeKind>().unwrap(), TradeKind::Energy);
        assert_eq!("carbon".parse::<TradeKind>().unwrap(), TradeKind::Carbon);
        assert!("solar".parse::<TradeKind>().is_err());
        assert_eq!(TradeKind::Carbon.to_string(), "carbon");
    }

    #[test]
    fn test_order_side_from_str() {
        assert_eq!("BUY".parse::<OrderSide>().unwrap(), OrderSide::Buy);
        assert_eq!("sell".parse::<OrderSide>().unwrap(), OrderSide::Sell);
        assert!("hold".parse::<OrderSide>().is_err());
    }
}
