//! Conversion between human-readable amounts and fixed-point integers.
//!
//! `to_fixed_point(1.5, 18)` → `1_500_000_000_000_000_000` and back.

use alloy::primitives::U256;
use rust_decimal::Decimal;
use thiserror::Error;

/// Decimals used by native currency and most ERC-20 tokens.
pub const DEFAULT_DECIMALS: u8 = 18;

/// Errors from amount conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitsError {
    #[error("empty amount")]
    Empty,
    #[error("negative amount: {0}")]
    Negative(String),
    #[error("too many decimal places: got {got}, max {max}")]
    TooPrecise { got: usize, max: u8 },
    #[error("invalid amount: {0}")]
    Invalid(String),
}

/// Result alias for unit conversion.
pub type Result<T> = std::result::Result<T, UnitsError>;

/// Converts a decimal amount to its fixed-point integer with `decimals` places.
pub fn to_fixed_point(amount: Decimal, decimals: u8) -> Result<U256> {
    if amount.is_zero() {
        return Ok(U256::ZERO);
    }
    if amount.is_sign_negative() {
        return Err(UnitsError::Negative(amount.to_string()));
    }
    parse_units(&amount.normalize().to_string(), decimals)
}

/// [`to_fixed_point`] with 18 decimals.
pub fn to_wei(amount: Decimal) -> Result<U256> {
    to_fixed_point(amount, DEFAULT_DECIMALS)
}

/// Parses a decimal string (e.g. "1.5") into a fixed-point integer.
pub fn parse_units(amount: &str, decimals: u8) -> Result<U256> {
    let amount = amount.trim();
    if amount.is_empty() {
        return Err(UnitsError::Empty);
    }
    if amount.starts_with('-') {
        return Err(UnitsError::Negative(amount.to_string()));
    }

    let (integer, fractional) = amount.split_once('.').unwrap_or((amount, ""));
    if integer.is_empty() && fractional.is_empty() {
        return Err(UnitsError::Invalid(amount.to_string()));
    }

    if fractional.len() > decimals as usize {
        return Err(UnitsError::TooPrecise {
            got: fractional.len(),
            max: decimals,
        });
    }
    if !integer.chars().chain(fractional.chars()).all(|c| c.is_ascii_digit()) {
        return Err(UnitsError::Invalid(amount.to_string()));
    }

    let padded = format!("{fractional:0<width$}", width = decimals as usize);
    let combined = format!("{integer}{padded}");
    let combined = combined.trim_start_matches('0');
    let combined = if combined.is_empty() { "0" } else { combined };

    U256::from_str_radix(combined, 10).map_err(|e| UnitsError::Invalid(e.to_string()))
}

/// Formats a fixed-point integer as a decimal string with `decimals` places.
///
/// Whole values keep one fractional digit (`"1.0"`).
pub fn from_fixed_point(value: U256, decimals: u8) -> String {
    let s = value.to_string();
    let decimals = decimals as usize;

    if s.len() <= decimals {
        if value.is_zero() {
            return "0.0".to_string();
        }
        let zeros = decimals - s.len();
        let fractional = s.trim_end_matches('0');
        format!("0.{}{fractional}", "0".repeat(zeros))
    } else {
        let (integer_part, fractional_part) = s.split_at(s.len() - decimals);
        let fractional = fractional_part.trim_end_matches('0');
        if fractional.is_empty() {
            format!("{integer_part}.0")
        } else {
            format!("{integer_part}.{fractional}")
        }
    }
}
