//! Tax percentage encoding.
//!
//! The contracts store taxes as integers scaled by ten: `2.5%` is `25`.
//! Percentages finer than one decimal place have no on-chain representation
//! and are rejected instead of truncated.

use alloy::primitives::U256;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use thiserror::Error;

/// Scale factor between a percentage and its on-chain integer.
pub const TAX_SCALE: u32 = 10;

/// Errors from tax conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxError {
    #[error("negative tax: {0}")]
    Negative(Decimal),
    #[error("tax {0} has more than one decimal place")]
    TooPrecise(Decimal),
    #[error("tax out of range: {0}")]
    OutOfRange(String),
}

/// Encodes a percentage into the contract's integer tax unit.
pub fn encode_tax(percentage: Decimal) -> Result<U256, TaxError> {
    if percentage.is_sign_negative() && !percentage.is_zero() {
        return Err(TaxError::Negative(percentage));
    }
    let scaled = percentage
        .checked_mul(Decimal::from(TAX_SCALE))
        .ok_or_else(|| TaxError::OutOfRange(percentage.to_string()))?;
    if !scaled.fract().is_zero() {
        return Err(TaxError::TooPrecise(percentage));
    }
    let raw = scaled
        .to_u64()
        .ok_or_else(|| TaxError::OutOfRange(percentage.to_string()))?;
    Ok(U256::from(raw))
}

/// Decodes the contract's integer tax unit into a percentage.
pub fn decode_tax(raw: U256) -> Result<Decimal, TaxError> {
    let raw = i64::try_from(raw).map_err(|_| TaxError::OutOfRange(raw.to_string()))?;
    Ok(Decimal::new(raw, 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn two_and_a_half_percent() {
        assert_eq!(encode_tax(dec("2.5")).unwrap(), U256::from(25u64));
        assert_eq!(decode_tax(U256::from(25u64)).unwrap(), dec("2.5"));
    }

    #[test]
    fn one_decimal_values_round_trip() {
        for tenths in 0..=1000i64 {
            let p = Decimal::new(tenths, 1);
            assert_eq!(decode_tax(encode_tax(p).unwrap()).unwrap(), p);
        }
    }

    #[test]
    fn whole_percent() {
        assert_eq!(encode_tax(dec("5")).unwrap(), U256::from(50u64));
        assert_eq!(decode_tax(U256::from(50u64)).unwrap(), dec("5"));
    }

    #[test]
    fn zero_tax() {
        assert_eq!(encode_tax(Decimal::ZERO).unwrap(), U256::ZERO);
        assert!(decode_tax(U256::ZERO).unwrap().is_zero());
    }

    #[test]
    fn sub_tenth_precision_rejected() {
        assert_eq!(
            encode_tax(dec("2.55")),
            Err(TaxError::TooPrecise(dec("2.55")))
        );
    }

    #[test]
    fn negative_rejected() {
        assert!(matches!(encode_tax(dec("-1")), Err(TaxError::Negative(_))));
    }

    #[test]
    fn oversized_raw_rejected() {
        assert!(matches!(decode_tax(U256::MAX), Err(TaxError::OutOfRange(_))));
    }
}
