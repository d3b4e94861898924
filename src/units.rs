//! USDC amount parsing
//!
//! Inbound messages carry amounts as human decimal strings ("100", "0.5");
//! the contracts take atomic units. USDC uses 6 decimals on every chain this
//! handler supports.

use alloy_primitives::U256;

use crate::error::{Result, SolverError};

/// Number of decimals in USDC's atomic representation
pub const USDC_DECIMALS: u32 = 6;

/// Parses a positive decimal USDC amount into atomic units
///
/// Rejects zero, empty, malformed input, and amounts with more than 6
/// fractional digits (which would truncate value silently).
///
/// # Example
///
/// ```rust
/// use alloy_primitives::U256;
/// use cctp_solver::units::parse_usdc;
///
/// assert_eq!(parse_usdc("100").unwrap(), U256::from(100_000_000u64));
/// assert_eq!(parse_usdc("0.5").unwrap(), U256::from(500_000u64));
/// ```
pub fn parse_usdc(amount: &str) -> Result<U256> {
    let invalid = || SolverError::InvalidAmount {
        amount: amount.to_string(),
    };

    let (whole, fraction) = match amount.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (amount, ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    if fraction.len() > USDC_DECIMALS as usize {
        return Err(invalid());
    }

    // Scale the fraction up to exactly 6 digits
    let mut scaled = String::with_capacity(whole.len() + USDC_DECIMALS as usize);
    scaled.push_str(whole);
    scaled.push_str(fraction);
    for _ in fraction.len()..USDC_DECIMALS as usize {
        scaled.push('0');
    }

    let units = U256::from_str_radix(&scaled, 10).map_err(|_| invalid())?;
    if units.is_zero() {
        return Err(invalid());
    }

    Ok(units)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("100", 100_000_000)]
    #[case("1", 1_000_000)]
    #[case("0.5", 500_000)]
    #[case("0.000001", 1)]
    #[case("12.345678", 12_345_678)]
    #[case(".5", 500_000)]
    #[case("5.", 5_000_000)]
    fn test_parse_valid(#[case] input: &str, #[case] expected: u64) {
        assert_eq!(parse_usdc(input).unwrap(), U256::from(expected));
    }

    #[rstest]
    #[case("")]
    #[case(".")]
    #[case("0")]
    #[case("0.0")]
    #[case("-1")]
    #[case("abc")]
    #[case("1.2.3")]
    #[case("0.0000001")] // 7 fractional digits
    #[case("1e6")]
    fn test_parse_invalid(#[case] input: &str) {
        assert!(matches!(
            parse_usdc(input),
            Err(SolverError::InvalidAmount { .. })
        ));
    }
}
