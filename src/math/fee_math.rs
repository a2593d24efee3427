use crate::errors::MathError;
use crate::math::constants::Q128;
use alloy_primitives::U256;

pub const BIPS_PER_UNIT: u32 = 10_000;
/// 10^38 still fits below 2^128, so the shifted numerator fits in 256 bits.
pub const MAX_FEE_DECIMALS: usize = 38;

/// Protocol share of `amount` for a Q128 `fee_fraction`, rounded up.
pub fn compute_protocol_fee(amount: u128, fee_fraction: u128) -> u128 {
    let product = U256::from(amount) * U256::from(fee_fraction);
    let fee: U256 = product >> 128;
    let fee = if (product % Q128).is_zero() {
        fee
    } else {
        fee + U256::from(1)
    };
    // fee_fraction < 2^128 keeps the fee at or below amount
    fee.saturating_to::<u128>()
}

/// Converts a fee in basis points into a Q128 fraction, rounding down.
pub fn fee_fraction_from_bips(bips: u32) -> Result<u128, MathError> {
    if bips >= BIPS_PER_UNIT {
        return Err(MathError::InvalidFeeFraction(bips));
    }
    let fraction: U256 = (U256::from(bips) << 128) / U256::from(BIPS_PER_UNIT);
    Ok(fraction.saturating_to::<u128>())
}

/// Converts a decimal fee such as `"0.003"` into a Q128 fraction, rounding down.
pub fn fee_fraction_from_decimal(fee: &str) -> Result<u128, MathError> {
    let invalid = || MathError::InvalidFeeDecimal(fee.to_string());

    let trimmed = fee.trim();
    let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));
    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }
    if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    if whole.bytes().any(|b| b != b'0') {
        return Err(invalid());
    }

    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        return Ok(0);
    }
    if fraction.len() > MAX_FEE_DECIMALS {
        return Err(invalid());
    }

    let numerator = U256::from_str_radix(fraction, 10).map_err(|_| invalid())?;
    let denominator = U256::from(10).pow(U256::from(fraction.len()));
    Ok(((numerator << 128usize) / denominator).saturating_to::<u128>())
}
