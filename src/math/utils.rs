use crate::errors::MathError;
use alloy_primitives::U256;
use rug::Integer;
use rug::integer::Order;

/// Converts a U256 into a f64, manually combining its limbs.
/// This is an approximation and will lose precision for very large numbers,
/// but is suitable for price calculations.
pub fn u256_to_f64(value: U256) -> f64 {
    let limbs = value.as_limbs();
    let mut result = 0.0;

    const TWO_POW_64: f64 = (1u64 << 63) as f64 * 2.0;

    result += limbs[3] as f64;
    result = result * TWO_POW_64 + (limbs[2] as f64);
    result = result * TWO_POW_64 + (limbs[1] as f64);
    result = result * TWO_POW_64 + (limbs[0] as f64);

    result
}

pub fn u256_to_integer(value: U256) -> Integer {
    Integer::from_digits(value.as_limbs().as_slice(), Order::Lsf)
}

/// Converts a non-negative arbitrary-precision integer into a U256.
pub fn integer_to_u256(value: &Integer) -> Result<U256, MathError> {
    if *value < 0 {
        return Err(MathError::Overflow("negative value has no U256 representation"));
    }
    let digits = value.to_digits::<u64>(Order::Lsf);
    if digits.len() > 4 {
        return Err(MathError::Overflow("value does not fit in 256 bits"));
    }
    let mut limbs = [0u64; 4];
    limbs[..digits.len()].copy_from_slice(&digits);
    Ok(U256::from_limbs(limbs))
}
