use crate::errors::MathError;
use alloy_primitives::{U256, U512};

/// Narrows a U512 into a U256, failing instead of truncating.
pub fn to_u256(value: U512) -> Result<U256, MathError> {
    if value > U512::from(U256::MAX) {
        Err(MathError::Overflow("value does not fit in 256 bits"))
    } else {
        Ok(value.to())
    }
}

/// Narrows a U512 into a u128, failing instead of truncating.
pub fn to_u128(value: U512) -> Result<u128, MathError> {
    if value > U512::from(u128::MAX) {
        Err(MathError::Overflow("value does not fit in 128 bits"))
    } else {
        Ok(value.to())
    }
}

/// Computes `(a * b) >> shift` with the product carried at 512 bits.
/// Fails if the shifted product still needs more than 256 bits.
pub fn mul_shift(a: U256, b: U256, shift: usize) -> Result<U256, MathError> {
    let product: U512 = a.widening_mul(b);
    to_u256(product >> shift)
}

/// Equivalent to ceil(numerator / denominator) over 512 bits.
pub fn div_rounding_up(numerator: U512, denominator: U512) -> Result<U512, MathError> {
    if denominator.is_zero() {
        return Err(MathError::DivisionByZero);
    }
    let quotient = numerator / denominator;
    if (numerator % denominator).is_zero() {
        Ok(quotient)
    } else {
        Ok(quotient + U512::from(1))
    }
}

/// Performs a multiplication and division, rounding up.
/// Equivalent to ceil((a * b) / denominator).
/// Fails on division by zero or when the result does not fit in 256 bits.
pub fn mul_div_rounding_up(a: U256, b: U256, denominator: U256) -> Result<U256, MathError> {
    let product: U512 = a.widening_mul(b);
    to_u256(div_rounding_up(product, U512::from(denominator))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::constants::Q128;

    #[test]
    fn test_mul_shift_identity() {
        assert_eq!(mul_shift(Q128, Q128, 128).unwrap(), Q128);
        assert_eq!(mul_shift(Q128, U256::from(12345), 128).unwrap(), U256::from(12345));
    }

    #[test]
    fn test_mul_shift_discards_low_bits() {
        // 3 * 3 / 2^1 = 4.5
        assert_eq!(mul_shift(U256::from(3), U256::from(3), 1).unwrap(), U256::from(4));
        assert_eq!(mul_shift(U256::from(1), U256::from(1), 128).unwrap(), U256::ZERO);
    }

    #[test]
    fn test_mul_shift_overflow() {
        assert_eq!(
            mul_shift(U256::MAX, U256::MAX, 128),
            Err(MathError::Overflow("value does not fit in 256 bits"))
        );
        // (2^256 - 1)^2 >> 256 still fits
        assert_eq!(mul_shift(U256::MAX, U256::MAX, 256).unwrap(), U256::MAX - U256::from(1));
    }

    #[test]
    fn test_div_rounding_up() {
        assert_eq!(div_rounding_up(U512::from(10), U512::from(5)).unwrap(), U512::from(2));
        assert_eq!(div_rounding_up(U512::from(11), U512::from(5)).unwrap(), U512::from(3));
        assert_eq!(div_rounding_up(U512::ZERO, U512::from(5)).unwrap(), U512::ZERO);
        assert_eq!(div_rounding_up(U512::from(1), U512::ZERO), Err(MathError::DivisionByZero));
    }

    #[test]
    fn test_mul_div_rounding_up_reverts() {
        assert_eq!(
            mul_div_rounding_up(Q128, U256::from(5), U256::ZERO),
            Err(MathError::DivisionByZero)
        );
        assert!(mul_div_rounding_up(U256::MAX, U256::MAX, U256::MAX - U256::from(1)).is_err());
    }

    #[test]
    fn test_mul_div_rounding_up_all_max_inputs() {
        assert_eq!(mul_div_rounding_up(U256::MAX, U256::MAX, U256::MAX).unwrap(), U256::MAX);
    }

    #[test]
    fn test_mul_div_rounding_up_specific_cases() {
        let half_q128 = Q128 / U256::from(2);
        let one_and_a_half_q128 = Q128 * U256::from(3) / U256::from(2);
        assert_eq!(
            mul_div_rounding_up(Q128, half_q128, one_and_a_half_q128).unwrap(),
            Q128 / U256::from(3) + U256::from(1)
        );

        assert_eq!(
            mul_div_rounding_up(Q128, Q128 * U256::from(35), Q128 * U256::from(8)).unwrap(),
            Q128 * U256::from(4375) / U256::from(1000)
        );
    }

    #[test]
    fn test_narrowing() {
        assert_eq!(to_u128(U512::from(u128::MAX)).unwrap(), u128::MAX);
        assert!(to_u128(U512::from(u128::MAX) + U512::from(1)).is_err());
        assert_eq!(to_u256(U512::from(U256::MAX)).unwrap(), U256::MAX);
        assert!(to_u256(U512::from(U256::MAX) + U512::from(1)).is_err());
    }
}
