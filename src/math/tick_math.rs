use crate::errors::MathError;
use crate::math::constants::{
    MAX_SQRT_RATIO, MAX_TICK, MAX_TICK_MAGNITUDE, MIN_SQRT_RATIO, MIN_TICK, Q128,
    TICK_MULTIPLIERS,
};
use crate::math::full_math::mul_shift;
use crate::types::I129;
use alloy_primitives::U256;

/// Calculates sqrt(1.000001^tick) * 2^128 from a given tick.
///
/// The set bits of `|tick|` select multipliers of `1 / sqrt(1.000001)^(2^i)`,
/// which are chained with 512-bit multiply-and-shift. The accumulated ratio is
/// the reciprocal of the answer for positive ticks, so it is inverted at the end.
pub fn tick_to_sqrt_ratio(tick: i32) -> Result<U256, MathError> {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return Err(MathError::TickOutOfRange(tick.into()));
    }

    let abs_tick = tick.unsigned_abs();
    let mut ratio = Q128;
    let mut seeded = false;

    for (bit, multiplier) in TICK_MULTIPLIERS.iter().enumerate() {
        if abs_tick >> bit == 0 {
            break;
        }
        if abs_tick & (1 << bit) == 0 {
            continue;
        }
        ratio = if seeded {
            mul_shift(ratio, *multiplier, 128)?
        } else {
            *multiplier
        };
        seeded = true;
    }

    if tick > 0 {
        ratio = U256::MAX / ratio;
    }

    Ok(ratio)
}

/// Same as [`tick_to_sqrt_ratio`] for a tick received in sign-magnitude form.
pub fn tick_to_sqrt_ratio_wire(tick: I129) -> Result<U256, MathError> {
    if tick.mag > MAX_TICK_MAGNITUDE as u128 {
        let mag = i64::try_from(tick.mag).unwrap_or(i64::MAX);
        return Err(MathError::TickOutOfRange(if tick.is_negative() { -mag } else { mag }));
    }
    tick_to_sqrt_ratio(i32::try_from(tick)?)
}

/// Returns the greatest tick whose sqrt ratio is less than or equal to `sqrt_ratio`.
pub fn sqrt_ratio_to_tick(sqrt_ratio: U256) -> Result<i32, MathError> {
    if !(MIN_SQRT_RATIO..=MAX_SQRT_RATIO).contains(&sqrt_ratio) {
        return Err(MathError::SqrtRatioOutOfRange(sqrt_ratio));
    }

    // invariant: tick_to_sqrt_ratio(low) <= sqrt_ratio
    let (mut low, mut high) = (MIN_TICK, MAX_TICK);
    while low < high {
        let mid = low + (high - low + 1) / 2;
        if tick_to_sqrt_ratio(mid)? <= sqrt_ratio {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    Ok(low)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_tick_to_sqrt_ratio_bounds() {
        assert_eq!(
            tick_to_sqrt_ratio(MIN_TICK - 1),
            Err(MathError::TickOutOfRange(MIN_TICK as i64 - 1))
        );
        assert_eq!(
            tick_to_sqrt_ratio(MAX_TICK + 1),
            Err(MathError::TickOutOfRange(MAX_TICK as i64 + 1))
        );
        assert!(tick_to_sqrt_ratio(i32::MIN).is_err());
        assert!(tick_to_sqrt_ratio(i32::MAX).is_err());
    }

    #[test]
    fn test_tick_to_sqrt_ratio_zero_is_one() {
        assert_eq!(tick_to_sqrt_ratio(0).unwrap(), Q128);
    }

    #[test]
    fn test_tick_to_sqrt_ratio_min_max() {
        assert_eq!(tick_to_sqrt_ratio(MIN_TICK).unwrap(), MIN_SQRT_RATIO);
        assert_eq!(tick_to_sqrt_ratio(MAX_TICK).unwrap(), MAX_SQRT_RATIO);
    }

    #[test]
    fn test_tick_to_sqrt_ratio_specific_values() {
        assert_eq!(tick_to_sqrt_ratio(-1).unwrap(), TICK_MULTIPLIERS[0]);
        assert_eq!(
            tick_to_sqrt_ratio(1).unwrap(),
            U256::from_str("340282537062079388658008856451427006219").unwrap()
        );
        assert_eq!(
            tick_to_sqrt_ratio(1_000_000).unwrap(),
            U256::from_str("561030636129153856592777659729523183729").unwrap()
        );
        assert_eq!(
            tick_to_sqrt_ratio(-1_000_000).unwrap(),
            U256::from_str("206391740095027370700312310531588921767").unwrap()
        );
    }

    #[test]
    fn test_tick_to_sqrt_ratio_wire() {
        assert_eq!(tick_to_sqrt_ratio_wire(I129::new(0, true)).unwrap(), Q128);
        assert_eq!(tick_to_sqrt_ratio_wire(I129::new(1, true)).unwrap(), TICK_MULTIPLIERS[0]);
        assert_eq!(
            tick_to_sqrt_ratio_wire(I129::new(MAX_TICK_MAGNITUDE as u128, false)).unwrap(),
            MAX_SQRT_RATIO
        );
        assert_eq!(
            tick_to_sqrt_ratio_wire(I129::new(MAX_TICK_MAGNITUDE as u128 + 1, true)),
            Err(MathError::TickOutOfRange(-(MAX_TICK_MAGNITUDE as i64) - 1))
        );
        assert!(tick_to_sqrt_ratio_wire(I129::new(u128::MAX, false)).is_err());
    }

    #[test]
    fn test_sqrt_ratio_to_tick_bounds() {
        assert_eq!(
            sqrt_ratio_to_tick(MIN_SQRT_RATIO - U256::from(1)),
            Err(MathError::SqrtRatioOutOfRange(MIN_SQRT_RATIO - U256::from(1)))
        );
        assert!(sqrt_ratio_to_tick(MAX_SQRT_RATIO + U256::from(1)).is_err());
        assert_eq!(sqrt_ratio_to_tick(MIN_SQRT_RATIO).unwrap(), MIN_TICK);
        assert_eq!(sqrt_ratio_to_tick(MAX_SQRT_RATIO).unwrap(), MAX_TICK);
    }

    #[test]
    fn test_sqrt_ratio_to_tick_between_ticks() {
        assert_eq!(sqrt_ratio_to_tick(Q128).unwrap(), 0);
        assert_eq!(sqrt_ratio_to_tick(Q128 + U256::from(1)).unwrap(), 0);
        assert_eq!(sqrt_ratio_to_tick(Q128 - U256::from(1)).unwrap(), -1);
    }
}
