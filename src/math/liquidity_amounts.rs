use crate::errors::MathError;
use crate::math::constants::Q128;
use crate::math::full_math::{div_rounding_up, mul_div_rounding_up, to_u128};
use crate::math::tick_math::tick_to_sqrt_ratio;
use crate::types::Bounds;
use alloy_primitives::{U256, U512};
use serde::{Deserialize, Serialize};

/// Token amounts needed to mint a position, both rounded up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amounts {
    pub amount0: u128,
    pub amount1: u128,
}

fn check_sqrt_ratios(sqrt_lower: U256, sqrt_upper: U256) -> Result<(), MathError> {
    if sqrt_lower >= sqrt_upper {
        return Err(MathError::InvalidSqrtRatioBounds {
            lower: sqrt_lower,
            upper: sqrt_upper,
        });
    }
    if sqrt_lower.is_zero() {
        return Err(MathError::DivisionByZero);
    }
    Ok(())
}

/// Amount of token0 backing `liquidity` between two sqrt ratios.
/// Computes `ceil(ceil((liquidity << 128) * (upper - lower) / upper) / lower)`.
pub fn amount0_for_liquidity(
    liquidity: u128,
    sqrt_lower: U256,
    sqrt_upper: U256,
) -> Result<u128, MathError> {
    check_sqrt_ratios(sqrt_lower, sqrt_upper)?;

    let numerator1: U256 = U256::from(liquidity) << 128;
    let numerator2 = sqrt_upper - sqrt_lower;
    let numerator: U512 = numerator1.widening_mul(numerator2);

    let div_one = div_rounding_up(numerator, U512::from(sqrt_upper))?;
    to_u128(div_rounding_up(div_one, U512::from(sqrt_lower))?)
}

/// Amount of token1 backing `liquidity` between two sqrt ratios.
/// Computes `ceil(liquidity * (upper - lower) / 2^128)`.
pub fn amount1_for_liquidity(
    liquidity: u128,
    sqrt_lower: U256,
    sqrt_upper: U256,
) -> Result<u128, MathError> {
    check_sqrt_ratios(sqrt_lower, sqrt_upper)?;

    let amount1 = mul_div_rounding_up(U256::from(liquidity), sqrt_upper - sqrt_lower, Q128)?;
    to_u128(U512::from(amount1))
}

/// Token amounts a position with `liquidity` over `bounds` requires at `current_tick`.
///
/// Regimes are picked by comparing ticks, not sqrt ratios, so only the sqrt ratios
/// that enter the formula are computed. The rounding matches the pool's mint, so a
/// deposit funded with these amounts is never short.
pub fn get_amounts_for_liquidity(
    current_tick: i32,
    bounds: Bounds,
    liquidity: u128,
) -> Result<Amounts, MathError> {
    bounds.validate()?;

    if current_tick < bounds.lower {
        tracing::trace!(current_tick, ?bounds, "Position below range, token0 only");
        Ok(Amounts {
            amount0: amount0_for_liquidity(
                liquidity,
                tick_to_sqrt_ratio(bounds.lower)?,
                tick_to_sqrt_ratio(bounds.upper)?,
            )?,
            amount1: 0,
        })
    } else if current_tick < bounds.upper {
        tracing::trace!(current_tick, ?bounds, "Position in range");
        let sqrt_current = tick_to_sqrt_ratio(current_tick)?;
        // current == lower leaves nothing on the token1 side
        let amount1 = if current_tick == bounds.lower {
            0
        } else {
            amount1_for_liquidity(liquidity, tick_to_sqrt_ratio(bounds.lower)?, sqrt_current)?
        };
        Ok(Amounts {
            amount0: amount0_for_liquidity(
                liquidity,
                sqrt_current,
                tick_to_sqrt_ratio(bounds.upper)?,
            )?,
            amount1,
        })
    } else {
        tracing::trace!(current_tick, ?bounds, "Position above range, token1 only");
        Ok(Amounts {
            amount0: 0,
            amount1: amount1_for_liquidity(
                liquidity,
                tick_to_sqrt_ratio(bounds.lower)?,
                tick_to_sqrt_ratio(bounds.upper)?,
            )?,
        })
    }
}
