pub mod errors;
pub mod math;
pub mod types;

pub use errors::MathError;

pub use math::fee_math::{
    compute_protocol_fee, fee_fraction_from_bips, fee_fraction_from_decimal,
};
pub use math::liquidity_amounts::{
    Amounts, amount0_for_liquidity, amount1_for_liquidity, get_amounts_for_liquidity,
};
pub use math::tick_math::{sqrt_ratio_to_tick, tick_to_sqrt_ratio};
pub use types::{Bounds, I129, from_signed_magnitude, to_signed_magnitude};
