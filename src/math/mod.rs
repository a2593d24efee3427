pub mod constants;
pub mod fee_math;
pub mod full_math;
pub mod liquidity_amounts;
pub mod price;
pub mod table_gen;
pub mod tick_math;
pub mod utils;
