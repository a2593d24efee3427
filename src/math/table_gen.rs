//! Offline generator for the tick multiplier table in [`crate::math::constants`].
//!
//! Runs at 1024 bits of working precision (about 308 decimal digits), far more
//! than the 128 fractional bits the constants keep. Regenerating with the same
//! parameters must reproduce the checked-in table exactly.

use crate::errors::MathError;
use crate::math::utils::{integer_to_u256, u256_to_integer};
use alloy_primitives::U256;
use rug::Float;
use rug::float::Constant;
use serde::{Deserialize, Serialize};

pub const GENERATION_PRECISION: u32 = 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableParams {
    /// Price multiplier per tick, as a decimal string.
    pub base: String,
    /// Fractional bits of the emitted constants.
    pub fixed_point_radix: u32,
    /// The table covers sqrt ratios up to `2^max_ratio_log2` in price terms.
    pub max_ratio_log2: u32,
}

impl TableParams {
    pub fn canonical() -> Self {
        Self {
            base: "1.000001".to_string(),
            fixed_point_radix: 128,
            max_ratio_log2: 128,
        }
    }
}

impl Default for TableParams {
    fn default() -> Self {
        Self::canonical()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickTable {
    pub max_tick_magnitude: i32,
    /// `multipliers[i] = round(2^radix / sqrt(base)^(2^i))`
    pub multipliers: Vec<U256>,
}

impl TickTable {
    pub fn iterations(&self) -> usize {
        self.multipliers.len()
    }

    /// `(bit, multiplier)` pairs in increasing bit order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, U256)> + '_ {
        self.multipliers.iter().copied().enumerate()
    }
}

fn invalid(reason: impl Into<String>) -> MathError {
    MathError::InvalidTableParams(reason.into())
}

pub fn generate(params: &TableParams) -> Result<TickTable, MathError> {
    if params.fixed_point_radix == 0 || params.fixed_point_radix > 128 {
        return Err(invalid(format!(
            "fixed point radix {} must be within 1..=128",
            params.fixed_point_radix
        )));
    }
    if params.max_ratio_log2 == 0 {
        return Err(invalid("max ratio must be above 1"));
    }

    let base = Float::parse(&params.base)
        .map(|parsed| Float::with_val(GENERATION_PRECISION, parsed))
        .map_err(|e| invalid(format!("base {:?}: {e}", params.base)))?;
    if !base.is_finite() || base <= 1 {
        return Err(invalid(format!("base {:?} must be finite and above 1", params.base)));
    }

    let ln_max_ratio = Float::with_val(GENERATION_PRECISION, Constant::Log2) * params.max_ratio_log2;
    let tick_of_max_ratio = ln_max_ratio / Float::with_val(GENERATION_PRECISION, base.ln_ref());

    let max_tick_magnitude = tick_of_max_ratio
        .clone()
        .floor()
        .to_integer()
        .and_then(|magnitude| magnitude.to_i32())
        .ok_or_else(|| invalid("max tick magnitude does not fit in an i32"))?;
    let iterations = tick_of_max_ratio
        .log2()
        .ceil()
        .to_integer()
        .and_then(|n| n.to_u32())
        .ok_or_else(|| invalid("iteration count out of range"))?;

    tracing::info!(
        base = %params.base,
        radix = params.fixed_point_radix,
        max_tick_magnitude,
        iterations,
        "Generating tick multiplier table"
    );

    let one = Float::with_val(GENERATION_PRECISION, 1u32) << params.fixed_point_radix;
    let mut multiplier = base.sqrt();
    let mut multipliers = Vec::with_capacity(iterations as usize);

    for bit in 0..iterations {
        if bit > 0 {
            multiplier.square_mut();
        }
        let inverse = Float::with_val(GENERATION_PRECISION, &one / &multiplier).round();
        let rounded = inverse
            .to_integer()
            .ok_or_else(|| invalid(format!("multiplier {bit} is not finite")))?;
        let value = integer_to_u256(&rounded)?;
        tracing::debug!(bit, multiplier = %value, "Generated tick multiplier");
        multipliers.push(value);
    }

    Ok(TickTable {
        max_tick_magnitude,
        multipliers,
    })
}

/// Renders a table as the generated block of `math/constants.rs`.
pub fn render_table(params: &TableParams, table: &TickTable) -> String {
    let radix = params.fixed_point_radix;
    let mut lines = vec![
        format!(
            "// Generated by `tick-table` from base = {}, fixed point radix = {radix}, max ratio = 2^{}.",
            params.base, params.max_ratio_log2
        ),
        "// Regenerate and re-run the tick math tests whenever any of those change.".to_string(),
        format!("pub const MAX_TICK_MAGNITUDE: i32 = {};", table.max_tick_magnitude),
        format!("pub const TICK_TABLE_SIZE: usize = {};", table.iterations()),
        format!(
            "/// `round(2^{radix} / sqrt({})^(2^i))` for bit `i` of the tick magnitude.",
            params.base
        ),
        "pub const TICK_MULTIPLIERS: [U256; TICK_TABLE_SIZE] = [".to_string(),
    ];
    lines.extend(table.entries().map(|(_, multiplier)| {
        format!("    uint!(0x{}_U256),", u256_to_integer(multiplier).to_string_radix(16))
    }));
    lines.push("];".to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
