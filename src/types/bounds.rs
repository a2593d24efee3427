use crate::errors::MathError;
use crate::math::constants::{MAX_TICK, MIN_TICK};
use crate::types::I129;
use serde::{Deserialize, Serialize};

/// The half-open tick interval `[lower, upper)` over which a position is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    pub lower: i32,
    pub upper: i32,
}

impl Bounds {
    pub fn new(lower: i32, upper: i32) -> Result<Self, MathError> {
        let bounds = Self { lower, upper };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Checks `lower < upper` and that both ticks are in range.
    pub fn validate(&self) -> Result<(), MathError> {
        if self.lower >= self.upper {
            return Err(MathError::InvalidBounds {
                lower: self.lower,
                upper: self.upper,
            });
        }
        for tick in [self.lower, self.upper] {
            if !(MIN_TICK..=MAX_TICK).contains(&tick) {
                return Err(MathError::TickOutOfRange(tick.into()));
            }
        }
        Ok(())
    }

    /// Whether the current tick lies inside the active interval.
    pub fn contains(&self, tick: i32) -> bool {
        self.lower <= tick && tick < self.upper
    }

    /// Decodes bounds received as a pair of sign-magnitude ticks.
    pub fn from_wire(lower: I129, upper: I129) -> Result<Self, MathError> {
        Self::new(i32::try_from(lower)?, i32::try_from(upper)?)
    }

    pub fn to_wire(&self) -> (I129, I129) {
        (self.lower.into(), self.upper.into())
    }
}
