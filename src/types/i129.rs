use crate::errors::MathError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::Neg;

/// A sign-magnitude integer as exchanged with the pool contracts.
///
/// A zero magnitude is zero regardless of `sign`; equality, ordering and
/// hashing all operate on the decoded value.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct I129 {
    pub mag: u128,
    pub sign: bool,
}

impl I129 {
    pub const ZERO: Self = Self { mag: 0, sign: false };

    pub const fn new(mag: u128, sign: bool) -> Self {
        Self { mag, sign }
    }

    /// True only for strictly negative values; negative zero is not negative.
    pub const fn is_negative(&self) -> bool {
        self.sign && self.mag != 0
    }

    pub const fn is_zero(&self) -> bool {
        self.mag == 0
    }
}

/// Encodes `x` as `{ mag: |x|, sign: x < 0 }`.
pub fn to_signed_magnitude(x: i128) -> I129 {
    I129 {
        mag: x.unsigned_abs(),
        sign: x < 0,
    }
}

/// Decodes a sign-magnitude value, failing if it does not fit in an i128.
pub fn from_signed_magnitude(value: I129) -> Result<i128, MathError> {
    if value.is_negative() {
        0i128
            .checked_sub_unsigned(value.mag)
            .ok_or(MathError::Overflow("magnitude does not fit in i128"))
    } else {
        i128::try_from(value.mag).map_err(|_| MathError::Overflow("magnitude does not fit in i128"))
    }
}

impl From<i128> for I129 {
    fn from(x: i128) -> Self {
        to_signed_magnitude(x)
    }
}

impl From<i32> for I129 {
    fn from(x: i32) -> Self {
        to_signed_magnitude(x.into())
    }
}

impl TryFrom<I129> for i128 {
    type Error = MathError;

    fn try_from(value: I129) -> Result<Self, Self::Error> {
        from_signed_magnitude(value)
    }
}

impl TryFrom<I129> for i32 {
    type Error = MathError;

    fn try_from(value: I129) -> Result<Self, Self::Error> {
        let wide = from_signed_magnitude(value)?;
        i32::try_from(wide).map_err(|_| MathError::Overflow("magnitude does not fit in i32"))
    }
}

impl Neg for I129 {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            mag: self.mag,
            sign: !self.sign,
        }
    }
}

impl Ord for I129 {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (false, false) => self.mag.cmp(&other.mag),
            (true, true) => other.mag.cmp(&self.mag),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
        }
    }
}

impl PartialOrd for I129 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for I129 {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for I129 {}

impl Hash for I129 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_negative().hash(state);
        self.mag.hash(state);
    }
}
