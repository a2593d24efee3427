pub mod bounds;
pub mod i129;

pub use bounds::Bounds;
pub use i129::{I129, from_signed_magnitude, to_signed_magnitude};
