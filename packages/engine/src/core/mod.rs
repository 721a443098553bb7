//! Core building blocks shared by every system: math, randomness, logging.

#[macro_use]
pub mod utils;
pub mod math;

pub use math::Vec3;
