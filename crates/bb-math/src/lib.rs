//! Beta-binomial explorer math utilities.

pub mod math;

pub use math::beta;
pub use math::beta_binomial;
pub use math::stable::*;
