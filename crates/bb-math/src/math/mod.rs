//! Core math modules.

pub mod beta;
pub mod beta_binomial;
pub mod stable;
