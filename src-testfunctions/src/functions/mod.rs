//! Test function implementations organized by category

pub mod constrained;
pub mod multimodal;
pub mod unimodal;

pub use constrained::*;
pub use multimodal::*;
pub use unimodal::*;
