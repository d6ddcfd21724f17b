//! Utils Module
pub mod rounding;
pub mod timestamp;

pub use rounding::{round_to, round_whole};
