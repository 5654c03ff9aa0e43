//! Background fireworks.
//!
//! Random bursts of particles drawn onto a small RGB surface that is washed
//! toward the background color every tick, which leaves fading trails.

pub mod logic;
pub mod surface;
pub mod types;

pub use logic::*;
pub use surface::*;
pub use types::*;
