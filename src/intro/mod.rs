//! Rocket mini-game ("Misi Menuju 2026").
//!
//! The player keeps a rocket airborne and steers it through scrolling
//! obstacle gaps by tapping. Gravity pulls it down every tick; touching the
//! ceiling, the floor or an obstacle ends the attempt, and passing enough
//! obstacles wins the session and unlocks the countdown.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
