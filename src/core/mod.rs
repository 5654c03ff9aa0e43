//! Timing constants and the fixed-step frame clock shared by every screen.

#![allow(unused_imports)]

pub mod constants;
pub mod frame_clock;

pub use constants::*;
pub use frame_clock::FrameClock;
