//! New Year countdown library.
//!
//! The rocket mini-game, the countdown, the celebration with its fireworks,
//! and the screen sequencing that ties them together. Everything here is
//! terminal-agnostic except the key mapping in [`input`]; drawing lives in
//! the binary.

pub mod app;
pub mod celebration;
pub mod config;
pub mod core;
pub mod countdown;
pub mod fireworks;
pub mod input;
pub mod intro;
pub mod utils;

pub use app::{App, AppInput, Screen, ScreenKind};
pub use config::Config;
pub use crate::core::constants::*;
