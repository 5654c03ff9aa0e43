//! Runtime configuration.
//!
//! Loaded from `~/.newyear/config.json`. Every field has a default, so the
//! file may contain only the values a player wants to override.

use crate::core::constants::{
    CONFIG_FILE_NAME, COUNTDOWN_INTERVAL_MS, COUNTDOWN_REVEAL_MS, COUNTDOWN_START,
    FIREWORKS_MOTION_SCALE, FIREWORKS_SIZE_SCALE, TICK_MS, WIN_DELAY_MS,
    WISH_CHAR_INTERVAL_MS,
};
use crate::utils::persistence::{app_path, load_json_or_default, save_json};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;

/// Tuning for the rocket mini-game. Units are virtual playfield units and
/// ticks; the renderer scales the playfield to whatever the terminal offers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: f64,
    pub height: f64,
    pub bird_x: f64,
    pub bird_size: f64,
    pub bird_start_y: f64,
    /// Velocity added per tick (positive = downward).
    pub gravity: f64,
    /// Velocity set on jump (negative = upward). Overrides, never adds.
    pub jump_impulse: f64,
    pub scroll_speed: f64,
    pub obstacle_width: f64,
    pub gap_size: f64,
    /// Minimum height of the top and bottom segments.
    pub min_segment: f64,
    /// A new obstacle spawns once the rightmost one is this far left of the right edge.
    pub spawn_distance: f64,
    pub initial_obstacle_x: f64,
    pub initial_top_height: f64,
    pub win_score: u32,
    pub win_delay_ms: u64,
    pub tick_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            bird_x: 50.0,
            bird_size: 40.0,
            bird_start_y: 300.0,
            gravity: 0.6,
            jump_impulse: -8.0,
            scroll_speed: 3.5,
            obstacle_width: 60.0,
            gap_size: 200.0,
            min_segment: 50.0,
            spawn_distance: 300.0,
            initial_obstacle_x: 500.0,
            initial_top_height: 200.0,
            win_score: 5,
            win_delay_ms: WIN_DELAY_MS,
            tick_ms: TICK_MS,
        }
    }
}

impl GameConfig {
    /// Clamp the values so the playfield invariants hold: the gap plus both
    /// minimum segments fits in the playfield, the bird fits through the
    /// gap, and the starting positions are inside their valid ranges.
    pub fn normalized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.height > 0.0) {
            self.height = defaults.height;
        }
        if !(self.width > 0.0) {
            self.width = defaults.width;
        }
        self.bird_size = self.bird_size.clamp(1.0, self.height);
        self.min_segment = self.min_segment.max(0.0);
        self.gap_size = self.gap_size.max(self.bird_size);
        if self.gap_size > self.height {
            self.gap_size = self.height;
        }
        if self.gap_size + 2.0 * self.min_segment > self.height {
            self.min_segment = (self.height - self.gap_size) / 2.0;
        }
        self.initial_top_height = self
            .initial_top_height
            .clamp(self.min_top(), self.max_top());
        self.bird_start_y = self.bird_start_y.clamp(0.0, self.max_bird_y());
        self.spawn_distance = self.spawn_distance.max(self.obstacle_width);
        self.win_score = self.win_score.max(1);
        self.tick_ms = self.tick_ms.max(1);
        self
    }

    /// Lowest legal top-segment height.
    pub fn min_top(&self) -> f64 {
        self.min_segment
    }

    /// Highest legal top-segment height.
    pub fn max_top(&self) -> f64 {
        (self.height - self.gap_size - self.min_segment).max(self.min_segment)
    }

    /// Largest vertical position the bird can occupy (floor contact).
    pub fn max_bird_y(&self) -> f64 {
        self.height - self.bird_size
    }
}

/// Tuning for the background fireworks. Units are surface pixels and ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FireworksConfig {
    pub enabled: bool,
    /// Probability per tick that a burst spawns.
    pub spawn_chance: f64,
    pub burst_size: usize,
    /// Hard cap on live particles.
    pub max_particles: usize,
    pub lifetime: u32,
    pub speed_min: f64,
    pub speed_max: f64,
    pub size_min: f64,
    pub size_max: f64,
    pub gravity: f64,
    /// Multiplicative size factor applied every tick.
    pub shrink: f64,
    /// Alpha of the background wash that produces the trails.
    pub trail_alpha: f64,
    pub tick_ms: u64,
}

impl Default for FireworksConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            spawn_chance: 0.05,
            burst_size: 60,
            max_particles: 1500,
            lifetime: 100,
            // Canvas-pixel values 1..5, 1..4 and 0.05, scaled to the surface
            speed_min: 1.0 * FIREWORKS_MOTION_SCALE,
            speed_max: 5.0 * FIREWORKS_MOTION_SCALE,
            size_min: 1.0 * FIREWORKS_SIZE_SCALE,
            size_max: 4.0 * FIREWORKS_SIZE_SCALE,
            gravity: 0.05 * FIREWORKS_MOTION_SCALE,
            shrink: 0.98,
            trail_alpha: 0.2,
            tick_ms: TICK_MS,
        }
    }
}

impl FireworksConfig {
    pub fn normalized(mut self) -> Self {
        self.spawn_chance = self.spawn_chance.clamp(0.0, 1.0);
        self.trail_alpha = self.trail_alpha.clamp(0.0, 1.0);
        self.shrink = self.shrink.clamp(0.0, 1.0);
        if self.speed_max < self.speed_min {
            std::mem::swap(&mut self.speed_min, &mut self.speed_max);
        }
        if self.size_max < self.size_min {
            std::mem::swap(&mut self.size_min, &mut self.size_max);
        }
        self.size_min = self.size_min.max(0.0);
        self.tick_ms = self.tick_ms.max(1);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountdownConfig {
    pub start: u32,
    pub interval_ms: u64,
    /// How long the year reveal stays up after the count reaches zero.
    pub reveal_ms: u64,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            start: COUNTDOWN_START,
            interval_ms: COUNTDOWN_INTERVAL_MS,
            reveal_ms: COUNTDOWN_REVEAL_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CelebrationConfig {
    /// Year on the banner. `None` picks the upcoming year from the clock.
    pub year: Option<i32>,
    pub wish_char_ms: u64,
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        Self {
            year: None,
            wish_char_ms: WISH_CHAR_INTERVAL_MS,
        }
    }
}

impl CelebrationConfig {
    pub fn resolved_year(&self, today: NaiveDate) -> i32 {
        self.year.unwrap_or_else(|| celebrated_year(today))
    }
}

/// The year being welcomed: during January the one that just began,
/// otherwise the next one.
pub fn celebrated_year(today: NaiveDate) -> i32 {
    if today.month() == 1 {
        today.year()
    } else {
        today.year() + 1
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub game: GameConfig,
    pub fireworks: FireworksConfig,
    pub countdown: CountdownConfig,
    pub celebration: CelebrationConfig,
}

impl Config {
    pub fn path() -> io::Result<PathBuf> {
        app_path(CONFIG_FILE_NAME)
    }

    /// Load from `~/.newyear/config.json`, falling back to defaults.
    pub fn load() -> Self {
        match Self::path() {
            Ok(path) => {
                let config: Config = load_json_or_default(&path);
                log::info!("Configuration loaded from {}", path.display());
                config.normalized()
            }
            Err(e) => {
                log::warn!("No config directory ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Write the default configuration and return where it went.
    pub fn write_default() -> io::Result<PathBuf> {
        let path = Self::path()?;
        save_json(&path, &Self::default())?;
        Ok(path)
    }

    pub fn normalized(self) -> Self {
        Self {
            game: self.game.normalized(),
            fireworks: self.fireworks.normalized(),
            countdown: CountdownConfig {
                start: self.countdown.start.max(1),
                interval_ms: self.countdown.interval_ms.max(1),
                reveal_ms: self.countdown.reveal_ms.max(1),
            },
            celebration: CelebrationConfig {
                wish_char_ms: self.celebration.wish_char_ms.max(1),
                ..self.celebration
            },
        }
    }
}
