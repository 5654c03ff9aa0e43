//! Rocket mini-game data structures.

use crate::config::GameConfig;
use crate::core::FrameClock;

/// Session state. `Start` and `GameOver` wait for a tap; `Won` is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroState {
    Start,
    Playing,
    GameOver,
    Won,
}

/// A top + bottom segment pair with a passable gap between them.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Left edge (float for smooth scrolling).
    pub x: f64,
    /// Height of the top segment; the gap starts here.
    pub top_height: f64,
    /// Whether the rocket has flown past this obstacle (scored once).
    pub passed: bool,
}

impl Obstacle {
    pub fn new(x: f64, top_height: f64) -> Self {
        Self {
            x,
            top_height,
            passed: false,
        }
    }

    pub fn right(&self, config: &GameConfig) -> f64 {
        self.x + config.obstacle_width
    }

    pub fn gap_bottom(&self, config: &GameConfig) -> f64 {
        self.top_height + config.gap_size
    }

    /// True if the rocket's fixed column overlaps this obstacle.
    pub fn overlaps_bird(&self, config: &GameConfig) -> bool {
        config.bird_x + config.bird_size > self.x && config.bird_x < self.right(config)
    }

    /// True if a rocket at `bird_y` sits entirely inside the gap.
    pub fn gap_contains(&self, config: &GameConfig, bird_y: f64) -> bool {
        bird_y >= self.top_height && bird_y + config.bird_size <= self.gap_bottom(config)
    }

    /// True once the rocket's left edge is past the obstacle's right edge.
    pub fn is_behind_bird(&self, config: &GameConfig) -> bool {
        config.bird_x > self.right(config)
    }

    /// True once the obstacle has fully left the playfield on the left.
    pub fn is_offscreen(&self, config: &GameConfig) -> bool {
        self.right(config) <= 0.0
    }
}

/// One exclusively-owned session. Every per-tick update mutates this struct
/// in place, so all sub-steps of a tick see each other's results.
#[derive(Debug, Clone)]
pub struct IntroGame {
    pub config: GameConfig,
    pub state: IntroState,

    // Rocket
    /// Top edge in playfield units. 0 = ceiling.
    pub bird_y: f64,
    /// Units per tick, positive = downward.
    pub bird_velocity: f64,

    /// Left-to-right; insertion order is spatial order.
    pub obstacles: Vec<Obstacle>,

    pub score: u32,
    /// How many times a session has been started.
    pub attempts: u32,
    /// Ticks simulated in the current session.
    pub tick_count: u64,

    /// Tick subscription. Held only while `Playing`.
    pub(crate) clock: Option<FrameClock>,

    /// Time spent in `Won`, counted toward the completion delay.
    pub win_elapsed_ms: u64,
    /// Set once the completion event has been emitted.
    pub completion_sent: bool,
}

impl IntroGame {
    pub fn new(config: GameConfig) -> Self {
        let config = config.normalized();
        Self {
            bird_y: config.bird_start_y,
            bird_velocity: 0.0,
            obstacles: Vec::new(),
            score: 0,
            attempts: 0,
            tick_count: 0,
            clock: None,
            win_elapsed_ms: 0,
            completion_sent: false,
            state: IntroState::Start,
            config,
        }
    }

    /// Whether the per-frame tick subscription is currently held.
    pub fn is_subscribed(&self) -> bool {
        self.clock.is_some()
    }

    /// Switch state, acquiring the tick subscription on entering `Playing`
    /// and releasing it on any other state.
    pub(crate) fn enter(&mut self, state: IntroState) {
        self.state = state;
        if state == IntroState::Playing {
            self.clock = Some(FrameClock::new(self.config.tick_ms));
        } else {
            self.clock = None;
        }
    }

    /// The first obstacle of every session.
    pub fn initial_obstacle(&self) -> Obstacle {
        Obstacle::new(self.config.initial_obstacle_x, self.config.initial_top_height)
    }

    /// Rocket tilt for drawing, following velocity, clamped to ±25°.
    pub fn tilt_degrees(&self) -> f64 {
        (self.bird_velocity * 3.0).clamp(-25.0, 25.0)
    }
}
