//! Fireworks data structures.

use crate::config::FireworksConfig;
use crate::core::FrameClock;

use super::surface::Surface;

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Night-sky background the trails fade into (slate-900).
pub const BACKGROUND: Rgb = Rgb::new(15, 23, 42);

/// Burst colors.
pub const PALETTE: [Rgb; 5] = [
    Rgb::new(0xFF, 0x00, 0x55), // pink
    Rgb::new(0xFF, 0xDD, 0x00), // gold
    Rgb::new(0x00, 0xFF, 0xDD), // aqua
    Rgb::new(0xAA, 0x00, 0xFF), // violet
    Rgb::new(0xFF, 0xFF, 0xFF), // white
];

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub color: Rgb,
    /// Ticks left to live. Never increases.
    pub life: u32,
    /// Disc radius in surface pixels. Never increases.
    pub size: f64,
}

/// The whole fireworks show: particles, the surface they are drawn on, and
/// the tick subscription held for as long as the show exists.
#[derive(Debug, Clone)]
pub struct Fireworks {
    pub config: FireworksConfig,
    pub particles: Vec<Particle>,
    pub surface: Surface,
    pub(crate) clock: FrameClock,
    /// Bursts spawned since creation.
    pub bursts: u64,
}

impl Fireworks {
    /// Create a show on a `width` × `height` pixel surface.
    pub fn new(config: FireworksConfig, width: usize, height: usize) -> Self {
        let config = config.normalized();
        Self {
            clock: FrameClock::new(config.tick_ms),
            particles: Vec::new(),
            surface: Surface::new(width, height, BACKGROUND),
            bursts: 0,
            config,
        }
    }

    /// False when there is nothing to draw on or the show is switched off.
    /// Ticks are then silent no-ops.
    pub fn is_active(&self) -> bool {
        self.config.enabled && self.surface.is_drawable()
    }

    /// Follow a viewport size change. Particles keep their positions.
    pub fn resize(&mut self, width: usize, height: usize) {
        if (width, height) != (self.surface.width(), self.surface.height()) {
            self.surface.resize(width, height);
        }
    }
}
