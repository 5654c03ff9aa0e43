//! Fireworks simulation: spawning bursts, integrating particles, drawing.

use super::types::{Fireworks, Particle, BACKGROUND, PALETTE};
use rand::Rng;
use std::f64::consts::TAU;

/// Advance the show by `dt_ms` of wall time. Returns the number of ticks run.
pub fn advance<R: Rng>(fireworks: &mut Fireworks, dt_ms: u64, rng: &mut R) -> u32 {
    let due = fireworks.clock.advance(dt_ms);
    for _ in 0..due {
        step(fireworks, rng);
    }
    due
}

/// Single fireworks tick.
///
/// Wash, maybe spawn, integrate and draw every particle, then drop the
/// ones whose lifetime ran out.
pub fn step<R: Rng>(fireworks: &mut Fireworks, rng: &mut R) {
    if !fireworks.is_active() {
        return;
    }

    // 1. Fade what was drawn last tick
    fireworks
        .surface
        .wash(BACKGROUND, fireworks.config.trail_alpha);

    // 2. Random burst, biased to the upper half of the sky
    if rng.gen_bool(fireworks.config.spawn_chance) {
        let x = rng.gen_range(0.0..fireworks.surface.width() as f64);
        let y = rng.gen_range(0.0..fireworks.surface.height() as f64 * 0.5);
        spawn_burst(fireworks, x, y, rng);
    }

    // 3. Integrate and draw
    let config = &fireworks.config;
    let surface = &mut fireworks.surface;
    for p in &mut fireworks.particles {
        p.x += p.vx;
        p.y += p.vy;
        p.vy += config.gravity;
        p.life = p.life.saturating_sub(1);
        p.size *= config.shrink;
        surface.fill_disc(p.x, p.y, p.size, p.color);
    }

    // 4. Expire
    fireworks.particles.retain(|p| p.life > 0);
}

/// Spawn one burst at (`x`, `y`). The burst is truncated so the live
/// particle count never exceeds `max_particles`. Returns how many spawned.
pub fn spawn_burst<R: Rng>(fireworks: &mut Fireworks, x: f64, y: f64, rng: &mut R) -> usize {
    let config = &fireworks.config;
    let room = config
        .max_particles
        .saturating_sub(fireworks.particles.len());
    let count = config.burst_size.min(room);

    for _ in 0..count {
        let angle = rng.gen_range(0.0..TAU);
        let speed = rng.gen_range(config.speed_min..=config.speed_max);
        fireworks.particles.push(Particle {
            x,
            y,
            vx: angle.cos() * speed,
            vy: angle.sin() * speed,
            color: PALETTE[rng.gen_range(0..PALETTE.len())],
            life: config.lifetime,
            size: rng.gen_range(config.size_min..=config.size_max),
        });
    }

    if count > 0 {
        fireworks.bursts += 1;
        log::debug!(
            "Burst #{} at ({:.1}, {:.1}): {} particles, {} live",
            fireworks.bursts,
            x,
            y,
            count,
            fireworks.particles.len()
        );
    }
    count
}
