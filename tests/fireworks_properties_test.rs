//! Long-running properties of the fireworks show.

use newyear::config::FireworksConfig;
use newyear::fireworks::{self, Fireworks, BACKGROUND, PALETTE};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(2026)
}

fn busy_config() -> FireworksConfig {
    FireworksConfig {
        spawn_chance: 1.0,
        max_particles: 300,
        ..FireworksConfig::default()
    }
}

#[test]
fn test_particle_count_never_exceeds_cap() {
    let mut rng = test_rng();
    let mut show = Fireworks::new(busy_config(), 120, 60);

    for _ in 0..1000 {
        fireworks::step(&mut show, &mut rng);
        assert!(show.particles.len() <= show.config.max_particles);
    }
    assert!(show.bursts > 0);
}

#[test]
fn test_life_and_size_never_increase() {
    let mut rng = test_rng();
    let mut show = Fireworks::new(
        FireworksConfig {
            spawn_chance: 0.0,
            ..FireworksConfig::default()
        },
        120,
        60,
    );
    fireworks::spawn_burst(&mut show, 60.0, 20.0, &mut rng);
    let lifetime = show.config.lifetime;

    for _ in 0..lifetime {
        let before: Vec<(u32, f64)> = show.particles.iter().map(|p| (p.life, p.size)).collect();
        fireworks::step(&mut show, &mut rng);
        // No spawns, and every particle shares one lifetime, so the survivors
        // are the same particles in the same order
        if show.particles.is_empty() {
            break;
        }
        assert_eq!(show.particles.len(), before.len());
        for (p, (life, size)) in show.particles.iter().zip(before) {
            assert_eq!(p.life, life - 1);
            assert!(p.size <= size);
            assert!(PALETTE.contains(&p.color));
        }
    }

    assert!(show.particles.is_empty());
}

#[test]
fn test_sky_fades_back_after_show_ends() {
    let mut rng = test_rng();
    let mut show = Fireworks::new(
        FireworksConfig {
            spawn_chance: 0.0,
            ..FireworksConfig::default()
        },
        40,
        20,
    );
    fireworks::spawn_burst(&mut show, 20.0, 10.0, &mut rng);

    // Particles die, then the wash brings every pixel back to the background
    for _ in 0..(show.config.lifetime + 200) {
        fireworks::step(&mut show, &mut rng);
    }

    assert!(show.particles.is_empty());
    for y in 0..20 {
        for x in 0..40 {
            assert_eq!(show.surface.get(x, y), Some(BACKGROUND));
        }
    }
}

#[test]
fn test_disabled_show_stays_dark() {
    let mut rng = test_rng();
    let mut show = Fireworks::new(
        FireworksConfig {
            enabled: false,
            ..busy_config()
        },
        80,
        40,
    );

    let ticks = fireworks::advance(&mut show, 1000, &mut rng);
    assert!(ticks > 0);
    assert!(show.particles.is_empty());
    assert_eq!(show.bursts, 0);
}

#[test]
fn test_empty_surface_is_a_no_op_until_resized() {
    let mut rng = test_rng();
    let mut show = Fireworks::new(busy_config(), 0, 0);
    assert!(!show.is_active());

    for _ in 0..50 {
        fireworks::step(&mut show, &mut rng);
    }
    assert!(show.particles.is_empty());

    show.resize(80, 40);
    assert!(show.is_active());
    fireworks::step(&mut show, &mut rng);
    assert!(!show.particles.is_empty());
}
