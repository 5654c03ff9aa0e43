//! End-to-end sessions of the rocket mini-game driven through the public
//! input and tick functions, with seeded ChaCha8Rng for determinism.

use newyear::config::GameConfig;
use newyear::intro::{self, IntroEvent, IntroGame, IntroInput, IntroState};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

/// Playfield where the gap has exactly one legal position, so a simple
/// hover autopilot can always fly through.
fn narrow_config() -> GameConfig {
    GameConfig {
        height: 300.0,
        gap_size: 200.0,
        min_segment: 50.0,
        bird_start_y: 120.0,
        initial_top_height: 50.0,
        ..GameConfig::default()
    }
}

/// Tap whenever the rocket sinks below the hover line. Keeps it roughly
/// between y = 90 and y = 150, inside the gap at [50, 250].
fn autopilot_tick(game: &mut IntroGame, rng: &mut ChaCha8Rng) -> Option<IntroEvent> {
    if game.bird_y > 140.0 && game.bird_velocity >= 0.0 {
        intro::process_input(game, IntroInput::Activate);
    }
    intro::step(game, rng)
}

#[test]
fn test_autopilot_wins_narrow_playfield() {
    let mut rng = test_rng();
    let mut game = IntroGame::new(narrow_config());
    assert_eq!(game.config.min_top(), game.config.max_top());

    let started = intro::process_input(&mut game, IntroInput::Activate);
    assert_eq!(started, Some(IntroEvent::Started { attempt: 1 }));

    let mut events = Vec::new();
    for _ in 0..2000 {
        if let Some(event) = autopilot_tick(&mut game, &mut rng) {
            events.push(event);
        }
        if game.state != IntroState::Playing {
            break;
        }
    }

    assert_eq!(events, vec![IntroEvent::Won { score: 5 }]);
    assert_eq!(game.state, IntroState::Won);
    assert_eq!(game.score, 5);
    assert!(!game.is_subscribed());
}

#[test]
fn test_every_spawned_gap_is_the_only_legal_one() {
    let mut rng = test_rng();
    let mut game = IntroGame::new(narrow_config());
    intro::process_input(&mut game, IntroInput::Activate);

    for _ in 0..400 {
        autopilot_tick(&mut game, &mut rng);
        for obstacle in &game.obstacles {
            assert_eq!(obstacle.top_height, 50.0);
        }
    }
}

#[test]
fn test_completion_only_after_win_delay() {
    let mut rng = test_rng();
    let mut game = IntroGame::new(narrow_config());
    intro::process_input(&mut game, IntroInput::Activate);
    while game.state == IntroState::Playing {
        autopilot_tick(&mut game, &mut rng);
        assert!(game.tick_count < 2000, "autopilot never won");
    }
    assert_eq!(game.state, IntroState::Won);

    // Taps after the win change nothing
    assert_eq!(intro::process_input(&mut game, IntroInput::Activate), None);

    assert!(intro::advance(&mut game, 500, &mut rng).is_empty());
    assert!(intro::advance(&mut game, 499, &mut rng).is_empty());
    assert_eq!(
        intro::advance(&mut game, 1, &mut rng),
        vec![IntroEvent::Completed]
    );
    assert!(intro::advance(&mut game, 5000, &mut rng).is_empty());
}

#[test]
fn test_idle_rocket_falls_and_crashes() {
    let mut rng = test_rng();
    let mut game = IntroGame::new(GameConfig::default());
    intro::process_input(&mut game, IntroInput::Activate);

    let mut crash = None;
    for _ in 0..200 {
        let events = intro::advance(&mut game, 16, &mut rng);
        if let Some(event) = events.into_iter().next() {
            crash = Some(event);
            break;
        }
    }

    assert_eq!(crash, Some(IntroEvent::Crashed { score: 0 }));
    assert_eq!(game.state, IntroState::GameOver);
    assert!(!game.is_subscribed());

    // Crashed sessions ignore time
    let y = game.bird_y;
    assert!(intro::advance(&mut game, 1000, &mut rng).is_empty());
    assert_eq!(game.bird_y, y);
}

#[test]
fn test_retry_after_crash_starts_fresh() {
    let mut rng = test_rng();
    let mut game = IntroGame::new(GameConfig::default());
    intro::process_input(&mut game, IntroInput::Activate);
    while game.state == IntroState::Playing {
        intro::step(&mut game, &mut rng);
    }

    let event = intro::process_input(&mut game, IntroInput::Activate);
    assert_eq!(event, Some(IntroEvent::Started { attempt: 2 }));
    assert_eq!(game.score, 0);
    assert_eq!(game.bird_y, game.config.bird_start_y);
    assert_eq!(game.obstacles, vec![game.initial_obstacle()]);
}

#[test]
fn test_random_tapping_respects_playfield_invariants() {
    let mut rng = test_rng();
    let mut taps = ChaCha8Rng::seed_from_u64(7);
    let mut game = IntroGame::new(GameConfig::default());
    let config = game.config.clone();

    for _ in 0..20_000 {
        if game.state != IntroState::Playing || taps.gen_bool(0.08) {
            intro::process_input(&mut game, IntroInput::Activate);
        }
        let score_before = game.score;
        intro::step(&mut game, &mut rng);

        assert!(game.bird_y >= 0.0 && game.bird_y <= config.max_bird_y());
        assert!(game.score >= score_before);
        for obstacle in &game.obstacles {
            assert!(obstacle.top_height >= config.min_top());
            assert!(obstacle.top_height <= config.max_top());
            assert!(!obstacle.is_offscreen(&config));
        }
        // Spatial order
        for pair in game.obstacles.windows(2) {
            assert!(pair[0].x < pair[1].x);
        }
    }
}
