//! Rocket mini-game logic: input dispatch, physics, collision, scoring.

use super::types::{IntroGame, IntroState, Obstacle};
use rand::Rng;

/// Player input. Space, Enter, Up and a mouse click all map to `Activate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroInput {
    Activate,
}

/// Something the session wants the caller to know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroEvent {
    /// A new session began (from `Start` or after a crash).
    Started { attempt: u32 },
    /// The rocket hit a boundary or an obstacle.
    Crashed { score: u32 },
    /// The win threshold was reached; completion follows after the delay.
    Won { score: u32 },
    /// The win delay elapsed. Emitted exactly once per game.
    Completed,
}

/// Dispatch an input through the state machine.
///
/// Tapping is a jump while playing and a (re)start on the title and
/// crash screens. After a win, input is ignored.
pub fn process_input(game: &mut IntroGame, input: IntroInput) -> Option<IntroEvent> {
    match (game.state, input) {
        (IntroState::Playing, IntroInput::Activate) => {
            // Override, not additive: a tap always gives the same lift
            game.bird_velocity = game.config.jump_impulse;
            None
        }
        (IntroState::Start | IntroState::GameOver, IntroInput::Activate) => {
            restart(game);
            Some(IntroEvent::Started {
                attempt: game.attempts,
            })
        }
        (IntroState::Won, IntroInput::Activate) => None,
    }
}

/// Reset the rocket, the obstacles and the score and enter `Playing`.
pub fn restart(game: &mut IntroGame) {
    game.bird_y = game.config.bird_start_y;
    game.bird_velocity = 0.0;
    game.obstacles = vec![game.initial_obstacle()];
    game.score = 0;
    game.tick_count = 0;
    game.attempts += 1;
    game.enter(IntroState::Playing);
}

/// Advance the game by `dt_ms` of wall time.
///
/// While playing, the held frame clock turns elapsed time into fixed ticks.
/// After a win, elapsed time counts toward the completion delay.
pub fn advance<R: Rng>(game: &mut IntroGame, dt_ms: u64, rng: &mut R) -> Vec<IntroEvent> {
    let mut events = Vec::new();

    match game.state {
        IntroState::Playing => {
            let due = game.clock.as_mut().map_or(0, |clock| clock.advance(dt_ms));
            for _ in 0..due {
                if let Some(event) = step(game, rng) {
                    events.push(event);
                }
                if game.state != IntroState::Playing {
                    break;
                }
            }
        }
        IntroState::Won if !game.completion_sent => {
            game.win_elapsed_ms = game.win_elapsed_ms.saturating_add(dt_ms);
            if game.win_elapsed_ms >= game.config.win_delay_ms {
                game.completion_sent = true;
                events.push(IntroEvent::Completed);
            }
        }
        _ => {}
    }

    events
}

/// Single simulation tick. Does nothing unless `Playing`.
///
/// Order within a tick: physics, obstacle scroll, spawn, collision, scoring.
pub fn step<R: Rng>(game: &mut IntroGame, rng: &mut R) -> Option<IntroEvent> {
    if game.state != IntroState::Playing {
        return None;
    }
    game.tick_count += 1;

    // 1. Gravity, then clamp into the playfield
    let prev_y = game.bird_y;
    game.bird_velocity += game.config.gravity;
    game.bird_y = (game.bird_y + game.bird_velocity).clamp(0.0, game.config.max_bird_y());

    // 2. Scroll and drop obstacles that left the screen
    let speed = game.config.scroll_speed;
    for obstacle in &mut game.obstacles {
        obstacle.x -= speed;
    }
    let config = &game.config;
    game.obstacles.retain(|o| !o.is_offscreen(config));

    // 3. Spawn at the right edge once the rightmost obstacle moved far enough in
    let spawn_due = game
        .obstacles
        .last()
        .map_or(true, |last| last.x < config.width - config.spawn_distance);
    if spawn_due {
        let top_height = rng.gen_range(config.min_top()..=config.max_top());
        game.obstacles.push(Obstacle::new(config.width, top_height));
    }

    // 4. Collision
    if touched_bounds(game, prev_y) || hits_obstacle(game) {
        game.enter(IntroState::GameOver);
        return Some(IntroEvent::Crashed { score: game.score });
    }

    // 5. Scoring
    let config = &game.config;
    for obstacle in &mut game.obstacles {
        if !obstacle.passed && obstacle.is_behind_bird(config) {
            obstacle.passed = true;
            game.score += 1;
        }
    }
    if game.score >= game.config.win_score {
        game.win_elapsed_ms = 0;
        game.enter(IntroState::Won);
        return Some(IntroEvent::Won { score: game.score });
    }

    None
}

/// True if the rocket was on the ceiling or floor at either end of the tick.
fn touched_bounds(game: &IntroGame, prev_y: f64) -> bool {
    let floor = game.config.max_bird_y();
    prev_y.min(game.bird_y) <= 0.0 || prev_y.max(game.bird_y) >= floor
}

/// True if any overlapping obstacle does not fully contain the rocket in its gap.
pub fn hits_obstacle(game: &IntroGame) -> bool {
    game.obstacles
        .iter()
        .any(|o| o.overlaps_bird(&game.config) && !o.gap_contains(&game.config, game.bird_y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(2026)
    }

    /// A game that has already been started (skips the title screen).
    fn playing_game() -> IntroGame {
        let mut game = IntroGame::new(GameConfig::default());
        process_input(&mut game, IntroInput::Activate);
        game
    }

    #[test]
    fn test_activate_starts_game() {
        let mut game = IntroGame::new(GameConfig::default());
        let event = process_input(&mut game, IntroInput::Activate);
        assert_eq!(event, Some(IntroEvent::Started { attempt: 1 }));
        assert_eq!(game.state, IntroState::Playing);
        assert_eq!(game.obstacles.len(), 1);
        assert!(game.is_subscribed());
    }

    #[test]
    fn test_jump_overrides_velocity() {
        let mut game = playing_game();
        game.bird_velocity = 12.3;
        process_input(&mut game, IntroInput::Activate);
        assert_eq!(game.bird_velocity, game.config.jump_impulse);

        game.bird_velocity = -3.0;
        process_input(&mut game, IntroInput::Activate);
        assert_eq!(game.bird_velocity, game.config.jump_impulse);
    }

    #[test]
    fn test_gravity_pulls_bird_down() {
        let mut game = playing_game();
        let mut rng = create_test_rng();
        let initial_y = game.bird_y;
        step(&mut game, &mut rng);
        assert!(game.bird_y > initial_y);
        assert!((game.bird_velocity - game.config.gravity).abs() < 1e-9);
    }

    #[test]
    fn test_ceiling_with_downward_velocity_crashes() {
        let mut game = playing_game();
        let mut rng = create_test_rng();
        game.bird_y = 0.0;
        game.bird_velocity = 2.0;
        let event = step(&mut game, &mut rng);
        assert_eq!(event, Some(IntroEvent::Crashed { score: 0 }));
        assert_eq!(game.state, IntroState::GameOver);
        assert!(!game.is_subscribed());
    }

    #[test]
    fn test_floor_crash_clamps_position() {
        let mut game = playing_game();
        let mut rng = create_test_rng();
        game.bird_y = game.config.max_bird_y() - 1.0;
        game.bird_velocity = 30.0;
        step(&mut game, &mut rng);
        assert_eq!(game.state, IntroState::GameOver);
        assert_eq!(game.bird_y, game.config.max_bird_y());
    }

    #[test]
    fn test_obstacles_scroll_left() {
        let mut game = playing_game();
        let mut rng = create_test_rng();
        let initial_x = game.obstacles[0].x;
        step(&mut game, &mut rng);
        assert!((game.obstacles[0].x - (initial_x - game.config.scroll_speed)).abs() < 1e-9);
    }

    #[test]
    fn test_offscreen_obstacle_removed() {
        let mut game = playing_game();
        let mut rng = create_test_rng();
        game.obstacles = vec![Obstacle::new(-game.config.obstacle_width + 1.0, 200.0)];
        game.obstacles[0].passed = true;
        step(&mut game, &mut rng);
        // Old one gone, a fresh one spawned at the right edge
        assert_eq!(game.obstacles.len(), 1);
        assert_eq!(game.obstacles[0].x, game.config.width);
    }

    #[test]
    fn test_spawn_respects_gap_bounds() {
        let mut game = playing_game();
        let mut rng = create_test_rng();
        for _ in 0..200 {
            game.obstacles = vec![Obstacle::new(0.0, 200.0)];
            game.obstacles[0].passed = true;
            game.bird_y = 300.0;
            game.bird_velocity = 0.0;
            step(&mut game, &mut rng);
            let spawned = game.obstacles.last().unwrap();
            assert!(spawned.top_height >= game.config.min_top());
            assert!(spawned.gap_bottom(&game.config) <= game.config.height - game.config.min_segment);
        }
    }

    #[test]
    fn test_no_spawn_while_rightmost_is_near_edge() {
        let mut game = playing_game();
        let mut rng = create_test_rng();
        game.obstacles = vec![Obstacle::new(game.config.width - 10.0, 200.0)];
        step(&mut game, &mut rng);
        assert_eq!(game.obstacles.len(), 1);
    }

    #[test]
    fn test_inside_gap_no_collision() {
        let mut game = playing_game();
        game.obstacles = vec![Obstacle::new(game.config.bird_x, 200.0)];
        game.bird_y = 250.0;
        assert!(!hits_obstacle(&game));
    }

    #[test]
    fn test_partially_outside_gap_collides() {
        let mut game = playing_game();
        game.obstacles = vec![Obstacle::new(game.config.bird_x, 200.0)];
        // Top edge 1 unit above the gap
        game.bird_y = 199.0;
        assert!(hits_obstacle(&game));
        // Bottom edge 1 unit below the gap
        game.bird_y = 200.0 + game.config.gap_size - game.config.bird_size + 1.0;
        assert!(hits_obstacle(&game));
    }

    #[test]
    fn test_score_once_per_obstacle() {
        let mut game = playing_game();
        let mut rng = create_test_rng();
        let behind = game.config.bird_x - game.config.obstacle_width - 5.0;
        game.obstacles = vec![Obstacle::new(behind, 200.0)];
        game.bird_y = 300.0;
        game.bird_velocity = -0.6;
        step(&mut game, &mut rng);
        assert_eq!(game.score, 1);
        assert!(game.obstacles[0].passed);

        game.bird_velocity = -0.6;
        step(&mut game, &mut rng);
        assert_eq!(game.score, 1);
    }

    #[test]
    fn test_win_at_threshold() {
        let mut game = playing_game();
        let mut rng = create_test_rng();
        game.score = game.config.win_score - 1;
        let behind = game.config.bird_x - game.config.obstacle_width - 5.0;
        game.obstacles = vec![Obstacle::new(behind, 200.0)];
        let event = step(&mut game, &mut rng);
        assert_eq!(event, Some(IntroEvent::Won { score: 5 }));
        assert_eq!(game.state, IntroState::Won);
        assert!(!game.is_subscribed());
    }

    #[test]
    fn test_completion_after_delay_only_once() {
        let mut game = playing_game();
        let mut rng = create_test_rng();
        game.enter(IntroState::Won);

        let delay = game.config.win_delay_ms;
        assert!(advance(&mut game, delay - 1, &mut rng).is_empty());
        assert_eq!(advance(&mut game, 1, &mut rng), vec![IntroEvent::Completed]);
        assert!(advance(&mut game, delay * 5, &mut rng).is_empty());
    }

    #[test]
    fn test_input_ignored_after_win() {
        let mut game = playing_game();
        game.enter(IntroState::Won);
        game.score = 5;
        assert_eq!(process_input(&mut game, IntroInput::Activate), None);
        assert_eq!(game.state, IntroState::Won);
        assert_eq!(game.score, 5);
    }

    #[test]
    fn test_restart_after_crash_resets_everything() {
        let mut game = playing_game();
        game.bird_y = 12.0;
        game.bird_velocity = 9.0;
        game.score = 3;
        game.obstacles.push(Obstacle::new(700.0, 80.0));
        game.enter(IntroState::GameOver);

        let event = process_input(&mut game, IntroInput::Activate);
        assert_eq!(event, Some(IntroEvent::Started { attempt: 2 }));
        assert_eq!(game.bird_y, game.config.bird_start_y);
        assert_eq!(game.bird_velocity, 0.0);
        assert_eq!(game.score, 0);
        assert_eq!(game.obstacles, vec![game.initial_obstacle()]);
    }

    #[test]
    fn test_no_ticks_without_subscription() {
        let mut game = IntroGame::new(GameConfig::default());
        let mut rng = create_test_rng();
        let initial_y = game.bird_y;
        assert!(advance(&mut game, 500, &mut rng).is_empty());
        assert_eq!(game.bird_y, initial_y);
        assert_eq!(game.tick_count, 0);
    }

    #[test]
    fn test_advance_runs_fixed_ticks() {
        let mut game = playing_game();
        let mut rng = create_test_rng();
        let elapsed = game.config.tick_ms * 3;
        advance(&mut game, elapsed, &mut rng);
        assert_eq!(game.tick_count, 3);
    }
}
