//! Terminal drawing for every screen.

mod celebration_scene;
mod countdown_scene;
mod fireworks_layer;
mod game_common;
mod intro_scene;

use newyear::{App, Screen};
use rand::Rng;
use ratatui::Frame;

/// Draw whichever screen the app is on.
pub fn draw<R: Rng>(frame: &mut Frame, app: &App<R>) {
    let area = frame.size();
    match &app.screen {
        Screen::IntroGame(game) => intro_scene::render_intro(frame, area, game, app.year),
        Screen::Transition(countdown) => {
            countdown_scene::render_countdown(frame, area, countdown, app.year)
        }
        Screen::Celebration(celebration) => {
            celebration_scene::render_celebration(frame, area, celebration)
        }
    }
}
