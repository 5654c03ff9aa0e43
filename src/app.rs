//! Screen sequencing: mini-game, countdown, celebration, and back again.
//!
//! Each screen owns its own state. Moving on replaces the screen, which drops
//! the previous state together with any tick subscription it held.

use crate::celebration::{Celebration, CelebrationEvent, CelebrationInput};
use crate::config::Config;
use crate::countdown::{Countdown, CountdownEvent};
use crate::intro::{self, IntroEvent, IntroGame, IntroInput};
use rand::Rng;

/// UI-agnostic inputs. The terminal layer maps keys and clicks onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppInput {
    /// Space, Enter, Up or a click: jump / start / dismiss.
    Activate,
    /// Open or close the surprise card on the celebration screen.
    ToggleSurprise,
    /// Play again from the celebration screen.
    Restart,
    /// Esc: close the surprise card, otherwise quit.
    Back,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    IntroGame,
    Transition,
    Celebration,
}

#[derive(Debug, Clone)]
pub enum Screen {
    IntroGame(IntroGame),
    Transition(Countdown),
    Celebration(Box<Celebration>),
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::IntroGame(_) => ScreenKind::IntroGame,
            Screen::Transition(_) => ScreenKind::Transition,
            Screen::Celebration(_) => ScreenKind::Celebration,
        }
    }
}

pub struct App<R: Rng> {
    pub config: Config,
    pub screen: Screen,
    /// Year shown on the countdown reveal and the celebration banner.
    pub year: i32,
    /// Celebrations reached in this run.
    pub celebrations: u32,
    rng: R,
    /// Fireworks surface size in pixels.
    surface: (usize, usize),
    quit: bool,
}

impl<R: Rng> App<R> {
    pub fn new(config: Config, year: i32, rng: R) -> Self {
        let config = config.normalized();
        Self {
            screen: Screen::IntroGame(IntroGame::new(config.game.clone())),
            config,
            year,
            celebrations: 0,
            rng,
            surface: (0, 0),
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn screen_kind(&self) -> ScreenKind {
        self.screen.kind()
    }

    /// Follow a terminal size change. Two surface pixels per character row.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.surface = (cols as usize, rows as usize * 2);
        if let Screen::Celebration(celebration) = &mut self.screen {
            celebration.fireworks.resize(self.surface.0, self.surface.1);
        }
    }

    /// Advance the current screen by `dt_ms` and follow its completion events.
    pub fn advance(&mut self, dt_ms: u64) {
        let next = match &mut self.screen {
            Screen::IntroGame(game) => {
                let events = intro::advance(game, dt_ms, &mut self.rng);
                let mut next = None;
                for event in events {
                    log_intro_event(event);
                    if event == IntroEvent::Completed {
                        next = Some(ScreenKind::Transition);
                    }
                }
                next
            }
            Screen::Transition(countdown) => match countdown.advance(dt_ms) {
                Some(CountdownEvent::Completed) => Some(ScreenKind::Celebration),
                None => None,
            },
            Screen::Celebration(celebration) => {
                celebration.advance(dt_ms, &mut self.rng);
                None
            }
        };

        if let Some(kind) = next {
            self.go_to(kind);
        }
    }

    pub fn handle_input(&mut self, input: AppInput) {
        if input == AppInput::Quit {
            self.quit = true;
            return;
        }

        let next = match &mut self.screen {
            Screen::IntroGame(game) => {
                match input {
                    AppInput::Activate => {
                        if let Some(event) = intro::process_input(game, IntroInput::Activate) {
                            log_intro_event(event);
                        }
                    }
                    AppInput::Back => self.quit = true,
                    _ => {}
                }
                None
            }
            Screen::Transition(_) => {
                if input == AppInput::Back {
                    self.quit = true;
                }
                None
            }
            Screen::Celebration(celebration) => {
                let mapped = match input {
                    AppInput::Activate => Some(CelebrationInput::Activate),
                    AppInput::ToggleSurprise => Some(CelebrationInput::ToggleSurprise),
                    AppInput::Restart => Some(CelebrationInput::Restart),
                    AppInput::Back if celebration.show_surprise => {
                        Some(CelebrationInput::CloseSurprise)
                    }
                    AppInput::Back => {
                        self.quit = true;
                        None
                    }
                    AppInput::Quit => None,
                };
                match mapped.and_then(|input| celebration.handle_input(input)) {
                    Some(CelebrationEvent::RestartRequested) => Some(ScreenKind::IntroGame),
                    None => None,
                }
            }
        };

        if let Some(kind) = next {
            self.go_to(kind);
        }
    }

    fn go_to(&mut self, kind: ScreenKind) {
        log::info!("Screen {:?} -> {:?}", self.screen.kind(), kind);
        self.screen = match kind {
            ScreenKind::IntroGame => Screen::IntroGame(IntroGame::new(self.config.game.clone())),
            ScreenKind::Transition => Screen::Transition(Countdown::new(&self.config.countdown)),
            ScreenKind::Celebration => {
                self.celebrations += 1;
                Screen::Celebration(Box::new(Celebration::new(
                    &self.config.celebration,
                    &self.config.fireworks,
                    self.year,
                    self.surface,
                    &mut self.rng,
                )))
            }
        };
    }
}

fn log_intro_event(event: IntroEvent) {
    match event {
        IntroEvent::Started { attempt } => log::info!("Mini-game attempt #{} started", attempt),
        IntroEvent::Crashed { score } => log::info!("Crashed with score {}", score),
        IntroEvent::Won { score } => log::info!("Mini-game won with score {}", score),
        IntroEvent::Completed => log::info!("Mini-game complete"),
    }
}
