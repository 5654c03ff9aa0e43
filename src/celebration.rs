//! Closing celebration: year banner, typed wish, surprise card, replay.
//!
//! Hosts the fireworks show for its whole lifetime; opening the surprise
//! card does not pause it.

use crate::config::{CelebrationConfig, FireworksConfig};
use crate::core::CURSOR_BLINK_MS;
use crate::fireworks::{self, Fireworks};
use rand::Rng;

pub const TAGLINE: &str = "Selamat Tahun Baru";

/// Wishes for the typed line. `{year}` is replaced with the celebrated year.
pub const WISHES: [&str; 4] = [
    "Semoga tahun ini penuh kebahagiaan & rezeki melimpah!",
    "Tahun baru, semangat baru, harapan baru!",
    "Sehat selalu, sukses terus, dan bahagia selamanya!",
    "{year}: Waktunya wujudkan semua mimpimu!",
];

pub const SURPRISE_TITLE: &str = "Kamu Luar Biasa!";

/// Surprise card body. `{year}` is replaced with the celebrated year.
pub const SURPRISE_BODY: &str = "Terima kasih sudah bertahan sejauh ini. Semoga di tahun {year}, \
semua bug di hidupmu ter-fix, dompetmu overflow, dan bahagiamu infinite loop!";

pub const SURPRISE_BUTTON: &str = "Siap, Gasken!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CelebrationInput {
    /// Space / Enter / click. Closes the surprise card when it is open.
    Activate,
    /// Open or close the surprise card.
    ToggleSurprise,
    /// Esc while the card is open.
    CloseSurprise,
    /// Play the mini-game again.
    Restart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CelebrationEvent {
    RestartRequested,
}

#[derive(Debug, Clone)]
pub struct Celebration {
    pub year: i32,
    pub wish: String,
    /// Characters of `wish` revealed so far.
    pub typed_chars: usize,
    pub show_surprise: bool,
    pub fireworks: Fireworks,
    char_ms: u64,
    typing_elapsed_ms: u64,
    /// Time since the screen opened, drives the cursor blink.
    elapsed_ms: u64,
}

impl Celebration {
    /// `surface` is the fireworks surface size in pixels.
    pub fn new<R: Rng>(
        config: &CelebrationConfig,
        fireworks_config: &FireworksConfig,
        year: i32,
        surface: (usize, usize),
        rng: &mut R,
    ) -> Self {
        let wish = with_year(WISHES[rng.gen_range(0..WISHES.len())], year);
        Self {
            year,
            wish,
            typed_chars: 0,
            show_surprise: false,
            fireworks: Fireworks::new(fireworks_config.clone(), surface.0, surface.1),
            char_ms: config.wish_char_ms.max(1),
            typing_elapsed_ms: 0,
            elapsed_ms: 0,
        }
    }

    /// The part of the wish typed so far.
    pub fn typed_text(&self) -> &str {
        match self.wish.char_indices().nth(self.typed_chars) {
            Some((byte_idx, _)) => &self.wish[..byte_idx],
            None => &self.wish,
        }
    }

    pub fn is_typing_done(&self) -> bool {
        self.typed_chars >= self.wish.chars().count()
    }

    pub fn cursor_visible(&self) -> bool {
        (self.elapsed_ms / CURSOR_BLINK_MS) % 2 == 0
    }

    pub fn surprise_body(&self) -> String {
        with_year(SURPRISE_BODY, self.year)
    }

    pub fn advance<R: Rng>(&mut self, dt_ms: u64, rng: &mut R) {
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);

        if !self.is_typing_done() {
            self.typing_elapsed_ms += dt_ms;
            let total = self.wish.chars().count();
            while self.typing_elapsed_ms >= self.char_ms && self.typed_chars < total {
                self.typing_elapsed_ms -= self.char_ms;
                self.typed_chars += 1;
            }
        }

        fireworks::advance(&mut self.fireworks, dt_ms, rng);
    }

    pub fn handle_input(&mut self, input: CelebrationInput) -> Option<CelebrationEvent> {
        match input {
            CelebrationInput::ToggleSurprise => {
                self.show_surprise = !self.show_surprise;
                None
            }
            CelebrationInput::Activate | CelebrationInput::CloseSurprise => {
                self.show_surprise = false;
                None
            }
            // The card covers the replay button
            CelebrationInput::Restart if self.show_surprise => None,
            CelebrationInput::Restart => Some(CelebrationEvent::RestartRequested),
        }
    }
}

fn with_year(template: &str, year: i32) -> String {
    template.replace("{year}", &year.to_string())
}
