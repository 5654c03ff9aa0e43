//! UI rendering for the rocket mini-game.

use crate::ui::game_common::{
    create_game_layout, render_card, render_info_panel_frame, render_status_bar,
};
use newyear::intro::{IntroGame, IntroState};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const OBSTACLE_COLOR: Color = Color::Rgb(124, 58, 237); // violet-600
const OBSTACLE_EDGE_COLOR: Color = Color::Rgb(129, 140, 248); // indigo-400

/// Render the mini-game scene.
pub fn render_intro(frame: &mut Frame, area: Rect, game: &IntroGame, year: i32) {
    let title = format!(" Misi Menuju {} ", year);
    let layout = create_game_layout(frame, area, &title, Color::Yellow, 10, 22);

    render_play_area(frame, layout.content, game);
    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);

    match game.state {
        IntroState::Start => render_start_card(frame, layout.content, game, year),
        IntroState::GameOver => render_crash_card(frame, layout.content, year),
        IntroState::Won => render_win_card(frame, layout.content, year),
        IntroState::Playing => {}
    }
}

/// Render the play area: star dust, obstacles, rocket.
fn render_play_area(frame: &mut Frame, area: Rect, game: &IntroGame) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let config = &game.config;
    // Playfield units per display cell
    let x_scale = config.width / width as f64;
    let y_scale = config.height / height as f64;

    // Rocket covers at least one cell however small the terminal is
    let bird_col0 = (config.bird_x / x_scale) as usize;
    let bird_col1 = (((config.bird_x + config.bird_size) / x_scale).ceil() as usize)
        .saturating_sub(1)
        .max(bird_col0);
    let bird_row0 = (game.bird_y / y_scale) as usize;
    let bird_row1 = (((game.bird_y + config.bird_size) / y_scale).ceil() as usize)
        .saturating_sub(1)
        .max(bird_row0);
    let bird_char = rocket_glyph(game.tilt_degrees());

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let mut spans = Vec::with_capacity(width);
        let vy = (row as f64 + 0.5) * y_scale;

        for col in 0..width {
            if (bird_row0..=bird_row1).contains(&row) && (bird_col0..=bird_col1).contains(&col) {
                spans.push(Span::styled(
                    bird_char,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
                continue;
            }

            let vx = (col as f64 + 0.5) * x_scale;
            let obstacle = game
                .obstacles
                .iter()
                .find(|o| vx >= o.x && vx < o.right(config));

            let span = match obstacle {
                Some(o) if vy < o.top_height || vy > o.gap_bottom(config) => {
                    // Gap-facing caps get the lighter edge color
                    let is_cap = (vy - o.top_height).abs() < y_scale
                        || (vy - o.gap_bottom(config)).abs() < y_scale;
                    let color = if is_cap {
                        OBSTACLE_EDGE_COLOR
                    } else {
                        OBSTACLE_COLOR
                    };
                    Span::styled("█", Style::default().fg(color))
                }
                _ if is_star(col, row) => Span::styled("·", Style::default().fg(Color::DarkGray)),
                _ => Span::raw(" "),
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Sparse fixed star dust.
fn is_star(col: usize, row: usize) -> bool {
    (col * 7 + row * 13 + col * row) % 41 == 0
}

fn rocket_glyph(tilt: f64) -> &'static str {
    if tilt < -10.0 {
        "▲" // climbing
    } else if tilt > 10.0 {
        "▼" // falling
    } else {
        "►"
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &IntroGame) {
    let controls = [("[Spasi/Klik]", "Terbang"), ("[Q]", "Keluar")];
    match game.state {
        IntroState::Start => render_status_bar(
            frame,
            area,
            "Tekan Spasi untuk mulai!",
            Color::Yellow,
            &controls,
        ),
        IntroState::Playing => render_status_bar(
            frame,
            area,
            &format!("Skor: {} / {}", game.score, game.config.win_score),
            Color::Green,
            &controls,
        ),
        IntroState::GameOver => {
            render_status_bar(frame, area, "Nabrak!", Color::Red, &controls)
        }
        IntroState::Won => render_status_bar(frame, area, "Berhasil!", Color::Yellow, &[]),
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &IntroGame) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let target = game.config.win_score;
    let mut lines = vec![
        Line::from(Span::styled(
            " Rintangan ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Skor: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{} / {}", game.score, target),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Percobaan: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", game.attempts),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
    ];

    let progress = (game.score as f64 / target as f64).min(1.0);
    let bar_width = (inner.width as usize).saturating_sub(2);
    let filled = (progress * bar_width as f64) as usize;
    let empty = bar_width.saturating_sub(filled);

    lines.push(Line::from(Span::styled(
        " Progres:",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(vec![
        Span::raw(" "),
        Span::styled("█".repeat(filled), Style::default().fg(Color::Green)),
        Span::styled("░".repeat(empty), Style::default().fg(Color::DarkGray)),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_start_card(frame: &mut Frame, area: Rect, game: &IntroGame, year: i32) {
    let lines = vec![
        Line::from(Span::styled(
            format!("Misi Menuju {}", year),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Bantu roket melewati {} rintangan untuk membuka pesta tahun baru!",
                game.config.win_score
            ),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "▶ Klik Spasi / Layar",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Tap layar atau tekan Spasi untuk terbang",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    render_card(frame, area, (44, 12), Color::Yellow, lines);
}

fn render_crash_card(frame: &mut Frame, area: Rect, year: i32) {
    let lines = vec![
        Line::from(Span::styled(
            "NABRAK! 💥",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Yah, gagal sampai {} nih.", year),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "↻ Coba Lagi [Spasi]",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    render_card(frame, area, (36, 9), Color::Red, lines);
}

fn render_win_card(frame: &mut Frame, area: Rect, year: i32) {
    let lines = vec![
        Line::from(Span::styled(
            "BERHASIL!",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Selamat Datang {}", year),
            Style::default().fg(Color::White),
        )),
    ];
    render_card(frame, area, (32, 7), Color::Yellow, lines);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rocket_glyph_follows_tilt() {
        assert_eq!(rocket_glyph(-25.0), "▲");
        assert_eq!(rocket_glyph(0.0), "►");
        assert_eq!(rocket_glyph(25.0), "▼");
    }
}
