//! Celebration screen: fireworks behind the year banner, the typed wish,
//! action hints, and the surprise card.

use crate::ui::fireworks_layer::FireworksLayer;
use crate::ui::game_common::{control_spans, render_big_text, render_card, BIG_GLYPH_HEIGHT};
use newyear::celebration::{Celebration, SURPRISE_BUTTON, SURPRISE_TITLE, TAGLINE};
use newyear::fireworks::BACKGROUND;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

const YEAR_COLORS: [Color; 3] = [
    Color::Rgb(250, 204, 21), // yellow
    Color::Rgb(236, 72, 153), // pink
    Color::Rgb(34, 211, 238), // cyan
];

pub fn render_celebration(frame: &mut Frame, area: Rect, celebration: &Celebration) {
    frame.render_widget(FireworksLayer::new(&celebration.fireworks), area);

    let sky = Color::Rgb(BACKGROUND.r, BACKGROUND.g, BACKGROUND.b);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1), // tagline
            Constraint::Length(1),
            Constraint::Length(BIG_GLYPH_HEIGHT), // year
            Constraint::Length(1),
            Constraint::Length(2), // wish
            Constraint::Length(1),
            Constraint::Length(1), // buttons
            Constraint::Min(1),
            Constraint::Length(1), // footer
        ])
        .split(area);

    let tagline = Paragraph::new(TAGLINE.to_uppercase())
        .style(
            Style::default()
                .fg(Color::Rgb(165, 180, 252))
                .bg(sky)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(tagline, centered_strip(chunks[1], TAGLINE.chars().count() as u16 + 4));

    render_big_text(frame, chunks[3], &celebration.year.to_string(), |i| {
        YEAR_COLORS[i.min(YEAR_COLORS.len() - 1)]
    });

    render_wish(frame, chunks[5], celebration, sky);

    let buttons = control_spans(&[("[K]", "Klik untuk Kejutan"), ("[R]", "Main Lagi")]);
    frame.render_widget(
        Paragraph::new(Line::from(buttons))
            .style(Style::default().bg(sky))
            .alignment(Alignment::Center),
        centered_strip(chunks[7], 40),
    );

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("Dibuat dengan ", Style::default().fg(Color::DarkGray)),
        Span::styled("♥", Style::default().fg(Color::Red)),
        Span::styled(
            format!(" untuk menyambut {}", celebration.year),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[9]);

    if celebration.show_surprise {
        render_surprise(frame, area, celebration);
    }
}

fn render_wish(frame: &mut Frame, area: Rect, celebration: &Celebration, sky: Color) {
    let mut spans = vec![Span::styled(
        format!("\"{}", celebration.typed_text()),
        Style::default().fg(Color::White),
    )];
    if celebration.is_typing_done() {
        spans.push(Span::styled("\"", Style::default().fg(Color::White)));
    } else if celebration.cursor_visible() {
        spans.push(Span::styled("▌", Style::default().fg(Color::Yellow)));
    }

    let wish = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(sky))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    let width = (celebration.wish.chars().count() as u16 + 4).min(area.width);
    frame.render_widget(wish, centered_strip(area, width));
}

fn render_surprise(frame: &mut Frame, area: Rect, celebration: &Celebration) {
    let lines = vec![
        Line::from(Span::styled(
            SURPRISE_TITLE,
            Style::default()
                .fg(Color::Rgb(236, 72, 153))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            celebration.surprise_body(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from("💖 🌟 🎉"),
        Line::from(""),
        Line::from(Span::styled(
            format!("[Enter] {}", SURPRISE_BUTTON),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    render_card(frame, area, (50, 14), Color::Rgb(236, 72, 153), lines);
}

/// A horizontally centered slice of `area`, `width` columns wide.
fn centered_strip(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height)
}
