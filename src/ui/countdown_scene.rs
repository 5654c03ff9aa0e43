//! The 3-2-1 countdown and the year reveal.

use crate::ui::game_common::{render_big_text, BIG_GLYPH_HEIGHT};
use newyear::countdown::Countdown;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Paragraph},
    Frame,
};

pub fn render_countdown(frame: &mut Frame, area: Rect, countdown: &Countdown, year: i32) {
    frame.render_widget(Block::default().style(Style::default().bg(Color::Black)), area);

    if countdown.is_revealed() {
        let text = format!("{}!", year);
        let last = text.chars().count().saturating_sub(1).max(1);
        render_big_text(frame, area, &text, |i| gradient(i, last));
        render_caption(frame, area, "Selamat Tahun Baru!", Color::White);
    } else {
        let color = digit_color(countdown.count);
        render_big_text(frame, area, &countdown.count.to_string(), |_| color);
        // Pulse for the first part of each interval
        if countdown.interval_progress() < 0.3 {
            render_caption(frame, area, "·  ·  ·", color);
        }
    }
}

fn digit_color(count: u32) -> Color {
    match count {
        3 => Color::Red,
        2 => Color::Yellow,
        1 => Color::Cyan,
        _ => Color::White,
    }
}

/// Yellow to red across the reveal text.
fn gradient(index: usize, last: usize) -> Color {
    let t = index.min(last) as f64 / last as f64;
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    Color::Rgb(lerp(250, 239), lerp(204, 68), lerp(21, 68))
}

fn render_caption(frame: &mut Frame, area: Rect, text: &str, color: Color) {
    let y = area.y + (area.height / 2) + BIG_GLYPH_HEIGHT / 2 + 2;
    if y >= area.y + area.height {
        return;
    }
    let caption = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(caption, Rect::new(area.x, y, area.width, 1));
}
