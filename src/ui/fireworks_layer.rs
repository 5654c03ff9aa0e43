//! Draws the fireworks surface with upper-half blocks: each character cell
//! shows two vertically stacked surface pixels (fg = top, bg = bottom).

use newyear::fireworks::{Fireworks, Rgb, BACKGROUND};
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

pub struct FireworksLayer<'a> {
    fireworks: &'a Fireworks,
}

impl<'a> FireworksLayer<'a> {
    pub fn new(fireworks: &'a Fireworks) -> Self {
        Self { fireworks }
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

impl Widget for FireworksLayer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let surface = &self.fireworks.surface;
        let active = self.fireworks.is_active();

        for row in 0..area.height {
            for col in 0..area.width {
                let x = col as usize;
                let y = row as usize * 2;
                let cell = buf.get_mut(area.x + col, area.y + row);
                if !active {
                    // Nothing to show: plain night sky
                    cell.set_char(' ').set_bg(to_color(BACKGROUND));
                    continue;
                }
                let top = surface.get(x, y).unwrap_or(BACKGROUND);
                let bottom = surface.get(x, y + 1).unwrap_or(BACKGROUND);
                cell.set_char('▀')
                    .set_fg(to_color(top))
                    .set_bg(to_color(bottom));
            }
        }
    }
}
