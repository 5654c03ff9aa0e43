//! A tiny software drawing surface.

use super::types::Rgb;

/// Row-major RGB pixel buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    width: usize,
    height: usize,
    background: Rgb,
    pixels: Vec<Rgb>,
}

impl Surface {
    pub fn new(width: usize, height: usize, background: Rgb) -> Self {
        Self {
            width,
            height,
            background,
            pixels: vec![background; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_drawable(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Reallocate to a new size, cleared to the background.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.pixels = vec![self.background; width * height];
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Blend every pixel toward `color` by `alpha` (0 = no change, 1 = replace).
    pub fn wash(&mut self, color: Rgb, alpha: f64) {
        for pixel in &mut self.pixels {
            *pixel = Rgb {
                r: blend_channel(pixel.r, color.r, alpha),
                g: blend_channel(pixel.g, color.g, alpha),
                b: blend_channel(pixel.b, color.b, alpha),
            };
        }
    }

    /// Fill a disc centered at (`cx`, `cy`). Pixels are hit when their center
    /// lies within `radius`; the pixel under the center is always filled so
    /// tiny sparks stay visible.
    pub fn fill_disc(&mut self, cx: f64, cy: f64, radius: f64, color: Rgb) {
        if !self.is_drawable() || radius <= 0.0 || !cx.is_finite() || !cy.is_finite() {
            return;
        }

        if cx >= 0.0 && cy >= 0.0 {
            self.put(cx as usize, cy as usize, color);
        }

        let min_x = (cx - radius).floor().max(0.0) as usize;
        let min_y = (cy - radius).floor().max(0.0) as usize;
        let max_x = (cx + radius).ceil().min(self.width as f64 - 1.0);
        let max_y = (cy + radius).ceil().min(self.height as f64 - 1.0);
        if max_x < 0.0 || max_y < 0.0 {
            return;
        }

        let r2 = radius * radius;
        for y in min_y..=max_y as usize {
            for x in min_x..=max_x as usize {
                let dx = x as f64 + 0.5 - cx;
                let dy = y as f64 + 0.5 - cy;
                if dx * dx + dy * dy <= r2 {
                    self.put(x, y, color);
                }
            }
        }
    }

    fn put(&mut self, x: usize, y: usize, color: Rgb) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
        }
    }
}

/// Linear blend with rounding. A channel that would round back onto itself
/// moves one step toward the target so trails fade out completely.
fn blend_channel(from: u8, to: u8, alpha: f64) -> u8 {
    if from == to || alpha <= 0.0 {
        return from;
    }
    let value = from as f64 + (to as f64 - from as f64) * alpha;
    let rounded = value.round().clamp(0.0, 255.0) as u8;
    if rounded != from {
        rounded
    } else if to > from {
        from + 1
    } else {
        from - 1
    }
}
