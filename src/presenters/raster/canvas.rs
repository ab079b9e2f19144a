use rayon::prelude::*;
use thiserror::Error;

const BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque colour from `0xRRGGBB`.
    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        Self::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8, 255)
    }

    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
            ..self
        }
    }

    fn lerp(self, other: Self, t: f64) -> Self {
        let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        Self::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    #[error("frame holds {actual} bytes but {width}x{height} RGBA needs {expected}")]
    SizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Drawing surface over a borrowed RGBA8 framebuffer.
pub struct Canvas<'a> {
    pixels: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> Canvas<'a> {
    pub fn new(pixels: &'a mut [u8], width: u32, height: u32) -> Result<Self, CanvasError> {
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if pixels.len() != expected {
            return Err(CanvasError::SizeMismatch {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        let offset = self.offset(i64::from(x), i64::from(y))?;
        let p = &self.pixels[offset..offset + BYTES_PER_PIXEL];
        Some(Rgba::new(p[0], p[1], p[2], p[3]))
    }

    /// Fills every row with a colour interpolated from `top` to `bottom`.
    pub fn fill_vertical_gradient(&mut self, top: Rgba, bottom: Rgba) {
        if self.width == 0 || self.height == 0 {
            return;
        }

        let row_len = self.width as usize * BYTES_PER_PIXEL;
        let last_row = (self.height - 1).max(1) as f64;

        self.pixels
            .par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(y, row)| {
                let colour = top.lerp(bottom, y as f64 / last_row);
                for pixel in row.chunks_exact_mut(BYTES_PER_PIXEL) {
                    pixel.copy_from_slice(&[colour.r, colour.g, colour.b, 255]);
                }
            });
    }

    /// Alpha-blends `colour` over the pixel. Off-canvas writes are dropped.
    pub fn blend_pixel(&mut self, x: i64, y: i64, colour: Rgba) {
        let Some(offset) = self.offset(x, y) else {
            return;
        };

        let alpha = f64::from(colour.a) / 255.0;
        let dst = &mut self.pixels[offset..offset + BYTES_PER_PIXEL];
        let blend = |src: u8, dst: u8| {
            (f64::from(src) * alpha + f64::from(dst) * (1.0 - alpha)).round() as u8
        };

        dst[0] = blend(colour.r, dst[0]);
        dst[1] = blend(colour.g, dst[1]);
        dst[2] = blend(colour.b, dst[2]);
        dst[3] = 255;
    }

    /// Bresenham line, stamped with a square brush `thickness` pixels wide.
    pub fn draw_line(&mut self, from: (f64, f64), to: (f64, f64), colour: Rgba, thickness: u32) {
        if !(from.0.is_finite() && from.1.is_finite() && to.0.is_finite() && to.1.is_finite()) {
            return;
        }

        let (mut x0, mut y0) = (from.0.round() as i64, from.1.round() as i64);
        let (x1, y1) = (to.0.round() as i64, to.1.round() as i64);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.stamp(x0, y0, colour, thickness);
            if x0 == x1 && y0 == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Fills a triangle given in pixel coordinates, either winding.
    pub fn fill_triangle(&mut self, vertices: [(f64, f64); 3], colour: Rgba) {
        let [a, b, c] = vertices;
        let area = edge(a, b, c);
        if area == 0.0 || !area.is_finite() {
            return;
        }

        let min_x = a.0.min(b.0).min(c.0).floor().max(0.0) as i64;
        let max_x = a.0.max(b.0).max(c.0).ceil().min(f64::from(self.width)) as i64;
        let min_y = a.1.min(b.1).min(c.1).floor().max(0.0) as i64;
        let max_y = a.1.max(b.1).max(c.1).ceil().min(f64::from(self.height)) as i64;

        for y in min_y..max_y {
            for x in min_x..max_x {
                let p = (x as f64 + 0.5, y as f64 + 0.5);
                let w0 = edge(b, c, p) / area;
                let w1 = edge(c, a, p) / area;
                let w2 = edge(a, b, p) / area;

                if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                    self.blend_pixel(x, y, colour);
                }
            }
        }
    }

    fn stamp(&mut self, x: i64, y: i64, colour: Rgba, thickness: u32) {
        let thickness = i64::from(thickness.max(1));
        let start = -(thickness - 1) / 2;

        // Only the part of the brush that lands on the canvas.
        let min_x = x.saturating_add(start).max(0);
        let max_x = x.saturating_add(start).saturating_add(thickness).min(i64::from(self.width));
        let min_y = y.saturating_add(start).max(0);
        let max_y = y.saturating_add(start).saturating_add(thickness).min(i64::from(self.height));

        for py in min_y..max_y {
            for px in min_x..max_x {
                self.blend_pixel(px, py, colour);
            }
        }
    }

    fn offset(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }

        Some((y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL)
    }
}

fn edge(a: (f64, f64), b: (f64, f64), p: (f64, f64)) -> f64 {
    (b.0 - a.0) * (p.1 - a.1) - (b.1 - a.1) * (p.0 - a.0)
}

/// Owned RGBA8 frame for headless rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaFrame {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RgbaFrame {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * BYTES_PER_PIXEL],
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn canvas(&mut self) -> Canvas<'_> {
        Canvas {
            pixels: &mut self.pixels,
            width: self.width,
            height: self.height,
        }
    }

    /// Packed RGB bytes, alpha dropped.
    #[must_use]
    pub fn to_rgb(&self) -> Vec<u8> {
        self.pixels
            .chunks_exact(BYTES_PER_PIXEL)
            .flat_map(|pixel| [pixel[0], pixel[1], pixel[2]])
            .collect()
    }
}
