//! RGBA frame composed for display after each tick.
//!
//! The frame mirrors the occupancy surface (border and obstacles in black on a
//! light background) and then has the creatures painted on top. Nothing here
//! feeds back into sensing.

use serde::{Deserialize, Serialize};

use super::geometric_utils::disc_cells;
use super::surface::OccupancySurface;

/// An opaque 8-bit RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba {
    /// Arena background.
    pub const BACKGROUND: Self = Self::opaque(0xF4, 0xF4, 0xF4);
    /// Border and obstacle strokes.
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    /// Heading marker drawn on each creature.
    pub const WHITE: Self = Self::opaque(0xFF, 0xFF, 0xFF);

    /// Creates a fully opaque colour.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }
}

/// Row-major RGBA pixel buffer covering the arena plus border.
#[derive(Debug, Clone)]
pub struct Frame {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Frame {
    /// Creates a frame filled with the background colour.
    pub fn new(width: usize, height: usize) -> Self {
        let mut frame = Self {
            width,
            height,
            pixels: vec![0; width * height * 4],
        };
        frame.fill(Rgba::BACKGROUND);
        frame
    }

    /// Frame width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Frame height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw RGBA bytes, four per pixel, row by row.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Paints every pixel with `color`.
    pub fn fill(&mut self, color: Rgba) {
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&[color.r, color.g, color.b, color.a]);
        }
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the frame.
    pub fn get(&self, x: i64, y: i64) -> Option<Rgba> {
        let i = self.index(x, y)?;
        let px = &self.pixels[i..i + 4];
        Some(Rgba {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        })
    }

    /// Sets the pixel at `(x, y)`; writes outside the frame are dropped.
    pub fn set(&mut self, x: i64, y: i64, color: Rgba) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i..i + 4].copy_from_slice(&[color.r, color.g, color.b, color.a]);
        }
    }

    /// Copies the occupancy surface: occupied cells black, the rest background.
    pub fn paint_surface(&mut self, surface: &OccupancySurface) {
        debug_assert_eq!(surface.width(), self.width);
        debug_assert_eq!(surface.height(), self.height);
        for ((y, x), &occupied) in surface.cells().indexed_iter() {
            let color = if occupied { Rgba::BLACK } else { Rgba::BACKGROUND };
            self.set(x as i64, y as i64, color);
        }
    }

    /// Fills every cell within `radius` of `(cx, cy)`.
    pub fn fill_disc(&mut self, cx: f32, cy: f32, radius: u32, color: Rgba) {
        for (x, y) in disc_cells(cx, cy, radius) {
            self.set(x, y, color);
        }
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) * 4)
    }
}
