//! Occupancy grid used for sensing and collisions.
//!
//! The surface covers the arena plus its border. Border bands and obstacle
//! strokes are occupied; creatures are never drawn onto it, so creatures can
//! neither see nor collide with each other. All coordinates taken by this
//! module are frame coordinates, i.e. arena coordinates shifted by the border.

use ndarray::{Array2, s};

use super::geometric_utils::{disc_cells, segment_point_distance, xy_dist};
use super::obstacle::Obstacle;
use super::params::Params;

/// Distance reported by a ray that leaves the surface without hitting anything.
pub const NO_HIT: f32 = f32::MAX;

/// Boolean grid of occupied cells, indexed `[[y, x]]`.
#[derive(Debug, Clone)]
pub struct OccupancySurface {
    border: usize,
    cells: Array2<bool>,
}

impl OccupancySurface {
    /// Creates a surface sized for the bordered arena, with the border filled in.
    pub fn new(params: &Params) -> Self {
        let mut surface = Self {
            border: params.border_width as usize,
            cells: Array2::from_elem((params.frame_height(), params.frame_width()), false),
        };
        surface.reset();
        surface
    }

    /// Width in cells, border included.
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Height in cells, border included.
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Border thickness in cells.
    pub fn border(&self) -> usize {
        self.border
    }

    /// The raw grid, `true` where occupied.
    pub fn cells(&self) -> &Array2<bool> {
        &self.cells
    }

    /// Maps arena coordinates onto the surface.
    pub fn to_frame(&self, x: f32, y: f32) -> (f32, f32) {
        let b = self.border as f32;
        (x + b, y + b)
    }

    /// Marks the four border bands as occupied.
    pub fn fill_border(&mut self) {
        let (w, h, b) = (self.width(), self.height(), self.border.min(self.width()).min(self.height()));
        self.cells.slice_mut(s![..b, ..]).fill(true);
        self.cells.slice_mut(s![h - b.., ..]).fill(true);
        self.cells.slice_mut(s![.., ..b]).fill(true);
        self.cells.slice_mut(s![.., w - b..]).fill(true);
    }

    /// Clears everything inside the border.
    pub fn clear_interior(&mut self) {
        let (x0, x1) = self.interior(self.width());
        let (y0, y1) = self.interior(self.height());
        self.cells.slice_mut(s![y0..y1, x0..x1]).fill(false);
    }

    /// Restores the surface to border-only.
    pub fn reset(&mut self) {
        self.fill_border();
        self.clear_interior();
    }

    /// Strokes an obstacle segment onto the grid.
    ///
    /// A cell is covered when the distance from its integer coordinates to the
    /// segment is at most half the stroke width.
    pub fn rasterize(&mut self, obstacle: &Obstacle, stroke_width: f32) {
        let start = self.to_frame(obstacle.x, obstacle.y);
        let end = {
            let (ex, ey) = obstacle.end();
            self.to_frame(ex, ey)
        };
        let half = stroke_width / 2.0;

        let Some((x0, x1)) = clip_span(start.0.min(end.0) - half, start.0.max(end.0) + half, self.width()) else {
            return;
        };
        let Some((y0, y1)) = clip_span(start.1.min(end.1) - half, start.1.max(end.1) + half, self.height()) else {
            return;
        };

        for cy in y0..=y1 {
            for cx in x0..=x1 {
                if segment_point_distance(start, end, (cx as f32, cy as f32)) <= half {
                    self.cells[[cy, cx]] = true;
                }
            }
        }
    }

    /// Rebuilds the whole surface for the given obstacle set.
    pub fn rebuild(&mut self, obstacles: &[Obstacle], stroke_width: f32) {
        self.reset();
        for obstacle in obstacles {
            self.rasterize(obstacle, stroke_width);
        }
    }

    /// Whether the cell at `(x, y)` is occupied. Cells off the surface count
    /// as occupied.
    pub fn is_occupied(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 {
            return true;
        }
        self.cells
            .get((y as usize, x as usize))
            .copied()
            .unwrap_or(true)
    }

    /// Marches from `(ox, oy)` along `angle` in unit steps and returns the
    /// distance to the first occupied cell, or [`NO_HIT`] if the ray leaves
    /// the surface first.
    pub fn distance_along_ray(&self, ox: f32, oy: f32, angle: f32) -> f32 {
        let (ay, ax) = angle.sin_cos();
        let (w, h) = (self.width() as f32, self.height() as f32);
        let (mut x, mut y) = (ox + ax, oy + ay);
        while x >= 0.0 && x < w && y >= 0.0 && y < h {
            if self.cells[[y as usize, x as usize]] {
                return xy_dist(ox, oy, x, y);
            }
            x += ax;
            y += ay;
        }
        NO_HIT
    }

    /// Fills `out` with one ray distance per slot, rays spaced evenly around
    /// `heading` starting at the heading itself.
    pub fn sense(&self, x: f32, y: f32, heading: f32, out: &mut [f32]) {
        let n = out.len() as f32;
        for (i, slot) in out.iter_mut().enumerate() {
            let angle = heading + std::f32::consts::TAU * i as f32 / n;
            *slot = self.distance_along_ray(x, y, angle);
        }
    }

    /// Whether any occupied cell lies within `radius` of `(x, y)`.
    pub fn is_colliding(&self, x: f32, y: f32, radius: u32) -> bool {
        disc_cells(x, y, radius).any(|(cx, cy)| self.is_occupied(cx, cy))
    }

    fn interior(&self, extent: usize) -> (usize, usize) {
        let start = self.border.min(extent);
        (start, extent.saturating_sub(self.border).max(start))
    }
}

/// Integer cell range covering `[lo, hi]`, clipped to `0..len`.
fn clip_span(lo: f32, hi: f32, len: usize) -> Option<(usize, usize)> {
    let max = len as f32 - 1.0;
    if len == 0 || hi < 0.0 || lo > max {
        return None;
    }
    Some((lo.max(0.0).ceil() as usize, hi.min(max).floor() as usize))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_params() -> Params {
        Params {
            width: 20,
            height: 10,
            border_width: 2,
            ..Params::default()
        }
    }

    #[test]
    fn test_border_bands_are_occupied() {
        let surface = OccupancySurface::new(&small_params());
        assert_eq!(surface.width(), 24);
        assert_eq!(surface.height(), 14);
        assert!(surface.is_occupied(0, 0));
        assert!(surface.is_occupied(1, 7));
        assert!(surface.is_occupied(23, 7));
        assert!(surface.is_occupied(10, 13));
        assert!(!surface.is_occupied(2, 2));
        assert!(!surface.is_occupied(21, 11));
        assert!(surface.is_occupied(-1, 5));
        assert!(surface.is_occupied(24, 5));
    }

    #[test]
    fn test_clip_span() {
        assert_eq!(clip_span(-3.5, 2.5, 10), Some((0, 2)));
        assert_eq!(clip_span(8.2, 15.0, 10), Some((9, 9)));
        assert_eq!(clip_span(-5.0, -1.0, 10), None);
        assert_eq!(clip_span(11.0, 12.0, 10), None);
    }

    #[test]
    fn test_ray_hits_border() {
        let surface = OccupancySurface::new(&small_params());
        // From the middle heading right, the border starts at x = 22.
        let d = surface.distance_along_ray(12.5, 7.5, 0.0);
        assert!((d - 10.0).abs() < 1e-4);
    }
}
