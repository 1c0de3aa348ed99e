//! Drifting line-segment obstacles.

use std::f32::consts::TAU;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::params::Params;

/// A straight segment that drifts across the arena at constant velocity.
///
/// `(x, y)` is the anchor in arena coordinates; the segment extends `length`
/// units from it along `angle`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Anchor x in arena coordinates.
    pub x: f32,
    /// Anchor y in arena coordinates.
    pub y: f32,
    /// Direction of the segment from its anchor.
    pub angle: f32,
    /// Per-tick x velocity. Never within 0.5 of zero.
    pub dx: f32,
    /// Per-tick y velocity. Never within 0.5 of zero.
    pub dy: f32,
    /// Segment length.
    pub length: f32,
}

impl Obstacle {
    /// Creates an obstacle anchored somewhere inside the arena.
    pub fn new_random<R: Rng + ?Sized>(params: &Params, rng: &mut R) -> Self {
        let width = params.width as f32;
        Self {
            x: rng.random_range(0..params.width) as f32,
            y: rng.random_range(0..params.height) as f32,
            angle: rng.random_range(0.0..TAU),
            dx: drift_speed(rng),
            dy: drift_speed(rng),
            length: rng.random_range(0..params.width) as f32 / 3.0 + width / 6.0,
        }
    }

    /// Moves the anchor by one tick of velocity.
    pub fn advance(&mut self) {
        self.x += self.dx;
        self.y += self.dy;
    }

    /// Far end of the segment in arena coordinates.
    pub fn end(&self) -> (f32, f32) {
        let (sin, cos) = self.angle.sin_cos();
        (self.x + cos * self.length, self.y + sin * self.length)
    }

    /// Whether the anchor has drifted at least one segment length past any
    /// edge of a `frame_width × frame_height` area.
    pub fn is_out_of_bounds(&self, frame_width: f32, frame_height: f32) -> bool {
        let l = self.length;
        self.x - frame_width >= l || -self.x >= l || self.y - frame_height >= l || -self.y >= l
    }
}

/// Nonzero uniform draw from `[-1, 1)`, pushed half a unit away from zero.
fn drift_speed<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    let mut v = 0.0f32;
    while v == 0.0 {
        v = rng.random_range(-1.0..1.0);
    }
    v + 0.5f32.copysign(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_obstacles_drift_fast_enough() {
        let params = Params::default();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let o = Obstacle::new_random(&params, &mut rng);
            assert!(o.dx.abs() >= 0.5 && o.dx.abs() < 1.5);
            assert!(o.dy.abs() >= 0.5 && o.dy.abs() < 1.5);
            assert!(o.x >= 0.0 && o.x < params.width as f32);
            assert!(o.y >= 0.0 && o.y < params.height as f32);
            assert!(o.length >= params.width as f32 / 6.0);
        }
    }

    #[test]
    fn test_out_of_bounds_needs_full_length() {
        let mut o = Obstacle {
            x: -9.0,
            y: 50.0,
            angle: 0.0,
            dx: -1.0,
            dy: 0.5,
            length: 10.0,
        };
        assert!(!o.is_out_of_bounds(100.0, 100.0));
        o.advance();
        assert!(o.is_out_of_bounds(100.0, 100.0));
    }

    #[test]
    fn test_end_follows_angle() {
        let o = Obstacle {
            x: 1.0,
            y: 2.0,
            angle: std::f32::consts::FRAC_PI_2,
            dx: 1.0,
            dy: 1.0,
            length: 4.0,
        };
        let (ex, ey) = o.end();
        assert!((ex - 1.0).abs() < 1e-5);
        assert!((ey - 6.0).abs() < 1e-5);
    }
}
