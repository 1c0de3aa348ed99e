//! Geometric utility functions for distance calculations and cell coverage.

use geo::algorithm::Distance;
use geo::{Euclidean, Line, Point};

/// Euclidean distance between `(x, y)` and `(p, q)`.
#[inline]
pub fn xy_dist(x: f32, y: f32, p: f32, q: f32) -> f32 {
    (x - p).hypot(y - q)
}

/// Calculates the minimum distance between a line segment and a point.
///
/// # Arguments
///
/// * `line_start` - Starting point of the line segment
/// * `line_end` - Ending point of the line segment
/// * `point` - The point to measure from
pub fn segment_point_distance(line_start: (f32, f32), line_end: (f32, f32), point: (f32, f32)) -> f32 {
    let p = Point::new(point.0, point.1);
    let line = Line::new(
        Point::new(line_start.0, line_start.1),
        Point::new(line_end.0, line_end.1),
    );
    Euclidean.distance(&p, &line)
}

/// Integer cells covered by a disc of `radius` centred on `(cx, cy)`.
///
/// Candidates come from the square `[⌊cx⌋ - r, ⌊cx⌋ + r]` (truncating toward
/// zero), and a cell is kept when the distance from the centre to the cell's
/// integer coordinates is at most `radius`.
pub fn disc_cells(cx: f32, cy: f32, radius: u32) -> impl Iterator<Item = (i64, i64)> {
    let r = i64::from(radius);
    let rf = radius as f32;
    let (left, top) = (cx as i64 - r, cy as i64 - r);
    let (right, bottom) = (cx as i64 + r, cy as i64 + r);
    (top..=bottom).flat_map(move |y| {
        (left..=right)
            .filter(move |&x| xy_dist(cx, cy, x as f32, y as f32) <= rf)
            .map(move |x| (x, y))
    })
}
