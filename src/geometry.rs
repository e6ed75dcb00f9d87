use std::cmp::Ordering;

use geo_types::{Coord, LineString, Polygon, Rect};

use crate::types::{ImageShape, Point2f, Quad};

/// Relabel four corners as [top-left, top-right, bottom-right, bottom-left].
///
/// The two smallest-x points form the left side, the other two the right
/// side; within each side the smaller y is on top. Both sorts are stable,
/// so coincident coordinates (`-0.0` and `0.0` included) keep their input
/// order. Degenerate boxes are not rejected here, the size filter deals
/// with them.
pub fn order_points_clockwise(pts: Quad) -> Quad {
    let mut x_sorted = pts;
    x_sorted.sort_by(|a, b| cmp_coord(a.x, b.x));

    let (mut tl, mut bl) = (x_sorted[0], x_sorted[1]);
    if cmp_coord(tl.y, bl.y).is_gt() {
        std::mem::swap(&mut tl, &mut bl);
    }

    let (mut tr, mut br) = (x_sorted[2], x_sorted[3]);
    if cmp_coord(tr.y, br.y).is_gt() {
        std::mem::swap(&mut tr, &mut br);
    }

    [tl, tr, br, bl]
}

/// Numeric order with every NaN, whatever its sign, ranked after all numbers.
fn cmp_coord(a: f32, b: f32) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
    }
}

/// Truncated extent `hi - lo`, saturated into `i32`.
fn truncated_extent(lo: f32, hi: f32) -> i32 {
    let d = (hi as i64).saturating_sub(lo as i64);
    d.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Axis-aligned rectangle enclosing all four points.
pub fn bounding_rect(pts: &Quad) -> Rect<f32> {
    let xmin = pts.iter().map(|p| p.x).fold(f32::INFINITY, f32::min);
    let xmax = pts.iter().map(|p| p.x).fold(f32::NEG_INFINITY, f32::max);
    let ymin = pts.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
    let ymax = pts.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max);

    Rect::new(Coord { x: xmin, y: ymin }, Coord { x: xmax, y: ymax })
}

pub fn quad_to_polygon(pts: &Quad) -> Polygon<f32> {
    let ring: Vec<(f32, f32)> = pts.iter().map(|p| (p.x, p.y)).collect();
    Polygon::new(LineString::from(ring), vec![])
}

/// Size and shape measurements of an ordered box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxMetrics {
    pub bbox_width: i32,
    pub bbox_height: i32,
    pub rect_width: i32,
    pub rect_height: i32,
    /// |tl.x - bl.x|
    pub diffw: f32,
    /// |tl.y - tr.y|
    pub diffh: f32,
}

impl BoxMetrics {
    /// `box_pts` must already be in clockwise order.
    pub fn from_ordered(box_pts: &Quad) -> Self {
        // Extents and side lengths are truncated toward zero like the
        // reference pipeline's int() casts; NaN truncates to 0. Extents
        // beyond i32 saturate instead of overflowing.
        let rect = bounding_rect(box_pts);

        Self {
            bbox_width: truncated_extent(rect.min().x, rect.max().x),
            bbox_height: truncated_extent(rect.min().y, rect.max().y),
            rect_width: box_pts[0].distance(&box_pts[1]) as i32,
            rect_height: box_pts[0].distance(&box_pts[3]) as i32,
            diffw: (box_pts[0].x - box_pts[3].x).abs(),
            diffh: (box_pts[0].y - box_pts[1].y).abs(),
        }
    }

    pub fn is_too_small(&self, min_side: i32) -> bool {
        self.rect_width <= min_side || self.rect_height <= min_side
    }

    pub fn is_axis_aligned(&self, tol: f32) -> bool {
        self.diffh <= tol && self.diffw <= tol
    }
}

/// Clamp every point into `[0, width] x [0, height]`.
pub fn clip_det_res(mut points: Quad, shape: ImageShape) -> Quad {
    let w = shape.width as f32;
    let h = shape.height as f32;
    for p in &mut points {
        p.x = p.x.max(0.0).min(w);
        p.y = p.y.max(0.0).min(h);
    }
    points
}

/// Sort boxes into reading order: top to bottom, then left to right.
///
/// Neighbours whose top-left corners sit within 10px vertically are treated
/// as one line and ordered by x.
pub fn sorted_boxes(dt_boxes: &mut [Quad]) {
    dt_boxes.sort_by_key(|b| (b[0].y as i32, b[0].x as i32));

    for i in 0..dt_boxes.len().saturating_sub(1) {
        let (cur, next): (Point2f, Point2f) = (dt_boxes[i][0], dt_boxes[i + 1][0]);
        if (next.y - cur.y).abs() < 10.0 && next.x < cur.x {
            dt_boxes.swap(i, i + 1);
        }
    }
}
