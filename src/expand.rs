use crate::types::{ExpandConfig, ImageShape, Quad};

impl ExpandConfig {
    /// Margin added on every side of a box with the given bounding extents.
    pub fn margin(&self, bbox_height: i32, bbox_width: i32) -> f64 {
        let h = bbox_height as f64;
        let w = bbox_width as f64;
        if h / w >= self.tall_ratio {
            w * self.tall_factor
        } else if w / h >= self.wide_ratio {
            h * self.wide_factor
        } else {
            h * self.base_factor
        }
    }
}

/// Grow an ordered, axis-aligned box outward and clamp it to the image.
///
/// Left/top edges move toward 0, right/bottom edges toward the image size.
/// Every coordinate ends up truncated to an integer value.
pub fn expand_det_res(
    mut points: Quad,
    bbox_height: i32,
    bbox_width: i32,
    shape: ImageShape,
    cfg: &ExpandConfig,
) -> Quad {
    let expand = cfg.margin(bbox_height, bbox_width);
    let img_w = shape.width as f64;
    let img_h = shape.height as f64;

    let grow_low = |v: f32| (v as f64 - expand).max(0.0).trunc() as f32;
    let grow_x = |v: f32| (v as f64 + expand).min(img_w).trunc() as f32;
    let grow_y = |v: f32| (v as f64 + expand).min(img_h).trunc() as f32;

    points[0].x = grow_low(points[0].x);
    points[1].x = grow_x(points[1].x);
    points[3].x = grow_low(points[3].x);
    points[2].x = grow_x(points[2].x);

    points[0].y = grow_low(points[0].y);
    points[1].y = grow_low(points[1].y);
    points[3].y = grow_y(points[3].y);
    points[2].y = grow_y(points[2].y);

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point2f;

    fn quad(pts: [(f32, f32); 4]) -> Quad {
        pts.map(|(x, y)| Point2f::new(x, y))
    }

    #[test]
    fn test_margin_bands() {
        let cfg = ExpandConfig::default();
        // tall: 0.2 * width
        assert!((cfg.margin(100, 20) - 4.0).abs() < 1e-9);
        // wide: 0.2 * height
        assert!((cfg.margin(20, 100) - 4.0).abs() < 1e-9);
        // exactly 3:1 is still wide
        assert!((cfg.margin(10, 30) - 2.0).abs() < 1e-9);
        // moderate: 0.1 * height
        assert!((cfg.margin(40, 60) - 4.0).abs() < 1e-9);
        // exactly 2:1 tall wins over the other bands
        assert!((cfg.margin(60, 30) - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_expand_wide_box() {
        let b = quad([(0.0, 0.0), (100.0, 0.0), (100.0, 20.0), (0.0, 20.0)]);
        let out = expand_det_res(b, 20, 100, ImageShape::new(1000, 1000), &ExpandConfig::default());
        assert_eq!(
            out,
            quad([(0.0, 0.0), (104.0, 0.0), (104.0, 24.0), (0.0, 24.0)])
        );
    }

    #[test]
    fn test_expand_clamps_to_image() {
        let b = quad([(0.0, 0.0), (100.0, 0.0), (100.0, 20.0), (0.0, 20.0)]);
        let out = expand_det_res(b, 20, 100, ImageShape::new(22, 50), &ExpandConfig::default());
        assert_eq!(out[1].x, 50.0);
        assert_eq!(out[2].x, 50.0);
        assert_eq!(out[2].y, 22.0);
        assert_eq!(out[3].y, 22.0);
    }

    #[test]
    fn test_expand_truncates() {
        // 40x33 box: margin 3.3
        let b = quad([(10.5, 10.5), (50.5, 10.5), (50.5, 43.5), (10.5, 43.5)]);
        let out = expand_det_res(b, 33, 40, ImageShape::new(100, 100), &ExpandConfig::default());
        assert_eq!(
            out,
            quad([(7.0, 7.0), (53.0, 7.0), (53.0, 46.0), (7.0, 46.0)])
        );
    }
}
