use serde::{Deserialize, Serialize};

use crate::error::FilterError;

/// A detected corner. Serialized as `[x, y]`, the layout detectors emit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 2]", into = "[f32; 2]")]
pub struct Point2f {
    pub x: f32,
    pub y: f32,
}

impl Point2f {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point2f) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<[f32; 2]> for Point2f {
    fn from(p: [f32; 2]) -> Self {
        Self::new(p[0], p[1])
    }
}

impl From<Point2f> for [f32; 2] {
    fn from(p: Point2f) -> Self {
        [p.x, p.y]
    }
}

/// Box points: [top-left, top-right, bottom-right, bottom-left] once ordered
pub type Quad = [Point2f; 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageShape {
    pub height: u32,
    pub width: u32,
}

impl ImageShape {
    pub fn new(height: u32, width: u32) -> Self {
        Self { height, width }
    }

    /// Build from an `(h, w[, c])` shape tuple; the channel count is ignored.
    pub fn from_hwc(shape: &[usize]) -> Result<Self, FilterError> {
        if shape.len() < 2 {
            return Err(FilterError::image_shape(shape));
        }
        let height = u32::try_from(shape[0]).map_err(|_| FilterError::image_shape(shape))?;
        let width = u32::try_from(shape[1]).map_err(|_| FilterError::image_shape(shape))?;
        Ok(Self { height, width })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpandConfig {
    /// height / width at or above this marks a tall box
    pub tall_ratio: f64,
    /// margin for tall boxes, as a fraction of the box width
    pub tall_factor: f64,
    /// width / height at or above this marks a wide box
    pub wide_ratio: f64,
    /// margin for wide boxes, as a fraction of the box height
    pub wide_factor: f64,
    /// margin for everything else, as a fraction of the box height
    pub base_factor: f64,
}

impl Default for ExpandConfig {
    fn default() -> Self {
        Self {
            tall_ratio: 2.0,
            tall_factor: 0.20,
            wide_ratio: 3.0,
            wide_factor: 0.20,
            base_factor: 0.10,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Boxes whose truncated side length is at or below this are dropped.
    pub min_side: i32,
    /// Boxes with both `diffh` and `diffw` at or below this count as axis-aligned
    /// and get expanded.
    pub axis_aligned_tol: f32,
    pub expand: ExpandConfig,
    /// Clamp every surviving box into the image, not only expanded ones.
    pub clip_to_image: bool,
}

impl FilterConfig {
    /// PaddleOCR `filter_tag_det_res` values.
    pub fn ppocr() -> Self {
        Self {
            min_side: 10,
            axis_aligned_tol: 10.0,
            expand: ExpandConfig::default(),
            clip_to_image: false,
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self::ppocr()
    }
}
