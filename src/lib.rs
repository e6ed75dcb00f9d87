//! # detfilter - Text Detection Box Post-Processing
//!
//! Pure Rust clean-up stage for quadrilaterals coming out of a text detector
//! (DBNet, EAST and friends), ahead of cropping and recognition.
//!
//! ## Features
//!
//! - **Canonical order**: every box comes back as top-left, top-right,
//!   bottom-right, bottom-left
//! - **Size filter**: boxes with a side of 10px or less are dropped
//! - **Margin expansion**: axis-aligned boxes grow by an aspect-dependent
//!   margin, clamped to the image
//! - **No runtime**: plain `ndarray` / slice input, no model or image I/O
//!
//! ## Quick Start
//!
//! ```rust
//! use detfilter::filter_tag_det_res;
//! use ndarray::arr3;
//!
//! let dt_boxes = arr3(&[[[100.0f32, 20.0], [0.0, 0.0], [0.0, 20.0], [100.0, 0.0]]]);
//! let boxes = filter_tag_det_res(dt_boxes.view().into_dyn(), &[1000, 1000, 3])?;
//!
//! assert_eq!(boxes.shape(), &[1, 4, 2]);
//! assert_eq!(boxes[[0, 2, 0]], 104.0);
//! # Ok::<(), detfilter::FilterError>(())
//! ```

// Core modules
mod error;
mod expand;
mod geometry;
mod postprocess;
mod tensor;
mod types;

// FFI module for C bindings
#[cfg(feature = "ffi")]
pub mod ffi;

// Public API exports
pub use crate::error::FilterError;
pub use crate::expand::expand_det_res;
pub use crate::geometry::{
    bounding_rect, clip_det_res, order_points_clockwise, quad_to_polygon, sorted_boxes,
    BoxMetrics,
};
pub use crate::postprocess::DetResFilter;
pub use crate::tensor::{quads_from_array, quads_from_points, quads_to_array};
pub use crate::types::{ExpandConfig, FilterConfig, ImageShape, Point2f, Quad};

use ndarray::{Array3, ArrayViewD};

/// Filter `(N, 4, 2)` detector boxes for an image of shape `(h, w[, c])`
/// with the reference settings.
pub fn filter_tag_det_res(
    dt_boxes: ArrayViewD<'_, f32>,
    image_shape: &[usize],
) -> Result<Array3<f32>, FilterError> {
    DetResFilter::default().filter_tag_det_res(dt_boxes, image_shape)
}
