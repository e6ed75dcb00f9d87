use ndarray::{Array3, ArrayViewD};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::FilterError;
use crate::expand::expand_det_res;
use crate::geometry::{clip_det_res, order_points_clockwise, BoxMetrics};
use crate::tensor::{quads_from_array, quads_from_points, quads_to_array};
use crate::types::{FilterConfig, ImageShape, Quad};

/// Cleans up raw detector quadrilaterals before cropping.
///
/// Every box is put into clockwise order, boxes with a side of 10px or less
/// are dropped, and boxes that are (nearly) axis-aligned get an outward
/// margin. Survivors keep their input order.
#[derive(Debug, Clone, Default)]
pub struct DetResFilter {
    pub cfg: FilterConfig,
}

impl DetResFilter {
    pub fn new(cfg: FilterConfig) -> Self {
        Self { cfg }
    }

    /// Process one box. `None` means it was filtered out.
    pub fn filter_box(&self, box_pts: Quad, shape: ImageShape) -> Option<Quad> {
        let box_pts = order_points_clockwise(box_pts);
        let metrics = BoxMetrics::from_ordered(&box_pts);

        if metrics.is_too_small(self.cfg.min_side) {
            tracing::trace!(
                rect_width = metrics.rect_width,
                rect_height = metrics.rect_height,
                "dropping undersized box"
            );
            return None;
        }

        let mut out = if metrics.is_axis_aligned(self.cfg.axis_aligned_tol) {
            tracing::trace!(
                bbox_width = metrics.bbox_width,
                bbox_height = metrics.bbox_height,
                "expanding axis-aligned box"
            );
            expand_det_res(
                box_pts,
                metrics.bbox_height,
                metrics.bbox_width,
                shape,
                &self.cfg.expand,
            )
        } else {
            box_pts
        };

        if self.cfg.clip_to_image {
            out = clip_det_res(out, shape);
        }
        Some(out)
    }

    pub fn filter(&self, dt_boxes: &[Quad], shape: ImageShape) -> Vec<Quad> {
        #[cfg(feature = "parallel")]
        let kept: Vec<Quad> = dt_boxes
            .par_iter()
            .filter_map(|b| self.filter_box(*b, shape))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let kept: Vec<Quad> = dt_boxes
            .iter()
            .filter_map(|b| self.filter_box(*b, shape))
            .collect();

        tracing::debug!(
            input = dt_boxes.len(),
            kept = kept.len(),
            height = shape.height,
            width = shape.width,
            "filtered detection boxes"
        );
        kept
    }

    /// Filter ragged point lists; every box must carry exactly 4 points.
    pub fn filter_points(
        &self,
        dt_boxes: &[Vec<[f32; 2]>],
        shape: ImageShape,
    ) -> Result<Vec<Quad>, FilterError> {
        let quads = quads_from_points(dt_boxes)?;
        Ok(self.filter(&quads, shape))
    }

    /// Array form: `(N, 4, 2)` boxes and an `(h, w[, c])` image shape in,
    /// `(N_kept, 4, 2)` boxes out.
    pub fn filter_tag_det_res(
        &self,
        dt_boxes: ArrayViewD<'_, f32>,
        image_shape: &[usize],
    ) -> Result<Array3<f32>, FilterError> {
        let shape = ImageShape::from_hwc(image_shape)?;
        let quads = quads_from_array(dt_boxes)?;
        Ok(quads_to_array(&self.filter(&quads, shape)))
    }
}
