use ndarray::{Array3, ArrayViewD, Ix3};

use crate::error::FilterError;
use crate::types::{Point2f, Quad};

/// Read an `(N, 4, 2)` array into boxes.
///
/// The 1-D empty array some detectors return for "no boxes" is accepted.
pub fn quads_from_array(dt_boxes: ArrayViewD<'_, f32>) -> Result<Vec<Quad>, FilterError> {
    let shape = dt_boxes.shape().to_vec();
    if shape.len() == 1 && shape[0] == 0 {
        return Ok(Vec::new());
    }
    if shape.len() != 3 || shape[1] != 4 || shape[2] != 2 {
        return Err(FilterError::array_shape(&shape));
    }

    let dt_boxes = dt_boxes
        .into_dimensionality::<Ix3>()
        .map_err(|_| FilterError::array_shape(&shape))?;

    let quads = dt_boxes
        .outer_iter()
        .map(|b| {
            let mut quad = [Point2f::default(); 4];
            for (i, p) in quad.iter_mut().enumerate() {
                *p = Point2f::new(b[[i, 0]], b[[i, 1]]);
            }
            quad
        })
        .collect();
    Ok(quads)
}

/// Validate ragged point lists. Fails on the first box without exactly 4
/// points, before any box is used.
pub fn quads_from_points(dt_boxes: &[Vec<[f32; 2]>]) -> Result<Vec<Quad>, FilterError> {
    dt_boxes
        .iter()
        .enumerate()
        .map(|(idx, pts)| match pts.as_slice() {
            [p0, p1, p2, p3] => Ok([(*p0).into(), (*p1).into(), (*p2).into(), (*p3).into()]),
            _ => Err(FilterError::box_points(idx, pts.len())),
        })
        .collect()
}

pub fn quads_to_array(quads: &[Quad]) -> Array3<f32> {
    Array3::from_shape_fn((quads.len(), 4, 2), |(n, i, c)| {
        let p = quads[n][i];
        if c == 0 {
            p.x
        } else {
            p.y
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, Array3};

    #[test]
    fn test_quads_from_array_layout() {
        let arr = Array3::from_shape_vec(
            (1, 4, 2),
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0],
        )
        .unwrap();
        let quads = quads_from_array(arr.view().into_dyn()).unwrap();
        assert_eq!(quads.len(), 1);
        assert_eq!(quads[0][0], Point2f::new(1.0, 2.0));
        assert_eq!(quads[0][3], Point2f::new(7.0, 8.0));

        assert_eq!(quads_to_array(&quads), arr);
    }

    #[test]
    fn test_quads_from_array_rejects_bad_shape() {
        let five_points = Array3::<f32>::zeros((2, 5, 2));
        assert!(matches!(
            quads_from_array(five_points.view().into_dyn()),
            Err(FilterError::InvalidInput(_))
        ));

        let flat = Array2::<f32>::zeros((4, 2));
        assert!(quads_from_array(flat.view().into_dyn()).is_err());
    }

    #[test]
    fn test_empty_output_shape() {
        let arr = quads_to_array(&[]);
        assert_eq!(arr.shape(), &[0, 4, 2]);
    }

    #[test]
    fn test_quads_from_points_reports_index() {
        let boxes = vec![
            vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
            vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.5, 0.5]],
        ];
        let err = quads_from_points(&boxes).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: box 1 has 5 points, expected 4");
    }
}
