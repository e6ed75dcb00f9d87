#[derive(thiserror::Error, Debug)]
pub enum FilterError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl FilterError {
    pub(crate) fn box_points(index: usize, found: usize) -> Self {
        FilterError::InvalidInput(format!(
            "box {} has {} points, expected 4",
            index, found
        ))
    }

    pub(crate) fn array_shape(shape: &[usize]) -> Self {
        FilterError::InvalidInput(format!(
            "box array has shape {:?}, expected (N, 4, 2)",
            shape
        ))
    }

    pub(crate) fn image_shape(shape: &[usize]) -> Self {
        FilterError::InvalidInput(format!(
            "image shape {:?} needs at least (height, width)",
            shape
        ))
    }
}
