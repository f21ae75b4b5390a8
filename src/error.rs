use thiserror::Error;

pub type ViewResult<T> = Result<T, ViewError>;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("invalid surface geometry: left={left}, width={width}")]
    InvalidGeometry { left: f64, width: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
