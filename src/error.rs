use thiserror::Error;

pub type BoardResult<T> = Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid plot calibration: {0}")]
    InvalidCalibration(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
