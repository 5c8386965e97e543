use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LifeError {
    #[error("invalid grid dimension: {rows} rows x {cols} cols")]
    InvalidDimension { rows: u32, cols: u32 },
    #[error("invalid buffer index {0}, expected 0 or 1")]
    InvalidBuffer(usize),
    #[error("cell {row}, {col} out of bounds")]
    OutOfBounds { row: i64, col: i64 },
    #[error("max updates per second must be positive")]
    InvalidFrameRate,
}
