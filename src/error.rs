use thiserror::Error;

pub type TornadoResult<T> = Result<T, TornadoError>;

#[derive(Debug, Error)]
pub enum TornadoError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}
