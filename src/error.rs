use thiserror::Error;

pub type WidgetResult<T> = Result<T, WidgetError>;

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
