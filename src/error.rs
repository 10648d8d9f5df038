use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("invalid brush configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid chart layout: inner={inner_width}x{inner_height}, {reason}")]
    InvalidLayout {
        inner_width: f64,
        inner_height: f64,
        reason: &'static str,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
