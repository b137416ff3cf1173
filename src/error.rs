use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("degenerate domain: min == max == {value}")]
    DegenerateDomain { value: f64 },

    #[error("invalid viewport: left={left}, right={right}")]
    InvalidViewport { left: f64, right: f64 },

    #[error("no domain data is bound")]
    NoDataBound,

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
