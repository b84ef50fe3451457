use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("degenerate plot area: {0}")]
    DegeneratePlotArea(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
