/// Errors produced while acquiring a surface, building vectors, loading
/// config, or dumping recorded commands.
///
/// Drawing itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),
    #[error("vector must have exactly 2 components, got {len}")]
    InvalidDimension { len: usize },
    #[error("config parse error: {0}")]
    Config(String),
    #[error("serialization error: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for GridError {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e.to_string())
    }
}
