use thiserror::Error;

/// Main error type for the pricing and consistency engine
#[derive(Error, Debug)]
pub enum GambitError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Input errors
    #[error("Degenerate odds quote: {value} is not an interpretable price")]
    DegenerateOdds { value: f64 },

    #[error("Insufficient market data: graph has {nodes} node(s), need at least 2")]
    InsufficientData { nodes: usize },

    // Numerical errors
    #[error("Numerical failure: {0}")]
    Numeric(String),

    // Serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for GambitError
pub type Result<T, E = GambitError> = std::result::Result<T, E>;
