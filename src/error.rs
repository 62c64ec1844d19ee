use thiserror::Error;

/// Errors raised by simulation transitions that reject their input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// Cell coordinates outside the current board
    #[error("cell ({row}, {col}) is outside a {size}x{size} board")]
    InvalidIndex { row: usize, col: usize, size: usize },

    /// Requested grid size outside the configured bounds
    #[error("grid size {requested} is outside {min}..={max}")]
    InvalidGridSize {
        requested: usize,
        min: usize,
        max: usize,
    },

    /// Replacement board does not match the current grid size
    #[error("generation is {actual}x{actual}, expected {expected}x{expected}")]
    GenerationSizeMismatch { expected: usize, actual: usize },

    /// A row of a row-list board has the wrong length
    #[error("row {row} has {len} cells, expected {size}")]
    JaggedGeneration { row: usize, len: usize, size: usize },
}

/// Errors from reading or writing the settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("could not determine config directory")]
    NoConfigDir,
}
