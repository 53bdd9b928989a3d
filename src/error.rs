use std::io;

/// Errors produced while building batches, validating configuration or
/// running a forward/backward pass.
#[derive(Debug, thiserror::Error)]
pub enum TrainError {
    /// Two sequences that must describe the same batch differ in length.
    #[error("shape mismatch for {what}: got {got}, expected {expected}")]
    ShapeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },

    #[error("batch is empty")]
    EmptyBatch,

    #[error("cost history is empty")]
    EmptyHistory,

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("could not parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, TrainError>;

/// Checks that `got` points line up with the `expected` batch size.
pub(crate) fn check_len(what: &'static str, got: usize, expected: usize) -> Result<()> {
    if got != expected {
        return Err(TrainError::ShapeMismatch {
            what,
            got,
            expected,
        });
    }
    Ok(())
}
