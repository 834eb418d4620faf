//! Error type for fallible terrain operations.

use thiserror::Error;

/// Failures surfaced by the grid manager and its configuration.
#[derive(Debug, Error)]
pub enum TerrainError {
  /// The worker pool could not be created.
  #[error("failed to build worker pool: {0}")]
  WorkerPool(#[from] rayon::ThreadPoolBuildError),

  /// A generation pass was requested while another one is running.
  #[error("a generation pass is already in progress")]
  GenerationInProgress,

  /// Configuration rejected by validation.
  #[error("invalid terrain configuration: {0}")]
  InvalidConfig(String),
}

/// Convenience alias for terrain results.
pub type TerrainResult<T> = Result<T, TerrainError>;
