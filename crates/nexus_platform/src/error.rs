//! Platform error types

use thiserror::Error;

/// Platform-related errors
#[derive(Error, Debug)]
pub enum PlatformError {
    /// Failed to initialize platform
    #[error("Platform initialization failed: {0}")]
    InitFailed(String),

    /// Platform not supported on this OS
    #[error("Platform not supported: {0}")]
    Unsupported(String),

    /// Failed to list or open a bundled asset
    #[error("Asset access failed: {0}")]
    AssetAccess(String),

    /// Application launch hook failed
    #[error("Launch failed: {0}")]
    Launch(String),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
