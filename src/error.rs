//! Error types shared by the client code and the demo.

use thiserror::Error;

/// Errors that can occur while writing client or demo output.
///
/// Creators and products never fail; only the output stream can.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Writing to the output stream failed.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
