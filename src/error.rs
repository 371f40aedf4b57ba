//! Error handling types and utilities.

use crate::types::WindowHandle;

/// A specialized Result type for winhop operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()`
/// and `.with_context()` at the binary boundary.
pub type Result<T> = anyhow::Result<T>;

/// Errors surfaced by the platform boundary.
///
/// Window enumeration failures are fatal at startup (no candidates can be
/// built); everything else on the platform side is recovered locally —
/// process inspection failures degrade to an empty executable name and never
/// reach this type.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PlatformError {
    #[error("window enumeration is not supported on this platform")]
    Unsupported,
    #[error("failed to enumerate open windows: {0}")]
    Enumeration(String),
    #[error("failed to activate window {handle:?}: {reason}")]
    Activation {
        handle: WindowHandle,
        reason: String,
    },
}
