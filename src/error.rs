use thiserror::Error;

/// Startup-fatal failures. Everything else in the gallery core is
/// defensive: empty source data disables the background, out-of-range
/// selections degrade to no-ops, and nothing performs I/O.
#[derive(Debug, Error)]
pub enum GalleryError {
    /// No drawing surface can be created on this system. Reported once
    /// at startup; there is no recovery.
    #[error("drawing surface unsupported: {0}")]
    UnsupportedSurface(String),
}
