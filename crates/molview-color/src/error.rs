//! Error types for the color system

use thiserror::Error;

/// Errors that can occur when working with colors and themes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Unrecognized color mode name
    #[error("unknown color mode '{0}' (available: custom, element, residue, chain, secondary, rainbow, plddt)")]
    UnknownMode(String),

    /// Palette name not present in the built-in registry
    #[error("unknown palette '{0}' (available: rainbow, viridis, plasma, magma, blue-red, pastel)")]
    UnknownPalette(String),

    /// Malformed hex color literal
    #[error("invalid hex color '{0}' (expected six hex digits, optionally prefixed with '#')")]
    InvalidHex(String),
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
