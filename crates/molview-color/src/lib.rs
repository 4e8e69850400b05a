//! Molview color system
//!
//! This crate provides color handling for molview, including:
//! - The [`Color`] value type with hex parsing and 24-bit packing
//! - Built-in named palettes and fixed domain colors
//! - Gradient generation along ordered color stops
//! - [`ColorTheme`] variants and their engine-facing configuration

mod color;
mod error;
mod gradient;
mod palette;
mod theme;

pub use color::Color;
pub use error::{ColorError, ColorResult};
pub use gradient::generate_gradient;
pub use palette::{
    accent_color, PaletteRegistry, DEFAULT_CHAIN_COLORS, DEFAULT_UNIFORM_COLOR, PALETTE_NAMES,
    PLDDT_CONFIDENT, PLDDT_LOW, PLDDT_VERY_HIGH, PLDDT_VERY_LOW, SS_COIL_COLOR, SS_HELIX_COLOR,
    SS_SHEET_COLOR,
};
pub use theme::{ColorTheme, ThemeConfig, ThemeParams, MODE_NAMES};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{Color, ColorTheme, PaletteRegistry, ThemeConfig, ThemeParams};
}
