//! Color themes and their engine configuration
//!
//! A [`ColorTheme`] is a validated, renderer-independent description of how a
//! structure should be colored. The engine-facing configuration (theme name
//! plus a JSON parameter object, as consumed by the embedded Mol*-style
//! renderer) is produced separately by [`ColorTheme::to_engine_config`], so
//! malformed hex parameters surface at render time while unknown modes and
//! palettes are rejected up front.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::color::Color;
use crate::error::{ColorError, ColorResult};
use crate::palette::{
    PaletteRegistry, DEFAULT_UNIFORM_COLOR, SS_COIL_COLOR, SS_HELIX_COLOR, SS_SHEET_COLOR,
};

/// The recognized color mode names
pub const MODE_NAMES: [&str; 7] = [
    "custom", "element", "residue", "chain", "secondary", "rainbow", "plddt",
];

/// A validated color theme
///
/// Hex parameters are stored as strings; integer conversion happens in
/// [`ColorTheme::to_engine_config`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorTheme {
    /// Single uniform color for the whole structure
    Uniform { color: String },
    /// CPK coloring by element symbol
    ElementSymbol,
    /// Color by residue name
    ResidueName,
    /// Per-chain coloring using the renderer's built-in chain palette
    ChainId,
    /// Per-chain coloring with an explicit chain-to-color mapping
    ChainCustom { colors: BTreeMap<String, String> },
    /// Helix/sheet/coil coloring
    SecondaryStructure {
        helix: String,
        sheet: String,
        coil: String,
    },
    /// Gradient along the sequence using a named built-in palette
    RainbowSequence { palette: String },
    /// pLDDT confidence bands for predicted structures
    PlddtConfidence,
}

/// Optional parameters for [`ColorTheme::from_mode`]
#[derive(Debug, Clone, Default)]
pub struct ThemeParams {
    /// Color for the `custom` mode
    pub color: Option<String>,
    /// Palette name for the `rainbow` mode
    pub palette: Option<String>,
    /// Helix color for the `secondary` mode
    pub helix_color: Option<String>,
    /// Sheet color for the `secondary` mode
    pub sheet_color: Option<String>,
    /// Coil color for the `secondary` mode
    pub coil_color: Option<String>,
    /// Chain-to-color mapping for the `chain` mode
    pub chain_colors: Option<BTreeMap<String, String>>,
}

impl ThemeParams {
    /// Create empty parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the color for the `custom` mode
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the palette for the `rainbow` mode
    pub fn with_palette(mut self, palette: impl Into<String>) -> Self {
        self.palette = Some(palette.into());
        self
    }

    /// Set the helix color for the `secondary` mode
    pub fn with_helix_color(mut self, color: impl Into<String>) -> Self {
        self.helix_color = Some(color.into());
        self
    }

    /// Set the sheet color for the `secondary` mode
    pub fn with_sheet_color(mut self, color: impl Into<String>) -> Self {
        self.sheet_color = Some(color.into());
        self
    }

    /// Set the coil color for the `secondary` mode
    pub fn with_coil_color(mut self, color: impl Into<String>) -> Self {
        self.coil_color = Some(color.into());
        self
    }

    /// Set the chain-to-color mapping for the `chain` mode
    pub fn with_chain_colors(mut self, colors: BTreeMap<String, String>) -> Self {
        self.chain_colors = Some(colors);
        self
    }
}

/// Engine-facing theme configuration: a theme name and its JSON parameters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeConfig {
    /// Theme name as understood by the rendering engine
    pub name: &'static str,
    /// Parameter object passed to the engine alongside the name
    pub params: Value,
}

impl ColorTheme {
    /// Resolve a color theme from a mode name and parameters
    ///
    /// Mode names are case-insensitive; `uniform` is accepted as an alias for
    /// `custom`. Unknown modes and unknown rainbow palettes are rejected
    /// here; hex parameter values are only checked when the engine
    /// configuration is produced.
    pub fn from_mode(mode: &str, params: &ThemeParams) -> ColorResult<Self> {
        match mode.to_lowercase().as_str() {
            "custom" | "uniform" => Ok(ColorTheme::Uniform {
                color: params
                    .color
                    .clone()
                    .unwrap_or_else(|| DEFAULT_UNIFORM_COLOR.to_string()),
            }),
            "element" => Ok(ColorTheme::ElementSymbol),
            "residue" => Ok(ColorTheme::ResidueName),
            "chain" => match &params.chain_colors {
                Some(colors) if !colors.is_empty() => Ok(ColorTheme::ChainCustom {
                    colors: colors.clone(),
                }),
                _ => Ok(ColorTheme::ChainId),
            },
            "secondary" => Ok(ColorTheme::SecondaryStructure {
                helix: params
                    .helix_color
                    .clone()
                    .unwrap_or_else(|| SS_HELIX_COLOR.to_string()),
                sheet: params
                    .sheet_color
                    .clone()
                    .unwrap_or_else(|| SS_SHEET_COLOR.to_string()),
                coil: params
                    .coil_color
                    .clone()
                    .unwrap_or_else(|| SS_COIL_COLOR.to_string()),
            }),
            "rainbow" => {
                ColorTheme::rainbow(params.palette.as_deref().unwrap_or("rainbow"))
            }
            "plddt" => Ok(ColorTheme::PlddtConfidence),
            other => Err(ColorError::UnknownMode(other.to_string())),
        }
    }

    /// Create a rainbow theme, validating the palette name against the
    /// built-in registry
    pub fn rainbow(palette: &str) -> ColorResult<Self> {
        if !PaletteRegistry::new().contains(palette) {
            return Err(ColorError::UnknownPalette(palette.to_string()));
        }
        Ok(ColorTheme::RainbowSequence {
            palette: palette.to_string(),
        })
    }

    /// Create a uniform theme with the given color
    pub fn uniform(color: impl Into<String>) -> Self {
        ColorTheme::Uniform { color: color.into() }
    }

    /// The canonical mode name for this theme
    pub fn mode(&self) -> &'static str {
        match self {
            ColorTheme::Uniform { .. } => "custom",
            ColorTheme::ElementSymbol => "element",
            ColorTheme::ResidueName => "residue",
            ColorTheme::ChainId | ColorTheme::ChainCustom { .. } => "chain",
            ColorTheme::SecondaryStructure { .. } => "secondary",
            ColorTheme::RainbowSequence { .. } => "rainbow",
            ColorTheme::PlddtConfidence => "plddt",
        }
    }

    /// Produce the engine-facing configuration for this theme
    ///
    /// This is where hex literals are converted to the big-endian 24-bit
    /// integers the engine expects; malformed hex fails here.
    pub fn to_engine_config(&self) -> ColorResult<ThemeConfig> {
        let config = match self {
            ColorTheme::Uniform { color } => ThemeConfig {
                name: "uniform",
                params: json!({ "value": Color::from_hex(color)?.to_u24() }),
            },
            ColorTheme::ElementSymbol => ThemeConfig {
                name: "element-symbol",
                params: json!({}),
            },
            ColorTheme::ResidueName => ThemeConfig {
                name: "residue-name",
                params: json!({}),
            },
            ColorTheme::ChainId => ThemeConfig {
                name: "chain-id",
                params: json!({}),
            },
            // Chain colors stay as hex strings; the engine maps them itself.
            ColorTheme::ChainCustom { colors } => ThemeConfig {
                name: "custom-chain-colors",
                params: json!({ "colors": colors }),
            },
            ColorTheme::SecondaryStructure { helix, sheet, coil } => {
                let helix = Color::from_hex(helix)?.to_u24();
                let sheet = Color::from_hex(sheet)?.to_u24();
                let coil = Color::from_hex(coil)?.to_u24();
                ThemeConfig {
                    name: "secondary-structure",
                    params: json!({
                        "colors": {
                            "name": "custom",
                            "params": {
                                "alphaHelix": helix,
                                "threeTenHelix": helix,
                                "piHelix": helix,
                                "betaStrand": sheet,
                                "betaTurn": sheet,
                                "coil": coil,
                                "bend": coil,
                                "turn": coil,
                                "dna": coil,
                                "rna": coil,
                                "carbohydrate": coil,
                            }
                        },
                        // Exact RGB values; the engine must not recolor by scheme.
                        "saturation": -1,
                        "lightness": 0,
                    }),
                }
            }
            ColorTheme::RainbowSequence { palette } => {
                let colors = PaletteRegistry::new()
                    .get(palette)
                    .ok_or_else(|| ColorError::UnknownPalette(palette.clone()))?;
                ThemeConfig {
                    name: "rainbow-sequence",
                    params: json!({ "palette": palette, "colors": colors }),
                }
            }
            ColorTheme::PlddtConfidence => ThemeConfig {
                name: "plddt-confidence",
                params: json!({}),
            },
        };
        Ok(config)
    }
}
