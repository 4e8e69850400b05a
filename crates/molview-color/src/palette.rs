//! Named palette registry and fixed domain colors
//!
//! The registry is fixed domain data: palettes referenced by the rainbow
//! theme must exist here, and the set is not user-extensible.

use ahash::AHashMap;

use crate::color::Color;
use crate::error::ColorResult;

/// Default color for the uniform/custom theme (teal)
pub const DEFAULT_UNIFORM_COLOR: &str = "#4ECDC4";

/// Default chain colors, cycled through by the renderer in chain-id mode
pub const DEFAULT_CHAIN_COLORS: [&str; 10] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#FFA07A", "#98D8C8",
    "#F7DC6F", "#BB8FCE", "#85C1E2", "#F8B4B4", "#52B788",
];

/// Secondary structure defaults: helix (royal blue), sheet (lime green),
/// coil (light gray)
pub const SS_HELIX_COLOR: &str = "#0FA3FF";
pub const SS_SHEET_COLOR: &str = "#24B235";
pub const SS_COIL_COLOR: &str = "#E8E8E8";

/// pLDDT confidence band colors: very high (>90), confident (70-90),
/// low (50-70), very low (<50)
pub const PLDDT_VERY_HIGH: &str = "#0053D6";
pub const PLDDT_CONFIDENT: &str = "#65CBF3";
pub const PLDDT_LOW: &str = "#FFDB13";
pub const PLDDT_VERY_LOW: &str = "#FF7D45";

/// Named accent colors accepted anywhere a single color is expected
const ACCENT_COLORS: [(&str, &str); 10] = [
    ("teal", "#4ECDC4"),
    ("red", "#FF6B6B"),
    ("blue", "#4DABF7"),
    ("green", "#69DB7C"),
    ("yellow", "#FFD93D"),
    ("orange", "#FF922B"),
    ("purple", "#DA77F2"),
    ("pink", "#FF8CC8"),
    ("cyan", "#15AABF"),
    ("gray", "#868E96"),
];

const RAINBOW: [&str; 6] = ["#0000FF", "#00FFFF", "#00FF00", "#FFFF00", "#FF8000", "#FF0000"];
const VIRIDIS: [&str; 10] = [
    "#440154", "#482878", "#3e4989", "#31688e", "#26828e",
    "#1f9e89", "#35b779", "#6ece58", "#b5de2b", "#fde724",
];
const PLASMA: [&str; 10] = [
    "#0d0887", "#46039f", "#7201a8", "#9c179e", "#bd3786",
    "#d8576b", "#ed7953", "#fb9f3a", "#fdca26", "#f0f921",
];
const MAGMA: [&str; 9] = [
    "#000004", "#1c1044", "#4f127b", "#812581", "#b5367a",
    "#e55964", "#fb8861", "#fec287", "#fcfdbf",
];
const BLUE_RED: [&str; 2] = ["#0000FF", "#FF0000"];
const PASTEL: [&str; 6] = ["#FFB3BA", "#FFDFBA", "#FFFFBA", "#BAFFC9", "#BAE1FF", "#E0BBE4"];

/// Names of all built-in palettes, in registration order
pub const PALETTE_NAMES: [&str; 6] = ["rainbow", "viridis", "plasma", "magma", "blue-red", "pastel"];

/// Registry of built-in rainbow palettes
#[derive(Debug)]
pub struct PaletteRegistry {
    by_name: AHashMap<&'static str, &'static [&'static str]>,
}

impl PaletteRegistry {
    /// Create the registry with all built-in palettes
    pub fn new() -> Self {
        let mut by_name: AHashMap<&'static str, &'static [&'static str]> = AHashMap::new();
        by_name.insert("rainbow", &RAINBOW);
        by_name.insert("viridis", &VIRIDIS);
        by_name.insert("plasma", &PLASMA);
        by_name.insert("magma", &MAGMA);
        by_name.insert("blue-red", &BLUE_RED);
        by_name.insert("pastel", &PASTEL);
        PaletteRegistry { by_name }
    }

    /// Check whether a palette name exists
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Get a palette's hex color sequence by name
    pub fn get(&self, name: &str) -> Option<&'static [&'static str]> {
        self.by_name.get(name).copied()
    }

    /// Get a palette parsed into [`Color`] values
    pub fn colors(&self, name: &str) -> Option<ColorResult<Vec<Color>>> {
        self.get(name)
            .map(|hexes| hexes.iter().map(|h| Color::from_hex(h)).collect())
    }
}

impl Default for PaletteRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Look up an accent color by name (e.g. `"teal"`)
pub fn accent_color(name: &str) -> Option<&'static str> {
    ACCENT_COLORS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, hex)| *hex)
}
