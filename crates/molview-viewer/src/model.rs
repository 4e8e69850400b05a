//! Data model for loaded structures and display settings

use molview_io::StructureFormat;
use serde::Serialize;

/// One loaded structure: raw text payload plus its display metadata
///
/// Models are created by `add_structure` and never mutated afterwards; the
/// raw text is handed verbatim to the embedded engine, which does all
/// parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureModel {
    /// Display name shown in the viewer's structure list
    pub name: String,
    /// Raw structure text
    pub data: String,
    /// Declared or detected format tag
    pub format: StructureFormat,
    /// Keep hydrogen atoms (accepted for API compatibility, not acted upon)
    #[serde(skip)]
    pub keep_hydrogens: bool,
}

/// Representation style toggles
///
/// Cartoon is the default representation; the others are off until enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleFlags {
    pub cartoon: bool,
    pub stick: bool,
    pub sphere: bool,
    pub line: bool,
}

impl Default for StyleFlags {
    fn default() -> Self {
        StyleFlags {
            cartoon: true,
            stick: false,
            sphere: false,
            line: false,
        }
    }
}

/// Molecular surface settings
///
/// The override color is a first-class field here; it is merged into the
/// serialized theme parameters at render time, which is what the engine
/// contract expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceSettings {
    /// Whether the surface representation is shown
    pub enabled: bool,
    /// Opacity in percent, always within [0, 100]
    pub opacity: u8,
    /// Override color when not inheriting from the active theme
    pub color: Option<String>,
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        SurfaceSettings {
            enabled: false,
            opacity: 40,
            color: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_defaults() {
        let styles = StyleFlags::default();
        assert!(styles.cartoon);
        assert!(!styles.stick && !styles.sphere && !styles.line);
    }

    #[test]
    fn test_model_serializes_without_hydrogens_flag() {
        let model = StructureModel {
            name: "Structure 1".to_string(),
            data: "HEADER".to_string(),
            format: StructureFormat::Pdb,
            keep_hydrogens: true,
        };
        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["name"], "Structure 1");
        assert_eq!(json["format"], "pdb");
        assert!(json.get("keep_hydrogens").is_none());
    }
}
