//! Structure formats accepted by the embedded rendering engine

use std::fmt;

use serde::{Deserialize, Serialize};

/// Supported structure file formats
///
/// The embedded engine parses structure text itself; this type only tags the
/// payload so the engine knows which parser to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StructureFormat {
    /// Protein Data Bank format
    Pdb,
    /// Macromolecular Crystallographic Information File
    MmCif,
    /// MDL SDF/MOL format
    Sdf,
}

impl StructureFormat {
    /// Parse a format name, case-insensitively
    ///
    /// `cif` is folded into [`StructureFormat::MmCif`]. Returns `None` for
    /// anything outside the supported set.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "pdb" => Some(StructureFormat::Pdb),
            "cif" | "mmcif" => Some(StructureFormat::MmCif),
            "sdf" => Some(StructureFormat::Sdf),
            _ => None,
        }
    }

    /// The format tag consumed by the rendering engine
    pub fn as_str(&self) -> &'static str {
        match self {
            StructureFormat::Pdb => "pdb",
            StructureFormat::MmCif => "mmcif",
            StructureFormat::Sdf => "sdf",
        }
    }

    /// The conventional file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            StructureFormat::Pdb => "pdb",
            StructureFormat::MmCif => "cif",
            StructureFormat::Sdf => "sdf",
        }
    }

    /// A human-readable name for the format
    pub fn name(&self) -> &'static str {
        match self {
            StructureFormat::Pdb => "PDB",
            StructureFormat::MmCif => "mmCIF",
            StructureFormat::Sdf => "SDF",
        }
    }
}

impl fmt::Display for StructureFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_cif() {
        assert_eq!(StructureFormat::parse("cif"), Some(StructureFormat::MmCif));
        assert_eq!(StructureFormat::parse("mmcif"), Some(StructureFormat::MmCif));
        assert_eq!(StructureFormat::parse("MMCIF"), Some(StructureFormat::MmCif));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(StructureFormat::parse("mol2"), None);
        assert_eq!(StructureFormat::parse(""), None);
    }

    #[test]
    fn test_serialized_tag() {
        assert_eq!(
            serde_json::to_string(&StructureFormat::MmCif).unwrap(),
            "\"mmcif\""
        );
        assert_eq!(StructureFormat::Pdb.as_str(), "pdb");
    }
}
