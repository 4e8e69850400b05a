//! Content-based structure format detection
//!
//! Classifies raw structure text into one of the supported formats. The
//! check order matters: mmCIF and SDF markers are tested before the PDB
//! keyword scan, because PDB record prefixes can coincidentally appear inside
//! non-PDB text. Detection never fails; PDB is the fallback.

use crate::format::StructureFormat;

/// PDB record keywords commonly found at the start of a file
///
/// Matched by exact equality against the trimmed 6-character record prefix,
/// so e.g. `ORIGX1` intentionally does not match `ORIGX`.
const PDB_KEYWORDS: [&str; 19] = [
    "HEADER", "TITLE", "COMPND", "SOURCE", "KEYWDS", "EXPDTA", "AUTHOR", "REVDAT", "REMARK",
    "SEQRES", "HELIX", "SHEET", "ATOM", "HETATM", "MODEL", "CRYST1", "ORIGX", "SCALE", "MTRIX",
];

/// Detect the structure format from raw text
///
/// Scans the first 50 non-blank lines. Defaults to [`StructureFormat::Pdb`]
/// when nothing matches (including empty input).
pub fn detect_format(data: &str) -> StructureFormat {
    let lines: Vec<&str> = data
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(50)
        .collect();

    if lines.is_empty() {
        return StructureFormat::Pdb;
    }

    // mmCIF: data block header on the first line, or tag/loop keywords anywhere
    if lines[0].to_lowercase().starts_with("data_") {
        return StructureFormat::MmCif;
    }
    for line in &lines {
        let lower = line.to_lowercase();
        if lower.starts_with("loop_") || lower.starts_with("_atom_site") || lower.starts_with("_cell")
        {
            return StructureFormat::MmCif;
        }
    }

    // SDF: record terminator, connection-table end, or counts-line version
    let upper = data.to_uppercase();
    if upper.contains("$$$$")
        || upper.contains("M  END")
        || upper.contains("V2000")
        || upper.contains("V3000")
    {
        return StructureFormat::Sdf;
    }

    // PDB: known record keyword in the first 20 scanned lines
    for line in lines.iter().take(20) {
        if line.chars().count() >= 6 && PDB_KEYWORDS.contains(&record_type(line).as_str()) {
            return StructureFormat::Pdb;
        }
    }

    // ATOM/HETATM records can appear past the header block
    for line in &lines {
        if line.chars().count() >= 4 {
            let record = record_type(line);
            if record == "ATOM" || record == "HETATM" {
                return StructureFormat::Pdb;
            }
        }
    }

    StructureFormat::Pdb
}

/// The trimmed, uppercased 6-character record prefix of a line
fn record_type(line: &str) -> String {
    line.chars().take(6).collect::<String>().trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_mmcif_data_block() {
        assert_eq!(detect_format("data_1ABC\n_cell.length_a 10.0\n"), StructureFormat::MmCif);
    }

    #[test]
    fn test_detect_mmcif_loop() {
        let text = "# comment\nloop_\n_atom_site.id\n";
        assert_eq!(detect_format(text), StructureFormat::MmCif);
    }

    #[test]
    fn test_detect_sdf_terminator() {
        let text = "benzene\n  program\n\n  6  6  0\n$$$$\n";
        assert_eq!(detect_format(text), StructureFormat::Sdf);
    }

    #[test]
    fn test_detect_sdf_counts_line() {
        let text = "aspirin\n  generated\n\n 13 13  0  0  0  0  0  0  0  0999 V2000\n";
        assert_eq!(detect_format(text), StructureFormat::Sdf);
    }

    #[test]
    fn test_detect_pdb_header() {
        assert_eq!(detect_format("HEADER    HYDROLASE\n"), StructureFormat::Pdb);
    }

    #[test]
    fn test_detect_pdb_atom_records() {
        let text = "ATOM      1  N   ALA A   1      11.104   6.134  -6.504\n";
        assert_eq!(detect_format(text), StructureFormat::Pdb);
    }

    #[test]
    fn test_detect_short_atom_line() {
        // Shorter than a full record prefix; caught by the trailing scan.
        assert_eq!(detect_format("ATOM\n"), StructureFormat::Pdb);
    }

    #[test]
    fn test_empty_defaults_to_pdb() {
        assert_eq!(detect_format(""), StructureFormat::Pdb);
        assert_eq!(detect_format("   \n\n  "), StructureFormat::Pdb);
    }

    #[test]
    fn test_mmcif_markers_win_over_pdb_keywords() {
        // ATOM appears, but the mmCIF tag must take precedence.
        let text = "loop_\n_atom_site.group_PDB\nATOM 1 N N . ALA A 1\n";
        assert_eq!(detect_format(text), StructureFormat::MmCif);
    }

    #[test]
    fn test_unrecognized_defaults_to_pdb() {
        assert_eq!(detect_format("just some text\nwith two lines\n"), StructureFormat::Pdb);
    }
}
