//! Fetch structure files from public repositories
//!
//! Downloads structure text from the RCSB Protein Data Bank and from the
//! AlphaFold Database by identifier. The text is returned as-is; parsing is
//! delegated to the embedded rendering engine.
//!
//! # Features
//!
//! - `fetch` - Enables synchronous fetching using `ureq`
//! - `fetch-async` - Enables asynchronous fetching using `reqwest`
//!
//! # Example (synchronous)
//!
//! ```no_run
//! # #[cfg(feature = "fetch")]
//! # fn main() -> molview_io::FetchResult<()> {
//! use molview_io::fetch::{fetch_rcsb, FetchFormat};
//!
//! let data = fetch_rcsb("1ubq", FetchFormat::default())?;
//! assert!(data.starts_with("HEADER"));
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "fetch"))]
//! # fn main() {}
//! ```

use crate::error::{FetchError, FetchResult};

/// RCSB PDB base URL for structure file downloads
const RCSB_BASE_URL: &str = "https://files.rcsb.org/download";

/// AlphaFold DB base URL for predicted model downloads
const ALPHAFOLD_BASE_URL: &str = "https://alphafold.ebi.ac.uk/files";

/// Default AlphaFold database version
pub const DEFAULT_ALPHAFOLD_VERSION: u32 = 4;

/// User-Agent header for HTTP requests
pub(crate) const USER_AGENT: &str = concat!("molview-rs/", env!("CARGO_PKG_VERSION"));

/// Format to fetch from RCSB PDB
///
/// The download endpoints only serve text formats; SDF payloads come from
/// elsewhere and are loaded directly by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FetchFormat {
    /// PDB format (.pdb) - default
    #[default]
    Pdb,
    /// mmCIF format (.cif)
    Cif,
}

impl FetchFormat {
    /// Parse a format name, accepting `pdb`, `cif`, and `mmcif`
    pub fn parse(name: &str) -> FetchResult<Self> {
        match name.to_lowercase().as_str() {
            "pdb" => Ok(FetchFormat::Pdb),
            "cif" | "mmcif" => Ok(FetchFormat::Cif),
            other => Err(FetchError::InvalidFormat(other.to_string())),
        }
    }

    /// Get the file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            FetchFormat::Pdb => "pdb",
            FetchFormat::Cif => "cif",
        }
    }
}

/// Validate an RCSB PDB ID
///
/// PDB IDs are 4-character alphanumeric codes (e.g. "1ubq", "4hhb"). This
/// checks the shape only, not whether the entry exists.
pub fn validate_rcsb_id(id: &str) -> FetchResult<()> {
    if id.len() != 4 || !id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(FetchError::invalid_id(format!(
            "'{}' - must be exactly 4 alphanumeric characters",
            id
        )));
    }
    Ok(())
}

/// Validate a UniProt accession for AlphaFold lookup
pub fn validate_uniprot_id(id: &str) -> FetchResult<()> {
    if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(FetchError::invalid_id(format!(
            "'{}' - must be a non-empty alphanumeric UniProt accession",
            id
        )));
    }
    Ok(())
}

/// Build the RCSB download URL for a normalized (uppercase) PDB ID
pub fn build_rcsb_url(id: &str, format: FetchFormat) -> String {
    format!("{}/{}.{}", RCSB_BASE_URL, id, format.extension())
}

/// Build the AlphaFold DB download URL for a normalized UniProt accession
pub fn build_alphafold_url(uniprot_id: &str, version: u32) -> String {
    format!("{}/AF-{}-F1-model_v{}.cif", ALPHAFOLD_BASE_URL, uniprot_id, version)
}

/// Fetch a structure from RCSB PDB (synchronous)
///
/// The id is trimmed and uppercased before use. A 404 response becomes
/// [`FetchError::NotFound`]; other HTTP and transport failures are reported
/// as [`FetchError::Http`] and [`FetchError::Network`].
#[cfg(feature = "fetch")]
pub fn fetch_rcsb(id: &str, format: FetchFormat) -> FetchResult<String> {
    let id = id.trim().to_uppercase();
    validate_rcsb_id(&id)?;

    let url = build_rcsb_url(&id, format);
    get_text(&url, || FetchError::NotFound {
        id: id.clone(),
        database: "RCSB PDB",
    })
}

/// Fetch a predicted structure from AlphaFold DB (synchronous)
///
/// Returns mmCIF text. Use [`DEFAULT_ALPHAFOLD_VERSION`] unless a specific
/// database version is required.
#[cfg(feature = "fetch")]
pub fn fetch_alphafold(uniprot_id: &str, version: u32) -> FetchResult<String> {
    let id = uniprot_id.trim().to_uppercase();
    validate_uniprot_id(&id)?;

    let url = build_alphafold_url(&id, version);
    get_text(&url, || FetchError::NotFound {
        id,
        database: "AlphaFold DB",
    })
}

#[cfg(feature = "fetch")]
fn get_text(url: &str, not_found: impl FnOnce() -> FetchError) -> FetchResult<String> {
    use std::io::Read;

    log::debug!("GET {}", url);

    let response = match ureq::get(url).header("User-Agent", USER_AGENT).call() {
        Ok(response) => response,
        Err(ureq::Error::StatusCode(404)) => return Err(not_found()),
        Err(ureq::Error::StatusCode(status)) => {
            return Err(FetchError::Http {
                status,
                url: url.to_string(),
            })
        }
        Err(e) => return Err(FetchError::network(e.to_string())),
    };

    let mut text = String::new();
    response
        .into_body()
        .into_reader()
        .read_to_string(&mut text)
        .map_err(|e| FetchError::network(format!("failed to read response: {}", e)))?;

    Ok(text)
}

/// Fetch a structure from RCSB PDB (asynchronous)
#[cfg(feature = "fetch-async")]
pub async fn fetch_rcsb_async(id: &str, format: FetchFormat) -> FetchResult<String> {
    let id = id.trim().to_uppercase();
    validate_rcsb_id(&id)?;

    let url = build_rcsb_url(&id, format);
    get_text_async(&url, || FetchError::NotFound {
        id: id.clone(),
        database: "RCSB PDB",
    })
    .await
}

/// Fetch a predicted structure from AlphaFold DB (asynchronous)
#[cfg(feature = "fetch-async")]
pub async fn fetch_alphafold_async(uniprot_id: &str, version: u32) -> FetchResult<String> {
    let id = uniprot_id.trim().to_uppercase();
    validate_uniprot_id(&id)?;

    let url = build_alphafold_url(&id, version);
    get_text_async(&url, || FetchError::NotFound {
        id,
        database: "AlphaFold DB",
    })
    .await
}

#[cfg(feature = "fetch-async")]
async fn get_text_async(
    url: &str,
    not_found: impl FnOnce() -> FetchError,
) -> FetchResult<String> {
    log::debug!("GET {}", url);

    let client = reqwest::Client::new();
    let response = client
        .get(url)
        .header("User-Agent", USER_AGENT)
        .send()
        .await
        .map_err(|e| FetchError::network(e.to_string()))?;

    let status = response.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(not_found());
    }
    if !status.is_success() {
        return Err(FetchError::Http {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    response
        .text()
        .await
        .map_err(|e| FetchError::network(format!("failed to read response: {}", e)))
}
