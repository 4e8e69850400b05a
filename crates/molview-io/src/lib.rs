//! Structure I/O for molview
//!
//! This crate provides the two structure-text concerns the viewer needs:
//!
//! - **Format detection** - classifying raw text as PDB, mmCIF, or SDF
//!   ([`detect::detect_format`]); parsing of the structures themselves is
//!   delegated entirely to the embedded rendering engine.
//! - **Remote fetch** - downloading structure text from RCSB PDB and
//!   AlphaFold DB, plus a best-effort text search against the RCSB search
//!   API.
//!
//! # Features
//!
//! - `fetch` (default) - synchronous fetching and search (uses `ureq`)
//! - `fetch-async` - asynchronous fetching (uses `reqwest`)

pub mod detect;
pub mod error;
pub mod format;

#[cfg(any(feature = "fetch", feature = "fetch-async"))]
pub mod fetch;
#[cfg(feature = "fetch")]
pub mod search;

// Re-exports
pub use detect::detect_format;
pub use error::{FetchError, FetchResult};
pub use format::StructureFormat;

#[cfg(any(feature = "fetch", feature = "fetch-async"))]
pub use fetch::{FetchFormat, DEFAULT_ALPHAFOLD_VERSION};
#[cfg(feature = "fetch")]
pub use fetch::{fetch_alphafold, fetch_rcsb};
#[cfg(feature = "fetch-async")]
pub use fetch::{fetch_alphafold_async, fetch_rcsb_async};
#[cfg(feature = "fetch")]
pub use search::search_pdb;
