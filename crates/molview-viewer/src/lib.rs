//! Notebook-embeddable molecular structure viewer
//!
//! This crate holds the viewer state machine and its presentation layer:
//! a [`Viewer`] accumulates structures and display settings, [`Viewer::render`]
//! serializes them into a [`RenderPayload`], and the HTML layer turns that
//! payload into a self-contained document wrapped in an iframe for inline
//! notebook display. The actual 3D rendering is done by the embedded
//! Mol*-style engine; this crate only assembles its configuration.
//!
//! # Quick start
//!
//! ```
//! use molview_viewer::{AddOptions, RandomFrameIds, Viewer};
//!
//! let mut viewer = Viewer::new(800, 600);
//! viewer
//!     .add_structure("HEADER    HYDROLASE\n", AddOptions::new())?
//!     .set_color_mode("rainbow", &Default::default())?
//!     .set_surface(true, 40, true, None);
//!
//! let html = viewer.to_embed_html(&mut RandomFrameIds)?;
//! assert!(html.starts_with("<iframe"));
//! # Ok::<(), molview_viewer::ViewerError>(())
//! ```

mod error;
mod frame;
mod grid;
mod html;
mod model;
mod render;
mod viewer;

pub use error::{ViewerError, ViewerResult};
pub use frame::{wrap_iframe, FrameIds, RandomFrameIds, SequentialFrameIds, PANEL_WIDTH};
pub use grid::ViewerGrid;
pub use html::{escape_attribute, escape_js_string, render_html};
pub use model::{StructureModel, StyleFlags, SurfaceSettings};
pub use render::RenderPayload;
pub use viewer::{AddOptions, Viewer, DEFAULT_HEIGHT, DEFAULT_WIDTH};

// Commonly needed from the companion crates
pub use molview_color::{ColorTheme, ThemeParams};
pub use molview_io::StructureFormat;
