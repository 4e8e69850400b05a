//! The viewer state machine
//!
//! A [`Viewer`] accumulates configuration - loaded structures, color theme,
//! surface and style toggles, camera/animation flags - and renders it into a
//! structured payload on demand. Mutators validate synchronously and return
//! `&mut Self` for chaining; rendering is non-destructive and repeatable.
//!
//! The layout mode (single sequence of structures, or a fixed-size grid) is
//! chosen at construction and never switches.

use molview_color::{ColorTheme, ThemeParams};
use molview_io::{detect_format, StructureFormat};

use crate::error::{ViewerError, ViewerResult};
use crate::frame::{wrap_iframe, FrameIds};
use crate::grid::ViewerGrid;
use crate::html::render_html;
use crate::model::{StructureModel, StyleFlags, SurfaceSettings};

/// Default viewer width in pixels
pub const DEFAULT_WIDTH: u32 = 800;
/// Default viewer height in pixels
pub const DEFAULT_HEIGHT: u32 = 600;

/// Layout mode, fixed at construction
#[derive(Debug, Clone)]
pub(crate) enum Layout {
    /// Linear sequence of structures; the most recently added one is active
    Single {
        models: Vec<StructureModel>,
        active: Option<usize>,
    },
    /// Fixed-size 2D grid of structures
    Grid(ViewerGrid),
}

/// Options for [`Viewer::add_structure`]
#[derive(Debug, Clone, Default)]
pub struct AddOptions {
    /// Format name (`pdb`, `mmcif`, `cif`, `sdf`); auto-detected when omitted
    pub format: Option<String>,
    /// Keep hydrogen atoms (accepted, not acted upon)
    pub keep_hydrogens: bool,
    /// Explicit grid placement as (row, col); ignored in single layout
    pub cell: Option<(usize, usize)>,
    /// Display name; a default is generated when omitted
    pub name: Option<String>,
}

impl AddOptions {
    /// Create default options (auto-detect format, auto-place, default name)
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the structure format instead of auto-detecting
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Keep hydrogen atoms
    pub fn with_hydrogens(mut self, keep: bool) -> Self {
        self.keep_hydrogens = keep;
        self
    }

    /// Place at an explicit grid cell
    pub fn with_cell(mut self, row: usize, col: usize) -> Self {
        self.cell = Some((row, col));
        self
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Notebook-embeddable molecular structure viewer
///
/// # Example
///
/// ```
/// use molview_viewer::{AddOptions, Viewer};
///
/// let mut viewer = Viewer::new(800, 600);
/// viewer
///     .add_structure("HEADER    HYDROLASE\n", AddOptions::new())?
///     .set_color_mode("rainbow", &Default::default())?
///     .spin(true, 0.5);
/// let payload = viewer.render()?;
/// assert_eq!(payload.color_mode, "rainbow-sequence");
/// # Ok::<(), molview_viewer::ViewerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Viewer {
    width: u32,
    height: u32,
    panel: bool,
    pub(crate) layout: Layout,

    // Display settings
    pub(crate) theme: ColorTheme,
    pub(crate) background_color: String,
    pub(crate) surface: SurfaceSettings,
    pub(crate) styles: StyleFlags,
    pub(crate) illustrative: bool,
    pub(crate) spin_enabled: bool,
    pub(crate) spin_speed: f64,
    pub(crate) show_sequence: bool,
    pub(crate) show_animation: bool,
    pub(crate) remove_solvent: bool,
}

impl Viewer {
    /// Create a single-layout viewer with the given dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Viewer {
            width,
            height,
            panel: false,
            layout: Layout::Single {
                models: Vec::new(),
                active: None,
            },
            theme: ColorTheme::ElementSymbol,
            background_color: "#FFFFFF".to_string(),
            surface: SurfaceSettings::default(),
            styles: StyleFlags::default(),
            illustrative: false,
            spin_enabled: false,
            spin_speed: 0.2,
            show_sequence: false,
            show_animation: false,
            remove_solvent: false,
        }
    }

    /// Create a grid-layout viewer with fixed `rows x cols` dimensions
    pub fn with_grid(width: u32, height: u32, rows: usize, cols: usize) -> ViewerResult<Self> {
        let mut viewer = Viewer::new(width, height);
        viewer.layout = Layout::Grid(ViewerGrid::new(rows, cols)?);
        Ok(viewer)
    }

    /// Enable the side control panel
    pub fn with_panel(mut self, panel: bool) -> Self {
        self.panel = panel;
        self
    }

    /// Viewer width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Viewer height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the side panel is enabled
    pub fn panel(&self) -> bool {
        self.panel
    }

    /// Whether this viewer was constructed in grid layout
    pub fn is_grid(&self) -> bool {
        matches!(self.layout, Layout::Grid(_))
    }

    /// Grid dimensions as (rows, cols), if in grid layout
    pub fn grid_dimensions(&self) -> Option<(usize, usize)> {
        match &self.layout {
            Layout::Grid(grid) => Some((grid.rows(), grid.cols())),
            Layout::Single { .. } => None,
        }
    }

    /// Add a structure to the viewer
    ///
    /// The format is auto-detected from the text when not declared; declared
    /// formats are normalized (`cif` folds into `mmcif`) and anything outside
    /// the supported set fails with [`ViewerError::InvalidFormat`].
    ///
    /// In single layout the structure is appended and becomes the active one.
    /// In grid layout an explicit cell must be in bounds; without one, the
    /// first empty cell in row-major order is used, failing with
    /// [`ViewerError::GridFull`] when none remains.
    pub fn add_structure(
        &mut self,
        data: impl Into<String>,
        options: AddOptions,
    ) -> ViewerResult<&mut Self> {
        let data = data.into();
        let format = match &options.format {
            Some(name) => StructureFormat::parse(name)
                .ok_or_else(|| ViewerError::InvalidFormat(name.clone()))?,
            None => detect_format(&data),
        };

        match &mut self.layout {
            Layout::Grid(grid) => {
                let name = options.name.unwrap_or_else(|| match options.cell {
                    Some((row, col)) => format!("Structure ({},{})", row, col),
                    None => format!("Structure {}", grid.occupied() + 1),
                });
                let (row, col) = match options.cell {
                    Some(cell) => cell,
                    None => grid.next_free().ok_or(ViewerError::GridFull {
                        rows: grid.rows(),
                        cols: grid.cols(),
                    })?,
                };
                log::debug!("placing {} ({}) at cell ({}, {})", name, format, row, col);
                grid.place(
                    row,
                    col,
                    StructureModel {
                        name,
                        data,
                        format,
                        keep_hydrogens: options.keep_hydrogens,
                    },
                )?;
            }
            Layout::Single { models, active } => {
                let name = options
                    .name
                    .unwrap_or_else(|| format!("Structure {}", models.len() + 1));
                log::debug!("adding {} ({}), {} bytes", name, format, data.len());
                models.push(StructureModel {
                    name,
                    data,
                    format,
                    keep_hydrogens: options.keep_hydrogens,
                });
                *active = Some(models.len() - 1);
            }
        }

        Ok(self)
    }

    /// Set the color theme from a mode name and parameters
    ///
    /// Delegates to [`ColorTheme::from_mode`]; on failure the current theme
    /// is left untouched.
    pub fn set_color_mode(
        &mut self,
        mode: &str,
        params: &ThemeParams,
    ) -> ViewerResult<&mut Self> {
        self.theme = ColorTheme::from_mode(mode, params)?;
        Ok(self)
    }

    /// Set a pre-built color theme directly
    pub fn set_color_theme(&mut self, theme: ColorTheme) -> &mut Self {
        self.theme = theme;
        self
    }

    /// The active color theme
    pub fn color_theme(&self) -> &ColorTheme {
        &self.theme
    }

    /// Set the background color, stored verbatim
    ///
    /// The value is only hex-converted by the engine; no validation happens
    /// here.
    pub fn set_background_color(&mut self, color: impl Into<String>) -> &mut Self {
        self.background_color = color.into();
        self
    }

    /// Enable or disable the molecular surface
    ///
    /// Opacity is clamped into [0, 100]. When `inherit_color` is false and a
    /// color is given, it overrides the theme color for the surface only.
    pub fn set_surface(
        &mut self,
        enabled: bool,
        opacity: i32,
        inherit_color: bool,
        color: Option<&str>,
    ) -> &mut Self {
        self.surface.enabled = enabled;
        self.surface.opacity = opacity.clamp(0, 100) as u8;
        if !inherit_color {
            if let Some(color) = color {
                self.surface.color = Some(color.to_string());
            }
        }
        self
    }

    /// Current surface settings
    pub fn surface(&self) -> &SurfaceSettings {
        &self.surface
    }

    /// Enable or disable the illustrative rendering style
    pub fn set_illustrative(&mut self, enabled: bool) -> &mut Self {
        self.illustrative = enabled;
        self
    }

    /// Enable or disable continuous rotation
    pub fn spin(&mut self, enabled: bool, speed: f64) -> &mut Self {
        self.spin_enabled = enabled;
        self.spin_speed = speed;
        self
    }

    /// Enable or disable removal of solvent molecules
    pub fn remove_solvent(&mut self, enabled: bool) -> &mut Self {
        self.remove_solvent = enabled;
        self
    }

    /// Show or hide the sequence panel
    pub fn show_sequence(&mut self, enabled: bool) -> &mut Self {
        self.show_sequence = enabled;
        self
    }

    /// Show or hide animation controls
    pub fn show_animation(&mut self, enabled: bool) -> &mut Self {
        self.show_animation = enabled;
        self
    }

    /// Replace the representation style flags
    pub fn set_style(&mut self, styles: StyleFlags) -> &mut Self {
        self.styles = styles;
        self
    }

    /// Current representation style flags
    pub fn style_flags(&self) -> StyleFlags {
        self.styles
    }

    /// Remove all loaded structures
    ///
    /// In single layout this empties the structure sequence and resets the
    /// active index; in grid layout it empties every cell.
    pub fn clear(&mut self) -> &mut Self {
        match &mut self.layout {
            Layout::Single { models, active } => {
                models.clear();
                *active = None;
            }
            Layout::Grid(grid) => grid.clear(),
        }
        self
    }

    /// Empty a single grid cell, returning its previous occupant
    ///
    /// Fails with [`ViewerError::NotGridMode`] on a single-layout viewer.
    pub fn clear_cell(&mut self, row: usize, col: usize) -> ViewerResult<Option<StructureModel>> {
        match &mut self.layout {
            Layout::Grid(grid) => grid.clear_cell(row, col),
            Layout::Single { .. } => Err(ViewerError::NotGridMode),
        }
    }

    /// Loaded structures in single layout (empty slice in grid layout)
    pub fn models(&self) -> &[StructureModel] {
        match &self.layout {
            Layout::Single { models, .. } => models,
            Layout::Grid(_) => &[],
        }
    }

    /// Number of loaded structures
    pub fn model_count(&self) -> usize {
        match &self.layout {
            Layout::Single { models, .. } => models.len(),
            Layout::Grid(grid) => grid.occupied(),
        }
    }

    /// A loaded structure by index (single layout only)
    pub fn model(&self, index: usize) -> Option<&StructureModel> {
        self.models().get(index)
    }

    /// The structure at a grid cell, if in grid layout and occupied
    pub fn cell(&self, row: usize, col: usize) -> Option<&StructureModel> {
        match &self.layout {
            Layout::Grid(grid) => grid.get(row, col),
            Layout::Single { .. } => None,
        }
    }

    /// Render to a complete HTML document
    pub fn to_html(&self) -> ViewerResult<String> {
        render_html(&self.render()?)
    }

    /// Render and wrap in an iframe for inline notebook embedding
    ///
    /// The frame id comes from the injected generator, so embedding the same
    /// viewer twice yields distinct frames.
    pub fn to_embed_html(&self, ids: &mut dyn FrameIds) -> ViewerResult<String> {
        let payload = self.render()?;
        let html = render_html(&payload)?;
        Ok(wrap_iframe(&html, &payload, ids))
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Viewer::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}
