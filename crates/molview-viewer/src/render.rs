//! The render payload: a structured view model of the accumulated state
//!
//! Rendering maps viewer state to plain data; the markup assembly that
//! consumes it lives in [`crate::html`] and can be swapped out without
//! touching the state machine. Exactly one of the two structure
//! representations (linear model list, or grid cells) is populated per
//! payload, determined by the viewer's construction mode.

use molview_io::StructureFormat;
use serde::Serialize;
use serde_json::Value;

use crate::error::ViewerResult;
use crate::model::{StructureModel, StyleFlags};
use crate::viewer::{Layout, Viewer};

/// Serialized viewer state, ready for markup assembly
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPayload {
    /// Viewer width in pixels (frame chrome not included)
    pub width: u32,
    /// Viewer height in pixels
    pub height: u32,
    /// Whether the side control panel is shown
    pub panel_enabled: bool,

    /// Engine-facing color theme name
    pub color_mode: String,
    /// Engine-facing theme parameter object, with the surface override color
    /// merged in when one is set
    pub color_params: Value,
    /// Background color, verbatim as configured
    pub background_color: String,

    /// Surface representation enabled
    pub surface_enabled: bool,
    /// Surface opacity in percent, within [0, 100]
    pub surface_opacity: u8,
    /// Illustrative (outlined) rendering style enabled
    pub illustrative_enabled: bool,
    /// Continuous rotation enabled
    pub spin_enabled: bool,
    /// Rotation speed
    pub spin_speed: f64,
    /// Sequence panel shown
    pub show_sequence: bool,
    /// Animation controls shown
    pub show_animation: bool,
    /// Solvent molecules removed
    pub remove_solvent: bool,
    /// Representation style flags
    pub styles: StyleFlags,

    /// Raw text of the active structure (single layout; empty in grid layout)
    pub structure_data: String,
    /// Format tag of the active structure
    pub structure_format: StructureFormat,
    /// Every loaded structure, in insertion order (single layout only)
    pub all_models: Vec<StructureModel>,

    /// Whether this payload describes a grid-layout viewer
    pub is_grid_mode: bool,
    /// Grid row count (1 in single layout)
    pub rows: usize,
    /// Grid column count (1 in single layout)
    pub cols: usize,
    /// Grid cells in row order (a single empty row in single layout)
    pub grid_data: Vec<Vec<Option<StructureModel>>>,
}

impl Viewer {
    /// Render the current state into a payload
    ///
    /// Pure and repeatable: the viewer is not mutated, and identical state
    /// produces identical payloads. This is the point where hex color
    /// parameters are converted to integers, so a malformed theme color
    /// surfaces here rather than at the setter.
    pub fn render(&self) -> ViewerResult<RenderPayload> {
        let config = self.theme.to_engine_config()?;

        let mut color_params = config.params;
        if let (Some(color), Some(object)) = (&self.surface.color, color_params.as_object_mut()) {
            object.insert("surface_color".to_string(), Value::String(color.clone()));
        }

        let mut payload = RenderPayload {
            width: self.width(),
            height: self.height(),
            panel_enabled: self.panel(),
            color_mode: config.name.to_string(),
            color_params,
            background_color: self.background_color.clone(),
            surface_enabled: self.surface.enabled,
            surface_opacity: self.surface.opacity,
            illustrative_enabled: self.illustrative,
            spin_enabled: self.spin_enabled,
            spin_speed: self.spin_speed,
            show_sequence: self.show_sequence,
            show_animation: self.show_animation,
            remove_solvent: self.remove_solvent,
            styles: self.styles,
            structure_data: String::new(),
            structure_format: StructureFormat::Pdb,
            all_models: Vec::new(),
            is_grid_mode: false,
            rows: 1,
            cols: 1,
            grid_data: vec![Vec::new()],
        };

        match &self.layout {
            Layout::Single { models, active } => {
                if let Some(model) = active.and_then(|index| models.get(index)) {
                    payload.structure_data = model.data.clone();
                    payload.structure_format = model.format;
                }
                payload.all_models = models.clone();
            }
            Layout::Grid(grid) => {
                payload.is_grid_mode = true;
                payload.rows = grid.rows();
                payload.cols = grid.cols();
                payload.grid_data = grid.iter_rows().map(|row| row.to_vec()).collect();
                // The panel is revealed client-side when switching a grid
                // back to single view; these start hidden.
                payload.panel_enabled = false;
                payload.show_sequence = false;
                payload.show_animation = false;
            }
        }

        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewer::AddOptions;
    use molview_color::ThemeParams;

    const PDB_DATA: &str = "HEADER    HYDROLASE\nATOM      1  N   ALA A   1\n";

    #[test]
    fn test_render_is_repeatable() {
        let mut viewer = Viewer::new(640, 480);
        viewer
            .add_structure(PDB_DATA, AddOptions::new())
            .unwrap()
            .set_color_mode("rainbow", &ThemeParams::new().with_palette("viridis"))
            .unwrap()
            .spin(true, 1.0);

        assert_eq!(viewer.render().unwrap(), viewer.render().unwrap());
    }

    #[test]
    fn test_single_layout_payload() {
        let mut viewer = Viewer::new(800, 600).with_panel(true);
        viewer
            .add_structure(PDB_DATA, AddOptions::new())
            .unwrap()
            .add_structure("data_X\nloop_\n", AddOptions::new())
            .unwrap();

        let payload = viewer.render().unwrap();
        assert!(!payload.is_grid_mode);
        assert!(payload.panel_enabled);
        // The most recently added structure is active.
        assert_eq!(payload.structure_format, StructureFormat::MmCif);
        assert_eq!(payload.structure_data, "data_X\nloop_\n");
        assert_eq!(payload.all_models.len(), 2);
        assert_eq!(payload.rows, 1);
        assert_eq!(payload.grid_data, vec![Vec::new()]);
    }

    #[test]
    fn test_grid_layout_payload() {
        let mut viewer = Viewer::with_grid(800, 600, 2, 3).unwrap();
        viewer
            .add_structure(PDB_DATA, AddOptions::new().with_cell(1, 2))
            .unwrap();

        let payload = viewer.render().unwrap();
        assert!(payload.is_grid_mode);
        assert!(!payload.panel_enabled);
        assert_eq!((payload.rows, payload.cols), (2, 3));
        assert_eq!(payload.grid_data.len(), 2);
        assert_eq!(payload.grid_data[0].len(), 3);
        assert!(payload.grid_data[0][0].is_none());
        assert_eq!(payload.grid_data[1][2].as_ref().unwrap().name, "Structure (1,2)");
        assert!(payload.all_models.is_empty());
        assert!(payload.structure_data.is_empty());
    }

    #[test]
    fn test_empty_viewer_renders() {
        let payload = Viewer::new(800, 600).render().unwrap();
        assert_eq!(payload.color_mode, "element-symbol");
        assert_eq!(payload.structure_data, "");
        assert_eq!(payload.structure_format, StructureFormat::Pdb);
    }

    #[test]
    fn test_surface_color_merged_into_params() {
        let mut viewer = Viewer::new(800, 600);
        viewer.set_surface(true, 30, false, Some("#FF0000"));
        let payload = viewer.render().unwrap();
        assert_eq!(payload.color_params["surface_color"], "#FF0000");

        // Without an override, the key is absent.
        let plain = Viewer::new(800, 600).render().unwrap();
        assert!(plain.color_params.get("surface_color").is_none());
    }

    #[test]
    fn test_bad_hex_surfaces_at_render() {
        let mut viewer = Viewer::new(800, 600);
        viewer.set_color_theme(molview_color::ColorTheme::uniform("#XYZXYZ"));
        assert!(viewer.render().is_err());
    }
}
