//! End-to-end viewer flows: configure, render, embed

use molview_viewer::{
    AddOptions, ColorTheme, SequentialFrameIds, StructureFormat, ThemeParams, Viewer, ViewerError,
};

const PDB_DATA: &str = "HEADER    HYDROLASE                               22-JAN-92   1AKE\n\
                        ATOM      1  N   ALA A   1      11.104   6.134  -6.504  1.00  0.00\n";
const CIF_DATA: &str = "data_1ABC\nloop_\n_atom_site.group_PDB\n_atom_site.id\n";
const SDF_DATA: &str = "benzene\n  generated\n\n  6  6  0  0  0  0  0  0  0  0999 V2000\nM  END\n$$$$\n";

#[test]
fn single_viewer_full_flow() {
    let mut viewer = Viewer::new(640, 480).with_panel(true);
    viewer
        .add_structure(PDB_DATA, AddOptions::new().with_name("Wild Type"))
        .unwrap()
        .add_structure(CIF_DATA, AddOptions::new())
        .unwrap()
        .set_color_mode("secondary", &ThemeParams::new().with_helix_color("#FF0000"))
        .unwrap()
        .set_background_color("#000000")
        .set_surface(true, 150, false, Some("#00FF00"))
        .spin(true, 1.0)
        .remove_solvent(true);

    let payload = viewer.render().unwrap();
    assert_eq!(payload.color_mode, "secondary-structure");
    assert_eq!(payload.background_color, "#000000");
    assert_eq!(payload.surface_opacity, 100);
    assert_eq!(payload.color_params["surface_color"], "#00FF00");
    assert_eq!(payload.all_models[0].name, "Wild Type");
    assert_eq!(payload.all_models[1].name, "Structure 2");
    // The mmCIF structure was added last, so it is active.
    assert_eq!(payload.structure_format, StructureFormat::MmCif);

    let mut ids = SequentialFrameIds::default();
    let embed = viewer.to_embed_html(&mut ids).unwrap();
    assert!(embed.starts_with("<iframe"));
    assert!(embed.contains("id=\"molview-1\""));
    // 640 viewer + 280 panel allowance
    assert!(embed.contains("width=\"920\""));
    assert!(embed.contains("height=\"480\""));
}

#[test]
fn detected_formats_reach_the_payload() {
    for (data, format) in [
        (PDB_DATA, StructureFormat::Pdb),
        (CIF_DATA, StructureFormat::MmCif),
        (SDF_DATA, StructureFormat::Sdf),
    ] {
        let mut viewer = Viewer::new(800, 600);
        viewer.add_structure(data, AddOptions::new()).unwrap();
        assert_eq!(viewer.render().unwrap().structure_format, format);
    }
}

#[test]
fn grid_viewer_full_flow() {
    let mut viewer = Viewer::with_grid(800, 600, 2, 2).unwrap();
    for _ in 0..4 {
        viewer.add_structure(PDB_DATA, AddOptions::new()).unwrap();
    }
    assert!(matches!(
        viewer.add_structure(PDB_DATA, AddOptions::new()),
        Err(ViewerError::GridFull { .. })
    ));

    // Clearing a cell frees exactly that slot for auto-placement.
    viewer.clear_cell(0, 1).unwrap();
    viewer
        .add_structure(SDF_DATA, AddOptions::new().with_name("ligand"))
        .unwrap();
    assert_eq!(viewer.cell(0, 1).unwrap().name, "ligand");

    let payload = viewer.render().unwrap();
    assert!(payload.is_grid_mode);
    assert_eq!(
        payload.grid_data[0][1].as_ref().unwrap().format,
        StructureFormat::Sdf
    );

    let mut ids = SequentialFrameIds::default();
    let embed = viewer.to_embed_html(&mut ids).unwrap();
    // Grid mode always reserves the panel allowance.
    assert!(embed.contains("width=\"1080\""));
}

#[test]
fn render_is_pure_across_repeated_calls() {
    let mut viewer = Viewer::new(800, 600);
    viewer
        .add_structure(PDB_DATA, AddOptions::new())
        .unwrap()
        .set_color_theme(ColorTheme::uniform("#4ECDC4"));

    let first = viewer.render().unwrap();
    let second = viewer.render().unwrap();
    assert_eq!(first, second);

    // Rendering never consumes state; mutation afterwards still works.
    viewer.add_structure(CIF_DATA, AddOptions::new()).unwrap();
    let third = viewer.render().unwrap();
    assert_eq!(third.all_models.len(), 2);
}

#[test]
fn clear_then_reuse() {
    let mut viewer = Viewer::new(800, 600);
    viewer
        .add_structure(PDB_DATA, AddOptions::new())
        .unwrap()
        .clear()
        .add_structure(CIF_DATA, AddOptions::new())
        .unwrap();
    let payload = viewer.render().unwrap();
    assert_eq!(payload.all_models.len(), 1);
    assert_eq!(payload.all_models[0].name, "Structure 1");
}
