//! HTML presentation layer
//!
//! Assembles a self-contained viewer document from a [`RenderPayload`] by
//! substituting into the embedded page template. This is deliberately the
//! only place that knows about markup; the payload itself stays plain data
//! so the core is testable without any rendering engine present.

use crate::error::ViewerResult;
use crate::render::RenderPayload;

/// The viewer page template, embedded at compile time
const TEMPLATE: &str = include_str!("../templates/viewer.html");

/// Assemble the full viewer document for a payload
pub fn render_html(payload: &RenderPayload) -> ViewerResult<String> {
    let js_bool = |value: bool| if value { "true" } else { "false" };

    let html = TEMPLATE
        .replace("{{width}}", &payload.width.to_string())
        .replace("{{height}}", &payload.height.to_string())
        .replace("{{panel_enabled}}", js_bool(payload.panel_enabled))
        .replace("{{color_mode}}", &payload.color_mode)
        .replace("{{color_params}}", &serde_json::to_string(&payload.color_params)?)
        .replace("{{background_color}}", &payload.background_color)
        .replace("{{surface_enabled}}", js_bool(payload.surface_enabled))
        .replace("{{surface_opacity}}", &payload.surface_opacity.to_string())
        .replace("{{illustrative_enabled}}", js_bool(payload.illustrative_enabled))
        .replace("{{spin_enabled}}", js_bool(payload.spin_enabled))
        .replace("{{spin_speed}}", &payload.spin_speed.to_string())
        .replace("{{show_sequence}}", js_bool(payload.show_sequence))
        .replace("{{show_animation}}", js_bool(payload.show_animation))
        .replace("{{remove_solvent}}", js_bool(payload.remove_solvent))
        .replace("{{styles}}", &serde_json::to_string(&payload.styles)?)
        .replace("{{structure_data}}", &escape_js_string(&payload.structure_data))
        .replace("{{structure_format}}", payload.structure_format.as_str())
        .replace("{{all_models}}", &serde_json::to_string(&payload.all_models)?)
        .replace("{{is_grid_mode}}", js_bool(payload.is_grid_mode))
        .replace("{{rows}}", &payload.rows.to_string())
        .replace("{{cols}}", &payload.cols.to_string())
        .replace("{{grid_data}}", &serde_json::to_string(&payload.grid_data)?);

    Ok(html)
}

/// Escape text for inclusion in a double-quoted JavaScript string literal
///
/// Backslashes must be escaped first, then quotes and line terminators.
pub fn escape_js_string(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

/// Escape text for inclusion in a double-quoted HTML attribute value
pub fn escape_attribute(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewer::{AddOptions, Viewer};

    #[test]
    fn test_escape_js_string_order() {
        // A literal backslash-n must not collapse into a newline escape.
        assert_eq!(escape_js_string("a\\nb"), "a\\\\nb");
        assert_eq!(escape_js_string("say \"hi\"\n"), "say \\\"hi\\\"\\n");
        assert_eq!(escape_js_string("line\r\n"), "line\\r\\n");
    }

    #[test]
    fn test_escape_attribute() {
        assert_eq!(
            escape_attribute(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#x27;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_no_placeholders_survive() {
        let mut viewer = Viewer::new(800, 600);
        viewer
            .add_structure("HEADER    TEST\n", AddOptions::new())
            .unwrap();
        let html = render_html(&viewer.render().unwrap()).unwrap();
        assert!(!html.contains("{{"), "unsubstituted placeholder in output");
        assert!(html.contains("\"pdb\"") || html.contains("'pdb'"));
    }

    #[test]
    fn test_structure_data_escaped_into_template() {
        let mut viewer = Viewer::new(800, 600);
        viewer
            .add_structure("HEADER    TEST\nATOM\n", AddOptions::new())
            .unwrap();
        let html = render_html(&viewer.render().unwrap()).unwrap();
        assert!(html.contains("HEADER    TEST\\nATOM\\n"));
    }
}
