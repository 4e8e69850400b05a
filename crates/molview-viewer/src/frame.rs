//! Inline-frame embedding wrapper
//!
//! Wraps a complete viewer document in a sized, borderless iframe via the
//! `srcdoc` attribute, which keeps the document's scripts isolated from the
//! notebook page. Frame ids come from an injectable generator so tests can
//! assert on deterministic output.

use crate::html::escape_attribute;
use crate::render::RenderPayload;

/// Width reserved for the side control panel, in pixels
///
/// Reserved in grid mode even while the panel is hidden, because switching a
/// grid back to single view reveals it client-side.
pub const PANEL_WIDTH: u32 = 280;

/// Source of unique frame identifiers
pub trait FrameIds {
    /// Produce a fresh identifier for one frame
    fn next_id(&mut self) -> String;
}

/// Default id source backed by the process random generator
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomFrameIds;

impl FrameIds for RandomFrameIds {
    fn next_id(&mut self) -> String {
        format!("molview-{:08x}", rand::random::<u32>())
    }
}

/// Sequential id source for deterministic output
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialFrameIds {
    counter: u64,
}

impl FrameIds for SequentialFrameIds {
    fn next_id(&mut self) -> String {
        self.counter += 1;
        format!("molview-{}", self.counter)
    }
}

/// Wrap a viewer document in an iframe sized from the payload
pub fn wrap_iframe(html: &str, payload: &RenderPayload, ids: &mut dyn FrameIds) -> String {
    let frame_id = ids.next_id();
    let panel_width = if payload.panel_enabled || payload.is_grid_mode {
        PANEL_WIDTH
    } else {
        0
    };
    let total_width = payload.width + panel_width;

    format!(
        "<iframe\n    id=\"{id}\"\n    width=\"{width}\"\n    height=\"{height}\"\n    \
         frameborder=\"0\"\n    srcdoc=\"{srcdoc}\"\n    style=\"border: none;\"\n></iframe>",
        id = frame_id,
        width = total_width,
        height = payload.height,
        srcdoc = escape_attribute(html),
    )
}
