mod overlay_frame;
mod primitives;

pub use overlay_frame::BrushOverlayFrame;
pub use primitives::{Color, RectPrimitive, SelectedBoxStyle};

use crate::error::ChartResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully resolved `BrushOverlayFrame`, so painting stays
/// isolated from selection geometry and interaction state.
pub trait Renderer {
    fn render(&mut self, frame: &BrushOverlayFrame) -> ChartResult<()>;
}

/// Renderer that only validates and records frame shape; used headless and in tests.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_had_selection: bool,
    pub last_handle_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &BrushOverlayFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_had_selection = frame.selection.is_some();
        self.last_handle_count = frame.handles.len();
        Ok(())
    }
}
