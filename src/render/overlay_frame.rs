use smallvec::SmallVec;

use crate::error::ChartResult;
use crate::interaction::ResizeHandle;

use super::RectPrimitive;

/// Backend-agnostic description of one brush overlay.
///
/// All rectangles are in chart-inner pixel space (already offset by the
/// brush region origin).
#[derive(Debug, Clone, PartialEq)]
pub struct BrushOverlayFrame {
    pub capture: RectPrimitive,
    pub selection: Option<RectPrimitive>,
    pub handles: SmallVec<[(ResizeHandle, RectPrimitive); 8]>,
}

impl BrushOverlayFrame {
    pub fn validate(&self) -> ChartResult<()> {
        self.capture.validate()?;
        if let Some(selection) = self.selection {
            selection.validate()?;
        }
        for (_, handle) in &self.handles {
            handle.validate()?;
        }
        Ok(())
    }
}
