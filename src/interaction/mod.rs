mod gesture;
mod handles;

pub use gesture::{BrushGesture, GesturePhase};
pub use handles::{BrushDirection, ResizeHandle, ResizeHandleSet};
