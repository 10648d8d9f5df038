mod brush;
mod brush_config;
mod brush_region_resolver;
mod selection_translator;
mod validation;

pub use brush::{Brush, ChangeCallback, SelectionChange};
pub use brush_config::{
    BrushConfig, BrushRegion, DEFAULT_HANDLE_SIZE_PX, XAxisOrientation, YAxisOrientation,
};
pub use brush_region_resolver::resolve_brush_region;
pub use selection_translator::{SAFE_PIXEL, translate_extent};
