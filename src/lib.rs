//! chart-widgets: composable XY-chart and histogram widgets.
//!
//! The interactive core is the XY-chart brush. A `Brush` resolves where its
//! capture region sits (plot body or an axis margin strip), drives a gesture
//! state machine with region-local pointer input, and translates the raw
//! pixel extents into normalized data-domain ranges through the chart's
//! scale adapters.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{Brush, BrushConfig, SelectionChange};
pub use error::{ChartError, ChartResult};
