use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ChartError, ChartResult};
use crate::interaction::{BrushDirection, ResizeHandleSet};
use crate::render::SelectedBoxStyle;

use super::validation::validate_brush_config;

/// Where the brush capture region is mounted relative to the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BrushRegion {
    /// Plot body.
    #[default]
    Chart,
    /// Margin strip holding the x axis.
    XAxis,
    /// Margin strip holding the y axis.
    YAxis,
}

/// Side of the plot the y axis is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum YAxisOrientation {
    Left,
    #[default]
    Right,
}

/// Side of the plot the x axis is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum XAxisOrientation {
    Top,
    #[default]
    Bottom,
}

impl FromStr for BrushRegion {
    type Err = ChartError;

    fn from_str(value: &str) -> ChartResult<Self> {
        match value {
            "chart" => Ok(Self::Chart),
            "xAxis" => Ok(Self::XAxis),
            "yAxis" => Ok(Self::YAxis),
            other => Err(ChartError::InvalidConfig(format!(
                "unknown brush region `{other}`"
            ))),
        }
    }
}

impl FromStr for YAxisOrientation {
    type Err = ChartError;

    fn from_str(value: &str) -> ChartResult<Self> {
        match value {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(ChartError::InvalidConfig(format!(
                "unknown y-axis orientation `{other}`"
            ))),
        }
    }
}

impl FromStr for XAxisOrientation {
    type Err = ChartError;

    fn from_str(value: &str) -> ChartResult<Self> {
        match value {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            other => Err(ChartError::InvalidConfig(format!(
                "unknown x-axis orientation `{other}`"
            ))),
        }
    }
}

pub const DEFAULT_HANDLE_SIZE_PX: f64 = 4.0;

/// Immutable brush settings, fixed per brush instance.
///
/// Margins and inner plot size live in `ChartLayout` since they follow the
/// hosting chart rather than the brush.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct BrushConfig {
    #[serde(rename = "brushRegion")]
    pub region: BrushRegion,
    #[serde(rename = "brushDirection")]
    pub direction: BrushDirection,
    pub resize_trigger_areas: ResizeHandleSet,
    pub y_axis_orientation: YAxisOrientation,
    pub x_axis_orientation: XAxisOrientation,
    pub handle_size: f64,
    pub selected_box_style: SelectedBoxStyle,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            region: BrushRegion::Chart,
            direction: BrushDirection::Horizontal,
            resize_trigger_areas: ResizeHandleSet::horizontal_edges(),
            y_axis_orientation: YAxisOrientation::Right,
            x_axis_orientation: XAxisOrientation::Bottom,
            handle_size: DEFAULT_HANDLE_SIZE_PX,
            selected_box_style: SelectedBoxStyle::default(),
        }
    }
}

impl BrushConfig {
    #[must_use]
    pub fn with_region(mut self, region: BrushRegion) -> Self {
        self.region = region;
        self
    }

    #[must_use]
    pub fn with_direction(mut self, direction: BrushDirection) -> Self {
        self.direction = direction;
        self
    }

    #[must_use]
    pub fn with_resize_trigger_areas(mut self, handles: ResizeHandleSet) -> Self {
        self.resize_trigger_areas = handles;
        self
    }

    #[must_use]
    pub fn with_y_axis_orientation(mut self, orientation: YAxisOrientation) -> Self {
        self.y_axis_orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_x_axis_orientation(mut self, orientation: XAxisOrientation) -> Self {
        self.x_axis_orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_handle_size(mut self, handle_size: f64) -> Self {
        self.handle_size = handle_size;
        self
    }

    #[must_use]
    pub fn with_selected_box_style(mut self, style: SelectedBoxStyle) -> Self {
        self.selected_box_style = style;
        self
    }

    /// Whether both configs mount the same region and gesture, i.e. they
    /// differ at most in presentation.
    #[must_use]
    pub fn same_geometry(&self, other: &Self) -> bool {
        self.region == other.region
            && self.direction == other.direction
            && self.resize_trigger_areas == other.resize_trigger_areas
            && self.y_axis_orientation == other.y_axis_orientation
            && self.x_axis_orientation == other.x_axis_orientation
            && self.handle_size == other.handle_size
    }

    pub fn validate(self) -> ChartResult<Self> {
        validate_brush_config(self)
    }

    /// Parses and validates a camelCase JSON config. Missing keys take defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            warn!(error = %e, "rejected brush config json");
            ChartError::InvalidConfig(format!("failed to parse brush config json: {e}"))
        })?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize brush config: {e}"))
        })
    }
}
