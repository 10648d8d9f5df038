use serde::{Deserialize, Serialize};

use crate::core::RegionBounds;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    /// Neutral gray used for the selection overlay by default.
    pub const NEUTRAL: Self = Self::rgb(0.463, 0.463, 0.463);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Fill and stroke of the selected box. Presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SelectedBoxStyle {
    pub fill: Color,
    pub fill_opacity: f64,
    pub stroke: Color,
    pub stroke_width: f64,
    pub stroke_opacity: f64,
}

impl Default for SelectedBoxStyle {
    fn default() -> Self {
        Self {
            fill: Color::NEUTRAL,
            fill_opacity: 0.2,
            stroke: Color::NEUTRAL,
            stroke_width: 1.0,
            stroke_opacity: 0.8,
        }
    }
}

impl SelectedBoxStyle {
    pub fn validate(self) -> ChartResult<Self> {
        self.fill.validate()?;
        self.stroke.validate()?;
        for (name, value) in [
            ("fill_opacity", self.fill_opacity),
            ("stroke_opacity", self.stroke_opacity),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidConfig(format!(
                    "selected box `{name}` must be finite and in [0, 1]"
                )));
            }
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(ChartError::InvalidConfig(
                "selected box stroke width must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Draw command for one axis-aligned rectangle in chart-inner pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
}

impl RectPrimitive {
    /// Rectangle with no paint; used for invisible capture surfaces.
    #[must_use]
    pub const fn transparent(bounds: RegionBounds) -> Self {
        Self {
            x: bounds.left,
            y: bounds.top,
            width: bounds.width,
            height: bounds.height,
            fill: Color::rgba(0.0, 0.0, 0.0, 0.0),
            stroke: None,
            stroke_width: 0.0,
        }
    }

    /// Rectangle painted with the selected box style.
    #[must_use]
    pub fn styled(bounds: RegionBounds, style: SelectedBoxStyle) -> Self {
        let fill = Color {
            alpha: style.fill.alpha * style.fill_opacity,
            ..style.fill
        };
        let stroke = Color {
            alpha: style.stroke.alpha * style.stroke_opacity,
            ..style.stroke
        };
        Self {
            x: bounds.left,
            y: bounds.top,
            width: bounds.width,
            height: bounds.height,
            fill,
            stroke: (style.stroke_width > 0.0).then_some(stroke),
            stroke_width: style.stroke_width,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "rect origin must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width < 0.0
            || self.height < 0.0
        {
            return Err(ChartError::InvalidData(
                "rect size must be finite and >= 0".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(ChartError::InvalidData(
                "rect stroke width must be finite and >= 0".to_owned(),
            ));
        }
        self.fill.validate()?;
        if let Some(stroke) = self.stroke {
            stroke.validate()?;
        }
        Ok(())
    }
}
