use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Pixel insets around the plotting area.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Margin {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Margin {
    #[must_use]
    pub const fn new(top: f64, left: f64, right: f64, bottom: f64) -> Self {
        Self {
            top,
            left,
            right,
            bottom,
        }
    }

    #[must_use]
    pub const fn uniform(inset: f64) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        [self.top, self.left, self.right, self.bottom]
            .into_iter()
            .all(|inset| inset.is_finite() && inset >= 0.0)
    }
}

/// Inner plot dimensions plus the margins surrounding them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub inner_width: f64,
    pub inner_height: f64,
    pub margin: Margin,
}

impl ChartLayout {
    #[must_use]
    pub const fn new(inner_width: f64, inner_height: f64, margin: Margin) -> Self {
        Self {
            inner_width,
            inner_height,
            margin,
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        let invalid = |reason| ChartError::InvalidLayout {
            inner_width: self.inner_width,
            inner_height: self.inner_height,
            reason,
        };
        if !self.inner_width.is_finite() || !self.inner_height.is_finite() {
            return Err(invalid("inner dimensions must be finite"));
        }
        if self.inner_width < 0.0 || self.inner_height < 0.0 {
            return Err(invalid("inner dimensions must be >= 0"));
        }
        if !self.margin.is_valid() {
            return Err(invalid("margins must be finite and >= 0"));
        }
        Ok(self)
    }
}

/// Raw pixel extent reported by a gesture, relative to the brush region.
///
/// `x0`/`y0` hold the gesture start and `x1`/`y1` the current point, so no
/// ordering between the pairs is implied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelExtent {
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
}

impl PixelExtent {
    /// Extent reported once a selection is cleared or a gesture is aborted.
    pub const CLEARED: Self = Self::new(-1.0, -1.0, -1.0, -1.0);

    #[must_use]
    pub const fn new(x0: f64, x1: f64, y0: f64, y1: f64) -> Self {
        Self { x0, x1, y0, y1 }
    }

    #[must_use]
    pub fn is_cleared(self) -> bool {
        self.x0 < 0.0
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x0.is_finite() && self.x1.is_finite() && self.y0.is_finite() && self.y1.is_finite()
    }

    /// Same extent with `x0 <= x1` and `y0 <= y1`.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            x0: self.x0.min(self.x1),
            x1: self.x0.max(self.x1),
            y0: self.y0.min(self.y1),
            y1: self.y0.max(self.y1),
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        (self.x1 - self.x0).abs()
    }

    #[must_use]
    pub fn height(self) -> f64 {
        (self.y1 - self.y0).abs()
    }
}

/// Normalized selection in data units: `x0 <= x1` and `y0 <= y1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainRange {
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
}

impl DomainRange {
    /// Builds a range from two unordered corner pairs.
    #[must_use]
    pub fn from_corners(xa: f64, xb: f64, ya: f64, yb: f64) -> Self {
        Self {
            x0: xa.min(xb),
            x1: xa.max(xb),
            y0: ya.min(yb),
            y1: ya.max(yb),
        }
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        (self.x0..=self.x1).contains(&x) && (self.y0..=self.y1).contains(&y)
    }
}

/// Pixel-space bounding box of the brush capture region.
///
/// `left`/`top` are relative to the inner plot origin and may be negative
/// when the region sits in the left or top margin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl RegionBounds {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}
