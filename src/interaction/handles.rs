use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Axes along which a brush selection may extend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BrushDirection {
    #[default]
    Horizontal,
    Vertical,
    Both,
}

impl BrushDirection {
    #[must_use]
    pub fn moves_x(self) -> bool {
        matches!(self, Self::Horizontal | Self::Both)
    }

    #[must_use]
    pub fn moves_y(self) -> bool {
        matches!(self, Self::Vertical | Self::Both)
    }
}

impl FromStr for BrushDirection {
    type Err = ChartError;

    fn from_str(value: &str) -> ChartResult<Self> {
        match value {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            "both" => Ok(Self::Both),
            other => Err(ChartError::InvalidConfig(format!(
                "unknown brush direction `{other}`"
            ))),
        }
    }
}

/// Edge or corner zone of a selection that starts a resize when grabbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResizeHandle {
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeHandle {
    pub const ALL: [Self; 8] = [
        Self::Left,
        Self::Right,
        Self::Top,
        Self::Bottom,
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Hit-test order: corners overlap edges and win.
    pub(crate) const HIT_ORDER: [Self; 8] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
        Self::Left,
        Self::Right,
        Self::Top,
        Self::Bottom,
    ];

    #[must_use]
    pub fn touches_left(self) -> bool {
        matches!(self, Self::Left | Self::TopLeft | Self::BottomLeft)
    }

    #[must_use]
    pub fn touches_right(self) -> bool {
        matches!(self, Self::Right | Self::TopRight | Self::BottomRight)
    }

    #[must_use]
    pub fn touches_top(self) -> bool {
        matches!(self, Self::Top | Self::TopLeft | Self::TopRight)
    }

    #[must_use]
    pub fn touches_bottom(self) -> bool {
        matches!(self, Self::Bottom | Self::BottomLeft | Self::BottomRight)
    }

    /// Whether dragging this handle can have any effect under `direction`.
    #[must_use]
    pub fn acts_under(self, direction: BrushDirection) -> bool {
        let needs_x = self.touches_left() || self.touches_right();
        let needs_y = self.touches_top() || self.touches_bottom();
        (!needs_x || direction.moves_x()) && (!needs_y || direction.moves_y())
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl FromStr for ResizeHandle {
    type Err = ChartError;

    fn from_str(value: &str) -> ChartResult<Self> {
        match value {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "topLeft" => Ok(Self::TopLeft),
            "topRight" => Ok(Self::TopRight),
            "bottomLeft" => Ok(Self::BottomLeft),
            "bottomRight" => Ok(Self::BottomRight),
            other => Err(ChartError::InvalidConfig(format!(
                "unknown resize handle `{other}`"
            ))),
        }
    }
}

/// Set of enabled resize handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<ResizeHandle>", into = "Vec<ResizeHandle>")]
pub struct ResizeHandleSet {
    bits: u8,
}

impl ResizeHandleSet {
    #[must_use]
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    #[must_use]
    pub const fn horizontal_edges() -> Self {
        Self {
            bits: ResizeHandle::Left.bit() | ResizeHandle::Right.bit(),
        }
    }

    #[must_use]
    pub const fn vertical_edges() -> Self {
        Self {
            bits: ResizeHandle::Top.bit() | ResizeHandle::Bottom.bit(),
        }
    }

    #[must_use]
    pub const fn all() -> Self {
        Self { bits: u8::MAX }
    }

    /// Builds a set from a handle list, rejecting repeated handles.
    pub fn from_handles<I>(handles: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = ResizeHandle>,
    {
        let mut set = Self::empty();
        for handle in handles {
            if !set.insert(handle) {
                return Err(ChartError::InvalidConfig(format!(
                    "resize handle `{handle:?}` listed more than once"
                )));
            }
        }
        Ok(set)
    }

    /// Adds `handle`; returns `false` when it was already present.
    pub fn insert(&mut self, handle: ResizeHandle) -> bool {
        let present = self.contains(handle);
        self.bits |= handle.bit();
        !present
    }

    #[must_use]
    pub fn contains(self, handle: ResizeHandle) -> bool {
        self.bits & handle.bit() != 0
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = ResizeHandle> {
        ResizeHandle::ALL
            .into_iter()
            .filter(move |handle| self.contains(*handle))
    }

    /// Subset of handles that can move an edge under `direction`.
    #[must_use]
    pub fn acting_under(self, direction: BrushDirection) -> Self {
        self.iter()
            .filter(|handle| handle.acts_under(direction))
            .collect()
    }
}

impl Default for ResizeHandleSet {
    fn default() -> Self {
        Self::horizontal_edges()
    }
}

impl TryFrom<Vec<ResizeHandle>> for ResizeHandleSet {
    type Error = ChartError;

    fn try_from(handles: Vec<ResizeHandle>) -> ChartResult<Self> {
        Self::from_handles(handles)
    }
}

impl From<ResizeHandleSet> for Vec<ResizeHandle> {
    fn from(set: ResizeHandleSet) -> Self {
        set.iter().collect()
    }
}

impl FromIterator<ResizeHandle> for ResizeHandleSet {
    fn from_iter<I: IntoIterator<Item = ResizeHandle>>(handles: I) -> Self {
        let mut set = Self::empty();
        for handle in handles {
            set.insert(handle);
        }
        set
    }
}
