use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::{PixelExtent, RegionBounds};

use super::{BrushDirection, ResizeHandle, ResizeHandleSet};

/// Phase of the brush gesture state machine.
///
/// `Idle -> Dragging -> Idle` draws a new selection,
/// `Idle -> Resizing -> Idle` moves edges of the current one.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging {
        anchor_x: f64,
        anchor_y: f64,
    },
    Resizing {
        handle: ResizeHandle,
    },
}

/// Drag/resize gesture capture over a brush region.
///
/// Pointer coordinates are region-local and clamped to
/// `[0, width] x [0, height]`; non-finite coordinates are ignored. Extents
/// along an axis the direction does not move always span the full region.
/// Handles that cannot move an edge under the direction are inert.
#[derive(Debug, Clone, PartialEq)]
pub struct BrushGesture {
    width: f64,
    height: f64,
    direction: BrushDirection,
    handles: ResizeHandleSet,
    handle_size: f64,
    phase: GesturePhase,
    selection: Option<PixelExtent>,
}

impl BrushGesture {
    #[must_use]
    pub fn new(
        width: f64,
        height: f64,
        direction: BrushDirection,
        handles: ResizeHandleSet,
        handle_size: f64,
    ) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            direction,
            handles: handles.acting_under(direction),
            handle_size,
            phase: GesturePhase::Idle,
            selection: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase != GesturePhase::Idle
    }

    /// Current selection extent, `None` when nothing is selected.
    #[must_use]
    pub fn selection(&self) -> Option<PixelExtent> {
        self.selection
    }

    #[must_use]
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Starts a resize when the point hits an enabled handle of the current
    /// selection, otherwise starts a new drag.
    ///
    /// Returns `false` when a gesture is already in progress.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        if self.is_active() {
            trace!(phase = ?self.phase, "pointer down ignored while gesture active");
            return false;
        }
        if !x.is_finite() || !y.is_finite() {
            trace!(x, y, "non-finite pointer down ignored");
            return false;
        }
        let (x, y) = self.clamp(x, y);

        if let Some(handle) = self.hit_handle(x, y) {
            self.selection = self.selection.map(PixelExtent::normalized);
            self.phase = GesturePhase::Resizing { handle };
            trace!(?handle, "brush resize started");
            return true;
        }

        self.selection = Some(self.span(x, y, x, y));
        self.phase = GesturePhase::Dragging {
            anchor_x: x,
            anchor_y: y,
        };
        trace!(x, y, "brush drag started");
        true
    }

    /// Updates the in-progress gesture. Returns `None` while idle or for
    /// non-finite input.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<PixelExtent> {
        if !x.is_finite() || !y.is_finite() {
            trace!(x, y, "non-finite pointer move ignored");
            return None;
        }
        let (x, y) = self.clamp(x, y);
        let extent = match self.phase {
            GesturePhase::Idle => return None,
            GesturePhase::Dragging { anchor_x, anchor_y } => self.span(anchor_x, anchor_y, x, y),
            GesturePhase::Resizing { handle } => self.resize(handle, x, y)?,
        };
        self.selection = Some(extent);
        Some(extent)
    }

    /// Finishes the gesture. A selection with no extent along a movable
    /// axis (a plain click) clears it and reports `PixelExtent::CLEARED`.
    pub fn pointer_up(&mut self, x: f64, y: f64) -> Option<PixelExtent> {
        let extent = self.pointer_move(x, y)?;
        self.phase = GesturePhase::Idle;
        if self.is_degenerate(extent) {
            trace!("brush gesture collapsed, clearing selection");
            self.selection = None;
            return Some(PixelExtent::CLEARED);
        }
        trace!(?extent, "brush gesture finished");
        Some(extent)
    }

    /// Aborts any gesture and drops the selection.
    ///
    /// Returns `PixelExtent::CLEARED` when there was anything to clear.
    pub fn cancel(&mut self) -> Option<PixelExtent> {
        let had_state = self.is_active() || self.selection.is_some();
        self.phase = GesturePhase::Idle;
        self.selection = None;
        had_state.then_some(PixelExtent::CLEARED)
    }

    /// Enabled handle under the point, if a selection exists.
    #[must_use]
    pub fn hit_handle(&self, x: f64, y: f64) -> Option<ResizeHandle> {
        ResizeHandle::HIT_ORDER
            .into_iter()
            .filter(|handle| self.handles.contains(*handle))
            .find(|handle| {
                self.handle_zone(*handle).is_some_and(|zone| {
                    x >= zone.left
                        && x <= zone.left + zone.width
                        && y >= zone.top
                        && y <= zone.top + zone.height
                })
            })
    }

    /// Region-local hit zone of `handle` around the current selection.
    #[must_use]
    pub fn handle_zone(&self, handle: ResizeHandle) -> Option<RegionBounds> {
        let selection = self.selection?.normalized();
        let half = self.handle_size / 2.0;

        let (left, width) = if handle.touches_left() {
            (selection.x0 - half, self.handle_size)
        } else if handle.touches_right() {
            (selection.x1 - half, self.handle_size)
        } else {
            (selection.x0, selection.width())
        };
        let (top, height) = if handle.touches_top() {
            (selection.y0 - half, self.handle_size)
        } else if handle.touches_bottom() {
            (selection.y1 - half, self.handle_size)
        } else {
            (selection.y0, selection.height())
        };
        Some(RegionBounds::new(left, top, width, height))
    }

    /// Zones of every enabled handle, in canonical handle order.
    #[must_use]
    pub fn handle_zones(&self) -> SmallVec<[(ResizeHandle, RegionBounds); 8]> {
        self.handles
            .iter()
            .filter_map(|handle| self.handle_zone(handle).map(|zone| (handle, zone)))
            .collect()
    }

    fn resize(&self, handle: ResizeHandle, x: f64, y: f64) -> Option<PixelExtent> {
        let mut extent = self.selection?;
        if self.direction.moves_x() {
            if handle.touches_left() {
                extent.x0 = x;
            } else if handle.touches_right() {
                extent.x1 = x;
            }
        }
        if self.direction.moves_y() {
            if handle.touches_top() {
                extent.y0 = y;
            } else if handle.touches_bottom() {
                extent.y1 = y;
            }
        }
        Some(extent)
    }

    fn span(&self, x0: f64, y0: f64, x1: f64, y1: f64) -> PixelExtent {
        let (x0, x1) = if self.direction.moves_x() {
            (x0, x1)
        } else {
            (0.0, self.width)
        };
        let (y0, y1) = if self.direction.moves_y() {
            (y0, y1)
        } else {
            (0.0, self.height)
        };
        PixelExtent::new(x0, x1, y0, y1)
    }

    fn is_degenerate(&self, extent: PixelExtent) -> bool {
        (self.direction.moves_x() && extent.width() == 0.0)
            || (self.direction.moves_y() && extent.height() == 0.0)
    }

    fn clamp(&self, x: f64, y: f64) -> (f64, f64) {
        (x.clamp(0.0, self.width), y.clamp(0.0, self.height))
    }
}
