use std::fmt;

use tracing::{debug, trace};

use crate::core::{ChartLayout, DomainRange, LinearScale, PixelExtent, RegionBounds, ScaleAdapter};
use crate::error::ChartResult;
use crate::interaction::{BrushGesture, GesturePhase};
use crate::render::{BrushOverlayFrame, RectPrimitive, Renderer};

use super::{BrushConfig, resolve_brush_region, translate_extent};

/// Consumer callback receiving every selection update; `None` means cleared.
pub type ChangeCallback = Box<dyn FnMut(Option<DomainRange>)>;

/// One emitted update: the raw extent and what it translated to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionChange {
    pub extent: PixelExtent,
    pub range: Option<DomainRange>,
}

/// Capture region plus the gesture registered on it. Exists only while
/// both scales are present.
#[derive(Debug, Clone, PartialEq)]
struct Mount {
    region: RegionBounds,
    gesture: BrushGesture,
}

/// Brush selection overlay for an XY chart.
///
/// The brush is inactive until both scale adapters are set: it resolves no
/// geometry, registers no gesture and never calls the change callback.
/// Pointer input is region-local; use `region_local` to convert from
/// chart-inner coordinates.
pub struct Brush<X = LinearScale, Y = LinearScale> {
    config: BrushConfig,
    layout: ChartLayout,
    x_scale: Option<X>,
    y_scale: Option<Y>,
    on_change: Option<ChangeCallback>,
    mount: Option<Mount>,
}

impl<X, Y> Brush<X, Y>
where
    X: ScaleAdapter,
    Y: ScaleAdapter,
{
    pub fn new(config: BrushConfig, layout: ChartLayout) -> ChartResult<Self> {
        Ok(Self {
            config: config.validate()?,
            layout: layout.validate()?,
            x_scale: None,
            y_scale: None,
            on_change: None,
            mount: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> BrushConfig {
        self.config
    }

    #[must_use]
    pub fn layout(&self) -> ChartLayout {
        self.layout
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.mount.is_some()
    }

    /// Resolved capture region, `None` while inactive.
    #[must_use]
    pub fn region(&self) -> Option<RegionBounds> {
        self.mount.as_ref().map(|mount| mount.region)
    }

    #[must_use]
    pub fn gesture_phase(&self) -> Option<GesturePhase> {
        self.mount.as_ref().map(|mount| mount.gesture.phase())
    }

    /// Current region-local selection extent.
    #[must_use]
    pub fn selection_extent(&self) -> Option<PixelExtent> {
        self.mount.as_ref()?.gesture.selection()
    }

    /// Current selection re-translated through the latest scales.
    #[must_use]
    pub fn current_range(&self) -> Option<DomainRange> {
        let extent = self.selection_extent()?;
        let (x_scale, y_scale) = self.scales()?;
        translate_extent(extent, x_scale, y_scale)
    }

    pub fn set_on_change<F>(&mut self, callback: F)
    where
        F: FnMut(Option<DomainRange>) + 'static,
    {
        self.on_change = Some(Box::new(callback));
    }

    pub fn clear_on_change(&mut self) {
        self.on_change = None;
    }

    pub fn set_config(&mut self, config: BrushConfig) -> ChartResult<()> {
        let config = config.validate()?;
        let same_geometry = config.same_geometry(&self.config);
        self.config = config;
        if !same_geometry {
            self.remount();
        }
        Ok(())
    }

    pub fn set_layout(&mut self, layout: ChartLayout) -> ChartResult<()> {
        let layout = layout.validate()?;
        if layout != self.layout {
            self.layout = layout;
            self.remount();
        }
        Ok(())
    }

    pub fn set_scales(&mut self, x_scale: X, y_scale: Y) {
        self.x_scale = Some(x_scale);
        self.y_scale = Some(y_scale);
        self.sync_activation();
    }

    pub fn set_x_scale(&mut self, x_scale: Option<X>) {
        self.x_scale = x_scale;
        self.sync_activation();
    }

    pub fn set_y_scale(&mut self, y_scale: Option<Y>) {
        self.y_scale = y_scale;
        self.sync_activation();
    }

    pub fn clear_scales(&mut self) {
        self.x_scale = None;
        self.y_scale = None;
        self.sync_activation();
    }

    /// Converts chart-inner coordinates into region-local ones.
    #[must_use]
    pub fn region_local(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        let region = self.region()?;
        Some((x - region.left, y - region.top))
    }

    /// Returns `true` when a drag or resize started.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        self.mount
            .as_mut()
            .is_some_and(|mount| mount.gesture.pointer_down(x, y))
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<SelectionChange> {
        let extent = self.mount.as_mut()?.gesture.pointer_move(x, y)?;
        self.emit(extent)
    }

    pub fn pointer_up(&mut self, x: f64, y: f64) -> Option<SelectionChange> {
        let extent = self.mount.as_mut()?.gesture.pointer_up(x, y)?;
        self.emit(extent)
    }

    /// Aborts the gesture and clears the selection, emitting `None`.
    pub fn cancel(&mut self) -> Option<SelectionChange> {
        let extent = self.mount.as_mut()?.gesture.cancel()?;
        self.emit(extent)
    }

    /// Forwards an extent produced by an external gesture source.
    pub fn apply_extent(&mut self, extent: PixelExtent) -> Option<SelectionChange> {
        if !self.is_active() {
            return None;
        }
        self.emit(extent)
    }

    /// Overlay shapes in chart-inner pixel space, `None` while inactive.
    #[must_use]
    pub fn overlay_frame(&self) -> Option<BrushOverlayFrame> {
        let mount = self.mount.as_ref()?;
        let region = mount.region;
        let offset = |bounds: RegionBounds| {
            RegionBounds::new(
                bounds.left + region.left,
                bounds.top + region.top,
                bounds.width,
                bounds.height,
            )
        };

        let selection = mount.gesture.selection().map(|extent| {
            let extent = extent.normalized();
            let bounds = RegionBounds::new(extent.x0, extent.y0, extent.width(), extent.height());
            RectPrimitive::styled(offset(bounds), self.config.selected_box_style)
        });
        let handles = mount
            .gesture
            .handle_zones()
            .into_iter()
            .map(|(handle, zone)| (handle, RectPrimitive::transparent(offset(zone))))
            .collect();

        Some(BrushOverlayFrame {
            capture: RectPrimitive::transparent(region),
            selection,
            handles,
        })
    }

    /// Hands the overlay to `renderer`; returns `false` while inactive.
    pub fn render<R: Renderer>(&self, renderer: &mut R) -> ChartResult<bool> {
        let Some(frame) = self.overlay_frame() else {
            return Ok(false);
        };
        renderer.render(&frame)?;
        Ok(true)
    }

    fn scales(&self) -> Option<(&X, &Y)> {
        Some((self.x_scale.as_ref()?, self.y_scale.as_ref()?))
    }

    fn emit(&mut self, extent: PixelExtent) -> Option<SelectionChange> {
        let (x_scale, y_scale) = self.scales()?;
        let range = translate_extent(extent, x_scale, y_scale);
        trace!(?extent, ?range, "brush selection changed");
        if let Some(callback) = self.on_change.as_mut() {
            callback(range);
        }
        Some(SelectionChange { extent, range })
    }

    fn sync_activation(&mut self) {
        match (self.scales().is_some(), self.mount.is_some()) {
            (true, false) => {
                self.remount();
                debug!(region = ?self.region(), "brush activated");
            }
            (false, true) => {
                self.mount = None;
                debug!("brush deactivated, scale adapter missing");
            }
            _ => {}
        }
    }

    /// Re-resolves the region and registers a fresh gesture. A selection
    /// dropped on the way is reported to the consumer as cleared.
    fn remount(&mut self) {
        if self.scales().is_none() {
            self.mount = None;
            return;
        }
        let had_selection = self.selection_extent().is_some();

        let region = resolve_brush_region(
            self.layout,
            self.config.region,
            self.config.y_axis_orientation,
            self.config.x_axis_orientation,
        );
        debug!(
            region = ?self.config.region,
            left = region.left,
            top = region.top,
            width = region.width,
            height = region.height,
            "resolved brush region"
        );
        self.mount = Some(Mount {
            region,
            gesture: BrushGesture::new(
                region.width,
                region.height,
                self.config.direction,
                self.config.resize_trigger_areas,
                self.config.handle_size,
            ),
        });
        if had_selection {
            self.emit(PixelExtent::CLEARED);
        }
    }
}

impl<X: fmt::Debug, Y: fmt::Debug> fmt::Debug for Brush<X, Y> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Brush")
            .field("config", &self.config)
            .field("layout", &self.layout)
            .field("x_scale", &self.x_scale)
            .field("y_scale", &self.y_scale)
            .field("has_on_change", &self.on_change.is_some())
            .field("mount", &self.mount)
            .finish()
    }
}
