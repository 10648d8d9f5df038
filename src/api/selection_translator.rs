use tracing::trace;

use crate::core::{DomainRange, PixelExtent, ScaleAdapter};

/// Outward correction applied to each extent edge before inversion, so the
/// domain range covers the area under the selection handles.
pub const SAFE_PIXEL: f64 = 2.0;

/// Translates a raw gesture extent into a normalized domain range.
///
/// Returns `None` for a cleared extent (`x0 < 0`) or one with non-finite
/// coordinates. Scales are read on every call, so zoom or pan between
/// gestures is picked up.
pub fn translate_extent<X, Y>(
    extent: PixelExtent,
    x_scale: &X,
    y_scale: &Y,
) -> Option<DomainRange>
where
    X: ScaleAdapter + ?Sized,
    Y: ScaleAdapter + ?Sized,
{
    if extent.is_cleared() {
        trace!(x0 = extent.x0, "cleared extent, no selection");
        return None;
    }
    if !extent.is_finite() {
        trace!(?extent, "non-finite extent, no selection");
        return None;
    }

    let (x0, x1) = widen_edges(extent.x0, extent.x1);
    let (y0, y1) = widen_edges(extent.y0, extent.y1);

    Some(DomainRange::from_corners(
        x_scale.invert(x0),
        x_scale.invert(x1),
        y_scale.invert(y0),
        y_scale.invert(y1),
    ))
}

/// Moves the smaller edge down and the larger one up by `SAFE_PIXEL`.
/// Equal edges are treated like `start >= end`.
fn widen_edges(start: f64, end: f64) -> (f64, f64) {
    if start < end {
        (start - SAFE_PIXEL, end + SAFE_PIXEL)
    } else {
        (start + SAFE_PIXEL, end - SAFE_PIXEL)
    }
}
