use crate::core::{ChartLayout, RegionBounds};

use super::{BrushRegion, XAxisOrientation, YAxisOrientation};

/// Resolves the capture region of a brush relative to the inner plot origin.
///
/// Axis strips take the full inner length along the axis and the matching
/// margin as their depth, so a strip on the left or top starts at a
/// negative offset.
#[must_use]
pub fn resolve_brush_region(
    layout: ChartLayout,
    region: BrushRegion,
    y_axis_orientation: YAxisOrientation,
    x_axis_orientation: XAxisOrientation,
) -> RegionBounds {
    let ChartLayout {
        inner_width,
        inner_height,
        margin,
    } = layout;

    match region {
        BrushRegion::Chart => RegionBounds::new(0.0, 0.0, inner_width, inner_height),
        BrushRegion::YAxis => match y_axis_orientation {
            YAxisOrientation::Right => {
                RegionBounds::new(inner_width, 0.0, margin.right, inner_height)
            }
            YAxisOrientation::Left => {
                RegionBounds::new(-margin.left, 0.0, margin.left, inner_height)
            }
        },
        BrushRegion::XAxis => match x_axis_orientation {
            XAxisOrientation::Bottom => {
                RegionBounds::new(0.0, inner_height, inner_width, margin.bottom)
            }
            XAxisOrientation::Top => RegionBounds::new(0.0, -margin.top, inner_width, margin.top),
        },
    }
}
