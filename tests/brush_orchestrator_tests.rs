use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_relative_eq;
use chart_widgets::api::{Brush, BrushConfig, BrushRegion, YAxisOrientation};
use chart_widgets::core::{ChartLayout, DomainRange, LinearScale, Margin, PixelExtent, RegionBounds};
use chart_widgets::interaction::{BrushDirection, GesturePhase, ResizeHandleSet};
use chart_widgets::render::{NullRenderer, SelectedBoxStyle};

type Emissions = Rc<RefCell<Vec<Option<DomainRange>>>>;

fn layout() -> ChartLayout {
    ChartLayout::new(400.0, 200.0, Margin::uniform(20.0))
}

fn x_scale() -> LinearScale {
    LinearScale::new((0.0, 100.0), (0.0, 400.0)).expect("x scale")
}

fn y_scale() -> LinearScale {
    LinearScale::new((0.0, 1.0), (200.0, 0.0)).expect("y scale")
}

fn recording_brush(config: BrushConfig) -> (Brush, Emissions) {
    let mut brush = Brush::new(config, layout()).expect("brush init");
    brush.set_scales(x_scale(), y_scale());
    let emissions: Emissions = Rc::default();
    let sink = Rc::clone(&emissions);
    brush.set_on_change(move |range| sink.borrow_mut().push(range));
    (brush, emissions)
}

#[test]
fn drag_emits_translated_range_on_move_and_up() {
    let (mut brush, emissions) = recording_brush(BrushConfig::default());

    assert!(brush.pointer_down(40.0, 10.0));
    assert!(emissions.borrow().is_empty());

    let change = brush.pointer_move(120.0, 10.0).expect("move emits");
    assert_eq!(change.extent, PixelExtent::new(40.0, 120.0, 0.0, 200.0));
    let range = change.range.expect("selection");
    assert_relative_eq!(range.x0, 9.5, epsilon = 1e-9);
    assert_relative_eq!(range.x1, 30.5, epsilon = 1e-9);
    assert_relative_eq!(range.y0, -0.01, epsilon = 1e-9);
    assert_relative_eq!(range.y1, 1.01, epsilon = 1e-9);

    brush.pointer_up(120.0, 10.0).expect("up emits");
    assert_eq!(emissions.borrow().len(), 2);
    assert_eq!(brush.gesture_phase(), Some(GesturePhase::Idle));
    assert_eq!(emissions.borrow()[1], Some(range));
}

#[test]
fn each_gesture_update_fires_callback_once() {
    let (mut brush, emissions) = recording_brush(BrushConfig::default());

    brush.pointer_down(10.0, 0.0);
    for x in [20.0, 30.0, 40.0, 50.0] {
        brush.pointer_move(x, 0.0);
    }
    brush.pointer_up(60.0, 0.0);

    assert_eq!(emissions.borrow().len(), 5);
    assert!(emissions.borrow().iter().all(Option::is_some));
}

#[test]
fn brush_without_scales_is_inactive() {
    let emissions: Emissions = Rc::default();
    let sink = Rc::clone(&emissions);
    let mut brush: Brush = Brush::new(BrushConfig::default(), layout()).expect("brush init");
    brush.set_on_change(move |range| sink.borrow_mut().push(range));

    assert!(!brush.is_active());
    assert_eq!(brush.region(), None);
    assert!(!brush.pointer_down(10.0, 10.0));
    assert_eq!(brush.pointer_move(50.0, 10.0), None);
    assert_eq!(brush.pointer_up(50.0, 10.0), None);
    assert_eq!(brush.apply_extent(PixelExtent::new(1.0, 2.0, 3.0, 4.0)), None);
    assert_eq!(brush.cancel(), None);
    assert!(brush.overlay_frame().is_none());
    assert!(emissions.borrow().is_empty());
}

#[test]
fn one_missing_scale_keeps_brush_inactive() {
    let mut brush: Brush = Brush::new(BrushConfig::default(), layout()).expect("brush init");
    brush.set_x_scale(Some(x_scale()));
    assert!(!brush.is_active());

    brush.set_y_scale(Some(y_scale()));
    assert!(brush.is_active());
    assert_eq!(brush.region(), Some(RegionBounds::new(0.0, 0.0, 400.0, 200.0)));

    brush.set_x_scale(None);
    assert!(!brush.is_active());
    assert_eq!(brush.gesture_phase(), None);
}

#[test]
fn click_without_drag_clears_selection() {
    let (mut brush, emissions) = recording_brush(BrushConfig::default());

    brush.pointer_down(50.0, 10.0);
    let change = brush.pointer_up(50.0, 10.0).expect("click emits");

    assert_eq!(change.extent, PixelExtent::CLEARED);
    assert_eq!(change.range, None);
    assert_eq!(*emissions.borrow(), vec![None]);
    assert_eq!(brush.selection_extent(), None);
}

#[test]
fn cancel_emits_no_selection() {
    let (mut brush, emissions) = recording_brush(BrushConfig::default());
    brush.pointer_down(50.0, 10.0);
    brush.pointer_move(90.0, 10.0);

    let change = brush.cancel().expect("cancel emits");
    assert_eq!(change.range, None);
    assert_eq!(emissions.borrow().last(), Some(&None));
    assert_eq!(brush.gesture_phase(), Some(GesturePhase::Idle));
    assert_eq!(brush.cancel(), None);
}

#[test]
fn external_extent_is_translated_with_latest_scales() {
    let (mut brush, emissions) = recording_brush(BrushConfig::default());

    let first = brush
        .apply_extent(PixelExtent::new(102.0, 202.0, 0.0, 200.0))
        .expect("applied")
        .range
        .expect("selection");
    assert_relative_eq!(first.x0, 25.0, epsilon = 1e-9);

    brush.set_scales(
        x_scale().with_domain(0.0, 200.0).expect("zoomed x"),
        y_scale(),
    );
    let second = brush
        .apply_extent(PixelExtent::new(102.0, 202.0, 0.0, 200.0))
        .expect("applied")
        .range
        .expect("selection");
    assert_relative_eq!(second.x0, 50.0, epsilon = 1e-9);
    assert_relative_eq!(second.x1, 102.0, epsilon = 1e-9);

    let cleared = brush.apply_extent(PixelExtent::CLEARED).expect("applied");
    assert_eq!(cleared.range, None);
    assert_eq!(emissions.borrow().len(), 3);
}

#[test]
fn current_range_follows_scale_changes() {
    let (mut brush, _emissions) = recording_brush(BrushConfig::default());
    brush.pointer_down(102.0, 0.0);
    brush.pointer_up(202.0, 0.0);

    let before = brush.current_range().expect("selection");
    brush.set_scales(
        x_scale().with_domain(100.0, 200.0).expect("panned x"),
        y_scale(),
    );
    let after = brush.current_range().expect("selection");

    assert_relative_eq!(after.x0 - before.x0, 100.0, epsilon = 1e-9);
    assert_eq!(brush.selection_extent().map(|extent| extent.x0), Some(102.0));
}

#[test]
fn layout_change_re_resolves_region_and_resets_gesture() {
    let config = BrushConfig::default()
        .with_region(BrushRegion::YAxis)
        .with_y_axis_orientation(YAxisOrientation::Right)
        .with_direction(BrushDirection::Vertical)
        .with_resize_trigger_areas(ResizeHandleSet::vertical_edges());
    let (mut brush, emissions) = recording_brush(config);
    assert_eq!(brush.region(), Some(RegionBounds::new(400.0, 0.0, 20.0, 200.0)));

    brush.pointer_down(5.0, 20.0);
    brush.pointer_up(5.0, 80.0);
    assert!(brush.selection_extent().is_some());
    assert_eq!(emissions.borrow().len(), 1);

    brush
        .set_layout(ChartLayout::new(500.0, 250.0, Margin::new(0.0, 0.0, 35.0, 0.0)))
        .expect("layout");
    assert_eq!(brush.region(), Some(RegionBounds::new(500.0, 0.0, 35.0, 250.0)));
    assert_eq!(brush.selection_extent(), None);
    assert_eq!(emissions.borrow().len(), 2);
    assert_eq!(emissions.borrow().last(), Some(&None));
}

#[test]
fn layout_change_without_selection_stays_silent() {
    let (mut brush, emissions) = recording_brush(BrushConfig::default());

    brush
        .set_layout(ChartLayout::new(500.0, 200.0, Margin::uniform(20.0)))
        .expect("layout");
    assert_eq!(brush.region(), Some(RegionBounds::new(0.0, 0.0, 500.0, 200.0)));
    assert!(emissions.borrow().is_empty());
}

#[test]
fn region_local_converts_from_inner_coordinates() {
    let config = BrushConfig::default()
        .with_region(BrushRegion::YAxis)
        .with_y_axis_orientation(YAxisOrientation::Left)
        .with_direction(BrushDirection::Vertical)
        .with_resize_trigger_areas(ResizeHandleSet::vertical_edges());
    let (brush, _emissions) = recording_brush(config);

    assert_eq!(brush.region_local(-15.0, 60.0), Some((5.0, 60.0)));
}

#[test]
fn vertical_brush_on_axis_strip_spans_strip_width() {
    let config = BrushConfig::default()
        .with_region(BrushRegion::YAxis)
        .with_direction(BrushDirection::Vertical)
        .with_resize_trigger_areas(ResizeHandleSet::vertical_edges());
    let (mut brush, _emissions) = recording_brush(config);

    brush.pointer_down(3.0, 50.0);
    let change = brush.pointer_move(9.0, 150.0).expect("move emits");
    assert_eq!(change.extent, PixelExtent::new(0.0, 20.0, 50.0, 150.0));
}

#[test]
fn style_only_config_change_keeps_selection() {
    let (mut brush, emissions) = recording_brush(BrushConfig::default());
    brush.pointer_down(40.0, 0.0);
    brush.pointer_up(140.0, 0.0);

    let style = SelectedBoxStyle {
        fill_opacity: 0.5,
        ..SelectedBoxStyle::default()
    };
    brush
        .set_config(brush.config().with_selected_box_style(style))
        .expect("style update");
    assert!(brush.selection_extent().is_some());
    assert_eq!(emissions.borrow().len(), 1);

    brush
        .set_config(brush.config().with_region(BrushRegion::XAxis))
        .expect("region update");
    assert_eq!(brush.region(), Some(RegionBounds::new(0.0, 200.0, 400.0, 20.0)));
    assert_eq!(brush.selection_extent(), None);
    assert_eq!(*emissions.borrow(), vec![emissions.borrow()[0], None]);
}

#[test]
fn invalid_config_update_is_rejected_and_previous_kept() {
    let (mut brush, _emissions) = recording_brush(BrushConfig::default());
    let result = brush.set_config(BrushConfig::default().with_handle_size(-4.0));

    assert!(result.is_err());
    assert_eq!(brush.config(), BrushConfig::default());
}

#[test]
fn vertical_brush_with_side_handles_is_accepted_and_handles_stay_inert() {
    let (mut brush, _emissions) = recording_brush(BrushConfig::default());
    brush
        .set_config(BrushConfig::default().with_direction(BrushDirection::Vertical))
        .expect("vertical with left/right handles");
    assert_eq!(brush.config().direction, BrushDirection::Vertical);

    brush.pointer_down(10.0, 40.0);
    brush.pointer_up(10.0, 120.0);
    let frame = brush.overlay_frame().expect("frame");
    assert!(frame.selection.is_some());
    assert!(frame.handles.is_empty());

    assert!(brush.pointer_down(0.0, 80.0));
    assert!(matches!(brush.gesture_phase(), Some(GesturePhase::Dragging { .. })));
}

#[test]
fn non_finite_pointer_input_is_ignored() {
    let (mut brush, emissions) = recording_brush(BrushConfig::default());

    assert!(!brush.pointer_down(f64::NAN, 10.0));
    assert_eq!(brush.gesture_phase(), Some(GesturePhase::Idle));

    assert!(brush.pointer_down(40.0, 10.0));
    assert_eq!(brush.pointer_move(f64::INFINITY, 10.0), None);
    assert_eq!(brush.pointer_move(80.0, f64::NAN), None);
    assert!(emissions.borrow().is_empty());
    assert_eq!(
        brush.selection_extent(),
        Some(PixelExtent::new(40.0, 40.0, 0.0, 200.0))
    );

    let mut renderer = NullRenderer::default();
    assert!(brush.render(&mut renderer).expect("render stays valid"));
}

#[test]
fn invalid_layout_is_rejected_at_construction() {
    let result = Brush::<LinearScale, LinearScale>::new(
        BrushConfig::default(),
        ChartLayout::new(f64::NAN, 10.0, Margin::default()),
    );
    assert!(result.is_err());

    let result = Brush::<LinearScale, LinearScale>::new(
        BrushConfig::default(),
        ChartLayout::new(10.0, 10.0, Margin::new(0.0, -1.0, 0.0, 0.0)),
    );
    assert!(result.is_err());
}

#[test]
fn overlay_frame_is_offset_into_inner_space() {
    let config = BrushConfig::default().with_region(BrushRegion::XAxis);
    let (mut brush, _emissions) = recording_brush(config);
    brush.pointer_down(40.0, 5.0);
    brush.pointer_up(100.0, 5.0);

    let frame = brush.overlay_frame().expect("frame");
    assert_eq!(frame.capture.y, 200.0);
    let selection = frame.selection.expect("selected box");
    assert_eq!((selection.x, selection.y), (40.0, 200.0));
    assert_eq!((selection.width, selection.height), (60.0, 20.0));
    assert_eq!(frame.handles.len(), 2);

    let mut renderer = NullRenderer::default();
    assert!(brush.render(&mut renderer).expect("render"));
    assert_eq!(renderer.frames_rendered, 1);
    assert!(renderer.last_had_selection);
    assert_eq!(renderer.last_handle_count, 2);
}

#[test]
fn inactive_brush_renders_nothing() {
    let brush: Brush = Brush::new(BrushConfig::default(), layout()).expect("brush init");
    let mut renderer = NullRenderer::default();
    assert!(!brush.render(&mut renderer).expect("render"));
    assert_eq!(renderer.frames_rendered, 0);
}
