use std::cell::RefCell;
use std::rc::Rc;

use pointgraph::api::{CaptureState, SelectionEvent, SelectorController, SelectorControllerConfig};
use pointgraph::core::{Bin, Point, Viewport};
use smallvec::SmallVec;

// Domain 0..100 over a 0..200 viewport: two pixels per unit.
fn dual_controller_with(config: SelectorControllerConfig) -> SelectorController {
    let mut controller = SelectorController::new(config).expect("controller init");
    let bins = (0..10)
        .map(|i| {
            let from = f64::from(i) * 10.0;
            Bin::new(from, from + 10.0, 10.0).expect("bin")
        })
        .collect();
    controller.bind_bins(bins).expect("bind bins");
    controller
}

fn dual_controller() -> SelectorController {
    dual_controller_with(SelectorControllerConfig::dual(Viewport::new(0.0, 200.0)))
}

#[test]
fn press_on_one_handle_captures_it() {
    let mut controller = dual_controller();

    assert!(controller.pointer_down(0.0, 0.0));
    assert_eq!(controller.capture_state(), CaptureState::MinCaptured);
    controller.pointer_up();

    assert!(controller.pointer_down(195.0, 0.0));
    assert_eq!(controller.capture_state(), CaptureState::MaxCaptured);
    controller.pointer_cancel();
    assert_eq!(controller.capture_state(), CaptureState::Idle);
}

#[test]
fn press_does_not_move_the_handle() {
    let mut controller = dual_controller();

    assert!(controller.pointer_down(20.0, 0.0));
    assert_eq!(controller.min_value(), Some(0.0));
}

#[test]
fn press_away_from_handles_is_a_no_op() {
    let mut controller = dual_controller();

    assert!(!controller.pointer_down(100.0, 0.0));
    assert_eq!(controller.capture_state(), CaptureState::Idle);
    controller.pointer_move(150.0);
    assert_eq!(controller.min_value(), Some(0.0));
    assert_eq!(controller.max_value(), Some(100.0));
}

#[test]
fn press_without_data_is_a_no_op() {
    let config = SelectorControllerConfig::dual(Viewport::new(0.0, 200.0));
    let mut controller = SelectorController::new(config).expect("controller init");

    assert!(!controller.pointer_down(0.0, 0.0));
    assert!(!controller.is_gesture_active());
    controller.pointer_move(10.0);
    controller.pointer_up();
    assert_eq!(controller.selection(), None);
}

#[test]
fn min_drag_is_clamped_to_max_handle() {
    let mut controller = dual_controller();
    controller
        .set_values(Some(10.0), Some(60.0))
        .expect("set values");

    assert!(controller.pointer_down(20.0, 0.0));
    controller.pointer_move(50.0);
    assert_eq!(controller.min_value(), Some(25.0));

    controller.pointer_move(500.0);
    assert_eq!(controller.min_value(), Some(60.0));
    assert_eq!(controller.max_value(), Some(60.0));

    controller.pointer_move(-300.0);
    assert_eq!(controller.min_value(), Some(0.0));
    controller.pointer_up();
}

#[test]
fn max_drag_is_clamped_to_min_handle_and_viewport() {
    let mut controller = dual_controller();
    controller
        .set_values(Some(40.0), Some(90.0))
        .expect("set values");

    assert!(controller.pointer_down(180.0, 0.0));
    controller.pointer_move(-50.0);
    assert_eq!(controller.max_value(), Some(40.0));
    assert_eq!(controller.min_value(), Some(40.0));

    controller.pointer_move(1_000.0);
    assert_eq!(controller.max_value(), Some(100.0));
    controller.pointer_up();
}

#[test]
fn coincident_handles_resolve_leftward_to_min() {
    let mut controller = dual_controller();
    controller
        .set_values(Some(50.0), Some(50.0))
        .expect("set values");

    assert!(controller.pointer_down(100.0, 0.0));
    assert_eq!(controller.capture_state(), CaptureState::BothCaptured);

    controller.pointer_move(90.0);
    assert_eq!(controller.capture_state(), CaptureState::MinCaptured);
    assert_eq!(controller.min_value(), Some(45.0));
    assert_eq!(controller.max_value(), Some(50.0));
}

#[test]
fn coincident_handles_resolve_rightward_to_max() {
    let mut controller = dual_controller();
    controller
        .set_values(Some(50.0), Some(50.0))
        .expect("set values");

    assert!(controller.pointer_down(100.0, 0.0));
    controller.pointer_move(110.0);
    assert_eq!(controller.capture_state(), CaptureState::MaxCaptured);
    assert_eq!(controller.min_value(), Some(50.0));
    assert_eq!(controller.max_value(), Some(55.0));

    // Resolution sticks even when the pointer comes back left.
    controller.pointer_move(104.0);
    assert_eq!(controller.capture_state(), CaptureState::MaxCaptured);
    assert_eq!(controller.max_value(), Some(52.0));
}

#[test]
fn moves_inside_dead_zone_keep_both_captured() {
    let config = SelectorControllerConfig::dual(Viewport::new(0.0, 200.0)).with_dead_zone(4.0);
    let mut controller = dual_controller_with(config);
    controller
        .set_values(Some(50.0), Some(50.0))
        .expect("set values");

    assert!(controller.pointer_down(100.0, 0.0));
    controller.pointer_move(97.0);
    controller.pointer_move(104.0);
    assert_eq!(controller.capture_state(), CaptureState::BothCaptured);
    assert_eq!(controller.min_value(), Some(50.0));
    assert_eq!(controller.max_value(), Some(50.0));

    controller.pointer_move(95.0);
    assert_eq!(controller.capture_state(), CaptureState::MinCaptured);
    assert_eq!(controller.min_value(), Some(47.5));
}

#[test]
fn press_near_one_centre_captures_that_handle() {
    let mut controller = dual_controller();
    controller
        .set_values(Some(45.0), Some(55.0))
        .expect("set values");
    assert_eq!(
        controller.selector_positions(),
        SmallVec::<[f64; 2]>::from_slice(&[90.0, 110.0])
    );

    // Inside both fields, but within the centre radius of min only.
    assert!(controller.pointer_down(93.0, 0.0));
    assert_eq!(controller.capture_state(), CaptureState::MinCaptured);
    controller.pointer_move(105.0);
    assert_eq!(controller.min_value(), Some(52.5));
    controller.pointer_up();

    // Equidistant presses stay ambiguous.
    controller
        .set_values(Some(45.0), Some(55.0))
        .expect("set values");
    assert!(controller.pointer_down(100.0, 0.0));
    assert_eq!(controller.capture_state(), CaptureState::BothCaptured);
}

#[test]
fn disabled_centre_capture_keeps_overlap_ambiguous() {
    let config = SelectorControllerConfig::dual(Viewport::new(0.0, 200.0))
        .with_center_capture_ratio(0.0);
    let mut controller = dual_controller_with(config);
    controller
        .set_values(Some(45.0), Some(55.0))
        .expect("set values");

    assert!(controller.pointer_down(91.0, 0.0));
    assert_eq!(controller.capture_state(), CaptureState::BothCaptured);
}

#[test]
fn vertical_band_filters_presses() {
    let config =
        SelectorControllerConfig::dual(Viewport::new(0.0, 200.0)).with_hit_zone_band(40.0, 60.0);
    let mut controller = dual_controller_with(config);

    assert!(!controller.pointer_down(0.0, 10.0));
    assert!(controller.pointer_down(0.0, 50.0));
}

#[test]
fn release_stops_value_changes() {
    let mut controller = dual_controller();

    assert!(controller.pointer_down(0.0, 0.0));
    controller.pointer_move(40.0);
    controller.pointer_up();
    controller.pointer_move(120.0);

    assert_eq!(controller.min_value(), Some(20.0));
    assert!(!controller.is_gesture_active());
}

#[test]
fn non_finite_pointer_input_is_ignored() {
    let mut controller = dual_controller();

    assert!(!controller.pointer_down(f64::NAN, 0.0));
    assert!(controller.pointer_down(0.0, 0.0));
    controller.pointer_move(f64::INFINITY);
    controller.pointer_move(f64::NAN);
    assert_eq!(controller.min_value(), Some(0.0));
}

#[test]
fn viewport_resize_moves_handles_not_values() {
    let mut controller = dual_controller();
    controller
        .set_values(Some(25.0), Some(75.0))
        .expect("set values");

    controller
        .set_viewport(Viewport::new(100.0, 500.0))
        .expect("resize");
    assert_eq!(
        controller.selector_positions(),
        SmallVec::<[f64; 2]>::from_slice(&[200.0, 400.0])
    );
    assert_eq!(controller.min_value(), Some(25.0));
    assert!(controller.set_viewport(Viewport::new(5.0, 1.0)).is_err());
}

#[test]
fn degenerate_domain_fills_viewport_and_ignores_drags() {
    let config = SelectorControllerConfig::dual(Viewport::new(0.0, 200.0));
    let mut controller = SelectorController::new(config).expect("controller init");
    controller
        .bind_points(vec![Point::new(5.0, 1.0), Point::new(5.0, 3.0)])
        .expect("bind points");

    assert_eq!(
        controller.selector_positions(),
        SmallVec::<[f64; 2]>::from_slice(&[0.0, 200.0])
    );
    assert!(controller.pointer_down(0.0, 0.0));
    controller.pointer_move(80.0);
    assert_eq!(controller.min_value(), Some(5.0));
    assert_eq!(controller.max_value(), Some(5.0));
}

#[test]
fn dragging_past_viewport_edges_lands_exactly_on_domain_bounds() {
    let config = SelectorControllerConfig::dual(Viewport::new(1.0, 963.0));
    let mut controller = SelectorController::new(config).expect("controller init");
    controller
        .bind_points(vec![Point::new(-21.35, 3.0), Point::new(27.62, 8.0)])
        .expect("bind points");
    assert_eq!(controller.selector_positions().as_slice(), &[1.0, 963.0]);

    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    controller
        .on_selection_event("recorder", move |event| sink.borrow_mut().push(event))
        .expect("register closure");

    assert!(controller.pointer_down(963.0, 0.0));
    controller.pointer_move(2_000.0);
    assert_eq!(controller.max_value(), Some(27.62));
    assert_eq!(
        *events.borrow(),
        vec![SelectionEvent::GestureStarted {
            capture: CaptureState::MaxCaptured
        }]
    );

    // A full round trip away from the edge and back restores the bound.
    controller.pointer_move(500.0);
    assert!(controller.max_value().is_some_and(|max| max < 27.62));
    controller.pointer_move(2_000.0);
    assert_eq!(controller.max_value(), Some(27.62));
    controller.pointer_up();

    assert!(controller.pointer_down(1.0, 0.0));
    controller.pointer_move(300.0);
    controller.pointer_move(-2_000.0);
    assert_eq!(controller.min_value(), Some(-21.35));
    controller.pointer_up();
}
