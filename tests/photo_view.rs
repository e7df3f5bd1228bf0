// SPDX-License-Identifier: MPL-2.0
use approx::assert_abs_diff_eq;
use iced::{mouse, touch, Event, Point, Size, Vector};
use photo_review::media::ImageData;
use photo_review::ui::photo_view::{Message, State};
use photo_review::ui::state::{ZoomLimits, ZoomPhase};
use std::time::{Duration, Instant};

fn loaded_surface() -> State {
    let mut state = State::new(ZoomLimits::with_max(3.0), Duration::from_millis(350));
    let _ = state.handle(Message::Resized(Size::new(400.0, 300.0)));
    state.set_image(Some(ImageData::from_rgba(400, 200, vec![128; 400 * 200 * 4])));
    state
}

fn send(state: &mut State, event: Event, at: Instant) {
    let _ = state.handle(Message::Input {
        event,
        origin: Vector::ZERO,
        at,
    });
}

fn mouse_at(state: &mut State, position: Point, at: Instant) {
    send(
        state,
        Event::Mouse(mouse::Event::CursorMoved { position }),
        at,
    );
}

fn click(state: &mut State, at: Instant) {
    send(
        state,
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
        at,
    );
    send(
        state,
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)),
        at,
    );
}

#[test]
fn double_click_zooms_in_then_out() {
    let mut state = loaded_surface();
    let start = Instant::now();
    mouse_at(&mut state, Point::new(200.0, 150.0), start);

    click(&mut state, start);
    click(&mut state, start + Duration::from_millis(100));
    assert!(state.is_animating());
    let _ = state.handle(Message::Frame(start + Duration::from_millis(500)));
    assert!(!state.is_animating());
    assert_abs_diff_eq!(state.zoom_scale(), 3.0, epsilon = 1e-3);
    assert!(state.is_scroll_enabled());

    click(&mut state, start + Duration::from_millis(1000));
    click(&mut state, start + Duration::from_millis(1100));
    let _ = state.handle(Message::Frame(start + Duration::from_millis(1500)));
    assert_abs_diff_eq!(state.zoom_scale(), 1.0, epsilon = 1e-3);
    assert!(!state.is_scroll_enabled());
    assert_eq!(state.offset(), Vector::ZERO);
}

#[test]
fn slow_clicks_do_not_zoom() {
    let mut state = loaded_surface();
    let start = Instant::now();
    mouse_at(&mut state, Point::new(200.0, 150.0), start);

    click(&mut state, start);
    click(&mut state, start + Duration::from_millis(800));
    assert_abs_diff_eq!(state.zoom_scale(), 1.0, epsilon = 1e-3);
    assert_eq!(state.phase(), ZoomPhase::Idle);
}

#[test]
fn drag_pans_only_while_zoomed() {
    let mut state = loaded_surface();
    let start = Instant::now();

    // At minimum scale a drag leaves the offset untouched.
    mouse_at(&mut state, Point::new(200.0, 150.0), start);
    send(
        &mut state,
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
        start,
    );
    mouse_at(&mut state, Point::new(150.0, 100.0), start);
    send(
        &mut state,
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)),
        start,
    );
    assert_eq!(state.offset(), Vector::ZERO);

    state.set_zoom_scale(2.0);
    let before = state.offset();
    let later = start + Duration::from_secs(2);
    mouse_at(&mut state, Point::new(200.0, 150.0), later);
    send(
        &mut state,
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
        later,
    );
    assert!(state.is_dragging());
    mouse_at(&mut state, Point::new(180.0, 140.0), later);
    assert_abs_diff_eq!(state.offset().x, before.x + 20.0, epsilon = 1e-3);
    assert_abs_diff_eq!(state.offset().y, before.y + 10.0, epsilon = 1e-3);

    send(
        &mut state,
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)),
        later,
    );
    assert!(!state.is_dragging());
}

#[test]
fn wheel_zoom_settles_after_quiet_period() {
    let mut state = loaded_surface();
    let start = Instant::now();
    mouse_at(&mut state, Point::new(200.0, 150.0), start);

    send(
        &mut state,
        Event::Mouse(mouse::Event::WheelScrolled {
            delta: mouse::ScrollDelta::Lines { x: 0.0, y: 3.0 },
        }),
        start,
    );
    assert!(state.zoom_scale() > 1.0);
    assert_eq!(state.phase(), ZoomPhase::Zooming);
    assert!(state.needs_tick());

    let _ = state.handle(Message::Tick(start + Duration::from_millis(10)));
    assert_eq!(state.phase(), ZoomPhase::Zooming);

    let _ = state.handle(Message::Tick(start + Duration::from_secs(1)));
    assert_eq!(state.phase(), ZoomPhase::Settled);
    assert!(!state.needs_tick());
}

#[test]
fn pinch_zooms_around_finger_midpoint() {
    let mut state = loaded_surface();
    let start = Instant::now();
    let a = touch::Finger(1);
    let b = touch::Finger(2);

    send(
        &mut state,
        Event::Touch(touch::Event::FingerPressed {
            id: a,
            position: Point::new(150.0, 150.0),
        }),
        start,
    );
    send(
        &mut state,
        Event::Touch(touch::Event::FingerPressed {
            id: b,
            position: Point::new(250.0, 150.0),
        }),
        start,
    );
    send(
        &mut state,
        Event::Touch(touch::Event::FingerMoved {
            id: b,
            position: Point::new(350.0, 150.0),
        }),
        start,
    );
    assert_abs_diff_eq!(state.zoom_scale(), 2.0, epsilon = 1e-3);
    assert_eq!(state.phase(), ZoomPhase::Zooming);

    send(
        &mut state,
        Event::Touch(touch::Event::FingerLifted {
            id: b,
            position: Point::new(350.0, 150.0),
        }),
        start,
    );
    assert_eq!(state.phase(), ZoomPhase::Settled);
    assert!(state.is_scroll_enabled());
}

#[test]
fn pinching_below_minimum_snaps_back() {
    let mut state = loaded_surface();
    let initial = state.image_frame();

    state.pinch(0.5, Point::new(200.0, 150.0));
    state.finish_pinch();

    assert_abs_diff_eq!(state.zoom_scale(), 1.0, epsilon = 1e-3);
    assert_eq!(state.image_frame(), initial);
    assert!(!state.is_scroll_enabled());
}
