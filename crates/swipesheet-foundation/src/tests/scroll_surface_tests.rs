use super::*;

#[test]
fn suppressed_bounce_clamps_to_bounds() {
    let surface = ScrollSurface::new(800.0, 400.0);
    surface.set_bounces(false);

    assert_eq!(surface.dispatch_raw_delta(-50.0), 0.0);
    assert_eq!(surface.value(), 0.0);

    assert_eq!(surface.dispatch_raw_delta(500.0), 400.0);
    assert_eq!(surface.value(), 400.0);
}

#[test]
fn bounce_allows_resisted_overscroll_past_top() {
    let surface = ScrollSurface::new(800.0, 400.0);
    assert!(surface.bounces());

    surface.dispatch_raw_delta(-100.0);
    let first = surface.value();
    assert!(first < 0.0);
    assert!(surface.is_overscrolled());

    surface.dispatch_raw_delta(-100.0);
    let second = surface.value();
    assert!(
        (first - second) < 100.0,
        "pushing further into overscroll should be resisted"
    );
    assert!(second >= -800.0 * MAX_OVERSCROLL_FRACTION);
}

#[test]
fn disabling_bounce_snaps_overscroll_back() {
    let surface = ScrollSurface::new(800.0, 400.0);
    surface.dispatch_raw_delta(-60.0);
    assert!(surface.value() < 0.0);

    surface.set_bounces(false);
    assert_eq!(surface.value(), 0.0);
}

#[test]
fn offset_changes_are_reported_once() {
    let surface = ScrollSurface::new(800.0, 400.0);
    assert_eq!(surface.take_reported_offset(), None);

    surface.dispatch_raw_delta(25.0);
    assert_eq!(surface.take_reported_offset(), Some(25.0));
    assert_eq!(surface.take_reported_offset(), None);

    surface.scroll_to(0.0);
    assert_eq!(surface.take_reported_offset(), Some(0.0));
}

#[test]
fn shrinking_content_pulls_offset_back_when_bounce_is_off() {
    let surface = ScrollSurface::new(800.0, 400.0);
    surface.set_bounces(false);
    surface.scroll_to(300.0);
    surface.set_max_value(100.0);
    assert_eq!(surface.value(), 100.0);
}

#[test]
fn clones_share_state() {
    let surface = ScrollSurface::new(800.0, 400.0);
    let content_handle = surface.clone();
    content_handle.scroll_to(120.0);
    assert_eq!(surface.value(), 120.0);
    assert_eq!(surface.id(), content_handle.id());
}
