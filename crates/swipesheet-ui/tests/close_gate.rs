use swipesheet_testing::prelude::*;

#[test]
fn repeated_close_requests_navigate_once() {
    let mut harness = OverlayHarness::new();
    harness.mount(None).unwrap();

    assert!(harness.screen().request_close());
    assert!(!harness.screen().request_close());
    harness.run_until_idle();

    assert_eq!(harness.host().navigator.calls(), 1);
    assert_eq!(harness.host().haptics.pulses().len(), 1);
}

#[test]
fn drag_dismissal_after_explicit_close_does_not_navigate_again() {
    let mut harness = OverlayHarness::new();
    harness.mount(None).unwrap();
    harness.advance_frame();

    harness.screen().request_close();
    harness.drag(180.0);
    harness.run_until_idle();

    assert!(harness.screen().is_closing());
    assert_eq!(harness.host().navigator.calls(), 1);
    assert_eq!(harness.host().haptics.pulses().len(), 1);
}

#[test]
fn navigation_waits_for_the_next_frame() {
    let mut harness = OverlayHarness::new();
    harness.mount(None).unwrap();

    harness.screen().request_close();
    assert_eq!(harness.host().navigator.calls(), 0);
    harness.advance_frame();
    assert_eq!(harness.host().navigator.calls(), 1);
}

#[test]
fn collaborator_failures_do_not_stop_dismissal() {
    let mut harness = OverlayHarness::new();
    harness.mount(None).unwrap();
    harness.host().haptics.set_unavailable(true);
    harness.host().scale.set_rejecting(true);
    harness.host().status_bar.set_rejecting(true);
    harness.advance_frame();

    harness.drag(220.0);
    let style = harness.run_until_idle();

    assert_eq!(harness.host().navigator.calls(), 1);
    assert!(harness.host().haptics.pulses().is_empty());
    assert!(harness.host().scale.values().is_empty());
    assert!(harness.host().scale.rejected().contains(&1.0));
    assert_eq!(style.translate_y, 320.0);
}
