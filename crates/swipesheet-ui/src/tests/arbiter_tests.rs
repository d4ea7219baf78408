use super::*;
use std::sync::Arc;
use swipesheet_core::{logic_channel, LogicInbox, NoopScheduler, FRAME_INTERVAL_NANOS};

struct Rig {
    arbiter: GestureArbiter,
    clock: FrameClock,
    inbox: LogicInbox<LogicMessage>,
    time: u64,
}

impl Rig {
    fn new() -> Self {
        let (dispatcher, inbox) = logic_channel(Arc::new(NoopScheduler));
        let clock = FrameClock::new(Arc::new(NoopScheduler));
        let bus = SignalBus::new(0.83, dispatcher);
        let arbiter = GestureArbiter::new(OverlayConfig::default(), bus, clock.clone());
        Self {
            arbiter,
            clock,
            inbox,
            time: 0,
        }
    }

    fn bus(&self) -> SignalBus {
        self.arbiter.bus().clone()
    }

    fn frame(&mut self) {
        self.time += FRAME_INTERVAL_NANOS;
        self.clock.drain_frame_callbacks(self.time);
        self.arbiter.on_frame();
    }

    fn settle(&mut self) {
        for _ in 0..600 {
            self.frame();
            if !self.arbiter.is_animating() {
                return;
            }
        }
        panic!("animations did not settle");
    }

    fn messages(&mut self) -> Vec<LogicMessage> {
        let mut out = Vec::new();
        self.inbox.drain(|message| out.push(message));
        out
    }
}

#[test]
fn drag_start_with_scrolled_content_cedes_to_scroll() {
    let mut rig = Rig::new();
    rig.arbiter.on_scroll(40.0);

    assert_eq!(rig.arbiter.on_drag_start(), DragOwner::Scroll);
    rig.arbiter.on_drag_update(120.0);
    rig.arbiter.on_drag_end(120.0);

    let bus = rig.bus();
    assert!(!bus.drag_active());
    assert_eq!(bus.drag_offset(), 0.0);
    assert_eq!(rig.arbiter.phase(), DragPhase::Idle);
    assert!(rig.messages().is_empty());
}

#[test]
fn offset_tracks_downward_translation_and_clamps_upward() {
    let mut rig = Rig::new();
    assert_eq!(rig.arbiter.on_drag_start(), DragOwner::Overlay);
    let bus = rig.bus();

    for (translation, expected) in [(10.0, 10.0), (45.0, 45.0), (-20.0, 0.0), (30.0, 30.0)] {
        rig.arbiter.on_drag_update(translation);
        assert!(bus.drag_active());
        assert_eq!(bus.drag_offset(), expected);
    }
}

#[test]
fn scale_and_status_follow_progress() {
    let mut rig = Rig::new();
    rig.arbiter.on_drag_start();
    let bus = rig.bus();

    rig.arbiter.on_drag_update(360.0);
    assert_eq!(bus.status_bar(), StatusBarStyle::Dark);
    assert!((bus.scale() - (0.83 + 0.6 * 0.17)).abs() < 1e-5);

    rig.arbiter.on_drag_update(180.0);
    assert_eq!(bus.status_bar(), StatusBarStyle::Light);
    assert!((bus.scale() - (0.83 + 0.3 * 0.17)).abs() < 1e-5);

    rig.arbiter.on_drag_update(900.0);
    assert_eq!(bus.scale(), 1.0);
}

#[test]
fn status_changes_are_forwarded_once_per_flip() {
    let mut rig = Rig::new();
    rig.arbiter.on_drag_start();
    for translation in [310.0, 320.0, 330.0, 200.0, 190.0] {
        rig.arbiter.on_drag_update(translation);
    }

    let statuses: Vec<_> = rig
        .messages()
        .into_iter()
        .filter_map(|message| match message {
            LogicMessage::Signal(SignalValue::StatusBar(style)) => Some(style),
            _ => None,
        })
        .collect();
    assert_eq!(statuses, vec![StatusBarStyle::Dark, StatusBarStyle::Light]);
}

#[test]
fn short_release_snaps_back_to_rest() {
    let mut rig = Rig::new();
    rig.arbiter.on_drag_start();
    rig.arbiter.on_drag_update(60.0);
    rig.arbiter.on_drag_end(60.0);

    assert_eq!(rig.arbiter.phase(), DragPhase::SnappingBack);
    assert!(!rig.bus().drag_active());

    rig.settle();
    let bus = rig.bus();
    assert_eq!(rig.arbiter.phase(), DragPhase::Idle);
    assert_eq!(bus.drag_offset(), 0.0);
    assert_eq!(bus.scale(), 0.83);
    assert!(!rig.messages().contains(&LogicMessage::RequestClose));
}

#[test]
fn snap_back_forwards_the_expanded_scale_last() {
    let mut rig = Rig::new();
    rig.arbiter.on_drag_start();
    rig.arbiter.on_drag_update(90.0);
    rig.arbiter.on_drag_end(90.0);
    rig.settle();

    let scales: Vec<f32> = rig
        .messages()
        .into_iter()
        .filter_map(|message| match message {
            LogicMessage::Signal(SignalValue::Scale(value)) => Some(value),
            _ => None,
        })
        .collect();
    assert!(scales.len() > 2);
    assert!(scales.iter().all(|scale| (0.83..=1.0).contains(scale)), "{scales:?}");
    assert_eq!(scales.last().copied(), Some(0.83));
}

#[test]
fn snap_back_overshoot_never_lifts_the_offset() {
    let mut rig = Rig::new();
    rig.arbiter.on_drag_start();
    rig.arbiter.on_drag_update(90.0);
    rig.arbiter.on_drag_end(90.0);

    for _ in 0..600 {
        rig.frame();
        assert!(rig.bus().drag_offset() >= 0.0);
        assert!(rig.bus().scale() >= 0.83);
        if !rig.arbiter.is_animating() {
            break;
        }
    }
    assert_eq!(rig.arbiter.phase(), DragPhase::Idle);
}

#[test]
fn long_release_dismisses_once() {
    let mut rig = Rig::new();
    rig.arbiter.on_drag_start();
    rig.arbiter.on_drag_update(150.0);
    rig.arbiter.on_drag_end(150.0);

    assert_eq!(rig.arbiter.phase(), DragPhase::Dismissing);
    assert_eq!(rig.bus().scale(), 1.0);

    let messages = rig.messages();
    let closes = messages
        .iter()
        .filter(|message| **message == LogicMessage::RequestClose)
        .count();
    assert_eq!(closes, 1);
    assert!(messages.contains(&LogicMessage::Signal(SignalValue::Scale(1.0))));

    for _ in 0..30 {
        rig.frame();
    }
    assert_eq!(rig.bus().drag_offset(), 250.0);
    assert_eq!(rig.arbiter.phase(), DragPhase::Dismissing);
}

#[test]
fn release_exactly_at_threshold_snaps_back() {
    let mut rig = Rig::new();
    rig.arbiter.on_drag_start();
    rig.arbiter.on_drag_update(100.0);
    rig.arbiter.on_drag_end(100.0);
    assert_eq!(rig.arbiter.phase(), DragPhase::SnappingBack);
}

#[test]
fn drag_start_is_ignored_while_dismissing() {
    let mut rig = Rig::new();
    rig.arbiter.on_drag_start();
    rig.arbiter.on_drag_end(200.0);
    rig.messages();

    assert_eq!(rig.arbiter.on_drag_start(), DragOwner::Ignored);
    rig.arbiter.on_drag_update(10.0);
    rig.arbiter.on_drag_end(10.0);
    assert_eq!(rig.arbiter.phase(), DragPhase::Dismissing);
    assert!(rig.messages().is_empty());
}

#[test]
fn new_drag_interrupts_snap_back() {
    let mut rig = Rig::new();
    rig.arbiter.on_drag_start();
    rig.arbiter.on_drag_update(80.0);
    rig.arbiter.on_drag_end(80.0);
    rig.frame();
    rig.frame();

    assert_eq!(rig.arbiter.on_drag_start(), DragOwner::Overlay);
    assert_eq!(rig.arbiter.phase(), DragPhase::Armed);
    assert_eq!(rig.bus().drag_offset(), 0.0);
    assert!(!rig.arbiter.is_animating());
}

#[test]
fn cancel_clears_drag_active_without_moving_offset() {
    let mut rig = Rig::new();
    rig.arbiter.on_drag_start();
    rig.arbiter.on_drag_update(70.0);
    rig.arbiter.on_drag_cancel();

    let bus = rig.bus();
    assert!(!bus.drag_active());
    assert_eq!(bus.drag_offset(), 70.0);
    assert_eq!(rig.arbiter.phase(), DragPhase::Idle);

    rig.arbiter.on_scroll(0.0);
    assert_eq!(bus.drag_offset(), 0.0);
}

#[test]
fn scroll_begin_clears_stale_offset() {
    let mut rig = Rig::new();
    rig.arbiter.on_drag_start();
    rig.arbiter.on_drag_update(30.0);
    rig.arbiter.on_drag_cancel();

    rig.arbiter.on_scroll_begin();
    assert_eq!(rig.bus().drag_offset(), 0.0);
}

#[test]
fn stale_reset_leaves_dismissal_running() {
    let mut rig = Rig::new();
    rig.arbiter.on_drag_start();
    rig.arbiter.on_drag_end(180.0);
    rig.frame();
    rig.frame();
    let before = rig.bus().drag_offset();

    rig.arbiter.on_scroll(0.0);
    rig.arbiter.on_scroll_begin();
    assert_eq!(rig.bus().drag_offset(), before);
    assert!(rig.arbiter.is_animating());
}

#[test]
fn positive_scroll_during_drag_cedes() {
    let mut rig = Rig::new();
    rig.arbiter.on_drag_start();
    rig.arbiter.on_drag_update(400.0);
    rig.messages();

    rig.arbiter.on_scroll(12.0);

    let bus = rig.bus();
    assert_eq!(rig.arbiter.phase(), DragPhase::Idle);
    assert!(!bus.drag_active());
    assert_eq!(bus.drag_offset(), 0.0);
    assert_eq!(bus.scale(), 0.83);
    assert_eq!(bus.status_bar(), StatusBarStyle::Light);
    assert_eq!(
        rig.messages(),
        vec![
            LogicMessage::Signal(SignalValue::Scale(0.83)),
            LogicMessage::Signal(SignalValue::StatusBar(StatusBarStyle::Light)),
        ]
    );

    rig.arbiter.on_drag_end(400.0);
    assert_eq!(rig.arbiter.phase(), DragPhase::Idle);
    assert!(rig.messages().is_empty());
}
