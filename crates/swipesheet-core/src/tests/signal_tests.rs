use super::*;
use crate::dispatch::logic_channel;
use crate::platform::NoopScheduler;
use std::sync::Arc;

#[test]
fn writes_are_visible_to_readers_in_the_same_context() {
    let (dispatcher, _inbox) = logic_channel(Arc::new(NoopScheduler));
    let bus = SignalBus::new(0.83, dispatcher);
    let reader = bus.clone();

    bus.write(SignalValue::DragOffset(42.0));
    bus.write(SignalValue::DragActive(true));
    bus.write(SignalValue::StatusBar(StatusBarStyle::Dark));

    assert_eq!(reader.read(SignalKind::DragOffset), SignalValue::DragOffset(42.0));
    assert!(reader.drag_active());
    assert_eq!(reader.status_bar(), StatusBarStyle::Dark);
    assert_eq!(reader.scale(), 0.83);
}

#[test]
fn forwarded_values_reach_the_logic_inbox_in_order() {
    let (dispatcher, mut inbox) = logic_channel(Arc::new(NoopScheduler));
    let bus = SignalBus::new(1.0, dispatcher);

    bus.forward_to_logic(SignalValue::Scale(0.9));
    bus.dispatch(LogicMessage::RequestClose);
    bus.forward_to_logic(SignalValue::Scale(1.0));

    let mut received = Vec::new();
    inbox.drain(|message| received.push(message));
    assert_eq!(
        received,
        vec![
            LogicMessage::Signal(SignalValue::Scale(0.9)),
            LogicMessage::RequestClose,
            LogicMessage::Signal(SignalValue::Scale(1.0)),
        ]
    );
}

#[test]
fn forwarding_does_not_touch_local_cells() {
    let (dispatcher, _inbox) = logic_channel(Arc::new(NoopScheduler));
    let bus = SignalBus::new(0.83, dispatcher);
    bus.forward_to_logic(SignalValue::Scale(1.0));
    assert_eq!(bus.scale(), 0.83);
}

#[test]
fn value_kind_matches_variant() {
    assert_eq!(SignalValue::ScrollOffset(3.0).kind(), SignalKind::ScrollOffset);
    assert_eq!(
        SignalValue::StatusBar(StatusBarStyle::Light).kind(),
        SignalKind::StatusBar
    );
}
