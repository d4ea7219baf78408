use std::hint::black_box;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};
use swipesheet_core::{logic_channel, FrameClock, NoopScheduler, SignalBus};
use swipesheet_ui::{GestureArbiter, OverlayConfig};

fn drag_update_hot_path(c: &mut Criterion) {
    let (dispatcher, mut inbox) = logic_channel(Arc::new(NoopScheduler));
    let clock = FrameClock::new(Arc::new(NoopScheduler));
    let bus = SignalBus::new(0.83, dispatcher);
    let mut arbiter = GestureArbiter::new(OverlayConfig::default(), bus, clock);
    arbiter.on_drag_start();

    let mut translation = 0.0f32;
    c.bench_function("drag_update_hot_path", |b| {
        b.iter(|| {
            translation = (translation + 1.5) % 600.0;
            arbiter.on_drag_update(black_box(translation));
            inbox.drain(|message| {
                black_box(message);
            });
        });
    });
}

criterion_group!(benches, drag_update_hot_path);
criterion_main!(benches);
