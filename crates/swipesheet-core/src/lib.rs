//! Core runtime pieces for the Swipesheet overlay.
//!
//! Two execution contexts cooperate: a high-frequency animation context that
//! handles gestures and per-frame transforms, and a slower logic context
//! that runs navigation, haptics and cross-component side effects. Each
//! context owns a [`FrameClock`]; the only path between them is the
//! [`LogicDispatcher`] → [`LogicInbox`] channel.

pub mod dispatch;
pub mod frame_clock;
pub mod platform;
pub mod signal;
pub mod task_queue;

pub use dispatch::{logic_channel, LogicDispatcher, LogicInbox};
pub use frame_clock::{FrameCallbackId, FrameCallbackRegistration, FrameClock};
pub use platform::{NoopScheduler, RuntimeScheduler};
pub use signal::{LogicMessage, SignalBus, SignalKind, SignalValue, StatusBarStyle};
pub use task_queue::{TaskHandle, TaskQueue};

/// Nanoseconds between frames at 60 Hz.
pub const FRAME_INTERVAL_NANOS: u64 = 16_666_667;
