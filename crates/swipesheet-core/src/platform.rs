//! Platform abstraction traits for runtime services.
//!
//! These traits let the host decide when frames are produced, so the
//! overlay never drives its own render loop.

/// Schedules frames on behalf of an execution context.
///
/// Implementations must be safe to use from multiple threads because the
/// animation context posts work to the logic context through them.
pub trait RuntimeScheduler: Send + Sync {
    /// Request that the host schedule a new frame.
    fn schedule_frame(&self);
}

/// Scheduler that ignores frame requests. Useful for hosts that render
/// continuously and for tests that drive frames by hand.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopScheduler;

impl RuntimeScheduler for NoopScheduler {
    fn schedule_frame(&self) {}
}
