//! Testing utilities and harness for Swipesheet

pub mod fakes;
pub mod harness;

pub use fakes::*;
pub use harness::*;

pub mod prelude {
    pub use crate::fakes::*;
    pub use crate::harness::*;
    pub use swipesheet_core::{StatusBarStyle, FRAME_INTERVAL_NANOS};
    pub use swipesheet_ui::{DragPhase, OverlayConfig, OverlayError, SurfaceStyle};
}
