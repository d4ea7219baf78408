//! Presentation shell: what the host renders each frame, and the status bar
//! contrast on the logic side.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use swipesheet_animation::{Animatable, AnimationType, SpringSpec};
use swipesheet_core::{FrameClock, SignalBus, StatusBarStyle};

use crate::error::OverlayError;

/// Transform and alpha for the overlay surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceStyle {
    pub translate_y: f32,
    pub opacity: f32,
}

impl SurfaceStyle {
    pub const RESTING: SurfaceStyle = SurfaceStyle {
        translate_y: 0.0,
        opacity: 1.0,
    };
}

/// Full-screen surface that follows the drag offset and fades in once on
/// entrance.
pub struct PresentationShell {
    bus: SignalBus,
    opacity: Animatable<f32>,
}

impl PresentationShell {
    pub fn new(bus: SignalBus, clock: FrameClock, entrance: SpringSpec) -> Self {
        let mut opacity = Animatable::new(0.0, clock);
        opacity.animate_to(1.0, AnimationType::Spring(entrance));
        Self { bus, opacity }
    }

    pub fn surface_style(&self) -> SurfaceStyle {
        SurfaceStyle {
            translate_y: self.bus.drag_offset().max(0.0),
            opacity: self.opacity.value().clamp(0.0, 1.0),
        }
    }

    pub fn is_entering(&self) -> bool {
        self.opacity.is_running()
    }
}

impl fmt::Debug for PresentationShell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresentationShell")
            .field("style", &self.surface_style())
            .finish()
    }
}

/// Host status/chrome bar.
pub trait StatusBar {
    fn set_style(&self, style: StatusBarStyle) -> Result<(), OverlayError>;
}

/// Applies status bar changes on the logic context, skipping repeats of the
/// style already shown.
pub struct StatusBarForwarder {
    bar: Rc<dyn StatusBar>,
    applied: Cell<Option<StatusBarStyle>>,
}

impl StatusBarForwarder {
    pub fn new(bar: Rc<dyn StatusBar>) -> Self {
        Self {
            bar,
            applied: Cell::new(None),
        }
    }

    pub fn apply(&self, style: StatusBarStyle) {
        if self.applied.get() == Some(style) {
            return;
        }
        match self.bar.set_style(style) {
            Ok(()) => self.applied.set(Some(style)),
            Err(err) => log::warn!("status bar left unchanged: {err}"),
        }
    }

    pub fn applied(&self) -> Option<StatusBarStyle> {
        self.applied.get()
    }
}

impl fmt::Debug for StatusBarForwarder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatusBarForwarder")
            .field("applied", &self.applied.get())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/presentation_tests.rs"]
mod tests;
