//! Scrolling surface handed to overlay content.
//!
//! A pure scroll model: offset, bounds and bounce policy. It keeps no
//! gesture state; whoever routes pointer movement decides which deltas reach
//! it. Offset changes are reported through [`ScrollSurface::take_reported_offset`]
//! so the gesture arbiter can mirror them without callbacks.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::gesture_constants::MAX_OVERSCROLL_FRACTION;

static NEXT_SURFACE_ID: AtomicU64 = AtomicU64::new(1);

/// Deltas smaller than this are treated as no movement.
const DELTA_EPSILON: f32 = 0.001;

#[derive(Clone)]
pub struct ScrollSurface {
    inner: Rc<ScrollSurfaceInner>,
}

struct ScrollSurfaceInner {
    id: u64,
    /// Current offset. 0 is the top; negative is overscroll past the top.
    value: Cell<f32>,
    /// Content extent minus viewport extent.
    max_value: Cell<f32>,
    viewport_extent: Cell<f32>,
    bounces: Cell<bool>,
    /// Set whenever `value` changes, cleared by `take_reported_offset`.
    unreported: Cell<bool>,
}

impl ScrollSurface {
    pub fn new(viewport_extent: f32, max_value: f32) -> Self {
        Self {
            inner: Rc::new(ScrollSurfaceInner {
                id: NEXT_SURFACE_ID.fetch_add(1, Ordering::Relaxed),
                value: Cell::new(0.0),
                max_value: Cell::new(max_value.max(0.0)),
                viewport_extent: Cell::new(viewport_extent.max(0.0)),
                bounces: Cell::new(true),
                unreported: Cell::new(false),
            }),
        }
    }

    pub fn id(&self) -> u64 {
        self.inner.id
    }

    pub fn value(&self) -> f32 {
        self.inner.value.get()
    }

    pub fn max_value(&self) -> f32 {
        self.inner.max_value.get()
    }

    pub fn viewport_extent(&self) -> f32 {
        self.inner.viewport_extent.get()
    }

    pub fn bounces(&self) -> bool {
        self.inner.bounces.get()
    }

    /// Called by content after layout when its extent changes.
    pub fn set_max_value(&self, max_value: f32) {
        self.inner.max_value.set(max_value.max(0.0));
        if !self.bounces() {
            self.clamp_to_bounds();
        }
    }

    pub fn set_viewport_extent(&self, extent: f32) {
        self.inner.viewport_extent.set(extent.max(0.0));
    }

    /// Enables or suppresses rubber-band overscroll. Suppressing it while
    /// overscrolled snaps the offset back into bounds.
    pub fn set_bounces(&self, bounces: bool) {
        self.inner.bounces.set(bounces);
        if !bounces {
            self.clamp_to_bounds();
        }
    }

    pub fn is_overscrolled(&self) -> bool {
        let value = self.value();
        value < 0.0 || value > self.max_value()
    }

    /// Scrolls by `delta` (positive reveals content further down) and returns
    /// the amount actually applied.
    pub fn dispatch_raw_delta(&self, delta: f32) -> f32 {
        let current = self.value();
        let max = self.max_value();
        let next = if self.bounces() {
            let max_over = self.viewport_extent() * MAX_OVERSCROLL_FRACTION;
            let overscroll = if current < 0.0 {
                current
            } else if current > max {
                current - max
            } else {
                0.0
            };
            let pushing_further =
                (overscroll < 0.0 && delta < 0.0) || (overscroll > 0.0 && delta > 0.0);
            let applied = if pushing_further && max_over > 0.0 {
                // Resistance grows from 55% to 10% as the stretch approaches max.
                let stretch_ratio = (overscroll.abs() / max_over).min(1.0);
                delta * (0.55 - stretch_ratio * 0.45)
            } else {
                delta
            };
            (current + applied).clamp(-max_over, max + max_over)
        } else {
            (current + delta).clamp(0.0, max)
        };
        self.set_value(next);
        next - current
    }

    /// Jumps to `offset`, clamped to the scrollable range.
    pub fn scroll_to(&self, offset: f32) {
        self.set_value(offset.clamp(0.0, self.max_value()));
    }

    /// Returns the offset if it changed since the previous call.
    pub fn take_reported_offset(&self) -> Option<f32> {
        if self.inner.unreported.replace(false) {
            Some(self.value())
        } else {
            None
        }
    }

    fn clamp_to_bounds(&self) {
        let value = self.value();
        self.set_value(value.clamp(0.0, self.max_value()));
    }

    fn set_value(&self, value: f32) {
        let previous = self.inner.value.get();
        if (value - previous).abs() > DELTA_EPSILON || (value == 0.0 && previous != 0.0) {
            self.inner.value.set(value);
            self.inner.unreported.set(true);
            log::trace!("scroll surface {} offset {:.1} -> {:.1}", self.id(), previous, value);
        }
    }
}

impl fmt::Debug for ScrollSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollSurface")
            .field("id", &self.id())
            .field("value", &self.value())
            .field("max_value", &self.max_value())
            .field("bounces", &self.bounces())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/scroll_surface_tests.rs"]
mod tests;
