//! Drag versus scroll arbitration.
//!
//! The arbiter is the single owner of the dismissal state machine. It runs on
//! the animation context: every input handler only touches the
//! [`SignalBus`] cells and posts to the logic inbox, so it is cheap enough to
//! call on every display refresh.
//!
//! ```text
//!  Idle ──start (scroll ≤ 0)──▶ Armed ──end > threshold──▶ Dismissing
//!   ▲                            │
//!   │                            └──end ≤ threshold──▶ SnappingBack
//!   └──────────────── settled ───────────────────────────────┘
//! ```

use std::fmt;

use swipesheet_animation::Animatable;
use swipesheet_core::{
    FrameClock, LogicMessage, SignalBus, SignalValue, StatusBarStyle,
};

use crate::config::OverlayConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragPhase {
    Idle,
    Armed,
    Dismissing,
    SnappingBack,
}

/// Who receives the movement of the current interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragOwner {
    /// The overlay follows the finger toward dismissal.
    Overlay,
    /// The nested scroll surface scrolls its content.
    Scroll,
    /// Nobody; the overlay is already leaving.
    Ignored,
}

pub struct GestureArbiter {
    config: OverlayConfig,
    bus: SignalBus,
    phase: DragPhase,
    offset: Animatable<f32>,
    scale: Animatable<f32>,
    forwarded_scale: Option<f32>,
    forwarded_status: StatusBarStyle,
}

impl GestureArbiter {
    /// The expanded scale is assumed to be what the ancestor will show at
    /// rest, so it is not forwarded again until something changes it.
    pub fn new(config: OverlayConfig, bus: SignalBus, clock: FrameClock) -> Self {
        let expanded = config.expanded_scale;
        bus.write(SignalValue::DragOffset(0.0));
        bus.write(SignalValue::DragActive(false));
        bus.write(SignalValue::Scale(expanded));
        bus.write(SignalValue::StatusBar(StatusBarStyle::Light));
        Self {
            config,
            offset: Animatable::new(0.0, clock.clone()),
            scale: Animatable::new(expanded, clock),
            bus,
            phase: DragPhase::Idle,
            forwarded_scale: Some(expanded),
            forwarded_status: StatusBarStyle::Light,
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn bus(&self) -> &SignalBus {
        &self.bus
    }

    pub fn is_animating(&self) -> bool {
        self.offset.is_running() || self.scale.is_running()
    }

    /// A finger touched the scroll surface. Clears an offset left over from
    /// an aborted drag.
    pub fn on_scroll_begin(&mut self) {
        if !self.bus.drag_active() && self.phase != DragPhase::Dismissing {
            self.reset_stale_offset();
        }
    }

    pub fn on_drag_start(&mut self) -> DragOwner {
        if self.phase == DragPhase::Dismissing {
            log::debug!("drag start ignored while dismissing");
            return DragOwner::Ignored;
        }
        let scroll_offset = self.bus.scroll_offset();
        if scroll_offset > 0.0 {
            log::debug!("drag ceded to scroll surface at offset {scroll_offset:.1}");
            return DragOwner::Scroll;
        }

        if self.phase == DragPhase::SnappingBack {
            log::debug!("snap-back interrupted by a new drag");
        }
        self.phase = DragPhase::Armed;
        self.scale.stop();
        self.apply_offset(0.0);
        self.bus.write(SignalValue::DragActive(true));
        DragOwner::Overlay
    }

    /// `translation` is the cumulative vertical displacement since the drag
    /// started; upward movement clamps the offset at 0.
    pub fn on_drag_update(&mut self, translation: f32) {
        if self.phase != DragPhase::Armed {
            return;
        }
        let offset = translation.max(0.0);
        self.bus.write(SignalValue::DragActive(true));
        self.apply_offset(offset);

        let scale = self.config.scale_for_offset(offset);
        self.scale.snap_to(scale);
        self.publish_scale(scale);

        let progress = self.config.progress(offset);
        let status = if progress > self.config.contrast_threshold {
            StatusBarStyle::Dark
        } else {
            StatusBarStyle::Light
        };
        self.publish_status(status);
        log::trace!("drag offset {offset:.1} progress {progress:.3} scale {scale:.3}");
    }

    pub fn on_drag_end(&mut self, translation: f32) {
        self.bus.write(SignalValue::DragActive(false));
        if self.phase != DragPhase::Armed {
            return;
        }
        let offset = translation.max(0.0);
        self.apply_offset(offset);

        if offset > self.config.dismiss_threshold {
            log::debug!("drag released at {offset:.1}; dismissing");
            self.phase = DragPhase::Dismissing;
            self.offset.animate_to(
                offset + self.config.dismiss_overshoot,
                self.config.dismiss_animation(),
            );
            self.scale.snap_to(1.0);
            self.publish_scale(1.0);
            self.bus.dispatch(LogicMessage::RequestClose);
        } else {
            log::debug!("drag released at {offset:.1}; snapping back");
            self.phase = DragPhase::SnappingBack;
            let spring = self.config.snap_back_animation();
            self.offset.animate_to(0.0, spring);
            self.scale.animate_to(self.config.expanded_scale, spring);
            self.publish_status(StatusBarStyle::Light);
            self.sync_animations();
            self.settle_if_idle();
        }
    }

    pub fn on_drag_cancel(&mut self) {
        self.bus.write(SignalValue::DragActive(false));
        if self.phase == DragPhase::Armed {
            log::debug!("drag cancelled at {:.1}", self.bus.drag_offset());
            self.phase = DragPhase::Idle;
        }
    }

    /// Mirrors the nested scroll surface's offset.
    pub fn on_scroll(&mut self, scroll_offset: f32) {
        self.bus.write(SignalValue::ScrollOffset(scroll_offset));

        if self.bus.drag_active() {
            if scroll_offset > 0.0 && self.phase == DragPhase::Armed {
                self.cede_to_scroll(scroll_offset);
            }
            return;
        }
        if self.phase != DragPhase::Dismissing {
            self.reset_stale_offset();
        }
    }

    /// Copies animation values onto the bus. Called once per animation frame
    /// after the frame clock has been drained.
    pub fn on_frame(&mut self) {
        self.sync_animations();
        self.settle_if_idle();
    }

    /// The snap-back spring is underdamped; its overshoot stays inside the
    /// overlay so the surface never rises above rest and the ancestor never
    /// shrinks below the expanded scale.
    fn sync_animations(&mut self) {
        let offset = self.offset.value().max(0.0);
        if offset != self.bus.drag_offset() {
            self.bus.write(SignalValue::DragOffset(offset));
        }
        let scale = self.scale.value().max(self.config.expanded_scale).min(1.0);
        self.publish_scale(scale);
    }

    fn settle_if_idle(&mut self) {
        if self.phase == DragPhase::SnappingBack && !self.is_animating() {
            log::debug!("snap-back settled");
            self.phase = DragPhase::Idle;
        }
    }

    fn cede_to_scroll(&mut self, scroll_offset: f32) {
        log::warn!("scroll offset {scroll_offset:.1} during an active drag; ceding to scroll");
        self.phase = DragPhase::Idle;
        self.bus.write(SignalValue::DragActive(false));
        self.apply_offset(0.0);
        let expanded = self.config.expanded_scale;
        self.scale.snap_to(expanded);
        self.publish_scale(expanded);
        self.publish_status(StatusBarStyle::Light);
    }

    fn reset_stale_offset(&mut self) {
        if self.bus.drag_offset() != 0.0 || self.offset.is_running() {
            log::debug!("clearing stale drag offset {:.1}", self.bus.drag_offset());
            self.apply_offset(0.0);
        }
    }

    fn apply_offset(&mut self, offset: f32) {
        self.offset.snap_to(offset);
        self.bus.write(SignalValue::DragOffset(offset));
    }

    fn publish_scale(&mut self, scale: f32) {
        self.bus.write(SignalValue::Scale(scale));
        if self.forwarded_scale != Some(scale) {
            self.forwarded_scale = Some(scale);
            self.bus.forward_to_logic(SignalValue::Scale(scale));
        }
    }

    fn publish_status(&mut self, style: StatusBarStyle) {
        self.bus.write(SignalValue::StatusBar(style));
        if self.forwarded_status != style {
            self.forwarded_status = style;
            self.bus.forward_to_logic(SignalValue::StatusBar(style));
        }
    }
}

impl fmt::Debug for GestureArbiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureArbiter")
            .field("phase", &self.phase)
            .field("bus", &self.bus)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/arbiter_tests.rs"]
mod tests;
