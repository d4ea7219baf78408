//! The two execution contexts of a mounted overlay.
//!
//! [`AnimationContext`] receives input and produces per-frame surface styles.
//! [`LogicContext`] drains what the animation side posted and talks to the
//! host's collaborators. Neither calls into the other; the logic inbox is the
//! only link.

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use swipesheet_core::{
    FrameClock, LogicDispatcher, LogicInbox, LogicMessage, RuntimeScheduler, SignalBus,
    SignalValue, StatusBarStyle, TaskQueue,
};
use swipesheet_foundation::{DragEvent, DragRecognizer, PointerEvent, PointerEventKind, ScrollSurface};

use crate::arbiter::{DragOwner, DragPhase, GestureArbiter};
use crate::config::OverlayConfig;
use crate::haptics::HapticNotifier;
use crate::lifecycle::LifecycleController;
use crate::navigation::NavigationGate;
use crate::presentation::{PresentationShell, StatusBarForwarder, SurfaceStyle};
use crate::scale::ScalePropagator;
use crate::screen::Collaborators;

pub struct AnimationContext {
    clock: FrameClock,
    bus: SignalBus,
    arbiter: GestureArbiter,
    shell: PresentationShell,
    surface: ScrollSurface,
    recognizer: DragRecognizer,
    owner: Option<DragOwner>,
    last_translation: f32,
}

impl AnimationContext {
    /// Suppresses bounce on `surface` for as long as this context lives.
    pub fn new(
        config: OverlayConfig,
        dispatcher: LogicDispatcher<LogicMessage>,
        scheduler: Arc<dyn RuntimeScheduler>,
        surface: ScrollSurface,
    ) -> Self {
        let clock = FrameClock::new(scheduler);
        let bus = SignalBus::new(config.expanded_scale, dispatcher);
        let arbiter = GestureArbiter::new(config, bus.clone(), clock.clone());
        let shell = PresentationShell::new(bus.clone(), clock.clone(), config.entrance_spring);
        surface.set_bounces(false);
        bus.write(SignalValue::ScrollOffset(surface.value()));
        // Consume the report from the clamp above; the bus already has it.
        let _ = surface.take_reported_offset();
        Self {
            clock,
            bus,
            arbiter,
            shell,
            surface,
            recognizer: DragRecognizer::new(),
            owner: None,
            last_translation: 0.0,
        }
    }

    pub fn bus(&self) -> &SignalBus {
        &self.bus
    }

    pub fn phase(&self) -> DragPhase {
        self.arbiter.phase()
    }

    pub fn owner(&self) -> Option<DragOwner> {
        self.owner
    }

    pub fn scroll_surface(&self) -> &ScrollSurface {
        &self.surface
    }

    pub fn surface_style(&self) -> SurfaceStyle {
        self.shell.surface_style()
    }

    pub fn needs_frame(&self) -> bool {
        self.clock.has_pending_callbacks()
    }

    pub fn on_pointer_event(&mut self, event: &PointerEvent) {
        if event.kind == PointerEventKind::Down && !self.recognizer.is_tracking() {
            self.sync_scroll();
            self.arbiter.on_scroll_begin();
        }
        for drag_event in self.recognizer.on_pointer_event(event) {
            self.on_drag_event(drag_event);
        }
    }

    pub fn on_drag_event(&mut self, event: DragEvent) {
        self.sync_scroll();
        match event {
            DragEvent::Start => {
                self.owner = Some(self.arbiter.on_drag_start());
                self.last_translation = 0.0;
            }
            DragEvent::Update { translation } => self.route_update(translation),
            DragEvent::End { translation } => {
                match self.owner.take() {
                    Some(DragOwner::Overlay) => self.arbiter.on_drag_end(translation),
                    Some(DragOwner::Scroll) => {
                        self.route_scroll(translation);
                        self.arbiter.on_drag_end(translation);
                    }
                    Some(DragOwner::Ignored) | None => self.arbiter.on_drag_end(translation),
                }
                self.last_translation = 0.0;
            }
            DragEvent::Cancel => {
                self.owner = None;
                self.last_translation = 0.0;
                self.arbiter.on_drag_cancel();
            }
        }
    }

    /// Drains this context's frame clock and returns the style to render.
    pub fn frame(&mut self, frame_time_nanos: u64) -> SurfaceStyle {
        self.clock.drain_frame_callbacks(frame_time_nanos);
        self.sync_scroll();
        self.arbiter.on_frame();
        self.shell.surface_style()
    }

    fn route_update(&mut self, translation: f32) {
        match self.owner {
            Some(DragOwner::Overlay) => {
                self.arbiter.on_drag_update(translation);
                // Movement above the press point belongs to the content.
                let upward = translation.min(0.0) - self.last_translation.min(0.0);
                if upward != 0.0 {
                    self.surface.dispatch_raw_delta(-upward);
                    self.sync_scroll();
                    if self.arbiter.phase() != DragPhase::Armed {
                        self.owner = Some(DragOwner::Scroll);
                    }
                }
                self.last_translation = translation;
            }
            Some(DragOwner::Scroll) => self.route_scroll(translation),
            Some(DragOwner::Ignored) | None => self.last_translation = translation,
        }
    }

    fn route_scroll(&mut self, translation: f32) {
        let delta = translation - self.last_translation;
        if delta != 0.0 {
            // Finger moving down reveals content above.
            self.surface.dispatch_raw_delta(-delta);
            self.sync_scroll();
        }
        self.last_translation = translation;
    }

    fn sync_scroll(&mut self) {
        if let Some(offset) = self.surface.take_reported_offset() {
            self.arbiter.on_scroll(offset);
        }
    }
}

impl Drop for AnimationContext {
    fn drop(&mut self) {
        self.surface.set_bounces(true);
    }
}

impl fmt::Debug for AnimationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationContext")
            .field("arbiter", &self.arbiter)
            .field("owner", &self.owner)
            .field("surface", &self.surface)
            .finish()
    }
}

pub struct LogicContext {
    inbox: LogicInbox<LogicMessage>,
    clock: FrameClock,
    tasks: TaskQueue,
    scale: Rc<ScalePropagator>,
    gate: NavigationGate,
    status_bar: StatusBarForwarder,
    lifecycle: LifecycleController,
}

impl LogicContext {
    pub fn new(
        inbox: LogicInbox<LogicMessage>,
        scheduler: Arc<dyn RuntimeScheduler>,
        collaborators: Collaborators,
        config: &OverlayConfig,
    ) -> Self {
        let clock = FrameClock::new(Arc::clone(&scheduler));
        let tasks = TaskQueue::new(scheduler);
        let scale = Rc::new(ScalePropagator::new(collaborators.scale_consumer));
        let haptics = HapticNotifier::new(collaborators.haptics);
        let gate = NavigationGate::new(collaborators.navigator, haptics, clock.clone());
        let status_bar = StatusBarForwarder::new(collaborators.status_bar);
        let lifecycle =
            LifecycleController::new(Rc::clone(&scale), tasks.clone(), config.expanded_scale);
        Self {
            inbox,
            clock,
            tasks,
            scale,
            gate,
            status_bar,
            lifecycle,
        }
    }

    pub fn mount(&mut self) {
        self.lifecycle.mount();
        self.status_bar.apply(StatusBarStyle::Light);
    }

    pub fn unmount(&mut self) {
        self.lifecycle.unmount();
    }

    pub fn gate(&self) -> &NavigationGate {
        &self.gate
    }

    pub fn scale_propagator(&self) -> &ScalePropagator {
        &self.scale
    }

    pub fn status_bar(&self) -> &StatusBarForwarder {
        &self.status_bar
    }

    pub fn needs_frame(&self) -> bool {
        self.clock.has_pending_callbacks() || self.tasks.has_pending() || self.inbox.has_pending()
    }

    /// Runs deferred tasks, then handles everything the animation context
    /// posted. Returns the number of units of work done.
    pub fn pump(&mut self) -> usize {
        let ran = self.tasks.run_pending();
        let Self {
            inbox,
            scale,
            gate,
            status_bar,
            ..
        } = self;
        let handled = inbox.drain(|message| match message {
            LogicMessage::Signal(SignalValue::Scale(value)) => {
                let _ = scale.deliver(value);
            }
            LogicMessage::Signal(SignalValue::StatusBar(style)) => status_bar.apply(style),
            LogicMessage::Signal(other) => {
                log::trace!("logic context ignoring {:?}", other.kind());
            }
            LogicMessage::RequestClose => {
                gate.request_close();
            }
        });
        ran + handled
    }

    /// Callbacks registered on the previous frame run first, so a close
    /// requested during this pump navigates on the next frame.
    pub fn frame(&mut self, frame_time_nanos: u64) {
        self.clock.drain_frame_callbacks(frame_time_nanos);
        self.pump();
    }
}

impl fmt::Debug for LogicContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogicContext")
            .field("gate", &self.gate)
            .field("scale", &self.scale)
            .field("lifecycle", &self.lifecycle)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/context_tests.rs"]
mod tests;
