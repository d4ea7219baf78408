//! Mounted overlay screen.

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use swipesheet_core::{logic_channel, NoopScheduler, RuntimeScheduler, SignalBus};
use swipesheet_foundation::{DragEvent, PointerEvent, ScrollSurface};

use crate::arbiter::DragPhase;
use crate::catalog::{resolve_item, Catalog, Item, ItemId};
use crate::config::OverlayConfig;
use crate::context::{AnimationContext, LogicContext};
use crate::error::OverlayError;
use crate::haptics::HapticEngine;
use crate::navigation::Navigator;
use crate::presentation::{StatusBar, SurfaceStyle};
use crate::scale::ScaleConsumer;

/// Host capabilities the overlay talks to. All calls happen on the logic
/// context.
#[derive(Clone)]
pub struct Collaborators {
    pub navigator: Rc<dyn Navigator>,
    pub haptics: Rc<dyn HapticEngine>,
    pub scale_consumer: Rc<dyn ScaleConsumer>,
    pub status_bar: Rc<dyn StatusBar>,
}

impl fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collaborators").finish_non_exhaustive()
    }
}

pub struct OverlayScreenBuilder {
    collaborators: Collaborators,
    config: OverlayConfig,
    scheduler: Arc<dyn RuntimeScheduler>,
    surface: Option<ScrollSurface>,
}

impl OverlayScreenBuilder {
    pub fn config(mut self, config: OverlayConfig) -> Self {
        self.config = config;
        self
    }

    pub fn scheduler(mut self, scheduler: Arc<dyn RuntimeScheduler>) -> Self {
        self.scheduler = scheduler;
        self
    }

    /// Uses an existing scroll surface instead of an empty one.
    pub fn scroll_surface(mut self, surface: ScrollSurface) -> Self {
        self.surface = Some(surface);
        self
    }

    /// Resolves the item for `route_param` and mounts. Fails only on an
    /// invalid config.
    pub fn mount(
        self,
        route_param: Option<&str>,
        catalog: &dyn Catalog,
    ) -> Result<OverlayScreen, OverlayError> {
        self.mount_id(ItemId::from_route(route_param), catalog)
    }

    pub fn mount_id(self, id: ItemId, catalog: &dyn Catalog) -> Result<OverlayScreen, OverlayError> {
        self.config.validate()?;
        let item = resolve_item(catalog, id);
        let (dispatcher, inbox) = logic_channel(Arc::clone(&self.scheduler));
        let surface = self.surface.unwrap_or_else(|| ScrollSurface::new(0.0, 0.0));
        let animation =
            AnimationContext::new(self.config, dispatcher, Arc::clone(&self.scheduler), surface);
        let mut logic = LogicContext::new(inbox, self.scheduler, self.collaborators, &self.config);
        logic.mount();
        log::debug!("overlay mounted for item {}", item.id);
        Ok(OverlayScreen {
            item,
            animation,
            logic,
        })
    }
}

/// A mounted overlay. Dropping it tears it down; [`OverlayScreen::unmount`]
/// does the same explicitly.
pub struct OverlayScreen {
    item: Item,
    animation: AnimationContext,
    logic: LogicContext,
}

impl OverlayScreen {
    pub fn builder(collaborators: Collaborators) -> OverlayScreenBuilder {
        OverlayScreenBuilder {
            collaborators,
            config: OverlayConfig::default(),
            scheduler: Arc::new(NoopScheduler),
            surface: None,
        }
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    /// Capability handed to the content renderer.
    pub fn scroll_surface(&self) -> ScrollSurface {
        self.animation.scroll_surface().clone()
    }

    pub fn signals(&self) -> &SignalBus {
        self.animation.bus()
    }

    pub fn phase(&self) -> DragPhase {
        self.animation.phase()
    }

    pub fn is_closing(&self) -> bool {
        self.logic.gate().is_closing()
    }

    pub fn surface_style(&self) -> SurfaceStyle {
        self.animation.surface_style()
    }

    pub fn on_pointer_event(&mut self, event: &PointerEvent) {
        self.animation.on_pointer_event(event);
    }

    pub fn on_drag_event(&mut self, event: DragEvent) {
        self.animation.on_drag_event(event);
    }

    /// Asks the gate to close without a drag.
    pub fn request_close(&self) -> bool {
        self.logic.gate().request_close()
    }

    /// Handles pending logic work without advancing either frame clock.
    pub fn pump_logic(&mut self) -> usize {
        self.logic.pump()
    }

    /// Advances both contexts to `frame_time_nanos`: the animation side
    /// first, then the logic side picks up what it posted.
    pub fn frame(&mut self, frame_time_nanos: u64) -> SurfaceStyle {
        let style = self.animation.frame(frame_time_nanos);
        self.logic.frame(frame_time_nanos);
        style
    }

    pub fn needs_frame(&self) -> bool {
        self.animation.needs_frame() || self.logic.needs_frame()
    }

    pub fn unmount(mut self) {
        self.logic.unmount();
        log::debug!("overlay unmounted for item {}", self.item.id);
    }
}

impl fmt::Debug for OverlayScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayScreen")
            .field("item", &self.item.id)
            .field("animation", &self.animation)
            .field("logic", &self.logic)
            .finish()
    }
}
