//! Headless driver for a mounted overlay.

use swipesheet_core::FRAME_INTERVAL_NANOS;
use swipesheet_foundation::{PointerEvent, ScrollSurface};
use swipesheet_ui::{
    Item, OverlayConfig, OverlayError, OverlayScreen, StaticCatalog, SurfaceStyle,
};

use crate::fakes::RecordingHost;

/// Where synthetic drags put the finger down.
pub const DRAG_ORIGIN_Y: f32 = 200.0;

/// Distance covered between two synthetic move events.
pub const DRAG_STEP: f32 = 10.0;

const MAX_IDLE_FRAMES: usize = 1_000;

const POINTER_ID: u64 = 1;

/// Mounts an [`OverlayScreen`] against a [`RecordingHost`] and advances it
/// with synthetic 60 Hz frames.
pub struct OverlayHarness {
    host: RecordingHost,
    catalog: StaticCatalog,
    config: OverlayConfig,
    surface: ScrollSurface,
    screen: Option<OverlayScreen>,
    frame_time_nanos: u64,
    pointer_y: f32,
}

impl OverlayHarness {
    pub fn new() -> Self {
        Self {
            host: RecordingHost::new(),
            catalog: default_catalog(),
            config: OverlayConfig::default(),
            surface: ScrollSurface::new(800.0, 0.0),
            screen: None,
            frame_time_nanos: 0,
            pointer_y: DRAG_ORIGIN_Y,
        }
    }

    pub fn with_config(mut self, config: OverlayConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_catalog(mut self, catalog: StaticCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Gives the overlay content that can scroll `max_offset` units.
    pub fn with_scrollable_content(self, max_offset: f32) -> Self {
        self.surface.set_max_value(max_offset);
        self
    }

    pub fn host(&self) -> &RecordingHost {
        &self.host
    }

    pub fn surface(&self) -> &ScrollSurface {
        &self.surface
    }

    pub fn frame_time_nanos(&self) -> u64 {
        self.frame_time_nanos
    }

    pub fn mount(&mut self, route_param: Option<&str>) -> Result<&mut OverlayScreen, OverlayError> {
        let screen = OverlayScreen::builder(self.host.collaborators())
            .config(self.config)
            .scroll_surface(self.surface.clone())
            .mount(route_param, &self.catalog)?;
        Ok(self.screen.insert(screen))
    }

    pub fn is_mounted(&self) -> bool {
        self.screen.is_some()
    }

    pub fn screen(&self) -> &OverlayScreen {
        self.screen.as_ref().expect("overlay is not mounted")
    }

    pub fn screen_mut(&mut self) -> &mut OverlayScreen {
        self.screen.as_mut().expect("overlay is not mounted")
    }

    pub fn item(&self) -> &Item {
        self.screen().item()
    }

    pub fn advance_frame(&mut self) -> SurfaceStyle {
        self.frame_time_nanos += FRAME_INTERVAL_NANOS;
        let time = self.frame_time_nanos;
        self.screen_mut().frame(time)
    }

    /// Advances frames until neither context has work left. Panics if that
    /// never happens.
    pub fn run_until_idle(&mut self) -> SurfaceStyle {
        let mut style = self.screen().surface_style();
        for _ in 0..MAX_IDLE_FRAMES {
            style = self.advance_frame();
            if !self.screen().needs_frame() {
                return style;
            }
        }
        panic!("overlay still busy after {MAX_IDLE_FRAMES} frames");
    }

    pub fn press(&mut self) {
        self.pointer_y = DRAG_ORIGIN_Y;
        let event = PointerEvent::down(POINTER_ID, 0.0, self.pointer_y);
        self.screen_mut().on_pointer_event(&event);
    }

    /// Moves the pressed finger by `delta` in steps of [`DRAG_STEP`], with a
    /// frame after each step.
    pub fn move_by(&mut self, delta: f32) {
        let steps = (delta.abs() / DRAG_STEP).ceil().max(1.0) as usize;
        let step = delta / steps as f32;
        for _ in 0..steps {
            self.pointer_y += step;
            let event = PointerEvent::moved(POINTER_ID, 0.0, self.pointer_y);
            self.screen_mut().on_pointer_event(&event);
            self.advance_frame();
        }
    }

    pub fn release(&mut self) {
        let event = PointerEvent::up(POINTER_ID, 0.0, self.pointer_y);
        self.screen_mut().on_pointer_event(&event);
    }

    pub fn cancel(&mut self) {
        self.screen_mut().on_pointer_event(&PointerEvent::cancel(POINTER_ID));
    }

    /// Press, move by `distance`, release.
    pub fn drag(&mut self, distance: f32) {
        self.press();
        self.move_by(distance);
        self.release();
    }

    pub fn unmount(&mut self) {
        if let Some(screen) = self.screen.take() {
            screen.unmount();
        }
    }
}

impl Default for OverlayHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Three-entry catalog with ids 1, 2 and 3.
pub fn default_catalog() -> StaticCatalog {
    let items = [(1, "First Light", "Aurora"), (2, "Second Wind", "Borealis"), (3, "Third Rail", "Cirrus")]
        .into_iter()
        .map(|(id, title, artist)| Item {
            id,
            title: title.to_string(),
            artist: artist.to_string(),
            artwork: None,
        })
        .collect();
    StaticCatalog::new(items).expect("default catalog is not empty")
}
