//! Collaborators that log what the overlay asks of the host.

use std::cell::Cell;

use swipesheet_core::StatusBarStyle;
use swipesheet_ui::{HapticEngine, ImpactStyle, Navigator, OverlayError, ScaleConsumer, StatusBar};

#[derive(Default)]
pub struct LoggingHost {
    navigated: Cell<bool>,
    scale: Cell<f32>,
}

impl LoggingHost {
    pub fn navigated(&self) -> bool {
        self.navigated.get()
    }

    pub fn scale(&self) -> f32 {
        self.scale.get()
    }
}

impl Navigator for LoggingHost {
    fn go_back(&self) {
        log::info!("navigator: go back");
        self.navigated.set(true);
    }
}

impl HapticEngine for LoggingHost {
    fn impact(&self, style: ImpactStyle) -> Result<(), OverlayError> {
        log::info!("haptics: {style:?} impact");
        Ok(())
    }
}

impl ScaleConsumer for LoggingHost {
    fn set_scale(&self, value: f32) -> Result<(), OverlayError> {
        log::info!("ancestor scale -> {value:.3}");
        self.scale.set(value);
        Ok(())
    }
}

impl StatusBar for LoggingHost {
    fn set_style(&self, style: StatusBarStyle) -> Result<(), OverlayError> {
        log::info!("status bar -> {style:?}");
        Ok(())
    }
}
