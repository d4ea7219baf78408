//! Collaborators that record every call and can be told to fail.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use swipesheet_core::StatusBarStyle;
use swipesheet_ui::{
    Collaborators, HapticEngine, ImpactStyle, Navigator, OverlayError, ScaleConsumer, StatusBar,
};

/// One entry per collaborator call, in the order the overlay made them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostCall {
    GoBack,
    Haptic(ImpactStyle),
    Scale(f32),
    StatusBar(StatusBarStyle),
}

pub type CallLog = Rc<RefCell<Vec<HostCall>>>;

#[derive(Default)]
pub struct RecordingNavigator {
    log: CallLog,
    calls: Cell<usize>,
}

impl RecordingNavigator {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Navigator for RecordingNavigator {
    fn go_back(&self) {
        self.calls.set(self.calls.get() + 1);
        self.log.borrow_mut().push(HostCall::GoBack);
    }
}

#[derive(Default)]
pub struct RecordingHaptics {
    log: CallLog,
    pulses: RefCell<Vec<ImpactStyle>>,
    unavailable: Cell<bool>,
}

impl RecordingHaptics {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            ..Default::default()
        }
    }

    /// Every following pulse fails with `HapticsUnavailable`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.set(unavailable);
    }

    pub fn pulses(&self) -> Vec<ImpactStyle> {
        self.pulses.borrow().clone()
    }
}

impl HapticEngine for RecordingHaptics {
    fn impact(&self, style: ImpactStyle) -> Result<(), OverlayError> {
        if self.unavailable.get() {
            return Err(OverlayError::HapticsUnavailable {
                reason: "disabled by test".to_string(),
            });
        }
        self.pulses.borrow_mut().push(style);
        self.log.borrow_mut().push(HostCall::Haptic(style));
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingScaleConsumer {
    log: CallLog,
    values: RefCell<Vec<f32>>,
    rejected: RefCell<Vec<f32>>,
    reject: Cell<bool>,
}

impl RecordingScaleConsumer {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            ..Default::default()
        }
    }

    pub fn set_rejecting(&self, reject: bool) {
        self.reject.set(reject);
    }

    /// Values the consumer accepted.
    pub fn values(&self) -> Vec<f32> {
        self.values.borrow().clone()
    }

    pub fn rejected(&self) -> Vec<f32> {
        self.rejected.borrow().clone()
    }

    pub fn last(&self) -> Option<f32> {
        self.values.borrow().last().copied()
    }
}

impl ScaleConsumer for RecordingScaleConsumer {
    fn set_scale(&self, value: f32) -> Result<(), OverlayError> {
        if self.reject.get() {
            self.rejected.borrow_mut().push(value);
            return Err(OverlayError::ScaleRejected {
                value,
                reason: "rejected by test".to_string(),
            });
        }
        self.values.borrow_mut().push(value);
        self.log.borrow_mut().push(HostCall::Scale(value));
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingStatusBar {
    log: CallLog,
    styles: RefCell<Vec<StatusBarStyle>>,
    reject: Cell<bool>,
}

impl RecordingStatusBar {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            ..Default::default()
        }
    }

    pub fn set_rejecting(&self, reject: bool) {
        self.reject.set(reject);
    }

    pub fn styles(&self) -> Vec<StatusBarStyle> {
        self.styles.borrow().clone()
    }

    pub fn current(&self) -> Option<StatusBarStyle> {
        self.styles.borrow().last().copied()
    }
}

impl StatusBar for RecordingStatusBar {
    fn set_style(&self, style: StatusBarStyle) -> Result<(), OverlayError> {
        if self.reject.get() {
            return Err(OverlayError::StatusBarRejected {
                reason: "rejected by test".to_string(),
            });
        }
        self.styles.borrow_mut().push(style);
        self.log.borrow_mut().push(HostCall::StatusBar(style));
        Ok(())
    }
}

/// All four recorders sharing one call log.
#[derive(Clone)]
pub struct RecordingHost {
    pub log: CallLog,
    pub navigator: Rc<RecordingNavigator>,
    pub haptics: Rc<RecordingHaptics>,
    pub scale: Rc<RecordingScaleConsumer>,
    pub status_bar: Rc<RecordingStatusBar>,
}

impl RecordingHost {
    pub fn new() -> Self {
        let log = CallLog::default();
        Self {
            navigator: Rc::new(RecordingNavigator::new(log.clone())),
            haptics: Rc::new(RecordingHaptics::new(log.clone())),
            scale: Rc::new(RecordingScaleConsumer::new(log.clone())),
            status_bar: Rc::new(RecordingStatusBar::new(log.clone())),
            log,
        }
    }

    pub fn collaborators(&self) -> Collaborators {
        Collaborators {
            navigator: self.navigator.clone(),
            haptics: self.haptics.clone(),
            scale_consumer: self.scale.clone(),
            status_bar: self.status_bar.clone(),
        }
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.log.borrow().clone()
    }
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self::new()
    }
}
