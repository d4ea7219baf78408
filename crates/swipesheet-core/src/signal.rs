//! Shared signal bus for the overlay.
//!
//! The bus lives in the animation context: reads and writes are plain cell
//! accesses and always succeed. Values the logic context needs are pushed
//! over the [`LogicDispatcher`] with [`SignalBus::forward_to_logic`]; nothing
//! here ever blocks or waits on the logic context.

use crate::dispatch::LogicDispatcher;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Contrast mode for the status/chrome bar drawn over the overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StatusBarStyle {
    #[default]
    Light,
    Dark,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignalKind {
    DragOffset,
    DragActive,
    ScrollOffset,
    Scale,
    StatusBar,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SignalValue {
    DragOffset(f32),
    DragActive(bool),
    ScrollOffset(f32),
    Scale(f32),
    StatusBar(StatusBarStyle),
}

impl SignalValue {
    pub fn kind(&self) -> SignalKind {
        match self {
            SignalValue::DragOffset(_) => SignalKind::DragOffset,
            SignalValue::DragActive(_) => SignalKind::DragActive,
            SignalValue::ScrollOffset(_) => SignalKind::ScrollOffset,
            SignalValue::Scale(_) => SignalKind::Scale,
            SignalValue::StatusBar(_) => SignalKind::StatusBar,
        }
    }
}

/// Work the animation context hands to the logic context.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LogicMessage {
    Signal(SignalValue),
    RequestClose,
}

struct SignalCells {
    drag_offset: Cell<f32>,
    drag_active: Cell<bool>,
    scroll_offset: Cell<f32>,
    scale: Cell<f32>,
    status_bar: Cell<StatusBarStyle>,
}

#[derive(Clone)]
pub struct SignalBus {
    cells: Rc<SignalCells>,
    dispatcher: LogicDispatcher<LogicMessage>,
}

impl SignalBus {
    pub fn new(initial_scale: f32, dispatcher: LogicDispatcher<LogicMessage>) -> Self {
        Self {
            cells: Rc::new(SignalCells {
                drag_offset: Cell::new(0.0),
                drag_active: Cell::new(false),
                scroll_offset: Cell::new(0.0),
                scale: Cell::new(initial_scale),
                status_bar: Cell::new(StatusBarStyle::Light),
            }),
            dispatcher,
        }
    }

    pub fn read(&self, kind: SignalKind) -> SignalValue {
        let cells = &self.cells;
        match kind {
            SignalKind::DragOffset => SignalValue::DragOffset(cells.drag_offset.get()),
            SignalKind::DragActive => SignalValue::DragActive(cells.drag_active.get()),
            SignalKind::ScrollOffset => SignalValue::ScrollOffset(cells.scroll_offset.get()),
            SignalKind::Scale => SignalValue::Scale(cells.scale.get()),
            SignalKind::StatusBar => SignalValue::StatusBar(cells.status_bar.get()),
        }
    }

    pub fn write(&self, value: SignalValue) {
        let cells = &self.cells;
        match value {
            SignalValue::DragOffset(v) => cells.drag_offset.set(v),
            SignalValue::DragActive(v) => cells.drag_active.set(v),
            SignalValue::ScrollOffset(v) => cells.scroll_offset.set(v),
            SignalValue::Scale(v) => cells.scale.set(v),
            SignalValue::StatusBar(v) => cells.status_bar.set(v),
        }
    }

    /// Asynchronous, fire-and-forget. FIFO per signal; the return value only
    /// says whether the logic context was still there to receive it.
    pub fn forward_to_logic(&self, value: SignalValue) -> bool {
        self.dispatcher.post(LogicMessage::Signal(value))
    }

    pub fn dispatch(&self, message: LogicMessage) -> bool {
        self.dispatcher.post(message)
    }

    pub fn drag_offset(&self) -> f32 {
        self.cells.drag_offset.get()
    }

    pub fn drag_active(&self) -> bool {
        self.cells.drag_active.get()
    }

    pub fn scroll_offset(&self) -> f32 {
        self.cells.scroll_offset.get()
    }

    pub fn scale(&self) -> f32 {
        self.cells.scale.get()
    }

    pub fn status_bar(&self) -> StatusBarStyle {
        self.cells.status_bar.get()
    }
}

impl fmt::Debug for SignalBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignalBus")
            .field("drag_offset", &self.drag_offset())
            .field("drag_active", &self.drag_active())
            .field("scroll_offset", &self.scroll_offset())
            .field("scale", &self.scale())
            .field("status_bar", &self.status_bar())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/signal_tests.rs"]
mod tests;
