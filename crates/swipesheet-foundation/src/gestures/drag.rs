//! Vertical drag recogniser.
//!
//! Tracks a single pointer from press to release and reports the cumulative
//! vertical translation once the touch slop has been exceeded. The
//! translation includes the slop distance, so an `Update` right after
//! `Start` already reflects where the finger actually is.

use smallvec::SmallVec;

use crate::gesture_constants::TOUCH_SLOP;
use crate::pointer::{PointerEvent, PointerEventKind, PointerId};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragEvent {
    Start,
    /// Cumulative vertical displacement since the press. Positive is down.
    Update { translation: f32 },
    End { translation: f32 },
    /// The platform aborted the interaction.
    Cancel,
}

/// Events produced by one pointer event. A move that crosses the slop yields
/// both `Start` and the first `Update`.
pub type DragEvents = SmallVec<[DragEvent; 2]>;

#[derive(Debug, Clone)]
pub struct DragRecognizer {
    slop: f32,
    pointer: Option<PointerId>,
    down_y: f32,
    translation: f32,
    slop_passed: bool,
}

impl DragRecognizer {
    pub fn new() -> Self {
        Self::with_slop(TOUCH_SLOP)
    }

    pub fn with_slop(slop: f32) -> Self {
        Self {
            slop: slop.max(0.0),
            pointer: None,
            down_y: 0.0,
            translation: 0.0,
            slop_passed: false,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.slop_passed
    }

    /// Whether a pointer is down, dragging or not.
    pub fn is_tracking(&self) -> bool {
        self.pointer.is_some()
    }

    pub fn translation(&self) -> f32 {
        self.translation
    }

    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> DragEvents {
        let mut out = DragEvents::new();
        match event.kind {
            PointerEventKind::Down => {
                if self.pointer.is_some() {
                    // Second finger; the first one keeps ownership.
                    return out;
                }
                self.pointer = Some(event.id);
                self.down_y = event.position.y;
                self.translation = 0.0;
                self.slop_passed = false;
            }
            PointerEventKind::Move => {
                if self.pointer != Some(event.id) {
                    return out;
                }
                self.translation = event.position.y - self.down_y;
                if self.slop_passed {
                    out.push(DragEvent::Update {
                        translation: self.translation,
                    });
                } else if self.translation.abs() > self.slop {
                    self.slop_passed = true;
                    out.push(DragEvent::Start);
                    out.push(DragEvent::Update {
                        translation: self.translation,
                    });
                }
            }
            PointerEventKind::Up => {
                if self.pointer != Some(event.id) {
                    return out;
                }
                self.translation = event.position.y - self.down_y;
                if self.slop_passed {
                    out.push(DragEvent::End {
                        translation: self.translation,
                    });
                }
                self.reset();
            }
            PointerEventKind::Cancel => {
                if self.pointer != Some(event.id) {
                    return out;
                }
                if self.slop_passed {
                    out.push(DragEvent::Cancel);
                }
                self.reset();
            }
        }
        out
    }

    pub fn reset(&mut self) {
        self.pointer = None;
        self.down_y = 0.0;
        self.translation = 0.0;
        self.slop_passed = false;
    }
}

impl Default for DragRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../tests/drag_tests.rs"]
mod tests;
