//! Input plumbing for the overlay: pointer events, the vertical drag
//! recogniser and the scrolling surface handed to content.

pub mod gesture_constants;
pub mod gestures;
pub mod pointer;
pub mod scroll_surface;

pub use gesture_constants::{MAX_OVERSCROLL_FRACTION, TOUCH_SLOP};
pub use gestures::{DragEvent, DragEvents, DragRecognizer};
pub use pointer::{Point, PointerEvent, PointerEventKind, PointerId};
pub use scroll_surface::ScrollSurface;
