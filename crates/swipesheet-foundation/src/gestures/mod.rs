pub mod drag;

pub use drag::{DragEvent, DragEvents, DragRecognizer};
