//! Animation system for Swipesheet.

mod animation;

pub use animation::*;
