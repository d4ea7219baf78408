//! Shared gesture constants for consistent touch/pointer handling.
//!
//! Values are in logical pixels. High-density touch screens may want to
//! scale them by the display's density factor.

/// Distance a pointer must travel from its press position before a drag is
/// recognised. Below it the interaction is still a potential tap.
///
/// Matches common platform conventions (Android's touch slop is ~8dp).
pub const TOUCH_SLOP: f32 = 8.0;

/// Largest rubber-band overscroll, as a fraction of the viewport extent,
/// when a scroll surface has bounce enabled.
pub const MAX_OVERSCROLL_FRACTION: f32 = 0.3;
