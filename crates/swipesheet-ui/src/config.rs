//! Tunables for the dismissible overlay.

use swipesheet_animation::{AnimationSpec, AnimationType, SpringSpec};

use crate::error::OverlayError;

/// Scale applied to the ancestor view while the overlay is fully presented.
pub const EXPANDED_SCALE: f32 = 0.83;

/// Release distance past which a drag commits to dismissal.
pub const DISMISS_THRESHOLD: f32 = 100.0;

/// Drag distance over which the ancestor scale travels from
/// [`EXPANDED_SCALE`] back to 1.
pub const PROGRESS_DISTANCE: f32 = 600.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayConfig {
    pub expanded_scale: f32,
    pub dismiss_threshold: f32,
    pub progress_distance: f32,
    /// Extra travel added to the offset by the dismissal animation.
    pub dismiss_overshoot: f32,
    pub dismiss_duration_millis: u64,
    pub snap_back_spring: SpringSpec,
    /// Progress above which the status bar switches to dark content.
    pub contrast_threshold: f32,
    pub entrance_spring: SpringSpec,
}

impl OverlayConfig {
    pub fn with_expanded_scale(mut self, scale: f32) -> Self {
        self.expanded_scale = scale;
        self
    }

    pub fn with_dismiss_threshold(mut self, threshold: f32) -> Self {
        self.dismiss_threshold = threshold;
        self
    }

    pub fn with_progress_distance(mut self, distance: f32) -> Self {
        self.progress_distance = distance;
        self
    }

    pub fn with_snap_back_spring(mut self, spring: SpringSpec) -> Self {
        self.snap_back_spring = spring;
        self
    }

    pub fn with_dismiss_duration(mut self, millis: u64) -> Self {
        self.dismiss_duration_millis = millis;
        self
    }

    pub fn validate(&self) -> Result<(), OverlayError> {
        fn positive(value: f32, field: &'static str) -> Result<(), OverlayError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(OverlayError::InvalidConfig {
                    field,
                    reason: "must be a finite value greater than zero",
                })
            }
        }

        if !(self.expanded_scale.is_finite()
            && self.expanded_scale > 0.0
            && self.expanded_scale <= 1.0)
        {
            return Err(OverlayError::InvalidConfig {
                field: "expanded_scale",
                reason: "must be in (0, 1]",
            });
        }
        positive(self.dismiss_threshold, "dismiss_threshold")?;
        positive(self.progress_distance, "progress_distance")?;
        positive(self.snap_back_spring.stiffness, "snap_back_spring.stiffness")?;
        positive(self.entrance_spring.stiffness, "entrance_spring.stiffness")?;
        if !self.dismiss_overshoot.is_finite() || self.dismiss_overshoot < 0.0 {
            return Err(OverlayError::InvalidConfig {
                field: "dismiss_overshoot",
                reason: "must be a finite, non-negative distance",
            });
        }
        if !(0.0..=1.0).contains(&self.contrast_threshold) {
            return Err(OverlayError::InvalidConfig {
                field: "contrast_threshold",
                reason: "must be in [0, 1]",
            });
        }
        Ok(())
    }

    /// Drag progress in [0, 1] for a given offset.
    pub fn progress(&self, drag_offset: f32) -> f32 {
        (drag_offset / self.progress_distance).clamp(0.0, 1.0)
    }

    /// Ancestor scale for a given offset: the expanded scale at rest,
    /// growing linearly to 1 over the progress distance.
    pub fn scale_for_offset(&self, drag_offset: f32) -> f32 {
        let progress = self.progress(drag_offset);
        self.expanded_scale + progress * (1.0 - self.expanded_scale)
    }

    pub fn dismiss_animation(&self) -> AnimationType {
        AnimationType::Tween(AnimationSpec::linear(self.dismiss_duration_millis))
    }

    pub fn snap_back_animation(&self) -> AnimationType {
        AnimationType::Spring(self.snap_back_spring)
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            expanded_scale: EXPANDED_SCALE,
            dismiss_threshold: DISMISS_THRESHOLD,
            progress_distance: PROGRESS_DISTANCE,
            dismiss_overshoot: 100.0,
            dismiss_duration_millis: 300,
            snap_back_spring: SpringSpec::with_damping(15.0, 150.0),
            contrast_threshold: 0.5,
            entrance_spring: SpringSpec::default(),
        }
    }
}
