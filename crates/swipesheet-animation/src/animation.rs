//! Linear tweens and spring physics.
//!
//! Values advance only when the owning context drains its [`FrameClock`],
//! so the same animation code runs under a real display loop and under
//! tests that feed synthetic frame times.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use swipesheet_core::{FrameCallbackRegistration, FrameClock};

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

/// Trait for values that can participate in spring animations.
pub trait SpringScalar: Lerp + Clone {
    /// Convert the value to `f32` for physics calculations.
    fn to_f32(&self) -> f32;

    /// Compute the current progress between the start and target values.
    fn spring_progress(start: &Self, target: &Self, current: &Self) -> f32 {
        let start_val = start.to_f32();
        let target_val = target.to_f32();
        let current_val = current.to_f32();

        if (target_val - start_val).abs() < f32::EPSILON {
            1.0
        } else {
            (current_val - start_val) / (target_val - start_val)
        }
    }

    /// Determine whether the current value is close enough to the target to
    /// consider the spring finished.
    fn is_near_target(current: &Self, target: &Self, threshold: f32) -> bool {
        (current.to_f32() - target.to_f32()).abs() < threshold
    }
}

impl SpringScalar for f32 {
    fn to_f32(&self) -> f32 {
        *self
    }
}

/// Linear tween over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration_millis: u64,
}

impl AnimationSpec {
    pub fn linear(duration_millis: u64) -> Self {
        Self { duration_millis }
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::linear(300)
    }
}

/// Spring animation configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// Damping ratio. 1.0 = critically damped, < 1.0 = under-damped (bouncy), > 1.0 = over-damped.
    pub damping_ratio: f32,
    /// Stiffness constant. Higher values = faster animation.
    pub stiffness: f32,
    /// Velocity threshold (progress units per second) to stop animation.
    pub velocity_threshold: f32,
    /// Position threshold (value units) to stop animation.
    pub position_threshold: f32,
}

impl SpringSpec {
    pub fn default_spring() -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness: 1500.0,
            velocity_threshold: 0.01,
            position_threshold: 0.001,
        }
    }

    /// Builds a spring from a physical damping coefficient and stiffness for
    /// a unit mass: `ratio = damping / (2 * sqrt(stiffness))`.
    pub fn with_damping(damping: f32, stiffness: f32) -> Self {
        let critical = 2.0 * stiffness.max(f32::EPSILON).sqrt();
        Self {
            damping_ratio: damping / critical,
            stiffness,
            ..Self::default_spring()
        }
    }

    /// Damping coefficient (unit mass) equivalent to `damping_ratio`.
    pub fn damping_coefficient(&self) -> f32 {
        2.0 * self.damping_ratio * self.stiffness.sqrt()
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::default_spring()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationType {
    Tween(AnimationSpec),
    Spring(SpringSpec),
}

impl Default for AnimationType {
    fn default() -> Self {
        AnimationType::Tween(AnimationSpec::default())
    }
}

/// Fixed integration step for spring physics (~60fps).
const SPRING_TIMESTEP_SECONDS: f32 = 0.016;

/// Animated value holder driven by a [`FrameClock`].
pub struct Animatable<T: SpringScalar + 'static> {
    inner: Rc<RefCell<AnimatableInner<T>>>,
}

struct AnimatableInner<T: SpringScalar + 'static> {
    clock: FrameClock,
    current: T,
    /// Spring velocity in progress units per second.
    velocity: f32,
    start: T,
    target: T,
    animation_type: AnimationType,
    start_time_nanos: Option<u64>,
    last_frame_nanos: Option<u64>,
    running: bool,
    registration: Option<FrameCallbackRegistration>,
}

impl<T: SpringScalar + 'static> AnimatableInner<T> {
    fn settle(&mut self) {
        self.current = self.target.clone();
        self.start = self.target.clone();
        self.start_time_nanos = None;
        self.last_frame_nanos = None;
        self.velocity = 0.0;
        self.running = false;
    }

    fn cancel_registration(&mut self) {
        if let Some(registration) = self.registration.take() {
            registration.cancel();
        }
    }
}

impl<T: SpringScalar + 'static> Animatable<T> {
    pub fn new(initial: T, clock: FrameClock) -> Self {
        let inner = AnimatableInner {
            clock,
            current: initial.clone(),
            velocity: 0.0,
            start: initial.clone(),
            target: initial,
            animation_type: AnimationType::default(),
            start_time_nanos: None,
            last_frame_nanos: None,
            running: false,
            registration: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Animate from the current value to `target`, replacing any running
    /// animation. A target that is already reached settles immediately.
    pub fn animate_to(&mut self, target: T, animation: AnimationType) {
        let should_schedule = {
            let mut inner = self.inner.borrow_mut();
            inner.cancel_registration();

            inner.start = inner.current.clone();
            inner.target = target;
            inner.animation_type = animation;
            inner.start_time_nanos = None;
            inner.last_frame_nanos = None;
            inner.velocity = 0.0;

            let threshold = match animation {
                AnimationType::Spring(spec) => spec.position_threshold,
                AnimationType::Tween(_) => f32::EPSILON,
            };
            if T::is_near_target(&inner.current, &inner.target, threshold) {
                inner.settle();
                false
            } else {
                inner.running = true;
                true
            }
        };

        if should_schedule {
            Self::schedule_frame(&self.inner);
        }
    }

    /// Snap immediately to the target value without animating.
    pub fn snap_to(&mut self, target: T) {
        let mut inner = self.inner.borrow_mut();
        inner.cancel_registration();
        inner.target = target;
        inner.settle();
    }

    /// Stops a running animation at its current value.
    pub fn stop(&mut self) {
        let mut inner = self.inner.borrow_mut();
        inner.cancel_registration();
        inner.target = inner.current.clone();
        inner.settle();
    }

    pub fn value(&self) -> T {
        self.inner.borrow().current.clone()
    }

    pub fn target(&self) -> T {
        self.inner.borrow().target.clone()
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().running
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner<T>>>) {
        let clock = {
            let inner = this.borrow();
            if inner.registration.is_some() {
                return;
            }
            inner.clock.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = clock.with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner<T>>>, frame_time_nanos: u64) {
        let mut schedule_next = false;
        {
            let mut inner = this.borrow_mut();
            inner.registration = None;
            if !inner.running {
                return;
            }

            match inner.animation_type {
                AnimationType::Tween(spec) => {
                    let start_time = *inner.start_time_nanos.get_or_insert(frame_time_nanos);
                    let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
                    let duration_nanos = (spec.duration_millis * 1_000_000).max(1);
                    let progress = (elapsed_nanos as f32 / duration_nanos as f32).clamp(0.0, 1.0);

                    if progress >= 1.0 {
                        inner.settle();
                    } else {
                        inner.current = inner.start.lerp(&inner.target, progress);
                        schedule_next = true;
                    }
                }
                AnimationType::Spring(spec) => {
                    // Damped harmonic oscillator in progress space, target at 1.0.
                    let previous = inner.last_frame_nanos.replace(frame_time_nanos);
                    let dt = previous
                        .map(|prev| frame_time_nanos.saturating_sub(prev) as f32 / 1_000_000_000.0)
                        .unwrap_or(0.0);

                    if dt == 0.0 {
                        schedule_next = true;
                    } else {
                        let stiffness = spec.stiffness;
                        let damping = spec.damping_coefficient();

                        // Semi-implicit Euler over the time since the last frame.
                        let mut simulated = 0.0f32;
                        while simulated < dt {
                            let step = SPRING_TIMESTEP_SECONDS.min(dt - simulated);
                            let current_progress = <T as SpringScalar>::spring_progress(
                                &inner.start,
                                &inner.target,
                                &inner.current,
                            );

                            let displacement = current_progress - 1.0;
                            let spring_force = -stiffness * displacement - damping * inner.velocity;

                            inner.velocity += spring_force * step;
                            let new_progress = current_progress + inner.velocity * step;
                            inner.current = inner
                                .start
                                .lerp(&inner.target, new_progress.clamp(0.0, 2.0));

                            simulated += step;
                        }

                        let at_rest = inner.velocity.abs() < spec.velocity_threshold;
                        let near_target = <T as SpringScalar>::is_near_target(
                            &inner.current,
                            &inner.target,
                            spec.position_threshold,
                        );

                        if at_rest && near_target {
                            inner.settle();
                        } else {
                            schedule_next = true;
                        }
                    }
                }
            }
        }

        if schedule_next {
            Self::schedule_frame(this);
        }
    }
}

impl<T: SpringScalar + 'static> Clone for Animatable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: SpringScalar + fmt::Debug + 'static> fmt::Debug for Animatable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Animatable")
            .field("current", &inner.current)
            .field("target", &inner.target)
            .field("running", &inner.running)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
