//! Drag-to-dismiss overlay screen.
//!
//! An [`OverlayScreen`] hosts scrollable content and can be pulled down to
//! close. While it is dragged, an ancestor view is scaled back toward its
//! natural size and the status bar flips contrast halfway through. Gesture
//! handling runs on the animation context; navigation, haptics and the
//! ancestor scale are applied on the logic context.

pub mod arbiter;
pub mod catalog;
pub mod config;
pub mod context;
pub mod error;
pub mod haptics;
pub mod lifecycle;
pub mod navigation;
pub mod presentation;
pub mod scale;
pub mod screen;

pub use arbiter::{DragOwner, DragPhase, GestureArbiter};
pub use catalog::{resolve_item, Catalog, Item, ItemId, StaticCatalog};
pub use config::{OverlayConfig, DISMISS_THRESHOLD, EXPANDED_SCALE, PROGRESS_DISTANCE};
pub use context::{AnimationContext, LogicContext};
pub use error::OverlayError;
pub use haptics::{HapticEngine, HapticNotifier, ImpactStyle};
pub use lifecycle::{LifecycleController, UNSCALED};
pub use navigation::{NavigationGate, Navigator};
pub use presentation::{PresentationShell, StatusBar, StatusBarForwarder, SurfaceStyle};
pub use scale::{ScaleConsumer, ScalePropagator};
pub use screen::{Collaborators, OverlayScreen, OverlayScreenBuilder};

pub use swipesheet_core::{SignalBus, SignalKind, SignalValue, StatusBarStyle};
