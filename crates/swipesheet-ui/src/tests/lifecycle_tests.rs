use super::*;
use crate::error::OverlayError;
use crate::scale::ScaleConsumer;
use std::cell::RefCell;
use std::sync::Arc;
use swipesheet_core::NoopScheduler;

#[derive(Default)]
struct Recorder {
    values: RefCell<Vec<f32>>,
    reject: bool,
}

impl ScaleConsumer for Recorder {
    fn set_scale(&self, value: f32) -> Result<(), OverlayError> {
        self.values.borrow_mut().push(value);
        if self.reject {
            Err(OverlayError::ScaleRejected {
                value,
                reason: "ancestor gone".into(),
            })
        } else {
            Ok(())
        }
    }
}

fn controller(recorder: Rc<Recorder>) -> (LifecycleController, TaskQueue) {
    let tasks = TaskQueue::new(Arc::new(NoopScheduler));
    let propagator = Rc::new(ScalePropagator::new(recorder));
    (
        LifecycleController::new(propagator, tasks.clone(), 0.83),
        tasks,
    )
}

#[test]
fn mount_defers_expanded_scale_by_one_turn() {
    let recorder = Rc::new(Recorder::default());
    let (mut lifecycle, tasks) = controller(recorder.clone());

    lifecycle.mount();
    assert!(recorder.values.borrow().is_empty());
    assert!(lifecycle.has_pending_delivery());

    tasks.run_pending();
    assert_eq!(recorder.values.borrow().as_slice(), &[0.83]);
    assert!(!lifecycle.has_pending_delivery());
}

#[test]
fn mount_then_unmount_delivers_expanded_then_unscaled() {
    let recorder = Rc::new(Recorder::default());
    let (mut lifecycle, tasks) = controller(recorder.clone());

    lifecycle.mount();
    tasks.run_pending();
    lifecycle.unmount();

    assert_eq!(recorder.values.borrow().as_slice(), &[0.83, UNSCALED]);
}

#[test]
fn unmount_before_deferral_cancels_it() {
    let recorder = Rc::new(Recorder::default());
    let (mut lifecycle, tasks) = controller(recorder.clone());

    lifecycle.mount();
    lifecycle.unmount();
    assert_eq!(tasks.run_pending(), 0);

    assert_eq!(recorder.values.borrow().as_slice(), &[UNSCALED]);
}

#[test]
fn drop_counts_as_teardown() {
    let recorder = Rc::new(Recorder::default());
    let (mut lifecycle, tasks) = controller(recorder.clone());

    lifecycle.mount();
    tasks.run_pending();
    drop(lifecycle);

    assert_eq!(recorder.values.borrow().as_slice(), &[0.83, UNSCALED]);
}

#[test]
fn unmount_is_delivered_once() {
    let recorder = Rc::new(Recorder::default());
    let (mut lifecycle, _tasks) = controller(recorder.clone());

    lifecycle.mount();
    lifecycle.unmount();
    lifecycle.unmount();
    drop(lifecycle);

    assert_eq!(recorder.values.borrow().as_slice(), &[UNSCALED]);
}

#[test]
fn rejected_deliveries_do_not_escape() {
    let recorder = Rc::new(Recorder {
        reject: true,
        ..Default::default()
    });
    let tasks = TaskQueue::new(Arc::new(NoopScheduler));
    let propagator = Rc::new(ScalePropagator::new(recorder.clone()));
    let mut lifecycle = LifecycleController::new(propagator.clone(), tasks.clone(), 0.83);

    lifecycle.mount();
    tasks.run_pending();
    lifecycle.unmount();

    assert_eq!(recorder.values.borrow().len(), 2);
    assert_eq!(propagator.failures(), 2);
    assert_eq!(propagator.last_delivered(), None);
}
