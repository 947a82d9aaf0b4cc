use std::cell::Cell;

use futures::executor::block_on;
use futures::future::{pending, ready};

use super::*;

#[test]
fn delay_is_fifteen_hundred_millis() {
    assert_eq!(BOOTSTRAP_DELAY, Duration::from_millis(1500));
}

#[test]
fn phase_starts_pending() {
    assert!(!BootstrapPhase::default().is_finished());
    assert!(BootstrapPhase::Finished.is_finished());
}

#[test]
fn fires_once_sleep_completes() {
    let fired = Cell::new(0);
    let (task, _handle) = bootstrap_task(ready(()), || fired.set(fired.get() + 1));
    block_on(task);
    assert_eq!(fired.get(), 1);
}

#[test]
fn cancel_before_fire_suppresses_callback() {
    let fired = Cell::new(false);
    let (task, handle) = bootstrap_task(ready(()), || fired.set(true));
    handle.cancel();
    block_on(task);
    assert!(!fired.get());
}

#[test]
fn cancel_releases_a_pending_timer() {
    let fired = Cell::new(false);
    let (task, handle) = bootstrap_task(pending::<()>(), || fired.set(true));
    handle.clone().cancel();
    // Completes instead of hanging on the never-ready sleep.
    block_on(task);
    assert!(!fired.get());
}

#[test]
fn cancel_after_fire_is_harmless() {
    let fired = Cell::new(false);
    let (task, handle) = bootstrap_task(ready(()), || fired.set(true));
    block_on(task);
    handle.cancel();
    assert!(fired.get());
}
