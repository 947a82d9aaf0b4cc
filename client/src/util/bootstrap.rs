//! One-shot startup timer that holds the loading screen for a minimum time.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` spawns the task returned by `bootstrap_task` on mount and cancels
//! its handle in `on_cleanup`, so a torn-down app never sees the timer
//! fire. Completion is one half of the guard's exit from `Booting`.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use std::future::Future;
use std::time::Duration;

use futures::future::{AbortHandle, Abortable};

/// Minimum time the loading screen stays up after start.
pub const BOOTSTRAP_DELAY: Duration = Duration::from_millis(1500);

/// Whether the minimum loading time has elapsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BootstrapPhase {
    #[default]
    Pending,
    Finished,
}

impl BootstrapPhase {
    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Finished)
    }
}

/// Cancellation handle for a scheduled bootstrap task.
#[derive(Clone, Debug)]
pub struct BootstrapHandle {
    abort: AbortHandle,
}

impl BootstrapHandle {
    /// Stop the task; `on_fire` will not run if it has not already.
    pub fn cancel(&self) {
        self.abort.abort();
    }
}

/// Build the bootstrap task: wait on `sleep`, then call `on_fire` once.
///
/// The caller spawns the returned future and keeps the handle for teardown.
pub fn bootstrap_task<S, F>(sleep: S, on_fire: F) -> (impl Future<Output = ()>, BootstrapHandle)
where
    S: Future<Output = ()>,
    F: FnOnce(),
{
    let (abort, registration) = AbortHandle::new_pair();
    let task = Abortable::new(
        async move {
            sleep.await;
            on_fire();
        },
        registration,
    );
    let task = async move {
        if task.await.is_err() {
            log::debug!("bootstrap timer cancelled before firing");
        }
    };
    (task, BootstrapHandle { abort })
}

/// Schedule the bootstrap timer on the browser event loop.
#[cfg(feature = "hydrate")]
pub fn start<F>(on_fire: F) -> BootstrapHandle
where
    F: FnOnce() + 'static,
{
    let delay_ms = u32::try_from(BOOTSTRAP_DELAY.as_millis()).unwrap_or(u32::MAX);
    let (task, handle) = bootstrap_task(gloo_timers::future::TimeoutFuture::new(delay_ms), on_fire);
    leptos::task::spawn_local(task);
    handle
}
