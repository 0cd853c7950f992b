//! Timed background work tied to a component's lifetime.
//!
//! Loops run on the UI thread via `spawn_local`; `on_cleanup` flips the alive
//! flag so a loop stops after its component unmounts. Outside the browser
//! these are no-ops.

use std::time::Duration;

#[cfg(feature = "hydrate")]
use std::sync::Arc;
#[cfg(feature = "hydrate")]
use std::sync::atomic::{AtomicBool, Ordering};

/// Call `tick` every `interval` until the owning component unmounts.
pub fn spawn_poller<F>(interval: Duration, tick: F)
where
    F: Fn() + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(interval).await;
                if !alive_task.load(Ordering::Relaxed) {
                    break;
                }
                tick();
            }
        });
        leptos::prelude::on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (interval, tick);
    }
}

/// Run `task` once after `delay`.
pub fn spawn_after<F>(delay: Duration, task: F)
where
    F: FnOnce() + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(delay).await;
            task();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (delay, task);
    }
}
