//! Delayed one-shot task scheduling.
//!
//! "Enqueue this action to run after duration D" - the caller must not
//! assume which thread or task runs the action, and there is no handle to
//! cancel one once enqueued.

use futures_util::future::BoxFuture;
use std::time::Duration;

/// Shared timer facility for one-shot delayed actions.
pub trait Scheduler: Send + Sync {
    fn schedule(&self, delay: Duration, task: BoxFuture<'static, ()>);
}

/// Scheduler backed by the tokio runtime.
///
/// Each scheduled action becomes a detached task that sleeps, runs, and
/// exits. Must be used from within a runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: BoxFuture<'static, ()>) {
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[tokio::test]
    async fn test_tokio_scheduler_runs_task_after_delay() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&fired);

        TokioScheduler.schedule(
            Duration::from_millis(10),
            Box::pin(async move {
                flag.store(true, Ordering::SeqCst);
            }),
        );

        assert!(!fired.load(Ordering::SeqCst));
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(fired.load(Ordering::SeqCst));
    }
}
