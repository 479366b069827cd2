//! Bounded Worker Pool
//!
//! Runs blocking, CPU-bound recognition calls off the tasks that service
//! connection I/O. Slots are bounded by a semaphore so one busy engine
//! cannot monopolize the blocking-thread budget.

use std::sync::Arc;
use std::thread;

use tokio::sync::Semaphore;

use crate::error::{WorkerError, WorkerResult};

/// Handle to a bounded set of execution slots. Cheap to clone; all
/// clones share the same slots.
#[derive(Clone)]
pub struct WorkerPool {
    slots: Arc<Semaphore>,
}

impl WorkerPool {
    /// Pool with a fixed number of execution slots
    pub fn new(size: usize) -> Self {
        Self {
            slots: Arc::new(Semaphore::new(size.max(1))),
        }
    }

    /// Pool sized to the available CPU parallelism
    pub fn with_available_parallelism() -> Self {
        let size = thread::available_parallelism().map(|n| n.get()).unwrap_or(1);
        Self::new(size)
    }

    /// Run a blocking closure on the pool, suspending until a slot is
    /// free and the call completes.
    pub async fn submit<F, T>(&self, f: F) -> WorkerResult<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let permit = self
            .slots
            .clone()
            .acquire_owned()
            .await
            .map_err(|e| WorkerError::Pool(e.to_string()))?;

        tokio::task::spawn_blocking(move || {
            let out = f();
            drop(permit);
            out
        })
        .await
        .map_err(|e| WorkerError::Pool(e.to_string()))
    }
}
