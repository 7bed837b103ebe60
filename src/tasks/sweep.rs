//! Store Sweep Task
//!
//! Background task that periodically removes entries older than the
//! in-memory store's life window.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::driver::MemoryStore;

/// Spawns a background task that periodically sweeps aged entries.
///
/// The task runs in an infinite loop, sleeping for the configured interval
/// between sweeps. It acquires a write lock on the store only for the sweep
/// itself.
///
/// # Returns
/// A JoinHandle for the spawned task; the owning driver aborts it on drop.
pub(crate) fn spawn_sweep_task(
    store: Arc<RwLock<MemoryStore>>,
    interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        debug!("starting store sweep task with interval of {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut store_guard = store.write().await;
                store_guard.sweep()
            };

            if removed > 0 {
                info!("sweep: removed {} aged entries", removed);
            } else {
                debug!("sweep: no aged entries found");
            }
        }
    })
}
