//! Occupancy Refresh Task
//!
//! Background task that periodically simulates live occupancy changes:
//! every cycle rewrites each station's stands/bikes/timestamp and triggers
//! one cache invalidation. The delay between cycles is randomized within
//! the configured bounds; the sleep is the task's only preemption point,
//! so aborting the handle during shutdown stops it cleanly.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::service::StationService;

/// Spawns the occupancy refresh loop.
///
/// Each cycle refreshes the whole store, then sleeps for a random delay in
/// `[min_secs, max_secs]`. A cycle can touch zero stations (empty store);
/// that is not a failure and the loop keeps running.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_refresh_task(
    service: StationService,
    min_secs: u64,
    max_secs: u64,
) -> JoinHandle<()> {
    // A reversed range would panic in gen_range.
    let max_secs = max_secs.max(min_secs);

    tokio::spawn(async move {
        info!(
            "Starting occupancy refresh task with delays of {}-{} seconds",
            min_secs, max_secs
        );

        let mut rng = StdRng::from_entropy();
        loop {
            let touched = service.refresh_all(&mut rng).await;
            debug!("Occupancy refresh: rewrote {} stations", touched);

            let delay = rng.gen_range(min_secs..=max_secs);
            tokio::time::sleep(Duration::from_secs(delay)).await;
        }
    })
}
