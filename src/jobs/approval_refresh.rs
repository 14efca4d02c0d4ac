//! Background job: periodic approval re-fetch for the active identity.
//!
//! The approval flag is flipped upstream by an admin action this service
//! never sees directly; the periodic fetch is how that change becomes
//! visible without waiting for an identity change. Each tick is an
//! independent best-effort observation — failures are logged by the
//! tracker and the last known value stands.

use std::sync::Arc;
use std::time::Duration;

use tokio::time;

use crate::approval::ApprovalTracker;

/// Spawn the periodic refresh task. Call this once at startup.
/// A zero interval disables the job.
pub fn spawn(tracker: Arc<ApprovalTracker>, interval_secs: u64) {
    if interval_secs == 0 {
        tracing::info!("approval refresh job disabled");
        return;
    }

    tokio::spawn(async move {
        let mut interval = time::interval(Duration::from_secs(interval_secs));
        loop {
            interval.tick().await;
            if let Some(id) = tracker.current_identity_id().await {
                tracker.refresh(&id).await;
            }
        }
    });
}
