use std::time::Duration;

use tokio::task::JoinHandle;

use crate::state::SharedState;

const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Periodically forget stale rate-limit windows and drop abandoned event
/// channels. Runs until the server begins shutting down.
pub fn spawn(state: SharedState) -> JoinHandle<()> {
    let mut shutdown = state.shutdown.subscribe();
    tokio::spawn(async move {
        tracing::debug!("Janitor started");

        loop {
            if *shutdown.borrow() {
                break;
            }

            tokio::select! {
                _ = tokio::time::sleep(SWEEP_INTERVAL) => {}
                _ = shutdown.changed() => continue,
            }

            sweep(&state);
        }

        tracing::debug!("Janitor stopped");
    })
}

fn sweep(state: &SharedState) {
    let window = Duration::from_secs(state.config.submit_rate_window_secs);
    state.submission_limiter.cleanup(window);

    let pruned = state.hub.prune();
    if pruned > 0 {
        tracing::debug!(pruned, remaining = state.hub.channel_count(), "pruned idle event channels");
    }
}
