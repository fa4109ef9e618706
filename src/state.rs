use std::sync::Arc;

use sqlx::PgPool;
use tokio::sync::watch;

use crate::config::Config;
use crate::rate_limit::SubmissionRateLimiter;
use crate::realtime::Hub;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub pool: PgPool,
    pub config: Config,
    pub hub: Hub,
    pub submission_limiter: SubmissionRateLimiter,
    /// Flipped to true once the server starts shutting down. Long-lived
    /// streams and background tasks watch it.
    pub shutdown: watch::Sender<bool>,
}
