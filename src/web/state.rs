use std::sync::Arc;

use crate::services::relay::Notifier;
use crate::web::security::RateLimiter;

/// Shared with every server function through Leptos context.
#[derive(Clone)]
pub struct AppState {
    pub notifier: Arc<dyn Notifier>,
    pub rate_limiter: Arc<RateLimiter>,
    /// Take client addresses from `X-Forwarded-For` instead of the socket.
    pub trust_forwarded: bool,
}

impl AppState {
    pub fn new(notifier: Arc<dyn Notifier>, trust_forwarded: bool) -> Self {
        Self {
            notifier,
            rate_limiter: Arc::new(RateLimiter::new()),
            trust_forwarded,
        }
    }
}
