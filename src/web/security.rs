use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Mutex;
use std::time::{Duration, SystemTime};

/// Contact sends allowed per client within [`CONTACT_WINDOW`].
pub const CONTACT_MAX_SENDS: usize = 5;
pub const CONTACT_WINDOW: Duration = Duration::from_secs(10 * 60);

/// Simple in-memory rate limiter
pub struct RateLimiter {
    requests: Mutex<HashMap<String, Vec<SystemTime>>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(HashMap::new()),
        }
    }

    /// Returns true if allowed, false if the limit for `key` is exhausted
    pub fn check_rate_limit(&self, key: &str, max_requests: usize, window: Duration) -> bool {
        let now = SystemTime::now();
        let mut requests = self
            .requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        // Expire every client, not just this one, so idle addresses drop out
        requests.retain(|_, times| {
            times.retain(|&time| now.duration_since(time).unwrap_or(Duration::from_secs(0)) < window);
            !times.is_empty()
        });

        let entry = requests.entry(key.to_string()).or_default();
        if entry.len() >= max_requests {
            return false;
        }

        entry.push(now);
        true
    }

    /// Number of clients with requests still inside their window.
    pub fn tracked_clients(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn allow_contact(&self, client: &str) -> bool {
        self.check_rate_limit(client, CONTACT_MAX_SENDS, CONTACT_WINDOW)
    }
}

/// Rate-limit key for a request. The forwarded address is only honoured
/// behind a trusted proxy; otherwise clients could pick their own key.
pub fn client_key(peer: Option<SocketAddr>, forwarded: Option<&str>, trust_forwarded: bool) -> String {
    let forwarded = forwarded
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty());

    match (trust_forwarded, forwarded, peer) {
        (true, Some(client), _) => client.to_string(),
        (_, _, Some(peer)) => peer.ip().to_string(),
        _ => "unknown".to_string(),
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_blocks_after_max() {
        let limiter = RateLimiter::new();
        for _ in 0..CONTACT_MAX_SENDS {
            assert!(limiter.allow_contact("10.0.0.1"));
        }
        assert!(!limiter.allow_contact("10.0.0.1"));
        assert!(limiter.allow_contact("10.0.0.2"));
    }

    #[test]
    fn test_rate_limit_window_expires() {
        let limiter = RateLimiter::new();
        assert!(limiter.check_rate_limit("k", 1, Duration::from_millis(0)));
        assert!(limiter.check_rate_limit("k", 1, Duration::from_millis(0)));
    }

    #[test]
    fn test_rate_limit_prunes_expired_clients() {
        let limiter = RateLimiter::new();
        for i in 0..1000 {
            limiter.check_rate_limit(&format!("10.0.{}.{}", i / 256, i % 256), 5, Duration::from_millis(0));
        }

        limiter.check_rate_limit("10.9.9.9", 5, Duration::from_millis(0));

        assert_eq!(limiter.tracked_clients(), 1);
    }

    #[test]
    fn test_rate_limit_keeps_clients_inside_window() {
        let limiter = RateLimiter::new();
        limiter.allow_contact("10.0.0.1");
        limiter.allow_contact("10.0.0.2");
        limiter.allow_contact("10.0.0.3");

        assert_eq!(limiter.tracked_clients(), 3);
    }

    #[test]
    fn test_client_key_ignores_forwarded_header_by_default() {
        let peer: SocketAddr = "203.0.113.7:51234".parse().unwrap();

        assert_eq!(client_key(Some(peer), Some("1.2.3.4"), false), "203.0.113.7");
        assert_eq!(client_key(None, Some("1.2.3.4"), false), "unknown");
    }

    #[test]
    fn test_client_key_uses_first_forwarded_hop_behind_proxy() {
        let peer: SocketAddr = "10.0.0.2:80".parse().unwrap();

        assert_eq!(client_key(Some(peer), Some("198.51.100.4, 10.0.0.2"), true), "198.51.100.4");
        assert_eq!(client_key(Some(peer), None, true), "10.0.0.2");
    }
}
