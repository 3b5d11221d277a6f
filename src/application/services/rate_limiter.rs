use governor::{
    clock::{Clock, DefaultClock},
    DefaultKeyedRateLimiter, Quota, RateLimiter as GovernorRateLimiter,
};
use std::{num::NonZeroU32, sync::Arc, time::Duration};

/// Per-client request rate limiter for the API.
///
/// Each client key (usually the peer IP) gets `max_requests` per `window`,
/// replenished evenly across the window.
#[derive(Clone)]
pub struct ApiRateLimiter {
    limiter: Arc<DefaultKeyedRateLimiter<String>>,
    max_requests: NonZeroU32,
}

impl ApiRateLimiter {
    pub fn new(max_requests: NonZeroU32, window: Duration) -> Self {
        let quota = Quota::with_period(window / max_requests.get())
            .map(|quota| quota.allow_burst(max_requests))
            .unwrap_or_else(|| Quota::per_second(max_requests));

        Self {
            limiter: Arc::new(GovernorRateLimiter::keyed(quota)),
            max_requests,
        }
    }

    /// Consume one request for `key`.
    ///
    /// Returns Err(duration) with the time to wait when the quota is spent.
    pub fn check(&self, key: &str) -> Result<(), Duration> {
        match self.limiter.check_key(&key.to_string()) {
            Ok(_) => Ok(()),
            Err(negative) => Err(negative.wait_time_from(DefaultClock::default().now())),
        }
    }

    /// Drop state for clients whose quota has fully replenished
    pub fn cleanup(&self) {
        self.limiter.retain_recent();
        self.limiter.shrink_to_fit();
    }

    /// Number of clients currently tracked
    pub fn tracked_clients(&self) -> usize {
        self.limiter.len()
    }

    pub fn max_requests(&self) -> u32 {
        self.max_requests.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limiter(max_requests: u32, window_secs: u64) -> ApiRateLimiter {
        ApiRateLimiter::new(
            NonZeroU32::new(max_requests).unwrap(),
            Duration::from_secs(window_secs),
        )
    }

    #[test]
    fn test_allows_within_limit() {
        let limiter = limiter(3, 60);

        assert!(limiter.check("10.0.0.1").is_ok());
        assert!(limiter.check("10.0.0.1").is_ok());
        assert!(limiter.check("10.0.0.1").is_ok());

        let wait = limiter.check("10.0.0.1").unwrap_err();
        assert!(wait > Duration::ZERO);
        assert!(wait <= Duration::from_secs(20));
    }

    #[test]
    fn test_clients_are_independent() {
        let limiter = limiter(1, 60);

        assert!(limiter.check("10.0.0.1").is_ok());
        assert!(limiter.check("10.0.0.1").is_err());

        assert!(limiter.check("10.0.0.2").is_ok());
        assert_eq!(limiter.tracked_clients(), 2);
    }

    #[test]
    fn test_cleanup_keeps_limited_clients() {
        let limiter = limiter(1, 60);

        let _ = limiter.check("10.0.0.1");
        let _ = limiter.check("10.0.0.1");

        limiter.cleanup();
        assert_eq!(limiter.tracked_clients(), 1);
    }

    #[test]
    fn test_tiny_window_falls_back_to_per_second_quota() {
        let limiter = ApiRateLimiter::new(NonZeroU32::new(10).unwrap(), Duration::ZERO);
        assert!(limiter.check("10.0.0.1").is_ok());
        assert_eq!(limiter.max_requests(), 10);
    }
}
