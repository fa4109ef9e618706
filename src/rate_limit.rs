use std::net::IpAddr;
use std::time::{Duration, Instant};

use dashmap::DashMap;

/// Per-IP-per-course submission rate limiter using a fixed window.
pub struct SubmissionRateLimiter {
    /// (course_id, ip) -> (count, window_start)
    entries: DashMap<(i64, IpAddr), (u32, Instant)>,
}

impl SubmissionRateLimiter {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Check if request is allowed. Returns Ok(()) or Err with retry-after seconds.
    pub fn check(&self, course_id: i64, ip: IpAddr, limit: u32, window_secs: u64) -> Result<(), u64> {
        let key = (course_id, ip);
        let window = Duration::from_secs(window_secs);
        let now = Instant::now();

        let mut entry = self.entries.entry(key).or_insert((0, now));
        let (count, start) = entry.value_mut();

        if now.duration_since(*start) >= window {
            *count = 1;
            *start = now;
            return Ok(());
        }

        if *count >= limit {
            let elapsed = now.duration_since(*start).as_secs();
            return Err(window_secs.saturating_sub(elapsed).max(1));
        }

        *count += 1;
        Ok(())
    }

    /// Remove stale entries older than the given duration.
    pub fn cleanup(&self, max_age: Duration) {
        let now = Instant::now();
        self.entries.retain(|_, (_, start)| now.duration_since(*start) < max_age);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SubmissionRateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(s: &str) -> IpAddr {
        s.parse().unwrap()
    }

    #[test]
    fn allows_up_to_limit_then_blocks() {
        let limiter = SubmissionRateLimiter::new();
        for _ in 0..3 {
            assert!(limiter.check(1, ip("10.0.0.1"), 3, 60).is_ok());
        }
        let retry = limiter.check(1, ip("10.0.0.1"), 3, 60).unwrap_err();
        assert!(retry > 0 && retry <= 60);
    }

    #[test]
    fn keys_by_course_and_ip() {
        let limiter = SubmissionRateLimiter::new();
        assert!(limiter.check(1, ip("10.0.0.1"), 1, 60).is_ok());
        assert!(limiter.check(1, ip("10.0.0.1"), 1, 60).is_err());
        assert!(limiter.check(2, ip("10.0.0.1"), 1, 60).is_ok());
        assert!(limiter.check(1, ip("10.0.0.2"), 1, 60).is_ok());
    }

    #[test]
    fn window_reopens_once_it_has_elapsed() {
        let limiter = SubmissionRateLimiter::new();
        // A zero-length window has always elapsed.
        for _ in 0..3 {
            assert!(limiter.check(1, ip("10.0.0.1"), 1, 0).is_ok());
        }
    }

    #[test]
    fn cleanup_drops_old_windows() {
        let limiter = SubmissionRateLimiter::new();
        limiter.check(1, ip("10.0.0.1"), 5, 60).unwrap();
        limiter.cleanup(Duration::ZERO);
        assert!(limiter.is_empty());
    }
}
