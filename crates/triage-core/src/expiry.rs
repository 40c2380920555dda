//! Countdown evaluation for checkpoint deadlines. Read-only: crossing the
//! deadline only raises the `expired` flag; whether to dismiss or escalate
//! is the backend engine's call.

use chrono::{DateTime, Duration, Utc};

/// Remaining time against a checkpoint deadline at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryStatus {
    /// Time left; clamped to zero once the deadline passes.
    pub remaining: Duration,
    pub expired: bool,
}

/// Evaluate `expires_at` against `now`.
pub fn evaluate(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> ExpiryStatus {
    let remaining = expires_at - now;
    if remaining <= Duration::zero() {
        ExpiryStatus {
            remaining: Duration::zero(),
            expired: true,
        }
    } else {
        ExpiryStatus {
            remaining,
            expired: false,
        }
    }
}

/// A deadline plus the fixed interval at which callers recompute it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    expires_at: DateTime<Utc>,
    interval: Duration,
}

impl Countdown {
    /// Recomputed once per second by default.
    pub fn new(expires_at: DateTime<Utc>) -> Self {
        Self {
            expires_at,
            interval: Duration::seconds(1),
        }
    }

    pub fn with_interval(expires_at: DateTime<Utc>, interval: Duration) -> Self {
        Self {
            expires_at,
            interval,
        }
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Status as of `now`.
    pub fn status_at(&self, now: DateTime<Utc>) -> ExpiryStatus {
        evaluate(self.expires_at, now)
    }

    /// When the next recompute is due.
    pub fn next_tick(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now + self.interval
    }
}
