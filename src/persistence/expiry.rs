//! Session expiry predicate.

use chrono::{DateTime, Duration, Utc};

/// Milliseconds a conductor session stays valid: one shift-day.
pub const SHIFT_HORIZON_MS: i64 = 24 * 60 * 60 * 1000;

/// Default conductor horizon as a `Duration`.
pub fn shift_horizon() -> Duration {
    Duration::milliseconds(SHIFT_HORIZON_MS)
}

/// True when more than `horizon` has passed between `timestamp` and `now`.
///
/// Exactly `horizon` is still valid. A timestamp in the future (clock moved
/// backwards) is never expired.
pub fn is_expired(timestamp: DateTime<Utc>, now: DateTime<Utc>, horizon: Duration) -> bool {
    now.signed_duration_since(timestamp) > horizon
}
