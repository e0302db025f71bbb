//! Clock helpers shared by the roster and auth layers.

use chrono::{Datelike, Utc};

/// Milliseconds since the Unix epoch.
pub fn now_millis() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
}

/// Current calendar year (UTC).
pub fn current_year() -> u16 {
    u16::try_from(Utc::now().year()).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_is_after_2024() {
        // 2024-01-01T00:00:00Z
        assert!(now_millis() > 1_704_067_200_000);
        assert!(current_year() >= 2024);
    }
}
