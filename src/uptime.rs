//! Uptime math shared by the info and health endpoints.

use chrono::{DateTime, Utc};

/// Whole-second uptime plus its human-readable rendering.
#[derive(Debug, Clone)]
pub struct Uptime {
    pub seconds: u64,
    pub human: String,
}

impl Uptime {
    /// Uptime between `started_at` and now, clamped at zero.
    pub fn since(started_at: DateTime<Utc>) -> Self {
        let seconds = (Utc::now() - started_at).num_seconds().max(0) as u64;
        Self::from_seconds(seconds)
    }

    pub fn from_seconds(seconds: u64) -> Self {
        Self {
            seconds,
            human: humanize(seconds),
        }
    }
}

/// Renders `"<H> hour(s), <M> minute(s)"`. A unit is singular only when its
/// count is exactly 1, so zero still reads "0 hours, 0 minutes". Hours do not
/// wrap at 24.
pub fn humanize(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    format!(
        "{} hour{}, {} minute{}",
        hours,
        if hours == 1 { "" } else { "s" },
        minutes,
        if minutes == 1 { "" } else { "s" },
    )
}
