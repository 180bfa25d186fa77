//! Disc capacities and the arithmetic used to report against them.
//!
//! Everything here is pure: durations come in as fractional seconds and go
//! out as percentages or `MM:SS` strings.

use serde::Deserialize;

/// A recording medium with a fixed maximum playing time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DiscCapacity {
    pub label: String,
    pub minutes: u32,
}

impl DiscCapacity {
    pub fn from_minutes(label: impl Into<String>, minutes: u32) -> Self {
        Self {
            label: label.into(),
            minutes,
        }
    }

    pub fn seconds(&self) -> f64 {
        f64::from(self.minutes) * 60.0
    }

    /// The two standard MiniDisc lengths: 74 and 80 minutes.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::from_minutes("74-minute", 74),
            Self::from_minutes("80-minute", 80),
        ]
    }
}

/// Share of `capacity_seconds` taken by `total_seconds`, in percent.
///
/// Not clamped: a value above 100 means the total does not fit.
pub fn disc_percentage(total_seconds: f64, capacity_seconds: f64) -> f64 {
    total_seconds / capacity_seconds * 100.0
}

/// Format fractional seconds as zero-padded `MM:SS`.
///
/// Minutes never carry into hours, so 100 minutes renders as `100:00`.
pub fn format_duration(total_seconds: f64) -> String {
    let minutes = (total_seconds / 60.0).floor() as u64;
    let seconds = (total_seconds % 60.0).floor() as u64;
    format!("{:02}:{:02}", minutes, seconds)
}

pub fn format_percent(percent: f64) -> String {
    format!("{:.2}%", percent)
}
