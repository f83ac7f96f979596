//! Severity levels and trend directions shown on the security badge.
//!
//! A badge always carries exactly four levels in the fixed order
//! critical, high, medium, low. Order determines the left-to-right column
//! and is never changed.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

use crate::badge::palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn short_label(&self) -> &'static str {
        match self {
            Self::Critical => "C",
            Self::High => "H",
            Self::Medium => "M",
            Self::Low => "L",
        }
    }

    pub fn color(&self) -> &'static str {
        palette::severity_color(*self)
    }

    /// Zero-based column of this level on the badge.
    pub fn column(&self) -> u32 {
        match self {
            Self::Critical => 0,
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }
}

/// Direction a severity count is moving in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Stable,
}

impl Trend {
    /// Case-insensitive parse that never fails.
    ///
    /// Anything other than `up`, `down` or `stable` (including the empty
    /// string or padded text) resolves to [`Trend::Stable`].
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "up" => Self::Up,
            "down" => Self::Down,
            _ => Self::Stable,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Up => "↑",
            Self::Down => "↓",
            Self::Stable => "→",
        }
    }
}

impl FromStr for Trend {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// One column of the badge: a severity, its count and where it is heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityLevel {
    pub severity: Severity,
    /// Rendered verbatim; negative values are not rejected.
    pub count: i64,
    pub trend: Trend,
}

impl SeverityLevel {
    pub fn new(severity: Severity, count: i64, trend: Trend) -> Self {
        Self {
            severity,
            count,
            trend,
        }
    }

    /// Text node content, e.g. `C: 10 ↑`.
    pub fn text(&self) -> String {
        format!(
            "{}: {} {}",
            self.severity.short_label(),
            self.count,
            self.trend.arrow()
        )
    }
}

/// The four levels a badge is rendered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityStatus {
    pub critical: SeverityLevel,
    pub high: SeverityLevel,
    pub medium: SeverityLevel,
    pub low: SeverityLevel,
}

impl SecurityStatus {
    /// Build a status from raw counts and trend strings.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        critical_count: i64,
        critical_trend: &str,
        high_count: i64,
        high_trend: &str,
        medium_count: i64,
        medium_trend: &str,
        low_count: i64,
        low_trend: &str,
    ) -> Self {
        Self {
            critical: SeverityLevel::new(
                Severity::Critical,
                critical_count,
                Trend::parse(critical_trend),
            ),
            high: SeverityLevel::new(Severity::High, high_count, Trend::parse(high_trend)),
            medium: SeverityLevel::new(Severity::Medium, medium_count, Trend::parse(medium_trend)),
            low: SeverityLevel::new(Severity::Low, low_count, Trend::parse(low_trend)),
        }
    }

    /// Levels in render order.
    pub fn levels(&self) -> [SeverityLevel; 4] {
        [self.critical, self.high, self.medium, self.low]
    }
}
