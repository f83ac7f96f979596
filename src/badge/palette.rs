//! Fixed badge colors.

use crate::severity::Severity;

pub const CRITICAL: &str = "#e05d44";
pub const HIGH: &str = "#fe7d37";
pub const MEDIUM: &str = "#dfb317";
pub const LOW: &str = "#97ca00";
/// Background of the "Security Status" label column.
pub const LABEL: &str = "#555555";

pub fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => CRITICAL,
        Severity::High => HIGH,
        Severity::Medium => MEDIUM,
        Severity::Low => LOW,
    }
}
