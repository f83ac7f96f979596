//! One-shot badge generation run.
//!
//! Renders [`SAMPLE_STATUS`], reports progress on the given writer and
//! persists the markup to the configured path. Rendering always completes
//! in memory before the file is touched.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;

use crate::badge;
use crate::config::DriverConfig;
use crate::formatting::OutputFormatter;
use crate::io::write_badge;
use crate::observability::{set_phase, BadgePhase};
use crate::severity::{SecurityStatus, Severity, SeverityLevel, Trend};

/// Sample data the driver renders.
pub const SAMPLE_STATUS: SecurityStatus = SecurityStatus {
    critical: SeverityLevel {
        severity: Severity::Critical,
        count: 10,
        trend: Trend::Up,
    },
    high: SeverityLevel {
        severity: Severity::High,
        count: 20,
        trend: Trend::Down,
    },
    medium: SeverityLevel {
        severity: Severity::Medium,
        count: 30,
        trend: Trend::Stable,
    },
    low: SeverityLevel {
        severity: Severity::Low,
        count: 5,
        trend: Trend::Down,
    },
};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeReport {
    pub output: PathBuf,
    /// Length of the markup in characters, not bytes
    pub svg_chars: usize,
}

pub fn run(
    config: &DriverConfig,
    fmt: &dyn OutputFormatter,
    out: &mut dyn Write,
) -> Result<BadgeReport> {
    writeln!(out, "{}", fmt.header("Starting badge generation..."))?;

    let svg = {
        let _phase = set_phase(BadgePhase::Rendering);
        badge::render(&SAMPLE_STATUS)
    };
    let svg_chars = svg.chars().count();

    writeln!(out, "{}", fmt.success("SVG content generated successfully!"))?;
    writeln!(out, "SVG length: {svg_chars} characters")?;

    {
        let _phase = set_phase(BadgePhase::Writing);
        write_badge(&config.output, &svg)
            .with_context(|| format!("Failed to save badge to {}", config.output.display()))?;
    }

    writeln!(
        out,
        "{} SVG badge saved to {}",
        fmt.success("✓"),
        config.output.display()
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        fmt.info(&format!("First {} characters of SVG:", config.preview_chars))
    )?;
    writeln!(out, "{}", preview(&svg, config.preview_chars))?;

    tracing::info!(output = %config.output.display(), svg_chars, "badge generated");

    Ok(BadgeReport {
        output: config.output.clone(),
        svg_chars,
    })
}

/// Print `err` and its cause chain.
///
/// The debug form of `anyhow::Error` lists every cause and, when
/// `RUST_BACKTRACE` is set, the captured backtrace.
pub fn report_failure(err: &anyhow::Error, fmt: &dyn OutputFormatter, out: &mut dyn Write) {
    let _ = writeln!(out, "{} {}", fmt.error("ERROR:"), err);
    let _ = writeln!(out, "{}", fmt.dim(&format!("{err:?}")));
}

/// First `max_chars` characters of `svg`, cut on a char boundary.
pub fn preview(svg: &str, max_chars: usize) -> &str {
    match svg.char_indices().nth(max_chars) {
        Some((end, _)) => &svg[..end],
        None => svg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::PlainFormatter;
    use tempfile::TempDir;

    #[test]
    fn test_sample_status_matches_driver_inputs() {
        assert_eq!(
            SAMPLE_STATUS,
            SecurityStatus::new(10, "up", 20, "down", 30, "stable", 5, "down")
        );
    }

    #[test]
    fn test_preview_counts_characters() {
        assert_eq!(preview("C: 1 ↑ more", 6), "C: 1 ↑");
        assert_eq!(preview("short", 200), "short");
        assert_eq!(preview("", 3), "");
    }

    #[test]
    fn test_run_writes_badge_and_reports_progress() {
        let dir = TempDir::new().unwrap();
        let config = DriverConfig {
            output: dir.path().join("security_badge.svg"),
            preview_chars: 200,
        };
        let mut out = Vec::new();

        let report = run(&config, &PlainFormatter, &mut out).unwrap();

        let written = std::fs::read_to_string(&config.output).unwrap();
        assert_eq!(written, badge::render(&SAMPLE_STATUS));
        assert_eq!(report.svg_chars, written.chars().count());

        let console = String::from_utf8(out).unwrap();
        assert!(console.starts_with("Starting badge generation...\n"));
        assert!(console.contains(&format!("SVG length: {} characters", report.svg_chars)));
        assert!(console.contains(&format!(
            "✓ SVG badge saved to {}\n",
            config.output.display()
        )));
        assert!(console.contains(preview(&written, 200)));
    }

    #[test]
    fn test_run_fails_for_unwritable_path() {
        let dir = TempDir::new().unwrap();
        let config = DriverConfig {
            output: dir.path().join("no-such-dir").join("badge.svg"),
            ..DriverConfig::default()
        };
        let mut out = Vec::new();

        let err = run(&config, &PlainFormatter, &mut out).unwrap_err();

        assert!(err.to_string().starts_with("Failed to save badge to"));
        let console = String::from_utf8(out).unwrap();
        assert!(console.contains("SVG content generated successfully!"));
        assert!(!console.contains("saved to"));
    }

    #[test]
    fn test_report_failure_prints_message_and_chain() {
        let err = anyhow::anyhow!("disk full").context("Failed to save badge to x.svg");
        let mut out = Vec::new();

        report_failure(&err, &PlainFormatter, &mut out);

        let console = String::from_utf8(out).unwrap();
        assert!(console.starts_with("ERROR: Failed to save badge to x.svg\n"));
        assert!(console.contains("disk full"));
    }
}
