//! Custom panic hook for structured crash reports.
//!
//! Reports the panic message and location, the badge phase that was active
//! and, when `RUST_BACKTRACE` is set, a stack trace.

use super::context::current_phase;
use std::panic::PanicHookInfo;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const RULE: &str = "════════════════════════════════════════════════════════════════";

/// Install the crash report hook. Call early in `main`.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("{}", crash_report(info));
        print_backtrace();
    }));
}

fn crash_report(info: &PanicHookInfo<'_>) -> String {
    let mut lines = vec![
        RULE.to_string(),
        format!("SECBADGE CRASH REPORT (version {VERSION}, {})", std::env::consts::OS),
        RULE.to_string(),
        format!("PANIC: {}", truncate(&panic_message(info), 200)),
    ];

    if let Some(location) = info.location() {
        lines.push(format!(
            "Location: {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        ));
    }

    lines.push(match current_phase() {
        Some(phase) => format!("Phase: {phase}"),
        None => "Phase: (not set - crash occurred before badge generation started)".to_string(),
    });
    lines.push(RULE.to_string());
    lines.join("\n")
}

fn print_backtrace() {
    if std::env::var("RUST_BACKTRACE").is_ok() {
        eprintln!("STACK TRACE:");
        eprintln!("{}", std::backtrace::Backtrace::capture());
    } else {
        eprintln!("Run with RUST_BACKTRACE=1 for stack trace");
    }
}

/// Extract the message carried by a panic payload.
pub fn payload_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

fn panic_message(info: &PanicHookInfo<'_>) -> String {
    payload_message(info.payload())
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
