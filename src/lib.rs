// Export modules for library usage
pub mod badge;
pub mod config;
pub mod driver;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod observability;
pub mod severity;

// Re-export commonly used types
pub use crate::badge::{render, render_security_badge, BadgeLayout};
pub use crate::config::DriverConfig;
pub use crate::errors::{Error, Result};
pub use crate::severity::{SecurityStatus, Severity, SeverityLevel, Trend};
