//! Logging and crash reporting.
//!
//! - **Logging**: `tracing` events filtered through `RUST_LOG`
//! - **Phase tracking**: thread-local record of what the driver is doing
//! - **Panic hook**: structured crash report naming the phase
//!
//! ```ignore
//! use secbadge::observability::{init_logging, install_panic_hook};
//!
//! fn main() {
//!     init_logging();
//!     install_panic_hook();
//!     // ...
//! }
//! ```

pub mod context;
pub mod logging;
pub mod panic_hook;

pub use context::{current_phase, set_phase, BadgePhase, PhaseGuard};
pub use logging::init_logging;
pub use panic_hook::install_panic_hook;
