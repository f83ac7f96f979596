//! Thread-local phase tracking for crash reports.

use std::cell::Cell;
use std::fmt;

thread_local! {
    static CURRENT_PHASE: Cell<Option<BadgePhase>> = const { Cell::new(None) };
}

/// Stages of a badge run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgePhase {
    LoadingConfig,
    Rendering,
    Writing,
}

impl fmt::Display for BadgePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoadingConfig => write!(f, "loading_config"),
            Self::Rendering => write!(f, "rendering"),
            Self::Writing => write!(f, "writing"),
        }
    }
}

/// Restores the previous phase when dropped.
pub struct PhaseGuard {
    previous: Option<BadgePhase>,
}

impl Drop for PhaseGuard {
    fn drop(&mut self) {
        CURRENT_PHASE.with(|phase| phase.set(self.previous));
    }
}

#[must_use]
pub fn set_phase(phase: BadgePhase) -> PhaseGuard {
    CURRENT_PHASE.with(|current| {
        let previous = current.replace(Some(phase));
        PhaseGuard { previous }
    })
}

pub fn current_phase() -> Option<BadgePhase> {
    CURRENT_PHASE.with(Cell::get)
}
