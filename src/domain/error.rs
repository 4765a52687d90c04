// Domain error types
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DashboardError {
    #[error("Unknown widget type: {0}")]
    UnknownWidgetType(String),

    #[error("Could not allocate a unique widget id (last tried '{0}')")]
    DuplicateWidgetId(String),

    #[error("Failed to initialize grid layout: {0}")]
    GridControllerUnavailable(String),
}

/// A broken cross-structure rule found by [`DashboardState::check_invariants`].
///
/// [`DashboardState::check_invariants`]: crate::domain::dashboard::DashboardState::check_invariants
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("widget id '{0}' appears more than once")]
    DuplicateWidget(String),

    #[error("layout item '{id}' in {breakpoint} has no matching widget")]
    OrphanItem { id: String, breakpoint: &'static str },

    #[error("widget '{id}' has {count} layout items in {breakpoint}, expected 1")]
    ItemCount {
        id: String,
        breakpoint: &'static str,
        count: usize,
    },

    #[error("layout item '{id}' in {breakpoint} violates its size constraints")]
    Constraint { id: String, breakpoint: &'static str },
}
