// Repository trait for dashboard layout persistence
use crate::application::key_value_store::StorageError;
use crate::domain::layout::ResponsiveLayouts;
use crate::domain::widget::Widget;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to serialize dashboard snapshot")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write dashboard snapshot")]
    Storage(#[from] StorageError),
}

/// Structural part of a snapshot as returned by [`LayoutRepository::load`].
#[derive(Debug, Clone, PartialEq)]
pub struct SavedLayout {
    pub widgets: Vec<Widget>,
    pub layouts: ResponsiveLayouts,
}

pub trait LayoutRepository: Send + Sync {
    /// Persist a snapshot stamped with the current time.
    fn save(&self, widgets: &[Widget], layouts: &ResponsiveLayouts) -> Result<(), PersistenceError>;

    /// The last saved snapshot, or `None` when missing or unreadable.
    fn load(&self) -> Option<SavedLayout>;
}
