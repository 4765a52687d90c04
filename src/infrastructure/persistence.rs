// Snapshot persistence - JSON snapshots in a key/value store
use crate::application::key_value_store::KeyValueStore;
use crate::application::layout_repository::{LayoutRepository, PersistenceError, SavedLayout};
use crate::domain::breakpoint::Breakpoint;
use crate::domain::layout::{LayoutItem, ResponsiveLayouts};
use crate::domain::widget::Widget;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Storage key used when none is configured. Shared with snapshots written by
/// earlier dashboard builds.
pub const DEFAULT_STORAGE_KEY: &str = "halolight-dashboard-layout";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotRef<'a> {
    widgets: &'a [Widget],
    layouts: &'a ResponsiveLayouts,
    saved_at: DateTime<Utc>,
}

pub struct LayoutPersistence {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl LayoutPersistence {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Shape-check a snapshot, then decode it entry by entry.
    ///
    /// `widgets` must be an array and `layouts` an object, otherwise the
    /// snapshot is ignored. Unreadable widgets and layout items (unknown type
    /// tag, negative coordinate) are skipped on their own so one bad entry
    /// does not discard the rest; the store repairs what is left.
    fn decode(raw: &str) -> Result<Option<SavedLayout>, serde_json::Error> {
        let value: Value = serde_json::from_str(raw)?;
        let (Some(Value::Array(widgets)), Some(Value::Object(layouts))) = (value.get("widgets"), value.get("layouts"))
        else {
            return Ok(None);
        };

        let widgets = widgets.iter().filter_map(|w| decode_entry::<Widget>("widget", w)).collect();
        let mut decoded = ResponsiveLayouts::default();
        for bp in Breakpoint::ALL {
            match layouts.get(bp.as_str()) {
                Some(Value::Array(items)) => {
                    *decoded.get_mut(bp) = items
                        .iter()
                        .filter_map(|item| decode_entry::<LayoutItem>("layout item", item))
                        .collect();
                }
                _ => tracing::warn!("Saved dashboard layout has no usable {} layout", bp),
            }
        }

        Ok(Some(SavedLayout {
            widgets,
            layouts: decoded,
        }))
    }
}

fn decode_entry<T: DeserializeOwned>(kind: &str, value: &Value) -> Option<T> {
    match serde_json::from_value::<T>(value.clone()) {
        Ok(entry) => Some(entry),
        Err(e) => {
            tracing::warn!("Skipping unreadable {} in saved dashboard layout: {}", kind, e);
            None
        }
    }
}

impl LayoutRepository for LayoutPersistence {
    fn save(&self, widgets: &[Widget], layouts: &ResponsiveLayouts) -> Result<(), PersistenceError> {
        let snapshot = SnapshotRef {
            widgets,
            layouts,
            saved_at: Utc::now(),
        };
        let json = serde_json::to_string(&snapshot)?;
        self.store.set(&self.key, &json)?;
        tracing::debug!("Saved dashboard snapshot ({} bytes) under {}", json.len(), self.key);
        Ok(())
    }

    fn load(&self) -> Option<SavedLayout> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("Failed to read saved dashboard layout: {}", e);
                return None;
            }
        };

        match Self::decode(&raw) {
            Ok(Some(saved)) => Some(saved),
            Ok(None) => {
                tracing::warn!("Ignoring saved dashboard layout without widgets/layouts");
                None
            }
            Err(e) => {
                tracing::warn!("Failed to load saved dashboard layout: {}", e);
                None
            }
        }
    }
}
