// Widget domain model
use crate::domain::registry::WidgetType;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Opaque per-widget configuration.
pub type WidgetConfig = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    pub id: String,
    #[serde(rename = "type")]
    pub widget_type: WidgetType,
    pub title: String,
    #[serde(default)]
    pub config: WidgetConfig,
}

impl Widget {
    pub fn new(id: String, widget_type: WidgetType, title: String) -> Self {
        Self {
            id,
            widget_type,
            title,
            config: WidgetConfig::new(),
        }
    }

    /// Merge the set fields of `patch` into this widget. The id never changes.
    pub fn apply(&mut self, patch: WidgetPatch) {
        if let Some(widget_type) = patch.widget_type {
            self.widget_type = widget_type;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(config) = patch.config {
            self.config = config;
        }
    }
}

/// Partial update for a widget; `id` is deliberately absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetPatch {
    pub widget_type: Option<WidgetType>,
    pub title: Option<String>,
    pub config: Option<WidgetConfig>,
}

impl WidgetPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn config(config: WidgetConfig) -> Self {
        Self {
            config: Some(config),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.widget_type.is_none() && self.title.is_none() && self.config.is_none()
    }
}

const ID_SUFFIX_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a widget id: `widget-<unix millis>-<9 base36 chars>`.
pub fn generate_widget_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let mut rng = rand::rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect();
    format!("widget-{}-{}", millis, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_widget_id_format() {
        let id = generate_widget_id();
        let parts: Vec<&str> = id.splitn(3, '-').collect();
        assert_eq!(parts[0], "widget");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), ID_SUFFIX_LEN);
        assert!(parts[2].bytes().all(|b| BASE36.contains(&b)));
    }

    #[test]
    fn test_generate_widget_id_unique() {
        let ids: HashSet<String> = (0..1000).map(|_| generate_widget_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_apply_patch_keeps_id() {
        let mut widget = Widget::new("w1".to_string(), WidgetType::Stats, "Revenue".to_string());
        let mut config = WidgetConfig::new();
        config.insert("currency".to_string(), serde_json::json!("EUR"));

        widget.apply(WidgetPatch {
            widget_type: Some(WidgetType::ChartBar),
            title: Some("Sales".to_string()),
            config: Some(config.clone()),
        });

        assert_eq!(widget.id, "w1");
        assert_eq!(widget.widget_type, WidgetType::ChartBar);
        assert_eq!(widget.title, "Sales");
        assert_eq!(widget.config, config);
    }

    #[test]
    fn test_deserialize_without_config() {
        let widget: Widget =
            serde_json::from_str(r#"{"id":"revenue","type":"stats","title":"Revenue"}"#).unwrap();
        assert!(widget.config.is_empty());
        assert_eq!(widget.widget_type, WidgetType::Stats);
    }
}
