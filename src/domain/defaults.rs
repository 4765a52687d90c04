// Compiled-in default dashboard
use crate::domain::layout::{LayoutItem, ResponsiveLayouts};
use crate::domain::registry::WidgetType;
use crate::domain::widget::Widget;

const DEFAULT_WIDGETS: [(&str, WidgetType, &str); 10] = [
    ("revenue", WidgetType::Stats, "Total Revenue"),
    ("users", WidgetType::Stats, "Active Users"),
    ("retention", WidgetType::Stats, "User Retention"),
    ("security", WidgetType::Stats, "Security Blocks"),
    ("revenue-chart", WidgetType::ChartLine, "Revenue Trend"),
    ("snapshots", WidgetType::QuickActions, "Smart Snapshots"),
    ("announcements", WidgetType::Notifications, "Announcements"),
    ("products", WidgetType::Stats, "Product Performance"),
    ("audit-log", WidgetType::RecentUsers, "Live Audit"),
    ("team-progress", WidgetType::Tasks, "Team Progress"),
];

// (id, x, y, w, h, minW, minH)
type Row = (&'static str, u32, u32, u32, u32, u32, u32);

const LG: [Row; 10] = [
    ("revenue", 0, 0, 3, 2, 2, 2),
    ("users", 3, 0, 3, 2, 2, 2),
    ("retention", 6, 0, 3, 2, 2, 2),
    ("security", 9, 0, 3, 2, 2, 2),
    ("revenue-chart", 0, 2, 8, 4, 4, 3),
    ("snapshots", 8, 2, 4, 4, 3, 3),
    ("announcements", 0, 6, 6, 3, 3, 2),
    ("products", 6, 6, 6, 3, 3, 2),
    ("audit-log", 0, 9, 6, 4, 4, 3),
    ("team-progress", 6, 9, 6, 4, 4, 3),
];

const MD: [Row; 10] = [
    ("revenue", 0, 0, 3, 2, 2, 2),
    ("users", 3, 0, 3, 2, 2, 2),
    ("retention", 0, 2, 3, 2, 2, 2),
    ("security", 3, 2, 3, 2, 2, 2),
    ("revenue-chart", 0, 4, 6, 4, 4, 3),
    ("snapshots", 0, 8, 6, 4, 3, 3),
    ("announcements", 0, 12, 6, 3, 3, 2),
    ("products", 0, 15, 6, 3, 3, 2),
    ("audit-log", 0, 18, 6, 4, 4, 3),
    ("team-progress", 0, 22, 6, 4, 4, 3),
];

const SM: [Row; 10] = [
    ("revenue", 0, 0, 2, 2, 1, 2),
    ("users", 2, 0, 2, 2, 1, 2),
    ("retention", 0, 2, 2, 2, 1, 2),
    ("security", 2, 2, 2, 2, 1, 2),
    ("revenue-chart", 0, 4, 4, 4, 2, 3),
    ("snapshots", 0, 8, 4, 4, 2, 3),
    ("announcements", 0, 12, 4, 3, 2, 2),
    ("products", 0, 15, 4, 3, 2, 2),
    ("audit-log", 0, 18, 4, 4, 2, 3),
    ("team-progress", 0, 22, 4, 4, 2, 3),
];

const XS: [Row; 10] = [
    ("revenue", 0, 0, 1, 2, 1, 2),
    ("users", 0, 2, 1, 2, 1, 2),
    ("retention", 0, 4, 1, 2, 1, 2),
    ("security", 0, 6, 1, 2, 1, 2),
    ("revenue-chart", 0, 8, 1, 4, 1, 3),
    ("snapshots", 0, 12, 1, 4, 1, 3),
    ("announcements", 0, 16, 1, 3, 1, 2),
    ("products", 0, 19, 1, 3, 1, 2),
    ("audit-log", 0, 22, 1, 4, 1, 3),
    ("team-progress", 0, 26, 1, 4, 1, 3),
];

fn rows(rows: &[Row]) -> Vec<LayoutItem> {
    rows.iter()
        .map(|&(id, x, y, w, h, min_w, min_h)| LayoutItem::new(id, x, y, w, h, min_w, min_h))
        .collect()
}

pub fn default_widgets() -> Vec<Widget> {
    DEFAULT_WIDGETS
        .iter()
        .map(|&(id, widget_type, title)| Widget::new(id.to_string(), widget_type, title.to_string()))
        .collect()
}

pub fn default_layouts() -> ResponsiveLayouts {
    ResponsiveLayouts {
        lg: rows(&LG),
        md: rows(&MD),
        sm: rows(&SM),
        xs: rows(&XS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dashboard::DashboardState;

    #[test]
    fn test_defaults_are_consistent() {
        let state = DashboardState::new(default_widgets(), default_layouts());
        assert_eq!(state.widgets.len(), 10);
        assert_eq!(state.check_invariants(), Ok(()));
    }
}
