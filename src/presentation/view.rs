// Render model - What the dashboard UI draws for a given viewport
use crate::domain::breakpoint::Breakpoint;
use crate::domain::dashboard::DashboardState;
use crate::domain::layout::LayoutItem;
use crate::domain::registry::WidgetType;
use crate::domain::widget::Widget;

#[derive(Debug, Clone, PartialEq)]
pub struct GridCell<'a> {
    pub widget: &'a Widget,
    pub layout: Option<&'a LayoutItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView<'a> {
    pub breakpoint: Breakpoint,
    /// One cell per widget, in widget order.
    pub cells: Vec<GridCell<'a>>,
    pub is_editing: bool,
    pub is_loading: bool,
    pub error: Option<&'a str>,
    pub empty_hint: Option<&'static str>,
}

impl<'a> DashboardView<'a> {
    /// Build the view for the width observed right now.
    pub fn build(state: &'a DashboardState, width_px: u32) -> Self {
        let breakpoint = Breakpoint::resolve(width_px);
        let cells = state
            .widgets
            .iter()
            .map(|widget| GridCell {
                widget,
                layout: state.layouts.find(breakpoint, &widget.id),
            })
            .collect();

        let empty_hint = match (state.widgets.is_empty(), state.is_editing) {
            (false, _) => None,
            (true, true) => Some("Use \"Add widget\" above to start building your dashboard"),
            (true, false) => Some("Enable edit mode to add widgets"),
        };

        Self {
            breakpoint,
            cells,
            is_editing: state.is_editing,
            is_loading: state.is_loading,
            error: state.error.as_deref(),
            empty_hint,
        }
    }

    /// The widget picker is only offered while editing.
    pub fn show_picker(&self) -> bool {
        self.is_editing
    }

    pub fn summary(&self) -> String {
        match self.cells.len() {
            1 => "1 widget".to_string(),
            n => format!("{} widgets", n),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerEntry {
    pub widget_type: WidgetType,
    pub display_name: &'static str,
    pub icon: &'static str,
    /// Default footprint, e.g. `8×4`.
    pub size_label: String,
}

/// Every registered widget type, in registry order.
pub fn widget_picker() -> Vec<PickerEntry> {
    WidgetType::ALL
        .iter()
        .map(|&widget_type| {
            let info = widget_type.info();
            PickerEntry {
                widget_type,
                display_name: info.display_name,
                icon: info.icon,
                size_label: format!("{}×{}", info.default_size.w, info.default_size.h),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::layout::ResponsiveLayouts;

    #[test]
    fn test_view_uses_breakpoint_for_width() {
        let state = DashboardState::with_defaults();

        let view = DashboardView::build(&state, 500);
        assert_eq!(view.breakpoint, Breakpoint::Xs);
        assert_eq!(view.cells.len(), 10);
        let revenue_chart = &view.cells[4];
        assert_eq!(revenue_chart.widget.id, "revenue-chart");
        assert_eq!(revenue_chart.layout.map(|l| (l.y, l.w)), Some((8, 1)));

        let view = DashboardView::build(&state, 1440);
        assert_eq!(view.cells[4].layout.map(|l| (l.y, l.w)), Some((2, 8)));
        assert_eq!(view.summary(), "10 widgets");
        assert_eq!(view.empty_hint, None);
        assert!(!view.show_picker());
    }

    #[test]
    fn test_empty_hint_depends_on_edit_mode() {
        let mut state = DashboardState::new(Vec::new(), ResponsiveLayouts::default());
        assert_eq!(
            DashboardView::build(&state, 1280).empty_hint,
            Some("Enable edit mode to add widgets")
        );

        state.is_editing = true;
        let view = DashboardView::build(&state, 1280);
        assert!(view.empty_hint.unwrap().contains("Add widget"));
        assert!(view.show_picker());
    }

    #[test]
    fn test_error_banner() {
        let mut state = DashboardState::with_defaults();
        state.error = Some("Unknown widget type: gauge".to_string());
        assert_eq!(
            DashboardView::build(&state, 1280).error,
            Some("Unknown widget type: gauge")
        );
    }

    #[test]
    fn test_widget_picker_lists_registry() {
        let entries = widget_picker();
        assert_eq!(entries.len(), WidgetType::ALL.len());
        let line = entries.iter().find(|e| e.widget_type == WidgetType::ChartLine).unwrap();
        assert_eq!(line.size_label, "8×4");
        assert_eq!(line.display_name, "Line Chart");
    }
}
