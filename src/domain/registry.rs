// Widget type registry - Compiled-in display metadata and footprints
use crate::domain::error::DashboardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetType {
    Stats,
    ChartLine,
    ChartBar,
    ChartPie,
    RecentUsers,
    Notifications,
    Tasks,
    Calendar,
    QuickActions,
    ChartLineEcharts,
    ChartBarEcharts,
    ChartPieEcharts,
    ChartScatterEcharts,
    ChartRadarEcharts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub w: u32,
    pub h: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetTypeInfo {
    pub display_name: &'static str,
    pub icon: &'static str,
    pub min_w: u32,
    pub min_h: u32,
    pub default_size: GridSize,
}

const fn info(
    display_name: &'static str,
    icon: &'static str,
    min_w: u32,
    min_h: u32,
    w: u32,
    h: u32,
) -> WidgetTypeInfo {
    WidgetTypeInfo {
        display_name,
        icon,
        min_w,
        min_h,
        default_size: GridSize { w, h },
    }
}

const STATS: WidgetTypeInfo = info("Stats Card", "📊", 2, 2, 3, 2);
const CHART_LINE: WidgetTypeInfo = info("Line Chart", "📈", 4, 3, 8, 4);
const CHART_BAR: WidgetTypeInfo = info("Bar Chart", "📊", 4, 3, 6, 4);
const CHART_PIE: WidgetTypeInfo = info("Pie Chart", "🥧", 3, 3, 4, 4);
const RECENT_USERS: WidgetTypeInfo = info("Recent Users", "👥", 4, 3, 6, 4);
const NOTIFICATIONS: WidgetTypeInfo = info("Notifications", "🔔", 3, 2, 6, 3);
const TASKS: WidgetTypeInfo = info("Tasks", "✅", 4, 3, 6, 4);
const CALENDAR: WidgetTypeInfo = info("Calendar", "📅", 3, 3, 4, 4);
const QUICK_ACTIONS: WidgetTypeInfo = info("Quick Actions", "⚡", 3, 3, 4, 4);
const CHART_LINE_ECHARTS: WidgetTypeInfo = info("ECharts Line Chart", "📈", 4, 3, 8, 4);
const CHART_BAR_ECHARTS: WidgetTypeInfo = info("ECharts Bar Chart", "📊", 4, 3, 6, 4);
const CHART_PIE_ECHARTS: WidgetTypeInfo = info("ECharts Pie Chart", "🥧", 3, 3, 4, 4);
const CHART_SCATTER_ECHARTS: WidgetTypeInfo = info("ECharts Scatter Chart", "🔵", 4, 3, 6, 4);
const CHART_RADAR_ECHARTS: WidgetTypeInfo = info("ECharts Radar Chart", "🎯", 4, 3, 6, 4);

impl WidgetType {
    /// Registry order, as shown by the widget picker.
    pub const ALL: [WidgetType; 14] = [
        WidgetType::Stats,
        WidgetType::ChartLine,
        WidgetType::ChartBar,
        WidgetType::ChartPie,
        WidgetType::RecentUsers,
        WidgetType::Notifications,
        WidgetType::Tasks,
        WidgetType::Calendar,
        WidgetType::QuickActions,
        WidgetType::ChartLineEcharts,
        WidgetType::ChartBarEcharts,
        WidgetType::ChartPieEcharts,
        WidgetType::ChartScatterEcharts,
        WidgetType::ChartRadarEcharts,
    ];

    pub fn info(self) -> &'static WidgetTypeInfo {
        match self {
            WidgetType::Stats => &STATS,
            WidgetType::ChartLine => &CHART_LINE,
            WidgetType::ChartBar => &CHART_BAR,
            WidgetType::ChartPie => &CHART_PIE,
            WidgetType::RecentUsers => &RECENT_USERS,
            WidgetType::Notifications => &NOTIFICATIONS,
            WidgetType::Tasks => &TASKS,
            WidgetType::Calendar => &CALENDAR,
            WidgetType::QuickActions => &QUICK_ACTIONS,
            WidgetType::ChartLineEcharts => &CHART_LINE_ECHARTS,
            WidgetType::ChartBarEcharts => &CHART_BAR_ECHARTS,
            WidgetType::ChartPieEcharts => &CHART_PIE_ECHARTS,
            WidgetType::ChartScatterEcharts => &CHART_SCATTER_ECHARTS,
            WidgetType::ChartRadarEcharts => &CHART_RADAR_ECHARTS,
        }
    }

    /// The tag used in snapshots and by the widget picker.
    pub fn as_str(self) -> &'static str {
        match self {
            WidgetType::Stats => "stats",
            WidgetType::ChartLine => "chart-line",
            WidgetType::ChartBar => "chart-bar",
            WidgetType::ChartPie => "chart-pie",
            WidgetType::RecentUsers => "recent-users",
            WidgetType::Notifications => "notifications",
            WidgetType::Tasks => "tasks",
            WidgetType::Calendar => "calendar",
            WidgetType::QuickActions => "quick-actions",
            WidgetType::ChartLineEcharts => "chart-line-echarts",
            WidgetType::ChartBarEcharts => "chart-bar-echarts",
            WidgetType::ChartPieEcharts => "chart-pie-echarts",
            WidgetType::ChartScatterEcharts => "chart-scatter-echarts",
            WidgetType::ChartRadarEcharts => "chart-radar-echarts",
        }
    }

    /// Look up a registered tag.
    pub fn lookup(tag: &str) -> Result<Self, DashboardError> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == tag)
            .ok_or_else(|| DashboardError::UnknownWidgetType(tag.to_string()))
    }
}

impl fmt::Display for WidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for WidgetType {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}
