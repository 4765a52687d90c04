// Dashboard layout engine - widgets, responsive grid layouts and their persistence
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::layout_actions::{Action, ConfirmPrompt, ResetConfirmation};
pub use application::layout_store::{LayoutStore, StoreChange, SubscriptionId};
pub use domain::breakpoint::Breakpoint;
pub use domain::dashboard::DashboardState;
pub use domain::error::DashboardError;
pub use domain::layout::{LayoutItem, LayoutsPatch, ResponsiveLayouts};
pub use domain::registry::{WidgetType, WidgetTypeInfo};
pub use domain::widget::{Widget, WidgetPatch};
