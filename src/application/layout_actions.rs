// Layout actions - Reducer-style operations over the dashboard state
//
// Every function here is pure: it takes the current state and returns the
// next one (or nothing when the action is a no-op). Committing, persisting
// and notifying is the job of `LayoutStore`.
use crate::application::layout_repository::SavedLayout;
use crate::domain::breakpoint::Breakpoint;
use crate::domain::dashboard::DashboardState;
use crate::domain::defaults::{default_layouts, default_widgets};
use crate::domain::error::DashboardError;
use crate::domain::layout::{LayoutItem, LayoutsPatch};
use crate::domain::position::next_position;
use crate::domain::registry::WidgetType;
use crate::domain::widget::{Widget, WidgetConfig, WidgetPatch};

/// Attempts at drawing a fresh id before giving up on `AddWidget`.
const MAX_ID_ATTEMPTS: usize = 8;

pub const RESET_PROMPT: &str =
    "Reset the dashboard to its default layout? All customizations will be lost.";

/// Asks the user a yes/no question.
pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> ConfirmPrompt for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Proof that the user agreed to a reset. Only obtainable through a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetConfirmation {
    _private: (),
}

impl ResetConfirmation {
    pub fn request(prompt: &dyn ConfirmPrompt) -> Option<Self> {
        prompt
            .confirm(RESET_PROMPT)
            .then_some(ResetConfirmation { _private: () })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddWidget {
        widget_type: String,
        title: Option<String>,
    },
    RemoveWidget {
        id: String,
    },
    UpdateWidget {
        id: String,
        patch: WidgetPatch,
    },
    UpdateLayouts(LayoutsPatch),
    SetEditing(bool),
    ResetLayout(ResetConfirmation),
    LoadLayout,
    ReportError(String),
    DismissError,
}

impl Action {
    pub fn add_widget(widget_type: impl Into<String>, title: Option<String>) -> Self {
        Action::AddWidget {
            widget_type: widget_type.into(),
            title,
        }
    }

    pub fn remove_widget(id: impl Into<String>) -> Self {
        Action::RemoveWidget { id: id.into() }
    }

    pub fn update_widget(id: impl Into<String>, patch: WidgetPatch) -> Self {
        Action::UpdateWidget { id: id.into(), patch }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::AddWidget { .. } => "addWidget",
            Action::RemoveWidget { .. } => "removeWidget",
            Action::UpdateWidget { .. } => "updateWidget",
            Action::UpdateLayouts(_) => "updateLayouts",
            Action::SetEditing(_) => "setEditing",
            Action::ResetLayout(_) => "resetLayout",
            Action::LoadLayout => "loadLayout",
            Action::ReportError(_) => "reportError",
            Action::DismissError => "dismissError",
        }
    }
}

/// Side inputs an action may need: fresh ids and the persisted snapshot.
pub trait ActionContext {
    fn next_widget_id(&mut self) -> String;
    fn load_saved(&mut self) -> Option<SavedLayout>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum Reduction {
    Unchanged,
    Updated { state: DashboardState, persist: bool },
}

pub fn reduce(state: &DashboardState, action: Action, ctx: &mut dyn ActionContext) -> Reduction {
    let structural = |next: Option<DashboardState>| match next {
        Some(state) => Reduction::Updated { state, persist: true },
        None => Reduction::Unchanged,
    };
    let ephemeral = |next: Option<DashboardState>| match next {
        Some(state) => Reduction::Updated { state, persist: false },
        None => Reduction::Unchanged,
    };

    match action {
        Action::AddWidget { widget_type, title } => {
            match add_widget(state, &widget_type, title, ctx) {
                Ok(next) => Reduction::Updated { state: next, persist: true },
                Err(e) => {
                    tracing::error!("Failed to add widget: {}", e);
                    Reduction::Updated {
                        state: with_error(state, e.to_string()),
                        persist: false,
                    }
                }
            }
        }
        Action::RemoveWidget { id } => structural(remove_widget(state, &id)),
        Action::UpdateWidget { id, patch } => structural(update_widget(state, &id, patch)),
        Action::UpdateLayouts(patch) => structural(update_layouts(state, patch)),
        Action::SetEditing(editing) => ephemeral(set_editing(state, editing)),
        Action::ResetLayout(confirmation) => structural(Some(reset_layout(state, confirmation))),
        Action::LoadLayout => structural(load_layout(state, ctx.load_saved())),
        Action::ReportError(message) => ephemeral(Some(with_error(state, message))),
        Action::DismissError => ephemeral(dismiss_error(state)),
    }
}

/// Append a widget of a registered type and place it identically in all breakpoints.
pub fn add_widget(
    state: &DashboardState,
    widget_type: &str,
    title: Option<String>,
    ctx: &mut dyn ActionContext,
) -> Result<DashboardState, DashboardError> {
    let widget_type = WidgetType::lookup(widget_type)?;
    let info = widget_type.info();

    let mut id = ctx.next_widget_id();
    let mut attempts = 1;
    while state.contains(&id) {
        if attempts == MAX_ID_ATTEMPTS {
            return Err(DashboardError::DuplicateWidgetId(id));
        }
        id = ctx.next_widget_id();
        attempts += 1;
    }

    let pos = next_position(&state.layouts, Breakpoint::Lg);
    let item = LayoutItem::new(
        id.clone(),
        pos.x,
        pos.y,
        info.default_size.w,
        info.default_size.h,
        info.min_w,
        info.min_h,
    )
    .normalized();

    let mut next = state.clone();
    next.widgets.push(Widget {
        id,
        widget_type,
        title: title.unwrap_or_else(|| info.display_name.to_string()),
        config: WidgetConfig::new(),
    });
    next.layouts.push_all(&item);
    Ok(next)
}

pub fn remove_widget(state: &DashboardState, id: &str) -> Option<DashboardState> {
    if !state.contains(id) {
        return None;
    }
    let mut next = state.clone();
    next.widgets.retain(|w| w.id != id);
    next.layouts.remove_all(id);
    Some(next)
}

pub fn update_widget(state: &DashboardState, id: &str, patch: WidgetPatch) -> Option<DashboardState> {
    if patch.is_empty() || !state.contains(id) {
        return None;
    }
    let mut next = state.clone();
    if let Some(widget) = next.widgets.iter_mut().find(|w| w.id == id) {
        widget.apply(patch);
    }
    Some(next)
}

/// Replace whole breakpoint arrays; breakpoints absent from `patch` are untouched.
pub fn update_layouts(state: &DashboardState, patch: LayoutsPatch) -> Option<DashboardState> {
    if patch.is_empty() {
        return None;
    }
    let mut next = state.clone();
    for (bp, items) in patch.into_entries() {
        next.replace_breakpoint(bp, items);
    }
    Some(next)
}

pub fn set_editing(state: &DashboardState, editing: bool) -> Option<DashboardState> {
    if state.is_editing == editing {
        return None;
    }
    let mut next = state.clone();
    next.is_editing = editing;
    Some(next)
}

pub fn reset_layout(state: &DashboardState, _confirmation: ResetConfirmation) -> DashboardState {
    DashboardState {
        widgets: default_widgets(),
        layouts: default_layouts(),
        is_editing: false,
        ..state.clone()
    }
}

/// Adopt a persisted snapshot. `None` leaves the state as it is.
pub fn load_layout(state: &DashboardState, saved: Option<SavedLayout>) -> Option<DashboardState> {
    let saved = saved?;
    let (widgets, layouts) = DashboardState::reconcile(saved.widgets, saved.layouts);
    if widgets == state.widgets && layouts == state.layouts {
        return None;
    }
    Some(DashboardState {
        widgets,
        layouts,
        ..state.clone()
    })
}

pub fn dismiss_error(state: &DashboardState) -> Option<DashboardState> {
    state.error.as_ref()?;
    Some(DashboardState {
        error: None,
        ..state.clone()
    })
}

fn with_error(state: &DashboardState, message: String) -> DashboardState {
    DashboardState {
        error: Some(message),
        ..state.clone()
    }
}
