// Layout store - The single mutation channel for dashboard state
use crate::application::layout_actions::{reduce, Action, ActionContext, ConfirmPrompt, Reduction, ResetConfirmation};
use crate::application::layout_repository::{LayoutRepository, SavedLayout};
use crate::domain::dashboard::DashboardState;
use crate::domain::layout::LayoutsPatch;
use crate::domain::widget::{generate_widget_id, WidgetPatch};
use std::fmt;
use std::sync::Arc;

/// Notification emitted after every committed mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreChange {
    pub action: &'static str,
    /// Widgets or layouts changed (and a save was attempted).
    pub structural: bool,
    pub editing_changed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StoreChange, &DashboardState)>;

/// Owns the dashboard state. All changes go through [`LayoutStore::dispatch`].
///
/// Structural changes are saved synchronously before listeners run, so a
/// reload right after any mutation sees the committed state. A failed save
/// is logged and never rolls the state back.
pub struct LayoutStore {
    state: DashboardState,
    repository: Arc<dyn LayoutRepository>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl fmt::Debug for LayoutStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutStore")
            .field("state", &self.state)
            .field("listener_count", &self.listeners.len())
            .finish()
    }
}

struct StoreContext<'a> {
    repository: &'a dyn LayoutRepository,
}

impl ActionContext for StoreContext<'_> {
    fn next_widget_id(&mut self) -> String {
        generate_widget_id()
    }

    fn load_saved(&mut self) -> Option<SavedLayout> {
        self.repository.load()
    }
}

impl LayoutStore {
    /// Build the store from the saved snapshot, or the compiled defaults when there is none.
    pub fn new(repository: Arc<dyn LayoutRepository>) -> Self {
        let state = match repository.load() {
            Some(saved) => {
                let (widgets, layouts) = DashboardState::reconcile(saved.widgets, saved.layouts);
                tracing::info!("Restored dashboard with {} widgets", widgets.len());
                DashboardState::new(widgets, layouts)
            }
            None => {
                tracing::info!("No saved dashboard layout, using defaults");
                DashboardState::with_defaults()
            }
        };

        Self {
            state,
            repository,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Apply `action`. Returns the emitted change, or `None` for a no-op.
    pub fn dispatch(&mut self, action: Action) -> Option<StoreChange> {
        let name = action.name();
        let mut ctx = StoreContext {
            repository: self.repository.as_ref(),
        };

        let (next, persist) = match reduce(&self.state, action, &mut ctx) {
            Reduction::Unchanged => {
                tracing::debug!("{} left the dashboard unchanged", name);
                return None;
            }
            Reduction::Updated { state, persist } => (state, persist),
        };

        let change = StoreChange {
            action: name,
            structural: persist,
            editing_changed: next.is_editing != self.state.is_editing,
        };
        self.state = next;
        debug_assert_eq!(self.state.check_invariants(), Ok(()));
        tracing::debug!(
            "{} committed: {} widgets, editing={}",
            name,
            self.state.widgets.len(),
            self.state.is_editing
        );

        if persist {
            self.persist();
        }
        self.notify(&change);
        Some(change)
    }

    pub fn add_widget(&mut self, widget_type: &str, title: Option<String>) -> Option<StoreChange> {
        self.dispatch(Action::add_widget(widget_type, title))
    }

    pub fn remove_widget(&mut self, id: &str) -> Option<StoreChange> {
        self.dispatch(Action::remove_widget(id))
    }

    pub fn update_widget(&mut self, id: &str, patch: WidgetPatch) -> Option<StoreChange> {
        self.dispatch(Action::update_widget(id, patch))
    }

    pub fn update_layouts(&mut self, patch: LayoutsPatch) -> Option<StoreChange> {
        self.dispatch(Action::UpdateLayouts(patch))
    }

    pub fn set_editing(&mut self, editing: bool) -> Option<StoreChange> {
        self.dispatch(Action::SetEditing(editing))
    }

    /// Ask `prompt` first; declining leaves the store untouched.
    pub fn reset_layout(&mut self, prompt: &dyn ConfirmPrompt) -> Option<StoreChange> {
        match ResetConfirmation::request(prompt) {
            Some(confirmation) => self.dispatch(Action::ResetLayout(confirmation)),
            None => {
                tracing::debug!("resetLayout declined");
                None
            }
        }
    }

    pub fn load_layout(&mut self) -> Option<StoreChange> {
        self.dispatch(Action::LoadLayout)
    }

    pub fn dismiss_error(&mut self) -> Option<StoreChange> {
        self.dispatch(Action::DismissError)
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&StoreChange, &DashboardState) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns whether the subscription existed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn persist(&self) {
        if let Err(e) = self.repository.save(&self.state.widgets, &self.state.layouts) {
            tracing::warn!("Failed to save dashboard layout: {}", e);
        }
    }

    fn notify(&mut self, change: &StoreChange) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(change, &self.state);
        }
    }
}
