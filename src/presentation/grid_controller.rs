// Grid controller adapter - Bridges the interactive drag/resize grid and the store
use crate::application::layout_actions::{Action, ConfirmPrompt, ResetConfirmation};
use crate::application::layout_store::{LayoutStore, StoreChange, SubscriptionId};
use crate::domain::breakpoint::{Breakpoint, GRID_COLUMNS, MAX_GRID_ROWS};
use crate::domain::dashboard::DashboardState;
use crate::domain::error::DashboardError;
use crate::domain::layout::{LayoutItem, LayoutsPatch};
use serde::Deserialize;
use std::fmt;

/// Outbound control surface of the external grid.
pub trait GridController {
    /// `true` allows drag, resize and remove gestures; `false` renders a static grid.
    fn set_interactive(&mut self, enabled: bool);
}

/// An item as reported by the grid controller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawGridItem {
    pub id: String,
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub h: i64,
}

impl RawGridItem {
    pub fn new(id: impl Into<String>, x: i64, y: i64, w: i64, h: i64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            w,
            h,
        }
    }

    /// Canonical form. Minimums are placeholders; the store keeps the stored item's constraints.
    pub fn to_layout_item(&self) -> LayoutItem {
        let clamp = |v: i64, floor: u32, ceil: u32| v.clamp(i64::from(floor), i64::from(ceil)) as u32;
        LayoutItem::new(
            self.id.clone(),
            clamp(self.x, 0, GRID_COLUMNS - 1),
            clamp(self.y, 0, MAX_GRID_ROWS),
            clamp(self.w, 1, GRID_COLUMNS),
            clamp(self.h, 1, MAX_GRID_ROWS),
            1,
            1,
        )
    }
}

/// Owns the store on behalf of the grid UI and mirrors edit mode onto the controller.
///
/// The controller may be attached after construction; until then edit-mode
/// changes are only recorded in the state.
pub struct GridControllerAdapter {
    store: LayoutStore,
    controller: Option<Box<dyn GridController>>,
}

impl fmt::Debug for GridControllerAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridControllerAdapter")
            .field("store", &self.store)
            .field("attached", &self.controller.is_some())
            .finish()
    }
}

impl GridControllerAdapter {
    pub fn new(store: LayoutStore) -> Self {
        Self {
            store,
            controller: None,
        }
    }

    pub fn store(&self) -> &LayoutStore {
        &self.store
    }

    pub fn state(&self) -> &DashboardState {
        self.store.state()
    }

    pub fn is_attached(&self) -> bool {
        self.controller.is_some()
    }

    /// Attach a ready controller and push the current interactivity to it.
    pub fn attach(&mut self, mut controller: Box<dyn GridController>) {
        controller.set_interactive(self.store.state().is_editing);
        self.controller = Some(controller);
        tracing::debug!("Grid controller attached");
    }

    /// Construct the controller with `init`; a failure is shown as the dashboard error.
    pub fn attach_with<F, E>(&mut self, init: F) -> bool
    where
        F: FnOnce() -> Result<Box<dyn GridController>, E>,
        E: fmt::Display,
    {
        match init() {
            Ok(controller) => {
                self.attach(controller);
                true
            }
            Err(e) => {
                let err = DashboardError::GridControllerUnavailable(e.to_string());
                tracing::error!("{}", err);
                self.store.dispatch(Action::ReportError(err.to_string()));
                false
            }
        }
    }

    pub fn detach(&mut self) -> Option<Box<dyn GridController>> {
        self.controller.take()
    }

    pub fn dispatch(&mut self, action: Action) -> Option<StoreChange> {
        let change = self.store.dispatch(action)?;
        if change.editing_changed {
            let editing = self.store.state().is_editing;
            if let Some(controller) = self.controller.as_mut() {
                controller.set_interactive(editing);
            }
        }
        Some(change)
    }

    pub fn set_editing(&mut self, editing: bool) -> Option<StoreChange> {
        self.dispatch(Action::SetEditing(editing))
    }

    pub fn toggle_editing(&mut self) -> Option<StoreChange> {
        let editing = !self.store.state().is_editing;
        self.set_editing(editing)
    }

    pub fn add_widget(&mut self, widget_type: &str, title: Option<String>) -> Option<StoreChange> {
        self.dispatch(Action::add_widget(widget_type, title))
    }

    /// Ask `prompt` first; declining leaves both the store and the controller untouched.
    pub fn reset_layout(&mut self, prompt: &dyn ConfirmPrompt) -> Option<StoreChange> {
        let confirmation = ResetConfirmation::request(prompt)?;
        self.dispatch(Action::ResetLayout(confirmation))
    }

    /// The controller's authoritative layout for `breakpoint` after a drag or resize.
    ///
    /// The reported set replaces the stored array. An empty report is ignored.
    pub fn on_layout_changed(&mut self, breakpoint: Breakpoint, items: &[RawGridItem]) -> Option<StoreChange> {
        if items.is_empty() {
            return None;
        }
        let converted = items.iter().map(RawGridItem::to_layout_item).collect();
        self.dispatch(Action::UpdateLayouts(LayoutsPatch::single(breakpoint, converted)))
    }

    /// Like [`on_layout_changed`](Self::on_layout_changed), resolving the breakpoint from the current width.
    pub fn on_layout_changed_at_width(&mut self, width_px: u32, items: &[RawGridItem]) -> Option<StoreChange> {
        self.on_layout_changed(Breakpoint::resolve(width_px), items)
    }

    /// Items dragged off the grid. Returns how many widgets were removed.
    pub fn on_items_removed(&mut self, items: &[RawGridItem]) -> usize {
        items
            .iter()
            .filter(|item| self.dispatch(Action::remove_widget(item.id.as_str())).is_some())
            .count()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&StoreChange, &DashboardState) + 'static,
    {
        self.store.subscribe(listener)
    }

    pub fn into_store(self) -> LayoutStore {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::key_value::MemoryKeyValueStore;
    use crate::infrastructure::persistence::{LayoutPersistence, DEFAULT_STORAGE_KEY};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct RecordingController {
        calls: Rc<RefCell<Vec<bool>>>,
    }

    impl GridController for RecordingController {
        fn set_interactive(&mut self, enabled: bool) {
            self.calls.borrow_mut().push(enabled);
        }
    }

    fn adapter() -> GridControllerAdapter {
        let kv = Arc::new(MemoryKeyValueStore::new());
        let repo = Arc::new(LayoutPersistence::new(kv, DEFAULT_STORAGE_KEY));
        GridControllerAdapter::new(LayoutStore::new(repo))
    }

    fn attached() -> (GridControllerAdapter, Rc<RefCell<Vec<bool>>>) {
        let mut adapter = adapter();
        let controller = RecordingController::default();
        let calls = controller.calls.clone();
        adapter.attach(Box::new(controller));
        (adapter, calls)
    }

    #[test]
    fn test_attach_pushes_current_mode() {
        let mut adapter = adapter();
        adapter.set_editing(true);

        let controller = RecordingController::default();
        let calls = controller.calls.clone();
        adapter.attach(Box::new(controller));

        assert_eq!(*calls.borrow(), vec![true]);
    }

    #[test]
    fn test_editing_changes_are_mirrored() {
        let (mut adapter, calls) = attached();

        adapter.set_editing(true);
        adapter.set_editing(true);
        adapter.toggle_editing();
        adapter.add_widget("stats", None);

        assert_eq!(*calls.borrow(), vec![false, true, false]);
    }

    #[test]
    fn test_reset_disables_interactivity() {
        let (mut adapter, calls) = attached();
        adapter.set_editing(true);

        adapter.reset_layout(&|_: &str| false);
        assert!(adapter.state().is_editing);

        adapter.reset_layout(&|_: &str| true);
        assert!(!adapter.state().is_editing);
        assert_eq!(*calls.borrow(), vec![false, true, false]);
    }

    #[test]
    fn test_failed_controller_init_sets_error() {
        let mut adapter = adapter();
        let attached = adapter.attach_with(|| Err::<Box<dyn GridController>, _>("no host surface"));

        assert!(!attached);
        assert!(!adapter.is_attached());
        assert_eq!(
            adapter.state().error.as_deref(),
            Some("Failed to initialize grid layout: no host surface")
        );
    }

    #[test]
    fn test_layout_change_replaces_reported_breakpoint() {
        let (mut adapter, _) = attached();
        let before = adapter.state().layouts.clone();
        let reported: Vec<RawGridItem> = before
            .md
            .iter()
            .map(|item| RawGridItem::new(item.widget_id.clone(), item.x as i64, item.y as i64 + 1, item.w as i64, item.h as i64))
            .collect();

        adapter.on_layout_changed_at_width(1024, &reported).unwrap();

        let layouts = &adapter.state().layouts;
        assert!(layouts.md.iter().zip(&before.md).all(|(a, b)| a.y == b.y + 1 && a.min_w == b.min_w));
        assert_eq!(layouts.lg, before.lg);
        assert_eq!(layouts.sm, before.sm);
        assert_eq!(layouts.xs, before.xs);
    }

    #[test]
    fn test_layout_change_clamps_and_filters() {
        let (mut adapter, _) = attached();
        let reported = vec![
            RawGridItem::new("revenue-chart", -2, -1, 1, 1),
            RawGridItem::new("not-a-widget", 0, 0, 4, 4),
        ];

        adapter.on_layout_changed(Breakpoint::Lg, &reported).unwrap();

        let state = adapter.state();
        let chart = state.layouts.find(Breakpoint::Lg, "revenue-chart").unwrap();
        assert_eq!((chart.x, chart.y, chart.w, chart.h), (0, 0, 4, 3));
        assert!(state.layouts.find(Breakpoint::Lg, "not-a-widget").is_none());
        assert_eq!(state.check_invariants(), Ok(()));
    }

    #[test]
    fn test_far_off_grid_drag_still_stacks_new_widgets() {
        let (mut adapter, _) = attached();
        adapter
            .on_layout_changed(Breakpoint::Lg, &[RawGridItem::new("revenue", 40, i64::MAX, 3, i64::MAX)])
            .unwrap();

        let dragged = adapter.state().layouts.find(Breakpoint::Lg, "revenue").unwrap().clone();
        assert_eq!((dragged.x, dragged.y), (9, MAX_GRID_ROWS));

        adapter.add_widget("stats", None).unwrap();
        let state = adapter.state();
        let added = state.layouts.lg.last().unwrap();
        assert!(added.y >= dragged.bottom());
        assert_eq!(state.check_invariants(), Ok(()));
    }

    #[test]
    fn test_empty_layout_change_is_ignored() {
        let (mut adapter, _) = attached();
        assert_eq!(adapter.on_layout_changed(Breakpoint::Lg, &[]), None);
    }

    #[test]
    fn test_items_removed() {
        let (mut adapter, _) = attached();
        let removed = adapter.on_items_removed(&[
            RawGridItem::new("revenue", 0, 0, 3, 2),
            RawGridItem::new("users", 3, 0, 3, 2),
            RawGridItem::new("unknown", 0, 0, 1, 1),
        ]);

        assert_eq!(removed, 2);
        assert_eq!(adapter.state().widgets.len(), 8);
        assert_eq!(adapter.state().check_invariants(), Ok(()));
    }

    #[test]
    fn test_raw_item_from_json() {
        let items: Vec<RawGridItem> =
            serde_json::from_str(r#"[{"id":"revenue","x":1,"y":2,"w":3,"h":2}]"#).unwrap();
        assert_eq!(items[0], RawGridItem::new("revenue", 1, 2, 3, 2));
    }
}
