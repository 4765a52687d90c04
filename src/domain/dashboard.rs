// Dashboard domain model
use crate::domain::breakpoint::Breakpoint;
use crate::domain::defaults::{default_layouts, default_widgets};
use crate::domain::error::InvariantViolation;
use crate::domain::layout::{LayoutItem, ResponsiveLayouts};
use crate::domain::position::next_position;
use crate::domain::widget::Widget;
use std::collections::{HashMap, HashSet};

/// The canonical dashboard state: widgets, their four layouts and UI flags.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub widgets: Vec<Widget>,
    pub layouts: ResponsiveLayouts,
    pub is_editing: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl DashboardState {
    pub fn new(widgets: Vec<Widget>, layouts: ResponsiveLayouts) -> Self {
        Self {
            widgets,
            layouts,
            is_editing: false,
            is_loading: false,
            error: None,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(default_widgets(), default_layouts())
    }

    pub fn widget(&self, id: &str) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.widget(id).is_some()
    }

    /// Check the cross-structure rules that every committed state must keep.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let mut ids = HashSet::with_capacity(self.widgets.len());
        for widget in &self.widgets {
            if !ids.insert(widget.id.as_str()) {
                return Err(InvariantViolation::DuplicateWidget(widget.id.clone()));
            }
        }

        for (bp, items) in self.layouts.iter() {
            let mut counts: HashMap<&str, usize> = HashMap::with_capacity(items.len());
            for item in items {
                if !ids.contains(item.widget_id.as_str()) {
                    return Err(InvariantViolation::OrphanItem {
                        id: item.widget_id.clone(),
                        breakpoint: bp.as_str(),
                    });
                }
                if !item.satisfies_constraints() {
                    return Err(InvariantViolation::Constraint {
                        id: item.widget_id.clone(),
                        breakpoint: bp.as_str(),
                    });
                }
                *counts.entry(item.widget_id.as_str()).or_default() += 1;
            }

            for widget in &self.widgets {
                let count = counts.get(widget.id.as_str()).copied().unwrap_or(0);
                if count != 1 {
                    return Err(InvariantViolation::ItemCount {
                        id: widget.id.clone(),
                        breakpoint: bp.as_str(),
                        count,
                    });
                }
            }
        }

        Ok(())
    }

    /// Repair externally supplied widgets/layouts so the invariants hold.
    ///
    /// Duplicate widgets keep their first occurrence. Each breakpoint keeps
    /// items for known widgets only, once each, with clamped sizes; widgets
    /// without an item get one from the position allocator.
    pub fn reconcile(widgets: Vec<Widget>, layouts: ResponsiveLayouts) -> (Vec<Widget>, ResponsiveLayouts) {
        let mut seen = HashSet::new();
        let widgets: Vec<Widget> = widgets
            .into_iter()
            .filter(|w| seen.insert(w.id.clone()))
            .collect();

        let mut repaired = ResponsiveLayouts::default();
        for bp in Breakpoint::ALL {
            let items = sanitize_items(&widgets, layouts.get(bp).to_vec(), &[]);
            *repaired.get_mut(bp) = items;
            fill_missing(&widgets, &mut repaired, bp, &[]);
        }

        (widgets, repaired)
    }

    /// Replace one breakpoint's array, keeping the invariants.
    ///
    /// Items for unknown widgets and repeated ids are dropped, sizes are
    /// clamped to the constraints of the item they replace, and widgets
    /// missing from `items` keep their previous placement.
    pub fn replace_breakpoint(&mut self, breakpoint: Breakpoint, items: Vec<LayoutItem>) {
        let previous = std::mem::take(self.layouts.get_mut(breakpoint));
        let items = sanitize_items(&self.widgets, items, &previous);
        *self.layouts.get_mut(breakpoint) = items;
        fill_missing(&self.widgets, &mut self.layouts, breakpoint, &previous);
    }
}

fn sanitize_items(widgets: &[Widget], items: Vec<LayoutItem>, previous: &[LayoutItem]) -> Vec<LayoutItem> {
    let known: HashSet<&str> = widgets.iter().map(|w| w.id.as_str()).collect();
    let mut placed = HashSet::new();
    let mut result = Vec::with_capacity(items.len());

    for item in items {
        if !known.contains(item.widget_id.as_str()) {
            tracing::warn!("Dropping layout item for unknown widget {}", item.widget_id);
            continue;
        }
        if !placed.insert(item.widget_id.clone()) {
            tracing::warn!("Dropping repeated layout item for widget {}", item.widget_id);
            continue;
        }
        let item = match previous.iter().find(|p| p.widget_id == item.widget_id) {
            Some(prev) => LayoutItem {
                min_w: prev.min_w,
                min_h: prev.min_h,
                max_w: prev.max_w,
                max_h: prev.max_h,
                ..item
            },
            None => item,
        };
        result.push(item.within_grid());
    }

    result
}

fn fill_missing(widgets: &[Widget], layouts: &mut ResponsiveLayouts, breakpoint: Breakpoint, previous: &[LayoutItem]) {
    for widget in widgets {
        if layouts.find(breakpoint, &widget.id).is_some() {
            continue;
        }
        let item = match previous.iter().find(|p| p.widget_id == widget.id) {
            Some(prev) => prev.clone().normalized(),
            None => {
                let info = widget.widget_type.info();
                let pos = next_position(layouts, breakpoint);
                LayoutItem::new(
                    widget.id.clone(),
                    pos.x,
                    pos.y,
                    info.default_size.w,
                    info.default_size.h,
                    info.min_w,
                    info.min_h,
                )
                .normalized()
            }
        };
        layouts.get_mut(breakpoint).push(item);
    }
}
