// Layout domain model - Per-breakpoint grid placement
use crate::domain::breakpoint::{Breakpoint, GRID_COLUMNS, MAX_GRID_ROWS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

fn default_min() -> u32 {
    1
}

/// Position and size of one widget within one breakpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutItem {
    #[serde(rename = "i")]
    pub widget_id: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    #[serde(default = "default_min")]
    pub min_w: u32,
    #[serde(default = "default_min")]
    pub min_h: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_w: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_h: Option<u32>,
}

impl LayoutItem {
    pub fn new(widget_id: impl Into<String>, x: u32, y: u32, w: u32, h: u32, min_w: u32, min_h: u32) -> Self {
        Self {
            widget_id: widget_id.into(),
            x,
            y,
            w,
            h,
            min_w,
            min_h,
            max_w: None,
            max_h: None,
        }
    }

    /// First grid row below this item.
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.h)
    }

    pub fn satisfies_constraints(&self) -> bool {
        self.min_w >= 1
            && self.min_w <= GRID_COLUMNS
            && self.w >= self.min_w
            && self.w <= GRID_COLUMNS
            && self.h >= self.min_h
    }

    /// Clamp size into `[min, max]` and keep the item inside the grid columns.
    ///
    /// Minimums win over maximums when the two disagree. Rows are left alone
    /// so the allocator can keep stacking below deep items.
    pub fn normalized(mut self) -> Self {
        self.min_w = self.min_w.clamp(1, GRID_COLUMNS);
        self.min_h = self.min_h.clamp(1, MAX_GRID_ROWS);

        let max_w = self.max_w.unwrap_or(GRID_COLUMNS).min(GRID_COLUMNS);
        self.w = self.w.min(max_w).max(self.min_w);

        let max_h = self.max_h.unwrap_or(MAX_GRID_ROWS).min(MAX_GRID_ROWS);
        self.h = self.h.min(max_h).max(self.min_h);

        self.x = self.x.min(GRID_COLUMNS - self.w);
        self
    }

    /// [`normalized`](Self::normalized), with the row pulled up to `MAX_GRID_ROWS`.
    /// For items coming from outside the store.
    pub fn within_grid(mut self) -> Self {
        self.y = self.y.min(MAX_GRID_ROWS);
        self.normalized()
    }
}

/// One ordered layout array per breakpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsiveLayouts {
    pub lg: Vec<LayoutItem>,
    pub md: Vec<LayoutItem>,
    pub sm: Vec<LayoutItem>,
    pub xs: Vec<LayoutItem>,
}

impl ResponsiveLayouts {
    pub fn get(&self, breakpoint: Breakpoint) -> &[LayoutItem] {
        match breakpoint {
            Breakpoint::Lg => &self.lg,
            Breakpoint::Md => &self.md,
            Breakpoint::Sm => &self.sm,
            Breakpoint::Xs => &self.xs,
        }
    }

    pub fn get_mut(&mut self, breakpoint: Breakpoint) -> &mut Vec<LayoutItem> {
        match breakpoint {
            Breakpoint::Lg => &mut self.lg,
            Breakpoint::Md => &mut self.md,
            Breakpoint::Sm => &mut self.sm,
            Breakpoint::Xs => &mut self.xs,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Breakpoint, &[LayoutItem])> {
        Breakpoint::ALL.into_iter().map(move |bp| (bp, self.get(bp)))
    }

    pub fn find(&self, breakpoint: Breakpoint, widget_id: &str) -> Option<&LayoutItem> {
        self.get(breakpoint).iter().find(|item| item.widget_id == widget_id)
    }

    /// Append `item` to every breakpoint.
    pub fn push_all(&mut self, item: &LayoutItem) {
        for bp in Breakpoint::ALL {
            self.get_mut(bp).push(item.clone());
        }
    }

    /// Drop `widget_id` from every breakpoint. Returns whether anything was removed.
    pub fn remove_all(&mut self, widget_id: &str) -> bool {
        let mut removed = false;
        for bp in Breakpoint::ALL {
            let items = self.get_mut(bp);
            let before = items.len();
            items.retain(|item| item.widget_id != widget_id);
            removed |= items.len() != before;
        }
        removed
    }
}

/// Whole-array replacements keyed by breakpoint. Absent breakpoints are untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutsPatch(BTreeMap<Breakpoint, Vec<LayoutItem>>);

impl LayoutsPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(breakpoint: Breakpoint, items: Vec<LayoutItem>) -> Self {
        Self::new().with(breakpoint, items)
    }

    pub fn with(mut self, breakpoint: Breakpoint, items: Vec<LayoutItem>) -> Self {
        self.0.insert(breakpoint, items);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn breakpoints(&self) -> impl Iterator<Item = Breakpoint> + '_ {
        self.0.keys().copied()
    }

    pub fn into_entries(self) -> impl Iterator<Item = (Breakpoint, Vec<LayoutItem>)> {
        self.0.into_iter()
    }
}
