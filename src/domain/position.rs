// Position allocator - Where a newly added widget lands
use crate::domain::breakpoint::Breakpoint;
use crate::domain::layout::ResponsiveLayouts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    pub x: u32,
    pub y: u32,
}

/// Flush-left, directly below the lowest bottom edge of `breakpoint`.
///
/// Only appended items are guaranteed not to overlap; layouts produced by
/// interactive drag are not re-validated here.
pub fn next_position(layouts: &ResponsiveLayouts, breakpoint: Breakpoint) -> GridPosition {
    let y = layouts
        .get(breakpoint)
        .iter()
        .map(|item| item.bottom())
        .max()
        .unwrap_or(0);
    GridPosition { x: 0, y }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::layout::LayoutItem;

    #[test]
    fn test_empty_layout_starts_at_origin() {
        let layouts = ResponsiveLayouts::default();
        assert_eq!(next_position(&layouts, Breakpoint::Lg), GridPosition { x: 0, y: 0 });
    }

    #[test]
    fn test_lands_below_lowest_bottom_edge() {
        let mut layouts = ResponsiveLayouts::default();
        layouts.lg.push(LayoutItem::new("a", 0, 0, 6, 4, 1, 1));
        layouts.lg.push(LayoutItem::new("b", 6, 0, 6, 7, 1, 1));
        layouts.lg.push(LayoutItem::new("c", 0, 4, 3, 2, 1, 1));

        assert_eq!(next_position(&layouts, Breakpoint::Lg), GridPosition { x: 0, y: 7 });
    }

    #[test]
    fn test_only_reads_requested_breakpoint() {
        let mut layouts = ResponsiveLayouts::default();
        layouts.xs.push(LayoutItem::new("a", 0, 10, 1, 4, 1, 1));

        assert_eq!(next_position(&layouts, Breakpoint::Lg), GridPosition { x: 0, y: 0 });
        assert_eq!(next_position(&layouts, Breakpoint::Xs), GridPosition { x: 0, y: 14 });
    }
}
