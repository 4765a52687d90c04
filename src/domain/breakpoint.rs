// Breakpoint domain model - Viewport width buckets
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of columns in the dashboard grid.
pub const GRID_COLUMNS: u32 = 12;

/// Deepest row a stored item may start at, and the tallest it may be.
pub const MAX_GRID_ROWS: u32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Lg,
    Md,
    Sm,
    Xs,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 4] = [Breakpoint::Lg, Breakpoint::Md, Breakpoint::Sm, Breakpoint::Xs];

    /// Map a viewport width in pixels to its bucket.
    ///
    /// Callers pass the width observed at the moment of use; nothing is cached.
    pub fn resolve(width_px: u32) -> Self {
        match width_px {
            w if w >= 1200 => Breakpoint::Lg,
            w if w >= 996 => Breakpoint::Md,
            w if w >= 768 => Breakpoint::Sm,
            _ => Breakpoint::Xs,
        }
    }

    /// Smallest width that still resolves to this breakpoint.
    pub fn min_width(self) -> u32 {
        match self {
            Breakpoint::Lg => 1200,
            Breakpoint::Md => 996,
            Breakpoint::Sm => 768,
            Breakpoint::Xs => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Breakpoint::Lg => "lg",
            Breakpoint::Md => "md",
            Breakpoint::Sm => "sm",
            Breakpoint::Xs => "xs",
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Breakpoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lg" => Ok(Breakpoint::Lg),
            "md" => Ok(Breakpoint::Md),
            "sm" => Ok(Breakpoint::Sm),
            "xs" => Ok(Breakpoint::Xs),
            other => Err(format!("unknown breakpoint: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(Breakpoint::resolve(1024), Breakpoint::Md);
        assert_eq!(Breakpoint::resolve(1280), Breakpoint::Lg);
        assert_eq!(Breakpoint::resolve(500), Breakpoint::Xs);
        assert_eq!(Breakpoint::resolve(768), Breakpoint::Sm);
    }

    #[test]
    fn test_resolve_boundaries() {
        assert_eq!(Breakpoint::resolve(1199), Breakpoint::Md);
        assert_eq!(Breakpoint::resolve(1200), Breakpoint::Lg);
        assert_eq!(Breakpoint::resolve(995), Breakpoint::Sm);
        assert_eq!(Breakpoint::resolve(996), Breakpoint::Md);
        assert_eq!(Breakpoint::resolve(767), Breakpoint::Xs);
        assert_eq!(Breakpoint::resolve(0), Breakpoint::Xs);

        for bp in Breakpoint::ALL {
            assert_eq!(Breakpoint::resolve(bp.min_width()), bp);
        }
    }

    #[test]
    fn test_parse_round_trips_labels() {
        for bp in Breakpoint::ALL {
            assert_eq!(bp.as_str().parse::<Breakpoint>(), Ok(bp));
        }
        assert!("xl".parse::<Breakpoint>().is_err());
    }
}
