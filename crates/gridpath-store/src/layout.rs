use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use gridpath_core::Grid;
use serde::{Deserialize, Serialize};

/// Identifier handed out by a store on save. Ids increase monotonically
/// within a store.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutId(pub u64);

impl fmt::Display for LayoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LayoutId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(LayoutId)
    }
}

/// What [`list`](crate::LayoutStore::list) reports for each layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSummary {
    pub id: LayoutId,
    pub name: String,
    /// Milliseconds since the Unix epoch.
    pub created_at: u64,
}

/// A saved layout with its grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub id: LayoutId,
    pub name: String,
    /// Milliseconds since the Unix epoch.
    pub created_at: u64,
    pub grid: Grid,
}

impl Layout {
    pub fn summary(&self) -> LayoutSummary {
        LayoutSummary {
            id: self.id,
            name: self.name.clone(),
            created_at: self.created_at,
        }
    }
}

/// Current wall-clock time in Unix milliseconds, 0 if the clock is before
/// the epoch.
pub(crate) fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_parses_and_displays() {
        let id: LayoutId = " 42 ".parse().unwrap();
        assert_eq!(id, LayoutId(42));
        assert_eq!(id.to_string(), "42");
        assert!("forty-two".parse::<LayoutId>().is_err());
    }

    #[test]
    fn layout_serializes_grid_as_codes() {
        let layout = Layout {
            id: LayoutId(3),
            name: "corridor".into(),
            created_at: 1_700_000_000_000,
            grid: Grid::parse("S#E").unwrap(),
        };
        let json = serde_json::to_value(&layout).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["grid"], serde_json::json!([[2, 1, 3]]));
        assert_eq!(layout.summary().name, "corridor");
    }
}
