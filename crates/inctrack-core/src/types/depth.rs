//! Recursion depth budget for include traversal.

use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// Default number of rounds when nothing else is configured.
pub const DEFAULT_DEPTH: u32 = 5;

/// How many BFS rounds a traversal may run.
///
/// `Unbounded` still terminates: every name is scheduled at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Depth {
    Bounded(NonZeroU32),
    Unbounded,
}

impl Depth {
    /// Interpret a user-supplied depth: positive values bound the traversal,
    /// zero and negatives mean "no limit".
    pub fn from_signed(value: i64) -> Self {
        if value <= 0 {
            return Depth::Unbounded;
        }
        let clamped = u32::try_from(value).unwrap_or(u32::MAX);
        NonZeroU32::new(clamped).map_or(Depth::Unbounded, Depth::Bounded)
    }

    /// Remaining round budget, `None` when unbounded.
    pub fn rounds(&self) -> Option<u32> {
        match self {
            Depth::Bounded(n) => Some(n.get()),
            Depth::Unbounded => None,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, Depth::Unbounded)
    }
}

impl Default for Depth {
    fn default() -> Self {
        Depth::from_signed(i64::from(DEFAULT_DEPTH))
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Depth::Bounded(n) => write!(f, "{n}"),
            Depth::Unbounded => f.write_str("unbounded"),
        }
    }
}
