//! Log categories.
//!
//! # Responsibilities
//! - Define the contract a category type must satisfy
//! - Provide a stock category set for applications without their own
//!
//! # Design Decisions
//! - Categories are cache keys: `Eq + Hash`, stable for the lifetime of a system
//! - `Default::default()` is the designated default category; entries written
//!   under it are rendered without a category prefix

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// A closed set of log categories.
pub trait Category: Clone + Eq + Hash + Default + Send + Sync + 'static {
    /// The category's name as stored on log entries.
    fn name(&self) -> &str;
}

/// Stock categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StandardCategory {
    #[default]
    General,
    Network,
    Storage,
    Interface,
}

impl StandardCategory {
    /// All members, in declaration order.
    pub const ALL: [StandardCategory; 4] = [
        StandardCategory::General,
        StandardCategory::Network,
        StandardCategory::Storage,
        StandardCategory::Interface,
    ];
}

impl Category for StandardCategory {
    fn name(&self) -> &str {
        match self {
            StandardCategory::General => "general",
            StandardCategory::Network => "network",
            StandardCategory::Storage => "storage",
            StandardCategory::Interface => "interface",
        }
    }
}

impl fmt::Display for StandardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StandardCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown category '{}'", s))
    }
}
