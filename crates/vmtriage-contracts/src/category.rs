//! Scenario categories.
//!
//! A category is the only input the triage classifier looks at. The set is
//! fixed; parsing a label never fails and maps anything unrecognized to
//! [`Category::Unknown`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The fixed set of scenario categories a transcript template can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Emergency,
    Script,
    Admin,
    Unknown,
    Results,
    Complaint,
}

impl Category {
    /// Every category, in template declaration order.
    pub const ALL: [Category; 6] = [
        Category::Emergency,
        Category::Script,
        Category::Admin,
        Category::Unknown,
        Category::Results,
        Category::Complaint,
    ];

    /// The lowercase label used in templates and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Emergency => "emergency",
            Category::Script => "script",
            Category::Admin => "admin",
            Category::Unknown => "unknown",
            Category::Results => "results",
            Category::Complaint => "complaint",
        }
    }

    /// Parse a label, falling back to `Unknown` for anything unrecognized.
    ///
    /// Matching ignores surrounding whitespace and ASCII case.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(label))
            .unwrap_or(Category::Unknown)
    }
}

impl FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
