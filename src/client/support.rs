//! Browser support matrix evaluation.
//!
//! # Responsibilities
//! - Hold the family → minimum-major-version table
//! - Answer whether a classified client meets its family's minimum
//!
//! # Design Decisions
//! - Fail-open: families absent from the table are supported, and so are
//!   clients whose version did not parse
//! - Boundary is inclusive (`>=`)
//! - The table is configuration, loaded once and never mutated

use std::collections::BTreeMap;

use crate::client::profile::ClientProfile;

/// Mapping from browser family to minimum supported major version.
///
/// Immutable after construction; safe for unsynchronized concurrent reads.
#[derive(Debug, Clone)]
pub struct SupportMatrix {
    minimums: BTreeMap<String, f64>,
}

impl SupportMatrix {
    /// Build a matrix from a configured table.
    pub fn new(minimums: BTreeMap<String, f64>) -> Self {
        Self { minimums }
    }

    /// True when the profile's family meets its minimum version.
    ///
    /// Absent family or unparsed version returns true: graceful degradation
    /// is handled by the rich client, not by blocking entry.
    pub fn is_supported(&self, profile: &ClientProfile) -> bool {
        match self.minimums.get(&profile.browser_family) {
            Some(minimum) => match profile.browser_version {
                Some(version) => version >= *minimum,
                None => true,
            },
            None => true,
        }
    }
}

impl Default for SupportMatrix {
    fn default() -> Self {
        Self::new(default_minimums())
    }
}

/// Default minimum versions. Extend via configuration, not code.
pub fn default_minimums() -> BTreeMap<String, f64> {
    BTreeMap::from([
        ("IE".to_string(), 9.0),
        ("Firefox".to_string(), 7.0),
        ("Chrome".to_string(), 14.0),
        ("Safari".to_string(), 5.0),
        ("Opera".to_string(), 10.0),
    ])
}
