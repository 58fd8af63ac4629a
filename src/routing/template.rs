//! Route template matching logic.
//!
//! # Responsibilities
//! - Parse a template pattern into literal and placeholder segments
//! - Match paths structurally (exact segment count, case-sensitive literals)
//! - Bind placeholder values into extracted parameters
//! - Gate candidates on an optional client-profile predicate
//!
//! # Design Decisions
//! - Literal matching is case-sensitive
//! - Placeholders match any non-empty segment
//! - Segments are fixed at registration time and never mutated
//! - No regex to guarantee O(n) matching

use std::collections::BTreeMap;

use crate::client::profile::ClientProfile;

/// Opaque handler identifier, resolved by an external handler registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerRef(pub &'static str);

impl std::fmt::Display for HandlerRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Predicate over the classified client, evaluated after structural match.
pub type MatchPredicate = fn(&ClientProfile) -> bool;

/// One path segment of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the incoming segment exactly.
    Literal(String),
    /// Matches any non-empty segment; bound under this name.
    Placeholder(String),
}

/// A registered friendly-URL or infrastructure route shape.
#[derive(Debug, Clone)]
pub struct RouteTemplate {
    segments: Vec<Segment>,
    predicate: Option<MatchPredicate>,
    handler: HandlerRef,
}

impl RouteTemplate {
    /// Parse a pattern like `{supercollection}/{collection}` or
    /// `account/{action}`. Leading and trailing slashes are ignored.
    pub fn new(pattern: &str, handler: HandlerRef) -> Self {
        let segments = pattern
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| {
                if let Some(name) = s.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                    Segment::Placeholder(name.to_string())
                } else {
                    Segment::Literal(s.to_string())
                }
            })
            .collect();

        Self {
            segments,
            predicate: None,
            handler,
        }
    }

    /// Attach a match predicate, gating this template on the client profile.
    pub fn with_predicate(mut self, predicate: MatchPredicate) -> Self {
        self.predicate = Some(predicate);
        self
    }

    /// The handler this template is bound to.
    pub fn handler(&self) -> HandlerRef {
        self.handler
    }

    /// Number of path segments this template expects.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Structural match only: exact segment count, case-sensitive literals,
    /// non-empty placeholder values. Returns the bound parameters on match.
    /// The predicate is the registry's concern, not evaluated here.
    pub fn match_path(&self, path: &str) -> Option<BTreeMap<String, String>> {
        let parts: Vec<&str> = path
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = BTreeMap::new();
        for (segment, part) in self.segments.iter().zip(&parts) {
            match segment {
                Segment::Literal(literal) => {
                    if literal != part {
                        return None;
                    }
                }
                Segment::Placeholder(name) => {
                    params.insert(name.clone(), (*part).to_string());
                }
            }
        }

        Some(params)
    }

    /// Evaluate the predicate gate; templates without one always pass.
    pub fn accepts(&self, profile: &ClientProfile) -> bool {
        match self.predicate {
            Some(predicate) => predicate(profile),
            None => true,
        }
    }
}

/// The one predicate the route table ships: restricts a template to
/// crawler-classified clients.
pub fn crawler_only(profile: &ClientProfile) -> bool {
    profile.is_crawler
}
