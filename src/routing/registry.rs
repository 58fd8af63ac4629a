//! Route lookup and the default route table.
//!
//! # Responsibilities
//! - Store registered templates in registration order
//! - Look up the first structurally-matching template whose predicate passes
//! - Return matched handler + extracted parameters, or explicit NoMatch
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) ordered scan; the table is small and fixed
//! - First match wins by registration order — crawler-gated friendly routes
//!   are registered before their ungated siblings, which is what realizes
//!   the crawler/browser split
//! - NoMatch is a normal outcome (caller falls through to not-found), not
//!   an error

use std::collections::BTreeMap;

use crate::client::profile::ClientProfile;
use crate::config::schema::DispatchConfig;
use crate::routing::template::{crawler_only, HandlerRef, RouteTemplate};

/// Handler identifiers bound by the default route table and resolved by the
/// handler registry in the HTTP layer.
pub mod handler {
    use super::HandlerRef;

    /// Account actions (`account/{action}`).
    pub const ACCOUNT: HandlerRef = HandlerRef("account");
    /// Service endpoint activation (`api`).
    pub const SERVICE: HandlerRef = HandlerRef("service");
    /// Sitemap document (`sitemap.xml`).
    pub const SITEMAP: HandlerRef = HandlerRef("sitemap");
    /// Indexable rendering entry point for crawlers.
    pub const CRAWLER_RENDERING: HandlerRef = HandlerRef("crawler-rendering");
    /// Primary rich-client entry point.
    pub const RICH_CLIENT: HandlerRef = HandlerRef("rich-client");
    /// Degraded static fallback for unsupported browsers.
    pub const FALLBACK: HandlerRef = HandlerRef("fallback");
}

/// Outcome of a successful route resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub handler: HandlerRef,
    /// Placeholder bindings, keyed by placeholder name.
    pub params: BTreeMap<String, String>,
}

/// Ordered, immutable set of route templates.
#[derive(Debug, Default)]
pub struct RouteRegistry {
    templates: Vec<RouteTemplate>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a template. Registration order is resolution order.
    pub fn register(&mut self, template: RouteTemplate) {
        self.templates.push(template);
    }

    /// Resolve a path for a classified client. Scans templates in
    /// registration order; the first structural match whose predicate
    /// passes wins. None means no template matched (NoMatch).
    pub fn resolve(&self, path: &str, profile: &ClientProfile) -> Option<Resolution> {
        for template in &self.templates {
            let Some(params) = template.match_path(path) else {
                continue;
            };
            if !template.accepts(profile) {
                continue;
            }
            return Some(Resolution {
                handler: template.handler(),
                params,
            });
        }
        None
    }

    /// Number of registered templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// The six friendly-URL shapes, shallowest first. Each is registered twice:
/// crawler-gated, then ungated.
const FRIENDLY_PATTERNS: [&str; 6] = [
    "{supercollection}",
    "{supercollection}/{collection}",
    "{supercollection}/{collection}/{reference}",
    "{supercollection}/{collection}/{timelineTitle}/{reference}",
    "{supercollection}/{collection}/{timelineTitle}/{exhibitTitle}/{reference}",
    "{supercollection}/{collection}/{timelineTitle}/{exhibitTitle}/{contentItemTitle}/{reference}",
];

/// Build the default route table.
///
/// Order matters and is load-bearing: infrastructure routes, then the
/// dispatch rewrite targets, then crawler-gated friendly routes, then their
/// ungated siblings. Do not reorder.
pub fn default_routes(dispatch: &DispatchConfig) -> RouteRegistry {
    let mut registry = RouteRegistry::new();

    registry.register(RouteTemplate::new("account/{action}", handler::ACCOUNT));
    registry.register(RouteTemplate::new("api", handler::SERVICE));
    registry.register(RouteTemplate::new("sitemap.xml", handler::SITEMAP));

    // Entry points the root dispatcher rewrites to.
    registry.register(RouteTemplate::new(
        &dispatch.crawler_target,
        handler::CRAWLER_RENDERING,
    ));
    registry.register(RouteTemplate::new(
        &dispatch.primary_target,
        handler::RICH_CLIENT,
    ));
    registry.register(RouteTemplate::new(
        &dispatch.fallback_target,
        handler::FALLBACK,
    ));

    for pattern in FRIENDLY_PATTERNS {
        registry.register(
            RouteTemplate::new(pattern, handler::CRAWLER_RENDERING).with_predicate(crawler_only),
        );
    }
    for pattern in FRIENDLY_PATTERNS {
        registry.register(RouteTemplate::new(pattern, handler::RICH_CLIENT));
    }

    registry
}
