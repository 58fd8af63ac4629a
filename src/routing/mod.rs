//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming path + ClientProfile
//!     → registry.rs (ordered scan over registered templates)
//!     → template.rs (structural match + predicate gate)
//!     → Return: Resolution { handler, params } or None (NoMatch)
//!
//! Template Registration (at startup):
//!     infrastructure routes
//!     → entry-point routes (dispatch rewrite targets)
//!     → crawler-gated friendly routes (all six depths)
//!     → ungated friendly routes (all six depths)
//!     → Freeze as immutable RouteRegistry
//! ```
//!
//! # Design Decisions
//! - Templates compiled at startup, immutable at runtime
//! - No regex in the hot path (segment comparison only)
//! - First match wins in registration order, NOT longest match; callers
//!   register constrained templates before unconstrained siblings
//! - Explicit NoMatch rather than silent default

pub mod registry;
pub mod template;

pub use registry::{default_routes, Resolution, RouteRegistry};
pub use template::{HandlerRef, RouteTemplate, Segment};
