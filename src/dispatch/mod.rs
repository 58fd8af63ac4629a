//! Client-adaptive root dispatch.
//!
//! # Data Flow
//! ```text
//! Request path + ClientProfile
//!     → rewrite.rs (root-only state machine)
//!     → EffectiveTarget (crawler page | rich client | static fallback)
//!     → Flows into normal route resolution
//! ```
//!
//! # Design Decisions
//! - Only the application root is rewritten; every other path passes
//!   through untouched
//! - Internal rewrite, never a redirect: the client-visible URL is unchanged
//! - Pure function of the profile and the configured targets; same inputs
//!   always produce the same target

pub mod rewrite;

pub use rewrite::{dispatch, EffectiveTarget};
