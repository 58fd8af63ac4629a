//! Client classification subsystem.
//!
//! # Data Flow
//! ```text
//! Request metadata (capability signals injected upstream)
//!     → profile.rs (classify into ClientProfile)
//!     → support.rs (evaluate against SupportMatrix)
//!     → Consumed by: route predicates, root dispatcher
//! ```
//!
//! # Design Decisions
//! - No user-agent parsing here; the platform's capability signals are
//!   consumed as-is
//! - Classification is total: malformed input degrades, never errors
//! - Unknown browsers are treated as supported (fail-open)

pub mod profile;
pub mod support;

pub use profile::{ClientProfile, RequestMeta};
pub use support::SupportMatrix;
