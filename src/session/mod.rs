//! Session continuity subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound session cookie (only when a token event occurs)
//!     → token.rs (decode wire form into SessionToken)
//!     → continuity.rs (sliding renewal decision)
//!     → Renewed token re-encoded + reissue flag, or Unchanged
//! ```
//!
//! # Design Decisions
//! - Tokens are owned by the authentication subsystem; this layer only
//!   reads them and conditionally produces a replacement
//! - Renewal is a pure function of (token, now); no shared state
//! - An expired token is never extended — re-authentication is the
//!   caller's concern

pub mod continuity;
pub mod token;

pub use continuity::{maybe_renew, Renewal};
pub use token::{Claim, SessionToken};
