//! HTTP serving layer.
//!
//! # Data Flow
//! ```text
//! Incoming request
//!     → request.rs (capability headers → RequestMeta, session cookie)
//!     → session continuity (only when a token event occurs)
//!     → client classification
//!     → root dispatch (root path only)
//!     → route resolution
//!     → handler registry
//! ```

pub mod request;
pub mod server;

pub use server::GatewayServer;
