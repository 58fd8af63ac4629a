//! Collection Gateway
//!
//! Request-dispatch layer for a hierarchy of historical collection content
//! served under friendly URLs.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────────┐
//!                    │                    GATEWAY                        │
//!                    │                                                   │
//!  Client Request    │  ┌────────┐   ┌──────────┐   ┌────────────────┐  │
//!  ──────────────────┼─▶│  http  │──▶│  client  │──▶│    dispatch    │  │
//!                    │  │ server │   │classifier│   │ (root rewrite) │  │
//!                    │  └───┬────┘   └──────────┘   └───────┬────────┘  │
//!                    │      │                               │           │
//!                    │      │        ┌──────────┐           ▼           │
//!                    │      └───────▶│ session  │   ┌────────────────┐  │
//!                    │               │continuity│   │    routing     │  │
//!                    │               └──────────┘   │ (template set) │  │
//!                    │                              └───────┬────────┘  │
//!  Client Response   │  ┌──────────────────┐                │           │
//!  ◀─────────────────┼──│ handler registry │◀───────────────┘           │
//!                    │  └──────────────────┘                            │
//!                    │                                                   │
//!                    │  Cross-cutting: config, observability, lifecycle  │
//!                    └──────────────────────────────────────────────────┘
//! ```
//!
//! The core decisions (classification, support evaluation, dispatch,
//! resolution, renewal) are pure synchronous functions of request-local
//! data plus the clock; the shared structures are built once at startup
//! and never mutated.

// Core subsystems
pub mod client;
pub mod config;
pub mod dispatch;
pub mod http;
pub mod routing;
pub mod session;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::schema::GatewayConfig;
pub use http::server::GatewayServer;
pub use lifecycle::Shutdown;
