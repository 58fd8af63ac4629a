//! Sliding session renewal.
//!
//! # Responsibilities
//! - Decide, for an inbound token event, whether to issue a replacement
//!   token with a slid expiration
//! - Signal the caller to reissue the transport-level credential
//!
//! # Design Decisions
//! - Renew only while the token is still valid; sliding from "now" rather
//!   than from the original issuance time
//! - An expired token returns Unchanged, never an error; forcing
//!   re-authentication is the caller's concern
//! - Pure function of (token, now, window); safe under any concurrency

use chrono::{DateTime, Duration, Utc};

use crate::session::token::SessionToken;

/// Renewal decision for an inbound token event.
#[derive(Debug, Clone, PartialEq)]
pub enum Renewal {
    /// Replacement token issued; the transport credential must be reissued.
    Renewed {
        token: SessionToken,
        reissue_credential: bool,
    },
    /// Token left alone (already expired, or nothing to do).
    Unchanged,
}

/// Evaluate an inbound token against the renewal policy.
///
/// While `now < valid_to`, produce a replacement carrying the same claims,
/// context and persistence flag, with `issued_at = now` and
/// `valid_to = now + window`. At or after expiry, return Unchanged.
pub fn maybe_renew(token: &SessionToken, now: DateTime<Utc>, window: Duration) -> Renewal {
    if now >= token.valid_to {
        tracing::debug!(valid_to = %token.valid_to, "Session token expired, not renewing");
        return Renewal::Unchanged;
    }

    let renewed = SessionToken {
        claims: token.claims.clone(),
        issued_at: now,
        valid_to: now + window,
        is_persistent: token.is_persistent,
        context: token.context.clone(),
    };

    tracing::debug!(valid_to = %renewed.valid_to, "Session token renewed");

    Renewal::Renewed {
        token: renewed,
        reissue_credential: true,
    }
}
