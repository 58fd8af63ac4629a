//! Root-path rewrite decision.
//!
//! # States (root path only)
//! ```text
//! Root → crawler            → crawler rendering entry point
//! Root → supported browser  → primary rich-client entry point
//! Root → unsupported        → degraded static fallback
//! ```
//! All three transitions are terminal for the request.

use crate::client::profile::ClientProfile;
use crate::client::support::SupportMatrix;
use crate::config::schema::DispatchConfig;

/// Outcome of the dispatch decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectiveTarget<'a> {
    /// Non-root path: resolution proceeds on the original path.
    Unchanged(&'a str),
    /// Root path, rewritten to an internal entry point.
    Rewritten(&'a str),
}

impl<'a> EffectiveTarget<'a> {
    /// The path route resolution should run against.
    pub fn path(&self) -> &'a str {
        match self {
            EffectiveTarget::Unchanged(path) | EffectiveTarget::Rewritten(path) => path,
        }
    }

    pub fn is_rewritten(&self) -> bool {
        matches!(self, EffectiveTarget::Rewritten(_))
    }
}

/// Decide the effective target for a request path.
///
/// A no-op for everything except the application root. For the root, the
/// crawler signal wins over the browser fields; otherwise the support
/// matrix picks between the rich client and the static fallback.
pub fn dispatch<'a>(
    path: &'a str,
    profile: &ClientProfile,
    matrix: &SupportMatrix,
    targets: &'a DispatchConfig,
) -> EffectiveTarget<'a> {
    if path != "/" {
        return EffectiveTarget::Unchanged(path);
    }

    let target = if profile.is_crawler {
        &targets.crawler_target
    } else if matrix.is_supported(profile) {
        &targets.primary_target
    } else {
        &targets.fallback_target
    };

    tracing::debug!(
        target = %target,
        crawler = profile.is_crawler,
        browser = %profile.browser_family,
        "Root dispatch"
    );
    metrics::counter!("gateway_dispatch_total", "target" => target.clone()).increment(1);

    EffectiveTarget::Rewritten(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(family: &str, version: Option<f64>, crawler: bool) -> ClientProfile {
        ClientProfile {
            browser_family: family.to_string(),
            browser_version: version,
            is_crawler: crawler,
        }
    }

    fn targets() -> DispatchConfig {
        DispatchConfig::default()
    }

    #[test]
    fn test_crawler_wins_regardless_of_browser_fields() {
        let targets = targets();
        let matrix = SupportMatrix::default();
        // Ancient Safari, but the crawler signal decides.
        let result = dispatch("/", &profile("Safari", Some(1.0), true), &matrix, &targets);
        assert_eq!(result.path(), targets.crawler_target);
        assert!(result.is_rewritten());
    }

    #[test]
    fn test_supported_browser_gets_rich_client() {
        let targets = targets();
        let matrix = SupportMatrix::default();
        let result = dispatch("/", &profile("Chrome", Some(20.0), false), &matrix, &targets);
        assert_eq!(result.path(), targets.primary_target);
    }

    #[test]
    fn test_unsupported_browser_gets_fallback() {
        let targets = targets();
        let matrix = SupportMatrix::default();
        let result = dispatch("/", &profile("Safari", Some(4.0), false), &matrix, &targets);
        assert_eq!(result.path(), targets.fallback_target);
    }

    #[test]
    fn test_unknown_family_fails_open_to_rich_client() {
        let targets = targets();
        let matrix = SupportMatrix::default();
        let result = dispatch("/", &profile("Edge", Some(1.0), false), &matrix, &targets);
        assert_eq!(result.path(), targets.primary_target);
    }

    #[test]
    fn test_non_root_path_is_untouched() {
        let targets = targets();
        let matrix = SupportMatrix::default();
        let result = dispatch("/cosmos", &profile("Safari", Some(4.0), false), &matrix, &targets);
        assert_eq!(result, EffectiveTarget::Unchanged("/cosmos"));
    }

    #[test]
    fn test_dispatch_is_idempotent() {
        let targets = targets();
        let matrix = SupportMatrix::default();
        let profile = profile("Firefox", Some(7.0), false);
        let first = dispatch("/", &profile, &matrix, &targets);
        let second = dispatch("/", &profile, &matrix, &targets);
        assert_eq!(first, second);
    }
}
