//! Client classification from request metadata.
//!
//! # Responsibilities
//! - Derive a per-request ClientProfile from the capability signals the
//!   upstream device-detection layer injects
//! - Parse the browser version into a comparable decimal
//!
//! # Design Decisions
//! - Crawler detection is an opaque boolean signal; this module never
//!   inspects raw user-agent strings
//! - A version that does not parse is kept as None, not an error; the
//!   support matrix treats it as supported

/// Request metadata relevant to classification and routing.
///
/// Built by the HTTP layer from the injected capability headers; everything
/// downstream of extraction works on this record, not on the raw request.
#[derive(Debug, Clone)]
pub struct RequestMeta {
    /// Request path, including the leading slash.
    pub path: String,

    /// Browser family name from the capability signal, if present.
    pub browser_family: Option<String>,

    /// Raw browser version string from the capability signal, if present.
    pub browser_version: Option<String>,

    /// Crawler signal from the platform's client-capability inference.
    pub is_crawler: bool,
}

/// Per-request client classification. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientProfile {
    /// Browser family name ("unknown" when the signal is absent).
    pub browser_family: String,

    /// Major version as a decimal; None when absent or unparseable.
    pub browser_version: Option<f64>,

    /// True when the platform classified the client as an indexing agent.
    pub is_crawler: bool,
}

impl ClientProfile {
    /// Classify a request. Total function: malformed signals degrade into
    /// an unknown family or a None version, never into an error.
    pub fn classify(meta: &RequestMeta) -> Self {
        let browser_family = meta
            .browser_family
            .as_deref()
            .filter(|f| !f.is_empty())
            .unwrap_or("unknown")
            .to_string();

        let browser_version = meta
            .browser_version
            .as_deref()
            .and_then(|v| v.trim().parse::<f64>().ok());

        let profile = Self {
            browser_family,
            browser_version,
            is_crawler: meta.is_crawler,
        };

        tracing::debug!(
            browser = %profile.browser_family,
            version = ?profile.browser_version,
            crawler = profile.is_crawler,
            "Client classified"
        );

        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(family: Option<&str>, version: Option<&str>, crawler: bool) -> RequestMeta {
        RequestMeta {
            path: "/".to_string(),
            browser_family: family.map(String::from),
            browser_version: version.map(String::from),
            is_crawler: crawler,
        }
    }

    #[test]
    fn test_classify_browser() {
        let profile = ClientProfile::classify(&meta(Some("Chrome"), Some("20.0"), false));
        assert_eq!(profile.browser_family, "Chrome");
        assert_eq!(profile.browser_version, Some(20.0));
        assert!(!profile.is_crawler);
    }

    #[test]
    fn test_classify_crawler_ignores_browser_fields() {
        let profile = ClientProfile::classify(&meta(None, None, true));
        assert!(profile.is_crawler);
        assert_eq!(profile.browser_family, "unknown");
    }

    #[test]
    fn test_unparseable_version_becomes_none() {
        let profile = ClientProfile::classify(&meta(Some("Safari"), Some("not-a-number"), false));
        assert_eq!(profile.browser_version, None);
    }

    #[test]
    fn test_empty_family_treated_as_unknown() {
        let profile = ClientProfile::classify(&meta(Some(""), Some("9"), false));
        assert_eq!(profile.browser_family, "unknown");
    }
}
