use std::env;
use std::fmt;

pub const DEFAULT_UPSTREAM_URL: &str = "https://api.wolframalpha.com/v1/result";
pub const DEFAULT_UNITS: &str = "metric";

/// Server-side settings for the query proxy.
#[derive(Clone)]
pub struct ProxyConfig {
    pub app_id: Option<String>,
    pub upstream_url: String,
    pub units: String,
}

impl ProxyConfig {
    #[must_use]
    pub fn new(app_id: Option<String>) -> Self {
        Self {
            app_id: app_id.filter(|id| !id.trim().is_empty()),
            upstream_url: DEFAULT_UPSTREAM_URL.into(),
            units: DEFAULT_UNITS.into(),
        }
    }

    /// Reads `WOLFRAM_APP_ID`, `PROOFMASTER_UPSTREAM_URL` and
    /// `PROOFMASTER_UNITS`. Blank values count as unset.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            app_id: var("WOLFRAM_APP_ID"),
            upstream_url: var("PROOFMASTER_UPSTREAM_URL")
                .unwrap_or_else(|| DEFAULT_UPSTREAM_URL.into()),
            units: var("PROOFMASTER_UNITS").unwrap_or_else(|| DEFAULT_UNITS.into()),
        }
    }

    #[must_use]
    pub fn has_app_id(&self) -> bool {
        self.app_id.is_some()
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

// The credential is never printed.
impl fmt::Debug for ProxyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyConfig")
            .field("app_id", &self.app_id.as_ref().map(|_| "<redacted>"))
            .field("upstream_url", &self.upstream_url)
            .field("units", &self.units)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_app_id_counts_as_missing() {
        assert!(!ProxyConfig::new(Some("   ".into())).has_app_id());
        assert!(ProxyConfig::new(Some("ABC".into())).has_app_id());
    }

    #[test]
    fn debug_output_hides_the_app_id() {
        let config = ProxyConfig::new(Some("SECRET-ID".into()));
        let printed = format!("{config:?}");
        assert!(!printed.contains("SECRET-ID"));
        assert!(printed.contains("<redacted>"));
        assert!(printed.contains(DEFAULT_UPSTREAM_URL));
    }
}
