//! Engine configuration

use serde::{Deserialize, Serialize};

/// Configuration for the render-context engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfEngineConfig {
    /// Fallback language when the resolved language has no resources
    pub baseline_language: String,
    /// Maximum concurrent option-provider calls
    pub option_fetch_concurrency: usize,
    /// Text resource id carrying the document title
    pub title_resource_id: String,
}

impl PdfEngineConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With baseline language
    #[inline]
    #[must_use]
    pub fn with_baseline_language(mut self, language: impl Into<String>) -> Self {
        self.baseline_language = language.into();
        self
    }

    /// With option-fetch concurrency
    #[inline]
    #[must_use]
    pub fn with_option_fetch_concurrency(mut self, concurrency: usize) -> Self {
        self.option_fetch_concurrency = concurrency;
        self
    }

    /// With title resource id
    #[inline]
    #[must_use]
    pub fn with_title_resource_id(mut self, id: impl Into<String>) -> Self {
        self.title_resource_id = id.into();
        self
    }
}

impl Default for PdfEngineConfig {
    fn default() -> Self {
        Self {
            baseline_language: "nb".to_string(),
            option_fetch_concurrency: 8,
            title_resource_id: "appName".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = PdfEngineConfig::new();
        assert_eq!(config.baseline_language, "nb");
        assert_eq!(config.option_fetch_concurrency, 8);
        assert_eq!(config.title_resource_id, "appName");
    }

    #[test]
    fn builders() {
        let config = PdfEngineConfig::new()
            .with_baseline_language("en")
            .with_option_fetch_concurrency(2)
            .with_title_resource_id("serviceName");
        assert_eq!(config.baseline_language, "en");
        assert_eq!(config.option_fetch_concurrency, 2);
        assert_eq!(config.title_resource_id, "serviceName");
    }
}
