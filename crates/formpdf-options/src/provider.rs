//! Option provider seam
//!
//! Implement [`OptionsProvider`] to connect the engine to whatever serves
//! the option lists (app-local registries, remote option APIs).

use crate::error::ProviderError;
use crate::mapping::ParamMap;
use serde::{Deserialize, Serialize};

/// One option as returned by a provider, order as returned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppOption {
    /// Human-readable label
    pub label: String,
    /// Machine-readable value
    pub value: String,
}

impl AppOption {
    /// Create an option
    #[inline]
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// External option-list provider
///
/// A call is a pure, read-only function of `(id, language, parameters)`;
/// the aggregator may issue calls for distinct ids concurrently.
#[async_trait::async_trait]
pub trait OptionsProvider: Send + Sync {
    /// Fetch the option list for an id
    ///
    /// # Errors
    /// - `ProviderError::NotFound` when no list exists for the id
    /// - `ProviderError::Service` when the call fails outright
    async fn get_options(
        &self,
        options_id: &str,
        language: &str,
        parameters: &ParamMap,
    ) -> Result<Vec<AppOption>, ProviderError>;
}
