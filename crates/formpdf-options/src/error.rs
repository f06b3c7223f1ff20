//! Error types for option resolution

/// Option provider errors
///
/// `NotFound` is the explicit "no such option list" signal; the caller
/// omits the id and continues. Everything else is fatal to the request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// No option list registered under the id
    #[error("no option list registered for id '{0}'")]
    NotFound(String),

    /// The provider call failed outright
    #[error("option provider call failed: {0}")]
    Service(String),
}

/// Aggregation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    /// A provider call failed (not the NotFound signal)
    #[error("option provider failure: {0}")]
    Provider(#[from] ProviderError),

    /// Resolution was cancelled before completing
    #[error("options resolution cancelled")]
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_display() {
        let err = ProviderError::NotFound("colors".to_string());
        assert!(err.to_string().contains("colors"));
    }

    #[test]
    fn options_error_wraps_provider() {
        let err: OptionsError = ProviderError::Service("boom".to_string()).into();
        assert!(err.to_string().contains("boom"));
    }
}
