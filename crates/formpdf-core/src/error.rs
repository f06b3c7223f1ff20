//! Error types for context assembly and generation
//!
//! Policy: omission is preferred over failure where the omitted piece is
//! cosmetic (option labels, localized text). Structural and identity
//! failures are fatal since no meaningful document can be produced.

use crate::services::ServiceError;
use formpdf_layout::LayoutError;
use formpdf_options::OptionsError;

/// Main assembly/generation error type
#[derive(Debug, thiserror::Error)]
pub enum AssemblyError {
    /// Instance identifier cannot be decomposed
    #[error("invalid instance reference: {0}")]
    InvalidInstanceReference(String),

    /// Layout document unparsable or missing required structure
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),

    /// Option resolution failed (not the NotFound signal)
    #[error("options error: {0}")]
    Options(OptionsError),

    /// A backing service call failed outright
    #[error("external service failure: {0}")]
    Service(#[from] ServiceError),

    /// Submitted data could not be encoded
    #[error("data encoding failed: {0}")]
    Encoding(String),

    /// The operation was cancelled; no partial context was produced
    #[error("context assembly cancelled")]
    Cancelled,
}

impl From<OptionsError> for AssemblyError {
    fn from(err: OptionsError) -> Self {
        match err {
            OptionsError::Cancelled => Self::Cancelled,
            other => Self::Options(other),
        }
    }
}

impl AssemblyError {
    /// Whether the failure is structural (retrying the same request
    /// cannot succeed)
    #[inline]
    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::InvalidInstanceReference(_) | Self::Layout(_) | Self::Encoding(_)
        )
    }
}
