//! The assembled render context
//!
//! `PdfRenderContext` is built once per generation request and never
//! mutated afterwards. Test and diagnostic introspection goes through an
//! injected [`ContextObserver`] instead of shared global state.

use crate::types::{Instance, Party, TextResourceBundle};
use formpdf_layout::LayoutSettings;
use formpdf_options::OptionsDictionary;
use serde::Serialize;
use serde_json::Value;
use std::sync::Mutex;

/// Immutable aggregate handed to the external renderer
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfRenderContext {
    /// Deterministic, reversible encoding of the submitted data
    pub encoded_data: String,
    /// The selected layout document
    pub layout: Value,
    /// Normalized layout settings
    pub layout_settings: LayoutSettings,
    /// Resolved text resources (post language fallback)
    pub text_resources: TextResourceBundle,
    /// Deduplicated label→value maps per option list
    pub options_dictionary: OptionsDictionary,
    /// Instance owner's party
    pub party: Party,
    /// Party the request acts on behalf of
    pub acting_party: Party,
    /// Instance metadata
    pub instance: Instance,
    /// Resolved language
    pub language: String,
}

/// Observation point for assembled contexts
///
/// Diagnostic only; production logic must never read back through an
/// observer.
pub trait ContextObserver: Send + Sync {
    /// Called once per successfully assembled context
    fn context_assembled(&self, context: &PdfRenderContext);
}

/// Single-slot, last-write-wins recorder for test inspection
#[derive(Debug, Default)]
pub struct LastContextRecorder {
    slot: Mutex<Option<PdfRenderContext>>,
}

impl LastContextRecorder {
    /// Empty recorder
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently observed context, if any
    #[must_use]
    pub fn last(&self) -> Option<PdfRenderContext> {
        self.slot.lock().map(|slot| slot.clone()).unwrap_or(None)
    }
}

impl ContextObserver for LastContextRecorder {
    fn context_assembled(&self, context: &PdfRenderContext) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(context.clone());
        }
    }
}
