//! External collaborator seams
//!
//! The assembler talks to every backing system through these traits so
//! tests can stub them at the seam. All calls are read-only except the
//! binary upload. A failed call is fatal to the request: the PDF cannot be
//! produced without the required data.

use crate::context::PdfRenderContext;
use crate::error::AssemblyError;
use crate::types::{InstanceRef, Party, TextResourceBundle, UserProfile};
use formpdf_layout::LayoutSet;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

/// A backing service call failed outright
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{service} call failed: {message}")]
pub struct ServiceError {
    /// Which collaborator failed
    pub service: &'static str,
    /// What it reported
    pub message: String,
}

impl ServiceError {
    /// Create a service error
    #[inline]
    #[must_use]
    pub fn new(service: &'static str, message: impl Into<String>) -> Self {
        Self {
            service,
            message: message.into(),
        }
    }
}

/// Application resources: layout sets, layouts and layout settings
#[async_trait::async_trait]
pub trait AppResourceClient: Send + Sync {
    /// All declared layout sets; empty when the app has none
    async fn layout_sets(&self) -> Result<Vec<LayoutSet>, ServiceError>;

    /// Raw layout text for a set, or the application default when `None`
    async fn layout(&self, set_id: Option<&str>) -> Result<String, ServiceError>;

    /// Raw layout-settings text for a set, when any exist
    async fn layout_settings(&self, set_id: Option<&str>) -> Result<Option<String>, ServiceError>;
}

/// Party lookup, by numeric id or organization number
#[async_trait::async_trait]
pub trait PartyClient: Send + Sync {
    /// Party by numeric id
    async fn party_by_id(&self, party_id: i64) -> Result<Party, ServiceError>;

    /// Party by organization number
    async fn party_by_org_number(&self, org_number: &str) -> Result<Party, ServiceError>;
}

/// User profile lookup
#[async_trait::async_trait]
pub trait ProfileClient: Send + Sync {
    /// Profile by user id
    async fn profile(&self, user_id: i64) -> Result<UserProfile, ServiceError>;
}

/// Text resource store, keyed by organization, app and language
#[async_trait::async_trait]
pub trait TextResourceClient: Send + Sync {
    /// Bundle for a language, or `None` when absent
    async fn bundle(
        &self,
        org: &str,
        app: &str,
        language: &str,
    ) -> Result<Option<TextResourceBundle>, ServiceError>;
}

/// Data store for submitted data and generated binaries
#[async_trait::async_trait]
pub trait DataClient: Send + Sync {
    /// Typed submitted-data snapshot for a data element
    async fn form_data(
        &self,
        instance: &InstanceRef,
        data_element_id: &str,
    ) -> Result<Value, ServiceError>;

    /// Upload a binary attachment to the instance
    async fn upload_binary(
        &self,
        instance: &InstanceRef,
        data_type: &str,
        content_type: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<(), ServiceError>;
}

/// The external renderer turning a context into PDF bytes
#[async_trait::async_trait]
pub trait PdfRenderer: Send + Sync {
    /// Render the context
    async fn render(&self, context: &PdfRenderContext) -> Result<Vec<u8>, ServiceError>;
}

/// Await a service call unless the request is cancelled first
pub(crate) async fn guard<T, F>(cancel: &CancellationToken, fut: F) -> Result<T, AssemblyError>
where
    F: std::future::Future<Output = Result<T, ServiceError>>,
{
    tokio::select! {
        () = cancel.cancelled() => Err(AssemblyError::Cancelled),
        result = fut => result.map_err(AssemblyError::from),
    }
}
