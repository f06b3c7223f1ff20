//! formpdf-core - Render-context assembly and PDF generation
//!
//! The orchestration layer of the engine:
//! - Layout-set selection and settings normalization
//! - Acting-party and language resolution with text-resource fallback
//! - Option resolution against the submitted data
//! - Assembly of the immutable render context and the generation pipeline
//!
//! # Example
//!
//! ```rust,ignore
//! use formpdf_core::{ContextAssembler, EngineServices, PdfEngineConfig};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example(services: EngineServices) -> Result<(), Box<dyn std::error::Error>> {
//! let assembler = ContextAssembler::new(PdfEngineConfig::new(), services);
//! let context = assembler
//!     .assemble(&instance, "Task_1", &data_element, &data, &principal,
//!               &CancellationToken::new())
//!     .await?;
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod assembler;
pub mod config;
pub mod context;
pub mod error;
pub mod generator;
pub mod services;
pub mod types;

// Re-exports for convenience
pub use assembler::{ContextAssembler, EngineServices};
pub use config::PdfEngineConfig;
pub use context::{ContextObserver, LastContextRecorder, PdfRenderContext};
pub use error::AssemblyError;
pub use generator::{
    derive_file_name, GeneratedPdf, PdfGenerator, PDF_CONTENT_TYPE, PDF_ELEMENT_TYPE,
};
pub use services::{
    AppResourceClient, DataClient, PartyClient, PdfRenderer, ProfileClient, ServiceError,
    TextResourceClient,
};
pub use types::{
    DataElement, Instance, InstanceRef, Party, Principal, TextResource, TextResourceBundle,
    UserProfile,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for context assembly
    pub use crate::{
        AssemblyError, ContextAssembler, DataElement, EngineServices, Instance, InstanceRef,
        LastContextRecorder, Party, PdfEngineConfig, PdfGenerator, PdfRenderContext, Principal,
        TextResourceBundle,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
