//! Generation pipeline
//!
//! Fetches the submitted-data snapshot, assembles the render context,
//! renders it and stores the result on the instance.

use crate::assembler::ContextAssembler;
use crate::error::AssemblyError;
use crate::services::{guard, DataClient, PdfRenderer};
use crate::types::{DataElement, Instance, InstanceRef, Principal, TextResourceBundle};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Data type the generated document is stored under
pub const PDF_ELEMENT_TYPE: &str = "ref-data-as-pdf";

/// Content type of the generated document
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

// Everything outside the unreserved set is escaped, so the name is safe as
// a single path segment.
const FILE_NAME_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// A generated document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPdf {
    /// Stored file name
    pub file_name: String,
    /// Raw document bytes
    pub bytes: Vec<u8>,
}

/// End-to-end PDF generation for an instance
pub struct PdfGenerator {
    assembler: ContextAssembler,
    data: Arc<dyn DataClient>,
    renderer: Arc<dyn PdfRenderer>,
}

impl PdfGenerator {
    /// Create a generator
    #[inline]
    #[must_use]
    pub fn new(
        assembler: ContextAssembler,
        data: Arc<dyn DataClient>,
        renderer: Arc<dyn PdfRenderer>,
    ) -> Self {
        Self {
            assembler,
            data,
            renderer,
        }
    }

    /// Generate the summary document and store it on the instance
    ///
    /// # Errors
    /// Propagates assembly errors; any failed data-store or renderer call
    /// is fatal.
    pub async fn generate_and_store(
        &self,
        instance: &Instance,
        task_id: &str,
        data_element: &DataElement,
        principal: &Principal,
        cancel: &CancellationToken,
    ) -> Result<GeneratedPdf, AssemblyError> {
        let instance_ref = InstanceRef::parse(&instance.app_id, &instance.id)?;

        let submitted = guard(cancel, self.data.form_data(&instance_ref, &data_element.id)).await?;

        let context = self
            .assembler
            .assemble(instance, task_id, data_element, &submitted, principal, cancel)
            .await?;

        let bytes = guard(cancel, self.renderer.render(&context)).await?;

        let file_name = derive_file_name(
            &context.text_resources,
            &self.assembler.config().title_resource_id,
            &instance_ref.app,
        );

        guard(
            cancel,
            self.data.upload_binary(
                &instance_ref,
                PDF_ELEMENT_TYPE,
                PDF_CONTENT_TYPE,
                &file_name,
                bytes.clone(),
            ),
        )
        .await?;

        tracing::info!(
            instance = %instance.id,
            %file_name,
            size = bytes.len(),
            "stored generated pdf"
        );
        Ok(GeneratedPdf { file_name, bytes })
    }
}

/// Derive the stored file name
///
/// Title text resource value when present, else the application name, with
/// `.pdf` appended and percent-encoded as a single path segment.
#[must_use]
pub fn derive_file_name(
    texts: &TextResourceBundle,
    title_resource_id: &str,
    app: &str,
) -> String {
    let base = texts.get(title_resource_id).unwrap_or(app);
    utf8_percent_encode(&format!("{base}.pdf"), FILE_NAME_SEGMENT).to_string()
}
