//! Integration tests for the generation pipeline

mod common;

use common::{bundle, fixture, StubRenderer, StubTexts, STUB_PDF};
use formpdf_core::{
    ContextAssembler, DataElement, Instance, PdfEngineConfig, PdfGenerator, Principal,
    PDF_CONTENT_TYPE, PDF_ELEMENT_TYPE,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

fn instance() -> Instance {
    Instance {
        id: "50001/3f1b0c2a-77aa-41f2-b8a6-aa3fbd9d231e".to_string(),
        app_id: "ttd/demo-app".to_string(),
        org: "ttd".to_string(),
        last_changed: None,
    }
}

fn data_element() -> DataElement {
    DataElement {
        id: "data-1".to_string(),
        data_type: "form-model".to_string(),
    }
}

#[tokio::test]
async fn generates_and_stores_the_document() {
    let fx = fixture();
    let data = fx.data.clone();
    let assembler = ContextAssembler::new(PdfEngineConfig::new(), fx.services);
    let generator = PdfGenerator::new(assembler, data.clone(), Arc::new(StubRenderer));

    let generated = generator
        .generate_and_store(
            &instance(),
            "Task_1",
            &data_element(),
            &Principal::User(7),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    // Title "My App" from the english bundle, space percent-encoded
    assert_eq!(generated.file_name, "My%20App.pdf");
    assert_eq!(generated.bytes, STUB_PDF.to_vec());

    let uploads = data.uploads.lock().unwrap();
    assert_eq!(uploads.len(), 1);
    let upload = &uploads[0];
    assert_eq!(upload.data_type, PDF_ELEMENT_TYPE);
    assert_eq!(upload.content_type, PDF_CONTENT_TYPE);
    assert_eq!(upload.file_name, "My%20App.pdf");
    assert_eq!(upload.bytes, STUB_PDF.to_vec());
    assert_eq!(
        upload.owner_instance_id,
        "50001/3f1b0c2a-77aa-41f2-b8a6-aa3fbd9d231e"
    );
}

#[tokio::test]
async fn missing_title_falls_back_to_app_name() {
    let mut fx = fixture();
    fx.services.texts = Arc::new(StubTexts {
        bundles: HashMap::from([
            ("en".to_string(), bundle("en", &[("greeting", "Hello")])),
        ]),
    });
    let data = fx.data.clone();
    let assembler = ContextAssembler::new(PdfEngineConfig::new(), fx.services);
    let generator = PdfGenerator::new(assembler, data.clone(), Arc::new(StubRenderer));

    let generated = generator
        .generate_and_store(
            &instance(),
            "Task_1",
            &data_element(),
            &Principal::User(7),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(generated.file_name, "demo-app.pdf");
}

#[tokio::test]
async fn cancelled_generation_stores_nothing() {
    let fx = fixture();
    let data = fx.data.clone();
    let assembler = ContextAssembler::new(PdfEngineConfig::new(), fx.services);
    let generator = PdfGenerator::new(assembler, data.clone(), Arc::new(StubRenderer));

    let cancel = CancellationToken::new();
    cancel.cancel();
    let result = generator
        .generate_and_store(
            &instance(),
            "Task_1",
            &data_element(),
            &Principal::User(7),
            &cancel,
        )
        .await;

    assert!(result.is_err());
    assert!(data.uploads.lock().unwrap().is_empty());
}
