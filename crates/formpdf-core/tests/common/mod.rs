//! Shared stub collaborators for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use formpdf_core::{
    AppResourceClient, DataClient, EngineServices, InstanceRef, Party, PdfRenderContext,
    PdfRenderer, ProfileClient, PartyClient, ServiceError, TextResourceBundle, TextResource,
    TextResourceClient, UserProfile,
};
use formpdf_layout::LayoutSet;
use formpdf_options::{AppOption, OptionsProvider, ParamMap, ProviderError};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const STUB_PDF: &[u8] = b"%PDF-1.7 stub";

pub struct StubResources {
    pub sets: Vec<LayoutSet>,
    pub default_layout: String,
    pub set_layouts: HashMap<String, String>,
    pub settings: Option<String>,
}

#[async_trait]
impl AppResourceClient for StubResources {
    async fn layout_sets(&self) -> Result<Vec<LayoutSet>, ServiceError> {
        Ok(self.sets.clone())
    }

    async fn layout(&self, set_id: Option<&str>) -> Result<String, ServiceError> {
        match set_id {
            Some(id) => self
                .set_layouts
                .get(id)
                .cloned()
                .ok_or_else(|| ServiceError::new("resources", format!("no layout for set '{id}'"))),
            None => Ok(self.default_layout.clone()),
        }
    }

    async fn layout_settings(&self, _set_id: Option<&str>) -> Result<Option<String>, ServiceError> {
        Ok(self.settings.clone())
    }
}

pub struct StubParties {
    pub by_id: HashMap<i64, Party>,
    pub by_org: HashMap<String, Party>,
}

#[async_trait]
impl PartyClient for StubParties {
    async fn party_by_id(&self, party_id: i64) -> Result<Party, ServiceError> {
        self.by_id
            .get(&party_id)
            .cloned()
            .ok_or_else(|| ServiceError::new("party", format!("no party {party_id}")))
    }

    async fn party_by_org_number(&self, org_number: &str) -> Result<Party, ServiceError> {
        self.by_org
            .get(org_number)
            .cloned()
            .ok_or_else(|| ServiceError::new("party", format!("no org {org_number}")))
    }
}

pub struct StubProfiles {
    pub profiles: HashMap<i64, UserProfile>,
}

#[async_trait]
impl ProfileClient for StubProfiles {
    async fn profile(&self, user_id: i64) -> Result<UserProfile, ServiceError> {
        self.profiles
            .get(&user_id)
            .cloned()
            .ok_or_else(|| ServiceError::new("profile", format!("no profile {user_id}")))
    }
}

pub struct StubTexts {
    pub bundles: HashMap<String, TextResourceBundle>,
}

#[async_trait]
impl TextResourceClient for StubTexts {
    async fn bundle(
        &self,
        _org: &str,
        _app: &str,
        language: &str,
    ) -> Result<Option<TextResourceBundle>, ServiceError> {
        Ok(self.bundles.get(language).cloned())
    }
}

pub struct StubOptions {
    pub lists: HashMap<String, Vec<AppOption>>,
    pub calls: Mutex<Vec<(String, String, ParamMap)>>,
}

impl StubOptions {
    pub fn new(lists: &[(&str, &[(&str, &str)])]) -> Self {
        Self {
            lists: lists
                .iter()
                .map(|(id, options)| {
                    (
                        id.to_string(),
                        options.iter().map(|(l, v)| AppOption::new(*l, *v)).collect(),
                    )
                })
                .collect(),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl OptionsProvider for StubOptions {
    async fn get_options(
        &self,
        options_id: &str,
        language: &str,
        parameters: &ParamMap,
    ) -> Result<Vec<AppOption>, ProviderError> {
        self.calls.lock().unwrap().push((
            options_id.to_string(),
            language.to_string(),
            parameters.clone(),
        ));
        self.lists
            .get(options_id)
            .cloned()
            .ok_or_else(|| ProviderError::NotFound(options_id.to_string()))
    }
}

pub struct Upload {
    pub owner_instance_id: String,
    pub data_type: String,
    pub content_type: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

pub struct StubData {
    pub data: Value,
    pub uploads: Mutex<Vec<Upload>>,
}

#[async_trait]
impl DataClient for StubData {
    async fn form_data(
        &self,
        _instance: &InstanceRef,
        _data_element_id: &str,
    ) -> Result<Value, ServiceError> {
        Ok(self.data.clone())
    }

    async fn upload_binary(
        &self,
        instance: &InstanceRef,
        data_type: &str,
        content_type: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<(), ServiceError> {
        self.uploads.lock().unwrap().push(Upload {
            owner_instance_id: instance.owner_instance_id(),
            data_type: data_type.to_string(),
            content_type: content_type.to_string(),
            file_name: file_name.to_string(),
            bytes,
        });
        Ok(())
    }
}

pub struct StubRenderer;

#[async_trait]
impl PdfRenderer for StubRenderer {
    async fn render(&self, _context: &PdfRenderContext) -> Result<Vec<u8>, ServiceError> {
        Ok(STUB_PDF.to_vec())
    }
}

pub fn party(party_id: i64, name: &str) -> Party {
    Party {
        party_id,
        name: name.to_string(),
        org_number: None,
        ssn: None,
    }
}

pub fn bundle(language: &str, resources: &[(&str, &str)]) -> TextResourceBundle {
    TextResourceBundle {
        language: language.to_string(),
        resources: resources
            .iter()
            .map(|(id, value)| TextResource {
                id: id.to_string(),
                value: value.to_string(),
            })
            .collect(),
    }
}

/// Layout with one mapped and one unmapped option reference
pub fn sample_layout() -> String {
    json!({"data": {"layout": [
        {"id": "color", "type": "Dropdown", "optionsId": "colors",
         "mapping": {"form.country": "country"}},
        {"id": "size", "type": "Checkboxes", "optionsId": "sizes"}
    ]}})
    .to_string()
}

pub struct Fixture {
    pub services: EngineServices,
    pub data: Arc<StubData>,
    pub options: Arc<StubOptions>,
}

/// Baseline fixture: one user (7) with english profile, one owner party,
/// english and norwegian text bundles, colors/sizes option lists.
pub fn fixture() -> Fixture {
    let options = Arc::new(StubOptions::new(&[
        ("colors", &[("Red", "1"), ("Blue", "2")]),
        ("sizes", &[("Small", "s"), ("Large", "l")]),
    ]));
    let data = Arc::new(StubData {
        data: json!({"form": {"country": "NO"}}),
        uploads: Mutex::new(Vec::new()),
    });

    let services = EngineServices {
        resources: Arc::new(StubResources {
            sets: Vec::new(),
            default_layout: sample_layout(),
            set_layouts: HashMap::new(),
            settings: None,
        }),
        parties: Arc::new(StubParties {
            by_id: HashMap::from([(50001, party(50001, "Owner AS"))]),
            by_org: HashMap::from([("912345678".to_string(), party(600, "Acting AS"))]),
        }),
        profiles: Arc::new(StubProfiles {
            profiles: HashMap::from([(
                7,
                UserProfile {
                    user_id: 7,
                    party: party(501, "Ola Nordmann"),
                    language: Some("en".to_string()),
                },
            )]),
        }),
        texts: Arc::new(StubTexts {
            bundles: HashMap::from([
                ("en".to_string(), bundle("en", &[("appName", "My App")])),
                ("nb".to_string(), bundle("nb", &[("appName", "Min App")])),
            ]),
        }),
        options: options.clone(),
    };

    Fixture {
        services,
        data,
        options,
    }
}
