//! Context assembly
//!
//! The orchestration point of the engine. One `assemble` call selects the
//! layout, resolves the acting party and language, applies the
//! text-resource fallback, runs the option pipeline and joins everything
//! into one immutable `PdfRenderContext`.

use crate::config::PdfEngineConfig;
use crate::context::{ContextObserver, PdfRenderContext};
use crate::error::AssemblyError;
use crate::services::{
    guard, AppResourceClient, PartyClient, ProfileClient, TextResourceClient,
};
use crate::types::{DataElement, Instance, InstanceRef, Party, Principal, TextResourceBundle};
use formpdf_layout::{
    collect_option_references, extract_mapping_declarations, parse_layout, select_layout_set,
    LayoutError, LayoutSettings,
};
use formpdf_options::{
    build_options_dictionary, first_occurrence_dedup, resolve_mappings, OptionsProvider,
};
use serde_json::Value;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// The external collaborators the assembler depends on
#[derive(Clone)]
pub struct EngineServices {
    /// Layout sets, layouts and settings
    pub resources: Arc<dyn AppResourceClient>,
    /// Party lookup
    pub parties: Arc<dyn PartyClient>,
    /// User profile lookup
    pub profiles: Arc<dyn ProfileClient>,
    /// Text resource store
    pub texts: Arc<dyn TextResourceClient>,
    /// Option provider
    pub options: Arc<dyn OptionsProvider>,
}

/// Assembles render contexts for generation requests
pub struct ContextAssembler {
    config: PdfEngineConfig,
    services: EngineServices,
    observer: Option<Arc<dyn ContextObserver>>,
}

impl ContextAssembler {
    /// Create an assembler
    #[inline]
    #[must_use]
    pub fn new(config: PdfEngineConfig, services: EngineServices) -> Self {
        Self {
            config,
            services,
            observer: None,
        }
    }

    /// Attach a diagnostic observer
    #[inline]
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn ContextObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Engine configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &PdfEngineConfig {
        &self.config
    }

    /// Assemble the render context for one generation request
    ///
    /// # Workflow
    /// 1. Decompose the instance reference
    /// 2. Select layout and settings (layout set matching data type and
    ///    task, else application default)
    /// 3. Resolve owner party and acting party/language concurrently
    /// 4. Fetch text resources, one fallback hop to the baseline language
    /// 5. Resolve option lists against the submitted data
    /// 6. Encode the data and join everything into the context
    ///
    /// # Errors
    /// Structural failures (`InvalidInstanceReference`, `Layout`) and
    /// external service failures are fatal. Cancellation yields
    /// `AssemblyError::Cancelled`; a cancelled call never produces a
    /// partial context.
    pub async fn assemble(
        &self,
        instance: &Instance,
        task_id: &str,
        data_element: &DataElement,
        data: &Value,
        principal: &Principal,
        cancel: &CancellationToken,
    ) -> Result<PdfRenderContext, AssemblyError> {
        let instance_ref = InstanceRef::parse(&instance.app_id, &instance.id)?;
        tracing::info!(
            app = %instance.app_id,
            instance = %instance.id,
            task = %task_id,
            "assembling render context"
        );

        // Layout-set selection
        let sets = guard(cancel, self.services.resources.layout_sets()).await?;
        let selected = select_layout_set(&sets, &data_element.data_type, task_id);
        let set_id = selected.map(|set| set.id.as_str());
        tracing::debug!(layout_set = ?set_id, "selected layout");

        let layout_text = guard(cancel, self.services.resources.layout(set_id)).await?;
        let settings_text = guard(cancel, self.services.resources.layout_settings(set_id)).await?;
        let layout_settings = LayoutSettings::from_json(settings_text.as_deref())
            .map_err(|e| LayoutError::MalformedLayout(format!("invalid layout settings: {e}")))?;

        // Owner party and acting party are independent reads
        let (party, (acting_party, language)) = tokio::try_join!(
            guard(
                cancel,
                self.services.parties.party_by_id(instance_ref.owner_party_id)
            ),
            self.resolve_acting_party(principal, cancel),
        )?;
        tracing::debug!(%language, acting_party = %acting_party.name, "resolved acting party");

        let text_resources = self
            .resolve_text_resources(&instance_ref, &language, cancel)
            .await?;

        // Option resolution against the selected layout
        let layout = parse_layout(&layout_text)?;
        let declarations = extract_mapping_declarations(&layout)?;
        let option_ids = first_occurrence_dedup(collect_option_references(&layout));
        let mapping_context = resolve_mappings(&declarations, data);
        let options_dictionary = build_options_dictionary(
            &option_ids,
            &language,
            &mapping_context,
            self.services.options.as_ref(),
            self.config.option_fetch_concurrency,
            cancel,
        )
        .await?;

        let encoded_data =
            serde_json::to_string(data).map_err(|e| AssemblyError::Encoding(e.to_string()))?;

        if cancel.is_cancelled() {
            return Err(AssemblyError::Cancelled);
        }

        let context = PdfRenderContext {
            encoded_data,
            layout,
            layout_settings,
            text_resources,
            options_dictionary,
            party,
            acting_party,
            instance: instance.clone(),
            language,
        };

        if let Some(observer) = &self.observer {
            observer.context_assembled(&context);
        }
        tracing::info!(
            option_lists = context.options_dictionary.len(),
            language = %context.language,
            "render context assembled"
        );
        Ok(context)
    }

    /// Resolve the party and language the request acts with
    async fn resolve_acting_party(
        &self,
        principal: &Principal,
        cancel: &CancellationToken,
    ) -> Result<(Party, String), AssemblyError> {
        match principal {
            Principal::User(user_id) => {
                let profile = guard(cancel, self.services.profiles.profile(*user_id)).await?;
                let language = profile
                    .language
                    .clone()
                    .unwrap_or_else(|| self.config.baseline_language.clone());
                Ok((profile.party, language))
            }
            Principal::Org(org_number) => {
                let party =
                    guard(cancel, self.services.parties.party_by_org_number(org_number)).await?;
                Ok((party, self.config.baseline_language.clone()))
            }
        }
    }

    /// Fetch text resources with at most one fallback hop to the baseline
    async fn resolve_text_resources(
        &self,
        instance_ref: &InstanceRef,
        language: &str,
        cancel: &CancellationToken,
    ) -> Result<TextResourceBundle, AssemblyError> {
        let texts = &self.services.texts;
        if let Some(bundle) = guard(
            cancel,
            texts.bundle(&instance_ref.org, &instance_ref.app, language),
        )
        .await?
        {
            return Ok(bundle);
        }

        let baseline = &self.config.baseline_language;
        if language != baseline {
            if let Some(bundle) = guard(
                cancel,
                texts.bundle(&instance_ref.org, &instance_ref.app, baseline),
            )
            .await?
            {
                tracing::debug!(requested = %language, %baseline, "fell back to baseline texts");
                return Ok(bundle);
            }
        }

        tracing::debug!(requested = %language, "no text resources, using empty bundle");
        Ok(TextResourceBundle::empty(language))
    }
}
