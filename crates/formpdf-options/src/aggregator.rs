//! Options aggregation
//!
//! Queries the provider once per distinct option-list id and merges the
//! results into one deduplicated label→value dictionary. Fetches run with
//! bounded concurrency; the merge follows discovery order, never completion
//! order.

use crate::error::{OptionsError, ProviderError};
use crate::mapping::{OptionMappingContext, ParamMap};
use crate::provider::OptionsProvider;
use futures::stream::{self, StreamExt};
use indexmap::{IndexMap, IndexSet};
use tokio_util::sync::CancellationToken;

/// Deduplicated label→value maps per option list, discovery-ordered
///
/// At most one entry per id; within an entry labels are unique, first
/// occurrence wins.
pub type OptionsDictionary = IndexMap<String, IndexMap<String, String>>;

/// Deduplicate ids preserving first-occurrence order
#[must_use]
pub fn first_occurrence_dedup<I>(ids: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    ids.into_iter()
        .collect::<IndexSet<String>>()
        .into_iter()
        .collect()
}

/// Build the options dictionary for a set of pre-deduplicated ids
///
/// Provider calls for distinct ids run concurrently, at most `concurrency`
/// in flight; results are still merged in the order of `options_ids`. An
/// id the provider does not know is omitted. Duplicate labels within one
/// id keep the first value.
///
/// # Errors
/// - `OptionsError::Provider` when any call fails outright
/// - `OptionsError::Cancelled` on cancellation; no partial dictionary is
///   returned
pub async fn build_options_dictionary(
    options_ids: &[String],
    language: &str,
    mapping_context: &OptionMappingContext,
    provider: &dyn OptionsProvider,
    concurrency: usize,
    cancel: &CancellationToken,
) -> Result<OptionsDictionary, OptionsError> {
    let empty = ParamMap::new();

    let fetches = options_ids.iter().map(|id| {
        let parameters = mapping_context.params_for(id).unwrap_or(&empty);
        async move {
            tokio::select! {
                () = cancel.cancelled() => Err(OptionsError::Cancelled),
                result = provider.get_options(id, language, parameters) => match result {
                    Ok(options) => Ok(Some((id.as_str(), options))),
                    Err(ProviderError::NotFound(_)) => {
                        tracing::debug!(options_id = %id, "no option list, omitting");
                        Ok(None)
                    }
                    Err(e) => Err(OptionsError::from(e)),
                },
            }
        }
    });

    // buffered() yields in submission order, which is discovery order
    let mut results = stream::iter(fetches).buffered(concurrency.max(1));

    let mut dictionary = OptionsDictionary::new();
    while let Some(item) = results.next().await {
        if let Some((id, options)) = item? {
            let entry = dictionary.entry(id.to_string()).or_default();
            for option in options {
                entry.entry(option.label).or_insert(option.value);
            }
        }
    }

    tracing::debug!(
        requested = options_ids.len(),
        resolved = dictionary.len(),
        %language,
        "built options dictionary"
    );
    Ok(dictionary)
}
