//! formpdf-options - Option resolution for PDF summaries
//!
//! Turns raw option codes into human-readable labels:
//! - Mapping resolution: evaluates declared data paths against the
//!   submitted data into per-option-list parameter maps
//! - Aggregation: queries the option provider per id and merges results
//!   into one deduplicated, discovery-ordered label→value dictionary
//!
//! # Example
//!
//! ```rust,ignore
//! use formpdf_options::{build_options_dictionary, resolve_mappings};
//!
//! let context = resolve_mappings(&declarations, &submitted_data);
//! let dictionary = build_options_dictionary(
//!     &option_ids, "nb", &context, provider.as_ref(), 8, &cancel,
//! ).await?;
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod aggregator;
pub mod error;
pub mod mapping;
pub mod provider;

// Re-exports for convenience
pub use aggregator::{build_options_dictionary, first_occurrence_dedup, OptionsDictionary};
pub use error::{OptionsError, ProviderError};
pub use mapping::{resolve_mappings, OptionMappingContext, ParamMap};
pub use provider::{AppOption, OptionsProvider};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for option resolution
    pub use crate::{
        build_options_dictionary, first_occurrence_dedup, resolve_mappings, AppOption,
        OptionMappingContext, OptionsDictionary, OptionsError, OptionsProvider, ProviderError,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
