//! formpdf-layout - Layout documents for PDF summaries
//!
//! Everything the engine knows about the layout document:
//! - Typed model for components, layout settings and layout sets
//! - Mapping-declaration and option-reference extraction
//! - The minimal path-expression evaluator the extractors and the
//!   mapping resolver share
//!
//! # Example
//!
//! ```rust
//! use formpdf_layout::{parse_mapping_declarations, parse_option_references};
//!
//! let layout = r#"{"data": {"layout": [
//!     {"id": "color", "type": "Dropdown", "optionsId": "colors",
//!      "mapping": {"form.country": "country"}}
//! ]}}"#;
//!
//! let declarations = parse_mapping_declarations(layout).unwrap();
//! assert_eq!(declarations[0].options_id, "colors");
//!
//! let refs = parse_option_references(layout).unwrap();
//! assert_eq!(refs, vec!["colors"]);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod error;
pub mod expr;
pub mod model;
pub mod parser;

// Re-exports for convenience
pub use error::{LayoutError, PathError};
pub use expr::{PathExpr, Segment};
pub use model::{
    Component, ComponentSettings, LayoutSet, LayoutSettings, MappingDeclaration, PageSettings,
    select_layout_set,
};
pub use parser::{
    collect_option_references, extract_mapping_declarations, parse_layout,
    parse_mapping_declarations, parse_option_references, LAYOUT_COMPONENTS_PATH, MAPPING_FIELD,
    OPTIONS_ID_FIELD,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with layout documents
    pub use crate::{
        parse_mapping_declarations, parse_option_references, LayoutError, LayoutSet,
        LayoutSettings, MappingDeclaration, PathExpr,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
