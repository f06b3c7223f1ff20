//! Layout document model
//!
//! Typed views over the layout document:
//! - components and their option mappings
//! - layout settings with normalized page/component collections
//! - layout sets and their selection rule

use serde::{Deserialize, Serialize};

/// A form component as it appears in the layout's component array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Component id
    pub id: String,
    /// Component type tag
    #[serde(rename = "type")]
    pub kind: String,
    /// Referenced option list, when any
    #[serde(rename = "optionsId", skip_serializing_if = "Option::is_none")]
    pub options_id: Option<String>,
}

/// Declarative binding from submitted-data locations to provider parameters
///
/// One per component that carries a `mapping` object. Pair order follows
/// the mapping object's own key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingDeclaration {
    /// Id of the declaring component
    pub component_id: String,
    /// Option list the parameters are for
    pub options_id: String,
    /// Ordered `(data path, parameter name)` pairs
    pub pairs: Vec<(String, String)>,
}

/// Page-level settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageSettings {
    /// Page render order
    pub order: Vec<String>,
    /// Pages left out of the PDF
    pub exclude_from_pdf: Vec<String>,
}

/// Component-level settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComponentSettings {
    /// Components left out of the PDF
    pub exclude_from_pdf: Vec<String>,
}

/// Layout settings, normalized
///
/// Deserialization defaults every collection, so page-ordering and the two
/// exclusion lists are always present even when the raw settings omit them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Page settings
    pub pages: PageSettings,
    /// Component settings
    pub components: ComponentSettings,
}

impl LayoutSettings {
    /// Parse raw settings text; `None` yields the normalized default
    ///
    /// # Errors
    /// `serde_json::Error` when the text is present but not valid JSON.
    pub fn from_json(raw: Option<&str>) -> Result<Self, serde_json::Error> {
        match raw {
            Some(text) => serde_json::from_str(text),
            None => Ok(Self::default()),
        }
    }
}

/// A named grouping of a layout and its settings, scoped to tasks and a
/// data type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSet {
    /// Set id
    pub id: String,
    /// Data type the set applies to
    pub data_type: String,
    /// Process tasks the set applies to
    #[serde(default)]
    pub tasks: Vec<String>,
}

/// Select the layout set matching a data type and task, if any
///
/// First match wins; the caller falls back to the application default
/// layout when this returns `None`.
#[must_use]
pub fn select_layout_set<'a>(
    sets: &'a [LayoutSet],
    data_type: &str,
    task_id: &str,
) -> Option<&'a LayoutSet> {
    sets.iter()
        .find(|set| set.data_type == data_type && set.tasks.iter().any(|t| t == task_id))
}
