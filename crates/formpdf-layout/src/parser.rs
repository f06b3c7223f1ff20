//! Layout document parsing
//!
//! Two extraction operations over the layout document:
//! - mapping declarations, from components that bind submitted-data
//!   locations to option-provider parameters
//! - option-list references, a full tree walk over the reserved field name

use crate::error::LayoutError;
use crate::expr::PathExpr;
use crate::model::{Component, MappingDeclaration};
use serde_json::Value;

/// Fixed location of the component array inside the layout document
pub const LAYOUT_COMPONENTS_PATH: &str = "data.layout";

/// Reserved field name referencing an option list
pub const OPTIONS_ID_FIELD: &str = "optionsId";

/// Reserved field name carrying a data-to-parameter mapping
pub const MAPPING_FIELD: &str = "mapping";

/// Parse raw layout text into a value tree
///
/// # Errors
/// `LayoutError::MalformedLayout` when the text is not valid JSON.
pub fn parse_layout(layout_json: &str) -> Result<Value, LayoutError> {
    serde_json::from_str(layout_json)
        .map_err(|e| LayoutError::MalformedLayout(format!("not valid JSON: {e}")))
}

/// Extract the mapping declarations from raw layout text
///
/// # Errors
/// `LayoutError::MalformedLayout` when the text is unparsable or misses the
/// component array; see [`extract_mapping_declarations`] for the structural
/// rules per component.
pub fn parse_mapping_declarations(layout_json: &str) -> Result<Vec<MappingDeclaration>, LayoutError> {
    let root = parse_layout(layout_json)?;
    extract_mapping_declarations(&root)
}

/// Extract the ordered option-list references from raw layout text
///
/// # Errors
/// `LayoutError::MalformedLayout` when the text is not valid JSON.
pub fn parse_option_references(layout_json: &str) -> Result<Vec<String>, LayoutError> {
    let root = parse_layout(layout_json)?;
    Ok(collect_option_references(&root))
}

/// Extract mapping declarations from a parsed layout
///
/// Selects only components carrying a `mapping` object. A selected
/// component must have `id`, `type` and `optionsId`; the mapping object's
/// values must be strings. Any violation is a structural defect. An empty
/// result is valid.
///
/// # Errors
/// `LayoutError::MalformedLayout` on a missing component array or a
/// structurally defective component.
pub fn extract_mapping_declarations(root: &Value) -> Result<Vec<MappingDeclaration>, LayoutError> {
    let components = PathExpr::parse(LAYOUT_COMPONENTS_PATH)?;
    let array = components
        .eval_single(root)
        .and_then(Value::as_array)
        .ok_or_else(|| {
            LayoutError::MalformedLayout(format!(
                "no component array at '{LAYOUT_COMPONENTS_PATH}'"
            ))
        })?;

    let mapped = PathExpr::parse(&format!(
        "{LAYOUT_COMPONENTS_PATH}[?(@.{MAPPING_FIELD})]"
    ))?;

    let mut declarations = Vec::new();
    for raw in mapped.eval(root) {
        let component: Component = serde_json::from_value(raw.clone()).map_err(|e| {
            LayoutError::MalformedLayout(format!("invalid mapped component: {e}"))
        })?;
        let options_id = component.options_id.ok_or_else(|| {
            LayoutError::MalformedLayout(format!(
                "component '{}' declares a mapping but no {OPTIONS_ID_FIELD}",
                component.id
            ))
        })?;

        let mapping = raw
            .get(MAPPING_FIELD)
            .and_then(Value::as_object)
            .ok_or_else(|| {
                LayoutError::MalformedLayout(format!(
                    "component '{}': {MAPPING_FIELD} is not an object",
                    component.id
                ))
            })?;

        let mut pairs = Vec::with_capacity(mapping.len());
        for (data_path, param) in mapping {
            let param = param.as_str().ok_or_else(|| {
                LayoutError::MalformedLayout(format!(
                    "component '{}': parameter name for '{data_path}' is not a string",
                    component.id
                ))
            })?;
            pairs.push((data_path.clone(), param.to_string()));
        }

        declarations.push(MappingDeclaration {
            component_id: component.id,
            options_id,
            pairs,
        });
    }

    tracing::debug!(
        declarations = declarations.len(),
        components = array.len(),
        "extracted mapping declarations"
    );
    Ok(declarations)
}

/// Collect every string bound to the reserved option-reference field,
/// wherever it appears in the document
///
/// Document order, duplicates allowed; the caller deduplicates on first
/// occurrence. Broader than mapping discovery since not every reference
/// has a mapping.
#[must_use]
pub fn collect_option_references(root: &Value) -> Vec<String> {
    let mut ids = Vec::new();
    walk_option_references(root, &mut ids);
    ids
}

fn walk_option_references(node: &Value, ids: &mut Vec<String>) {
    match node {
        Value::Object(map) => {
            for (key, value) in map {
                if key == OPTIONS_ID_FIELD {
                    if let Some(id) = value.as_str() {
                        ids.push(id.to_string());
                    }
                }
                walk_option_references(value, ids);
            }
        }
        Value::Array(items) => {
            for item in items {
                walk_option_references(item, ids);
            }
        }
        _ => {}
    }
}
