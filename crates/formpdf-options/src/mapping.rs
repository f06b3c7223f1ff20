//! Mapping resolution
//!
//! Evaluates each declaration's data paths against the submitted data,
//! producing per-option-list parameter maps. Resolution is best-effort: a
//! pair whose path reaches no node is skipped, and only an entirely
//! malformed path expression discards a declaration. A broken mapping must
//! not sink the whole PDF over a cosmetic gap.

use formpdf_layout::{MappingDeclaration, PathExpr};
use indexmap::IndexMap;
use serde_json::Value;

/// Resolved parameters for one option list
pub type ParamMap = IndexMap<String, String>;

/// Resolved parameters per option list
///
/// Built incrementally during one request, never retracted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionMappingContext {
    by_options_id: IndexMap<String, ParamMap>,
}

impl OptionMappingContext {
    /// Empty context
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters resolved for an option list, if any
    #[inline]
    #[must_use]
    pub fn params_for(&self, options_id: &str) -> Option<&ParamMap> {
        self.by_options_id.get(options_id)
    }

    /// Number of option lists with resolved parameters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_options_id.len()
    }

    /// Whether no parameters were resolved at all
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_options_id.is_empty()
    }

    fn insert(&mut self, options_id: &str, param: String, value: String) {
        self.by_options_id
            .entry(options_id.to_string())
            .or_default()
            .insert(param, value);
    }
}

/// Resolve every declaration against the submitted data
///
/// Multiple declarations may contribute to the same option list; a later
/// declaration overwrites same-named parameters. Missing paths are skipped
/// with a warning; a declaration containing an invalid path expression is
/// discarded whole. Never fails.
#[must_use]
pub fn resolve_mappings(declarations: &[MappingDeclaration], data: &Value) -> OptionMappingContext {
    let mut context = OptionMappingContext::new();

    'declarations: for declaration in declarations {
        let mut resolved = Vec::with_capacity(declaration.pairs.len());
        for (data_path, param) in &declaration.pairs {
            let expr = match PathExpr::parse(data_path) {
                Ok(expr) => expr,
                Err(e) => {
                    tracing::warn!(
                        component = %declaration.component_id,
                        options_id = %declaration.options_id,
                        error = %e,
                        "discarding declaration with invalid data path"
                    );
                    continue 'declarations;
                }
            };
            resolved.push((expr, param));
        }

        for (expr, param) in resolved {
            match expr.eval_single(data).and_then(scalar_string) {
                Some(value) => context.insert(&declaration.options_id, param.clone(), value),
                None => {
                    tracing::warn!(
                        options_id = %declaration.options_id,
                        path = %expr,
                        param = %param,
                        "data path resolved to no scalar, skipping parameter"
                    );
                }
            }
        }
    }

    context
}

/// Canonical string form of a scalar leaf
///
/// Strings contribute their content, numbers and booleans their JSON
/// rendering. Null and composite values are not scalars.
fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
