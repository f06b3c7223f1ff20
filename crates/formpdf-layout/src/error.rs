//! Error types for layout parsing and path evaluation

/// Path-expression errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// Expression text does not match the supported grammar
    #[error("invalid path expression '{expr}': {reason}")]
    InvalidPathExpression {
        /// The offending expression
        expr: String,
        /// What the scanner tripped over
        reason: String,
    },
}

impl PathError {
    pub(crate) fn invalid(expr: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPathExpression {
            expr: expr.into(),
            reason: reason.into(),
        }
    }
}

/// Layout document errors
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// Document is not parsable or misses required structure
    #[error("malformed layout: {0}")]
    MalformedLayout(String),

    /// A path expression used during extraction is invalid
    #[error("path error: {0}")]
    Path(#[from] PathError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_error_display() {
        let err = PathError::invalid("a..b", "empty field name");
        assert!(err.to_string().contains("a..b"));
        assert!(err.to_string().contains("empty field name"));
    }

    #[test]
    fn layout_error_wraps_path_error() {
        let err: LayoutError = PathError::invalid("a[", "unterminated bracket").into();
        assert!(err.to_string().contains("unterminated bracket"));
    }
}
