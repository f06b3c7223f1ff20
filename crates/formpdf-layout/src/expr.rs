//! Minimal path-expression evaluator
//!
//! Supports exactly the subset the layout engine needs:
//! - dot-separated field navigation (`a.b.c`)
//! - bracketed array indices (`items[0].name`)
//! - one filter form, `[?(@.field)]`, selecting array elements that carry
//!   a non-null `field`
//!
//! No-match evaluation never fails; it yields no nodes.

use crate::error::PathError;
use serde_json::Value;

/// One step of a parsed path expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Object field lookup
    Field(String),
    /// Array index lookup
    Index(usize),
    /// Array filter: keep elements carrying this field
    HasField(String),
}

/// A parsed path expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathExpr {
    segments: Vec<Segment>,
}

impl PathExpr {
    /// Parse an expression
    ///
    /// # Errors
    /// `PathError::InvalidPathExpression` when the text does not match the
    /// grammar `field ( '[' index | '?(@.' field ')' ']' )* ( '.' ... )*`.
    pub fn parse(raw: &str) -> Result<Self, PathError> {
        if raw.is_empty() {
            return Err(PathError::invalid(raw, "empty expression"));
        }

        let mut segments = Vec::new();
        let mut chars = raw.chars().peekable();

        loop {
            // Field name up to '.', '[' or end
            let mut field = String::new();
            while let Some(&c) = chars.peek() {
                if c == '.' || c == '[' {
                    break;
                }
                if c == ']' {
                    return Err(PathError::invalid(raw, "unexpected ']'"));
                }
                field.push(c);
                chars.next();
            }
            if field.is_empty() {
                return Err(PathError::invalid(raw, "empty field name"));
            }
            segments.push(Segment::Field(field));

            // Zero or more bracket suffixes
            while chars.peek() == Some(&'[') {
                chars.next();
                let mut body = String::new();
                loop {
                    match chars.next() {
                        Some(']') => break,
                        Some(c) => body.push(c),
                        None => return Err(PathError::invalid(raw, "unterminated '['")),
                    }
                }
                segments.push(parse_bracket(raw, &body)?);
            }

            match chars.next() {
                None => break,
                Some('.') => {
                    if chars.peek().is_none() {
                        return Err(PathError::invalid(raw, "trailing '.'"));
                    }
                }
                Some(c) => {
                    return Err(PathError::invalid(raw, format!("unexpected '{c}'")));
                }
            }
        }

        Ok(Self { segments })
    }

    /// Parsed segments
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Evaluate against a value tree, returning every matched node
    ///
    /// Filter segments may fan out to multiple nodes; field and index
    /// segments narrow. A step that does not apply drops the node.
    #[must_use]
    pub fn eval<'a>(&self, root: &'a Value) -> Vec<&'a Value> {
        let mut frontier = vec![root];
        for segment in &self.segments {
            let mut next = Vec::new();
            for node in frontier {
                match segment {
                    Segment::Field(name) => {
                        if let Some(v) = node.as_object().and_then(|o| o.get(name)) {
                            next.push(v);
                        }
                    }
                    Segment::Index(i) => {
                        if let Some(v) = node.as_array().and_then(|a| a.get(*i)) {
                            next.push(v);
                        }
                    }
                    Segment::HasField(name) => {
                        if let Some(items) = node.as_array() {
                            next.extend(items.iter().filter(|item| {
                                item.as_object()
                                    .and_then(|o| o.get(name))
                                    .is_some_and(|v| !v.is_null())
                            }));
                        }
                    }
                }
            }
            if next.is_empty() {
                return Vec::new();
            }
            frontier = next;
        }
        frontier
    }

    /// Evaluate to a single node; `None` when nothing matches
    #[must_use]
    pub fn eval_single<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        self.eval(root).into_iter().next()
    }
}

fn parse_bracket(raw: &str, body: &str) -> Result<Segment, PathError> {
    if let Some(inner) = body.strip_prefix("?(@.").and_then(|b| b.strip_suffix(')')) {
        if inner.is_empty() {
            return Err(PathError::invalid(raw, "empty filter field"));
        }
        return Ok(Segment::HasField(inner.to_string()));
    }
    body.parse::<usize>()
        .map(Segment::Index)
        .map_err(|_| PathError::invalid(raw, format!("invalid bracket content '{body}'")))
}

impl std::fmt::Display for PathExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for segment in &self.segments {
            match segment {
                Segment::Field(name) => {
                    if !first {
                        write!(f, ".")?;
                    }
                    write!(f, "{name}")?;
                }
                Segment::Index(i) => write!(f, "[{i}]")?,
                Segment::HasField(name) => write!(f, "[?(@.{name})]")?,
            }
            first = false;
        }
        Ok(())
    }
}
