//! Path pattern parsing and rendering.
//!
//! # Responsibilities
//! - Parse a path template into literal and parameter segments at registration
//! - Render a template back into a concrete path (lenient and strict)
//! - Match a concrete request path against a template, capturing parameters
//!
//! # Design Decisions
//! - Parameters use the `:name` segment syntax (e.g. `/blog/:slug`)
//! - Parsing cannot fail; any non-`:` segment is a literal
//! - Lenient rendering replicates plain text substitution: unknown keys are
//!   ignored and unsupplied parameters stay in the output as `:name`
//! - Strict rendering fails on missing or unused parameters
//! - No regex; segment comparison is exact and O(n)

use thiserror::Error;

/// Errors from strict template rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// The template contains a parameter the caller did not supply.
    #[error("missing value for parameter `:{0}`")]
    MissingParam(String),

    /// The caller supplied a parameter the template does not contain.
    #[error("parameter `{0}` does not appear in the template")]
    UnusedParam(String),
}

/// One segment of a parsed path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Fixed text, matched exactly.
    Literal(String),
    /// Named variable segment, captures whatever appears in its position.
    Param(String),
}

/// Parameters captured from matching a concrete path against a template.
///
/// Preserves the parameter order of the template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams(Vec<(String, String)>);

impl PathParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A path template parsed into segments.
///
/// Parsed once when a route is registered and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a template. `/` parses to an empty segment list.
    pub fn parse(path: impl Into<String>) -> Self {
        let raw = path.into();
        let segments = split(&raw)
            .into_iter()
            .map(|seg| match seg.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Literal(seg.to_string()),
            })
            .collect();
        Self { raw, segments }
    }

    /// The template exactly as registered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names of the parameter segments, in template order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|seg| match seg {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Lenient rendering: for each supplied `(key, value)` pair, the first
    /// occurrence of the literal token `:key` is replaced with `value`.
    ///
    /// Unknown keys are no-ops and unsupplied parameters remain in the
    /// output verbatim. Replacement happens in the order the pairs are given.
    pub fn render(&self, params: &[(&str, &str)]) -> String {
        let mut path = self.raw.clone();
        for (key, value) in params {
            path = path.replacen(&format!(":{key}"), value, 1);
        }
        path
    }

    /// Strict rendering: every template parameter must be supplied and every
    /// supplied parameter must appear in the template.
    pub fn render_strict(&self, params: &[(&str, &str)]) -> Result<String, PatternError> {
        for (key, _) in params {
            if !self.param_names().any(|name| name == *key) {
                return Err(PatternError::UnusedParam((*key).to_string()));
            }
        }

        if self.segments.is_empty() {
            return Ok("/".to_string());
        }

        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            match segment {
                Segment::Literal(lit) => out.push_str(lit),
                Segment::Param(name) => {
                    let value = params
                        .iter()
                        .find(|(k, _)| *k == name.as_str())
                        .map(|(_, v)| *v)
                        .ok_or_else(|| PatternError::MissingParam(name.clone()))?;
                    out.push_str(value);
                }
            }
        }
        Ok(out)
    }

    /// Match a concrete path, capturing parameter values.
    ///
    /// Literal segments compare exactly (case-sensitive); trailing slashes
    /// are insignificant.
    pub fn matches(&self, path: &str) -> Option<PathParams> {
        let given = split(path);
        if given.len() != self.segments.len() {
            return None;
        }

        let mut captured = Vec::new();
        for (segment, got) in self.segments.iter().zip(given) {
            match segment {
                Segment::Literal(lit) => {
                    if lit != got {
                        return None;
                    }
                }
                Segment::Param(name) => captured.push((name.clone(), got.to_string())),
            }
        }
        Some(PathParams(captured))
    }
}

fn split(path: &str) -> Vec<&str> {
    path.split('/').filter(|seg| !seg.is_empty()).collect()
}
