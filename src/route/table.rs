//! Ordered path-pattern table with first-match-wins selection.
//!
//! Patterns match by segment prefix: `/room/:roomID` also matches
//! `/room/abc/extra`, and `/` matches every path.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("pattern `{0}` must start with '/'")]
    MissingLeadingSlash(String),
    #[error("pattern `{0}` has an unnamed parameter")]
    EmptyParam(String),
    #[error("pattern `{pattern}` repeats parameter `{name}`")]
    DuplicateParam { pattern: String, name: String },
    #[error("route table is empty")]
    Empty,
    #[error("last route `{0}` is not a catch-all")]
    MissingCatchAll(String),
    #[error("catch-all `{pattern}` at position {index} shadows the routes after it")]
    ShadowingCatchAll { pattern: String, index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A parsed path pattern such as `/room/:roomID` or `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    raw: String,
    segments: Vec<Segment>,
}

impl Pattern {
    pub fn parse(raw: &str) -> Result<Self, RouteError> {
        let Some(rest) = raw.strip_prefix('/') else {
            return Err(RouteError::MissingLeadingSlash(raw.to_owned()));
        };

        let mut segments = Vec::new();
        for part in split_path(rest) {
            if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(RouteError::EmptyParam(raw.to_owned()));
                }
                if segments.iter().any(|s| matches!(s, Segment::Param(n) if n == name)) {
                    return Err(RouteError::DuplicateParam {
                        pattern: raw.to_owned(),
                        name: name.to_owned(),
                    });
                }
                segments.push(Segment::Param(name.to_owned()));
            } else {
                segments.push(Segment::Literal(part.to_owned()));
            }
        }

        Ok(Self { raw: raw.to_owned(), segments })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// True when the pattern matches every path, i.e. `/`.
    pub fn is_catch_all(&self) -> bool {
        self.segments.is_empty()
    }

    /// Match the leading segments of a path, returning captured parameters.
    pub fn matches(&self, path: &str) -> Option<Params> {
        let parts = split_path(path);
        if parts.len() < self.segments.len() {
            return None;
        }

        let mut params = Params::default();
        for (segment, part) in self.segments.iter().zip(&parts) {
            match segment {
                Segment::Literal(lit) if lit == part => {}
                Segment::Literal(_) => return None,
                Segment::Param(_) if part.is_empty() => return None,
                Segment::Param(name) => params.0.push((name.clone(), (*part).to_owned())),
            }
        }
        Some(params)
    }
}

/// Splits a path into segments; the leading slash and one trailing slash are ignored.
fn split_path(path: &str) -> Vec<&str> {
    let path = path.strip_prefix('/').unwrap_or(path);
    let path = path.strip_suffix('/').unwrap_or(path);
    if path.is_empty() { Vec::new() } else { path.split('/').collect() }
}

/// Path parameters captured by a match, passed through verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Matched<'a, T> {
    pub pattern: &'a Pattern,
    pub target: &'a T,
    pub params: Params,
}

/// Routes checked in order. Always ends with a catch-all, so selection never fails.
#[derive(Debug, Clone)]
pub struct RouteTable<T> {
    entries: Vec<(Pattern, T)>,
}

impl<T> RouteTable<T> {
    pub fn new(entries: Vec<(Pattern, T)>) -> Result<Self, RouteError> {
        let Some((last, _)) = entries.last() else {
            return Err(RouteError::Empty);
        };
        if !last.is_catch_all() {
            return Err(RouteError::MissingCatchAll(last.raw.clone()));
        }
        let last_index = entries.len() - 1;
        if let Some(index) = entries[..last_index].iter().position(|(p, _)| p.is_catch_all()) {
            let pattern = entries[index].0.raw.clone();
            return Err(RouteError::ShadowingCatchAll { pattern, index });
        }
        Ok(Self { entries })
    }

    /// Parse each pattern then validate the table.
    pub fn from_patterns<'p>(
        entries: impl IntoIterator<Item = (&'p str, T)>,
    ) -> Result<Self, RouteError> {
        let entries = entries
            .into_iter()
            .map(|(raw, target)| Pattern::parse(raw).map(|p| (p, target)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(entries)
    }

    pub fn select(&self, path: &str) -> Matched<'_, T> {
        for (pattern, target) in &self.entries {
            if let Some(params) = pattern.matches(path) {
                return Matched { pattern, target, params };
            }
        }
        // `new` guarantees a trailing catch-all, and it matches every path.
        let (pattern, target) = &self.entries[self.entries.len() - 1];
        Matched { pattern, target, params: Params::default() }
    }
}
