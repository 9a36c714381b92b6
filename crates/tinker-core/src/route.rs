//! Declarative route table: path patterns → views + parameters.
//!
//! Patterns are `/`-separated segments. A segment starting with `:` binds
//! the path component at that position to a named parameter; every other
//! segment must match literally. Matching is whole-path only: same number
//! of segments, literals equal, parameters non-empty. The first matching
//! route in table order wins.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use tracing::trace;

use crate::error::RouteError;
use crate::view::ViewId;

/// The dashboard's navigation table, in evaluation order.
const STANDARD_ROUTES: [(&str, ViewId); 5] = [
    ("/", ViewId::Dashboard),
    ("/sensors", ViewId::SensorList),
    ("/sensor/:id", ViewId::SensorDetail),
    ("/spaces", ViewId::SpaceList),
    ("/space/:id", ViewId::SpaceDetail),
];

// ── Segments ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

fn split_segments(path: &str) -> Vec<&str> {
    match path.strip_prefix('/') {
        Some("") => Vec::new(),
        Some(rest) => rest.split('/').collect(),
        None => vec![path],
    }
}

// ── Route ───────────────────────────────────────────────────────────

/// One compiled `pattern → view` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pattern: String,
    view: ViewId,
    segments: Vec<Segment>,
    param_names: Vec<String>,
}

impl Route {
    /// Compile `pattern`, rejecting relative paths, empty segments,
    /// unnamed or duplicate parameters.
    pub fn new(pattern: &str, view: ViewId) -> Result<Self, RouteError> {
        let invalid = |reason: &str| RouteError::InvalidPattern {
            pattern: pattern.to_owned(),
            reason: reason.to_owned(),
        };

        if !pattern.starts_with('/') {
            return Err(invalid("must start with '/'"));
        }

        let route = Self::compile(pattern, view);

        for segment in &route.segments {
            match segment {
                Segment::Literal(lit) if lit.is_empty() => {
                    return Err(invalid("empty segment"));
                }
                Segment::Param(name) if name.is_empty() => {
                    return Err(invalid("parameter without a name"));
                }
                _ => {}
            }
        }

        let mut names: Vec<&String> = route.param_names.iter().collect();
        names.sort();
        if names.windows(2).any(|w| w[0] == w[1]) {
            return Err(invalid("duplicate parameter name"));
        }

        Ok(route)
    }

    fn compile(pattern: &str, view: ViewId) -> Self {
        let segments: Vec<Segment> = split_segments(pattern)
            .into_iter()
            .map(|s| match s.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_owned()),
                None => Segment::Literal(s.to_owned()),
            })
            .collect();

        let param_names = segments
            .iter()
            .filter_map(|s| match s {
                Segment::Param(name) => Some(name.clone()),
                Segment::Literal(_) => None,
            })
            .collect();

        Self {
            pattern: pattern.to_owned(),
            view,
            segments,
            param_names,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn view(&self) -> ViewId {
        self.view
    }

    /// Parameter names in the order they appear in the pattern.
    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    /// Bind `parts` against this pattern, or `None` if it doesn't match.
    fn bind(&self, parts: &[&str]) -> Option<RouteParams> {
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = Vec::with_capacity(self.param_names.len());
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(lit) if lit == part => {}
                Segment::Param(name) if !part.is_empty() => {
                    params.push((name.clone(), (*part).to_owned()));
                }
                _ => return None,
            }
        }
        Some(RouteParams(params))
    }
}

// ── Resolution result ───────────────────────────────────────────────

/// Path parameters bound by a match, in pattern order.
///
/// Values are the raw path components: no decoding, no type coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteParams(Vec<(String, String)>);

impl RouteParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl Serialize for RouteParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// The view a path selects and the parameters handed to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch {
    pub view: ViewId,
    pub params: RouteParams,
}

// ── RouteTable ──────────────────────────────────────────────────────

/// Ordered, immutable set of routes. Built once and passed to whoever
/// navigates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl RouteTable {
    /// The dashboard's five routes.
    pub fn standard() -> Self {
        Self {
            routes: STANDARD_ROUTES
                .iter()
                .map(|(pattern, view)| Route::compile(pattern, *view))
                .collect(),
        }
    }

    /// Build a table from already compiled routes, kept in the given order.
    pub fn from_routes(routes: impl IntoIterator<Item = Route>) -> Self {
        Self {
            routes: routes.into_iter().collect(),
        }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    /// Resolve a navigation path to a view and its parameters.
    ///
    /// Any `?query` or `#fragment` suffix is ignored.
    pub fn resolve(&self, path: &str) -> Result<RouteMatch, RouteError> {
        let bare = path.split(['?', '#']).next().unwrap_or_default();
        let not_found = || RouteError::NotFound {
            path: path.to_owned(),
        };

        if !bare.starts_with('/') {
            trace!(path, "relative path, not resolvable");
            return Err(not_found());
        }

        let parts = split_segments(bare);
        for route in &self.routes {
            if let Some(params) = route.bind(&parts) {
                trace!(path, pattern = route.pattern(), view = %route.view(), "route matched");
                return Ok(RouteMatch {
                    view: route.view(),
                    params,
                });
            }
        }

        trace!(path, "no route matched");
        Err(not_found())
    }

    /// Build the concrete path for `view` from named parameter values.
    pub fn path_for(&self, view: ViewId, params: &[(&str, &str)]) -> Result<String, RouteError> {
        let route = self
            .routes
            .iter()
            .find(|r| r.view == view)
            .ok_or(RouteError::UnknownView { view })?;

        let mut parts = Vec::with_capacity(route.segments.len());
        for segment in &route.segments {
            match segment {
                Segment::Literal(lit) => parts.push(lit.as_str()),
                Segment::Param(name) => {
                    let value = params
                        .iter()
                        .find(|(n, _)| n == name)
                        .map(|(_, v)| *v)
                        .ok_or_else(|| RouteError::MissingParam {
                            name: name.clone(),
                            pattern: route.pattern.clone(),
                        })?;
                    if value.is_empty() || value.contains(['/', '?', '#']) {
                        return Err(RouteError::InvalidParam {
                            name: name.clone(),
                            value: value.to_owned(),
                        });
                    }
                    parts.push(value);
                }
            }
        }

        Ok(format!("/{}", parts.join("/")))
    }
}
