//! # repolens-router
//!
//! A declarative route table for page-based front-ends, with support for:
//! - Literal routes (`/AboutUs`)
//! - Parameterized routes (`/RepoDetails/:id`)
//! - A single wildcard fallback (`/*rest`) that makes resolution total
//! - Named routes with URL generation for programmatic navigation
//! - Web history mode with a deployment base path
//!
//! The table is constructed once through a validating builder and is
//! immutable afterwards. Non-wildcard routes are tried in declaration
//! order; the wildcard fallback is held apart from the ordered list and
//! consulted last, so [`RouteTable::resolve`] always produces a match and
//! never an error.
//!
//! ## Path normalization
//!
//! Patterns and incoming paths are both normalized (trailing slashes,
//! duplicate slashes), so `/AboutUs` and `/AboutUs/` name the same route.
//!
//! ## Example
//!
//! ```
//! use repolens_router::{Route, RouteTable};
//!
//! let table = RouteTable::builder()
//!     .route(Route::new("/", "home", "home"))
//!     .route(Route::new("/RepoDetails/:id", "repo-details", "repo-details").with_forwarded_params())
//!     .route(Route::new("/AboutUs", "about", "about"))
//!     .route(Route::fallback("not-found", "not-found"))
//!     .build()
//!     .unwrap();
//!
//! let m = table.resolve("/RepoDetails/42");
//! assert_eq!(m.route().name(), "repo-details");
//! assert_eq!(m.params().get("id"), Some("42"));
//!
//! let m = table.resolve("/no/such/page");
//! assert!(m.is_fallback());
//! ```

mod history;
pub mod path;
pub mod route;

pub use history::History;
pub use path::{is_canonical, normalize};
pub use route::pattern::{classify_segment, parse_pattern, Segment};

use std::collections::HashSet;

use thiserror::Error;

// ============================================================================
// Core Types
// ============================================================================

/// A single entry of the route table.
///
/// A route binds a path pattern to a page, identified by a `target` key.
/// The table does not own page definitions; the key is looked up in a page
/// registry managed elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pattern: String,
    segments: Vec<Segment>,
    name: String,
    target: String,
    forward_params: bool,
}

impl Route {
    /// Creates a route binding `pattern` to the page named by `target`.
    ///
    /// The pattern is normalized on the way in; segment-level parsing never
    /// fails, and structural rules are checked by
    /// [`RouteTableBuilder::build`].
    ///
    /// # Examples
    ///
    /// ```
    /// use repolens_router::Route;
    ///
    /// let route = Route::new("/RepoDetails/:id", "repo-details", "repo-details");
    /// assert_eq!(route.pattern(), "/RepoDetails/:id");
    /// assert_eq!(route.param_names(), vec!["id"]);
    /// ```
    pub fn new(
        pattern: impl Into<String>,
        name: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        let pattern = path::normalize(&pattern.into()).into_owned();
        let segments = route::pattern::parse_pattern(&pattern);
        Self {
            pattern,
            segments,
            name: name.into(),
            target: target.into(),
            forward_params: false,
        }
    }

    /// Creates the catch-all fallback route (`/*rest`).
    ///
    /// Every table needs exactly one wildcard route; this is the idiomatic
    /// way to declare it.
    pub fn fallback(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new("/*rest", name, target)
    }

    /// Marks matched path parameters for forwarding as page inputs.
    ///
    /// Off by default: a page only receives parameter values when its route
    /// opts in.
    ///
    /// # Examples
    ///
    /// ```
    /// use repolens_router::Route;
    ///
    /// let route = Route::new("/RepoDetails/:id", "repo-details", "repo-details")
    ///     .with_forwarded_params();
    /// assert!(route.forwards_params());
    /// ```
    pub fn with_forwarded_params(mut self) -> Self {
        self.forward_params = true;
        self
    }

    /// The normalized path pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The unique route name, used for programmatic navigation.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The page-registry key this route renders.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Whether matched parameters are forwarded as page inputs.
    pub fn forwards_params(&self) -> bool {
        self.forward_params
    }

    /// Whether this route contains a wildcard segment.
    pub fn is_wildcard(&self) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Wildcard(_)))
    }

    /// The parameter names appearing in the pattern, in order.
    pub fn param_names(&self) -> Vec<&str> {
        self.segments.iter().filter_map(Segment::param_name).collect()
    }

    /// Matches this route against a path, extracting parameters.
    ///
    /// The path is normalized first, so trailing-slash variants match.
    /// A wildcard segment captures the entire remaining path (possibly
    /// empty), slashes included.
    ///
    /// # Examples
    ///
    /// ```
    /// use repolens_router::Route;
    ///
    /// let route = Route::new("/RepoDetails/:id", "repo-details", "repo-details");
    /// let params = route.matches("/RepoDetails/42").unwrap();
    /// assert_eq!(params.get("id"), Some("42"));
    /// assert!(route.matches("/RepoDetails").is_none());
    /// assert!(route.matches("/RepoDetails/42/extra").is_none());
    /// ```
    pub fn matches(&self, input: &str) -> Option<Params> {
        let normalized = path::normalize(input);
        let segments: Vec<&str> = normalized.split('/').filter(|s| !s.is_empty()).collect();
        self.match_segments(&segments)
    }

    /// Matches against pre-split path segments.
    ///
    /// [`RouteTable::resolve`] normalizes and splits once, then walks every
    /// route with the same slice.
    fn match_segments(&self, input: &[&str]) -> Option<Params> {
        let mut params = Params::new();
        for (idx, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Static(text) => {
                    if input.get(idx).copied() != Some(text.as_str()) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let value = input.get(idx)?;
                    params.insert(name.as_str(), *value);
                }
                Segment::Wildcard(name) => {
                    let rest = input.get(idx..).unwrap_or(&[]);
                    params.insert(name.as_str(), rest.join("/"));
                    return Some(params);
                }
            }
        }
        if input.len() == self.segments.len() {
            Some(params)
        } else {
            None
        }
    }

    /// Generates a URL for this route by substituting parameter values.
    ///
    /// Returns `None` when a parameter named in the pattern is missing from
    /// `params`. An empty wildcard value collapses to nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use repolens_router::Route;
    ///
    /// let route = Route::new("/RepoDetails/:id", "repo-details", "repo-details");
    /// assert_eq!(route.url(&[("id", "42")]).as_deref(), Some("/RepoDetails/42"));
    /// assert_eq!(route.url(&[]), None);
    /// ```
    pub fn url(&self, params: &[(&str, &str)]) -> Option<String> {
        let lookup = |name: &str| {
            params
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| *value)
        };

        let mut url = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Static(text) => {
                    url.push('/');
                    url.push_str(text);
                }
                Segment::Param(name) | Segment::Wildcard(name) => {
                    let value = lookup(name)?;
                    if !value.is_empty() {
                        url.push('/');
                        url.push_str(value);
                    }
                }
            }
        }

        if url.is_empty() {
            Some("/".to_string())
        } else {
            Some(url)
        }
    }
}

/// Parameter values extracted from a matched path, in pattern order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a parameter value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Appends a parameter.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for Params {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Result of resolving a path against the table: the selected route plus
/// the extracted parameter values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'t> {
    route: &'t Route,
    params: Params,
}

impl<'t> RouteMatch<'t> {
    /// The matched route.
    pub fn route(&self) -> &'t Route {
        self.route
    }

    /// All parameters extracted from the path.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// The parameters forwarded to the page as inputs.
    ///
    /// Empty unless the route was declared with
    /// [`Route::with_forwarded_params`].
    pub fn props(&self) -> Params {
        if self.route.forward_params {
            self.params.clone()
        } else {
            Params::new()
        }
    }

    /// Whether the wildcard fallback produced this match.
    pub fn is_fallback(&self) -> bool {
        self.route.is_wildcard()
    }
}

// ============================================================================
// Table Construction
// ============================================================================

/// Invariant violations detected when building a [`RouteTable`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// Two routes share a name; names must be unique for navigation.
    #[error("duplicate route name `{0}`")]
    DuplicateName(String),

    /// No wildcard route was declared; without one, resolution is partial.
    #[error("route table has no wildcard fallback route")]
    MissingFallback,

    /// More than one wildcard route was declared.
    #[error("route `{extra}` declares a second wildcard (first was `{first}`)")]
    ExtraFallback { first: String, extra: String },

    /// A `:` or `*` segment has no name to bind the value to.
    #[error("route `{name}` has an empty parameter name in pattern `{pattern}`")]
    EmptyParamName { name: String, pattern: String },

    /// A wildcard segment is followed by further segments it would swallow.
    #[error("route `{name}` places a wildcard before the end of pattern `{pattern}`")]
    WildcardNotLast { name: String, pattern: String },
}

/// Accumulates routes, then validates the table invariants.
#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    routes: Vec<Route>,
}

impl RouteTableBuilder {
    /// Adds a route. Declaration order is the matching order.
    pub fn route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    /// Validates the invariants and produces the immutable table.
    ///
    /// Checks, in declaration order: every parameter segment is named, any
    /// wildcard is the final segment of its pattern, route names are
    /// unique; then requires exactly one wildcard route across the table.
    ///
    /// # Examples
    ///
    /// ```
    /// use repolens_router::{Route, RouteTable, TableError};
    ///
    /// let err = RouteTable::builder()
    ///     .route(Route::new("/", "home", "home"))
    ///     .route(Route::new("/AboutUs", "home", "about"))
    ///     .route(Route::fallback("not-found", "not-found"))
    ///     .build()
    ///     .unwrap_err();
    /// assert_eq!(err, TableError::DuplicateName("home".to_string()));
    /// ```
    pub fn build(self) -> Result<RouteTable, TableError> {
        let mut names = HashSet::new();
        for route in &self.routes {
            validate_segments(route)?;
            if !names.insert(route.name.clone()) {
                return Err(TableError::DuplicateName(route.name.clone()));
            }
        }

        let (wildcards, routes): (Vec<_>, Vec<_>) =
            self.routes.into_iter().partition(Route::is_wildcard);

        let mut wildcards = wildcards.into_iter();
        let fallback = wildcards.next().ok_or(TableError::MissingFallback)?;
        if let Some(extra) = wildcards.next() {
            return Err(TableError::ExtraFallback {
                first: fallback.name,
                extra: extra.name,
            });
        }

        Ok(RouteTable { routes, fallback })
    }
}

fn validate_segments(route: &Route) -> Result<(), TableError> {
    let last = route.segments.len().saturating_sub(1);
    for (idx, segment) in route.segments.iter().enumerate() {
        match segment {
            Segment::Static(_) => {}
            Segment::Param(name) if name.is_empty() => {
                return Err(TableError::EmptyParamName {
                    name: route.name.clone(),
                    pattern: route.pattern.clone(),
                });
            }
            Segment::Param(_) => {}
            Segment::Wildcard(name) => {
                if name.is_empty() {
                    return Err(TableError::EmptyParamName {
                        name: route.name.clone(),
                        pattern: route.pattern.clone(),
                    });
                }
                if idx != last {
                    return Err(TableError::WildcardNotLast {
                        name: route.name.clone(),
                        pattern: route.pattern.clone(),
                    });
                }
            }
        }
    }
    Ok(())
}

// ============================================================================
// Route Table
// ============================================================================

/// The immutable route table.
///
/// Built once at application start; resolution is read-only afterwards.
/// The wildcard fallback lives outside the ordered route list, which makes
/// "evaluated last" structural rather than a sorting convention, and makes
/// resolution total: every path selects some route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
    fallback: Route,
}

impl RouteTable {
    /// Starts building a table.
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::default()
    }

    /// Resolves a path to a route.
    ///
    /// Non-wildcard routes are tried in declaration order; when none match,
    /// the wildcard fallback matches whatever is left. There is no failure
    /// case.
    ///
    /// # Examples
    ///
    /// ```
    /// use repolens_router::{Route, RouteTable};
    ///
    /// let table = RouteTable::builder()
    ///     .route(Route::new("/AboutUs", "about", "about"))
    ///     .route(Route::fallback("not-found", "not-found"))
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(table.resolve("/AboutUs/").route().name(), "about");
    /// assert_eq!(table.resolve("/missing").route().name(), "not-found");
    /// ```
    pub fn resolve(&self, input: &str) -> RouteMatch<'_> {
        let normalized = path::normalize(input);
        let segments: Vec<&str> = normalized.split('/').filter(|s| !s.is_empty()).collect();

        let matched = self.routes.iter().find_map(|route| {
            route
                .match_segments(&segments)
                .map(|params| RouteMatch { route, params })
        });
        if let Some(m) = matched {
            return m;
        }

        // A trailing wildcard matches every segment list, so this never
        // falls back to empty params in practice.
        let params = self.fallback.match_segments(&segments).unwrap_or_default();
        RouteMatch {
            route: &self.fallback,
            params,
        }
    }

    /// Generates a URL from a route name and parameter values.
    ///
    /// Returns `None` for an unknown name or missing parameters.
    ///
    /// # Examples
    ///
    /// ```
    /// use repolens_router::{Route, RouteTable};
    ///
    /// let table = RouteTable::builder()
    ///     .route(Route::new("/RepoDetails/:id", "repo-details", "repo-details"))
    ///     .route(Route::fallback("not-found", "not-found"))
    ///     .build()
    ///     .unwrap();
    ///
    /// let url = table.url_for("repo-details", &[("id", "42")]);
    /// assert_eq!(url.as_deref(), Some("/RepoDetails/42"));
    /// ```
    pub fn url_for(&self, name: &str, params: &[(&str, &str)]) -> Option<String> {
        self.route_by_name(name)?.url(params)
    }

    /// Looks up a route by its unique name.
    pub fn route_by_name(&self, name: &str) -> Option<&Route> {
        self.routes().find(|route| route.name == name)
    }

    /// Iterates over every route, the wildcard fallback last.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter().chain(std::iter::once(&self.fallback))
    }

    /// The wildcard fallback route.
    pub fn fallback(&self) -> &Route {
        &self.fallback
    }

    /// Number of routes in the table, fallback included. Never zero.
    pub fn len(&self) -> usize {
        self.routes.len() + 1
    }
}
