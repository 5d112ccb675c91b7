//! Route matching module
//!
//! Exact patterns are checked before prefix patterns; among prefixes the
//! longest one wins.

use crate::catalog::Collection;

/// Path pattern of a single route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPattern {
    /// Whole path must equal the pattern
    Exact(String),
    /// Path must start with the pattern
    Prefix(String),
}

/// Handler a route dispatches to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    Home,
    List,
    /// Lookup by id; the id token follows the prefix
    Lookup,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub pattern: PathPattern,
    pub kind: RouteKind,
}

impl Route {
    fn exact(path: &str, kind: RouteKind) -> Self {
        Self {
            pattern: PathPattern::Exact(path.to_string()),
            kind,
        }
    }

    fn prefix(path: &str, kind: RouteKind) -> Self {
        Self {
            pattern: PathPattern::Prefix(path.to_string()),
            kind,
        }
    }

    /// Portion of `path` after a prefix pattern; empty for exact patterns
    pub fn remainder<'p>(&self, path: &'p str) -> &'p str {
        match &self.pattern {
            PathPattern::Exact(_) => "",
            PathPattern::Prefix(prefix) => path.strip_prefix(prefix.as_str()).unwrap_or(""),
        }
    }
}

/// Fixed set of routes for one process
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub const fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// `/` catch-all home, the list route, and `<collection>/` when lookup is enabled
    pub fn for_collection(collection: &dyn Collection) -> Self {
        let path = collection.collection_path();
        let mut routes = vec![
            Route::prefix("/", RouteKind::Home),
            Route::exact(path, RouteKind::List),
        ];
        if collection.supports_lookup() {
            routes.push(Route::prefix(&format!("{path}/"), RouteKind::Lookup));
        }
        Self::new(routes)
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn resolve(&self, path: &str) -> Option<&Route> {
        match_route(path, &self.routes)
    }
}

/// Find the route for `path`: exact match first, then the longest prefix
pub fn match_route<'a>(path: &str, routes: &'a [Route]) -> Option<&'a Route> {
    let exact = routes
        .iter()
        .find(|route| matches!(&route.pattern, PathPattern::Exact(p) if p == path));
    if exact.is_some() {
        return exact;
    }

    routes
        .iter()
        .filter_map(|route| match &route.pattern {
            PathPattern::Prefix(p) if path.starts_with(p.as_str()) => Some((p.len(), route)),
            _ => None,
        })
        .max_by_key(|(len, _)| *len)
        .map(|(_, route)| route)
}
