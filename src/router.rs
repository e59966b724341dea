//! Path-pattern router.
//!
//! Patterns are slash-delimited templates mixing literal segments and
//! `:name` parameters (`/c/:id`). Matching is first-match-wins over an
//! ordered table: segment counts must agree, literal segments must be
//! equal, parameter segments always bind. No wildcards, no query
//! strings, no optional segments.

use std::collections::HashMap;

/// The page a route resolves to. Dispatch stays with the app shell;
/// the router only matches and binds parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTarget {
    Home,
    Category,
    Product,
    Contact,
}

pub type Params = HashMap<String, String>;

#[derive(Debug)]
pub struct RouteMatch {
    pub target: PageTarget,
    pub params: Params,
}

struct Route {
    pattern: String,
    target: PageTarget,
}

#[derive(Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a route. Registration order is match order.
    pub fn register(&mut self, pattern: &str, target: PageTarget) {
        self.routes.push(Route {
            pattern: pattern.to_string(),
            target,
        });
    }

    /// Resolves a normalized path against the table.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        self.routes.iter().find_map(|route| {
            extract_params(&route.pattern, path).map(|params| RouteMatch {
                target: route.target,
                params,
            })
        })
    }
}

/// Binds a path against one pattern, or `None` when it does not match.
fn extract_params(pattern: &str, path: &str) -> Option<Params> {
    let pattern_parts: Vec<&str> = pattern.split('/').collect();
    let path_parts: Vec<&str> = path.split('/').collect();

    if pattern_parts.len() != path_parts.len() {
        return None;
    }

    let mut params = Params::new();
    for (pattern_part, path_part) in pattern_parts.iter().zip(&path_parts) {
        if let Some(name) = pattern_part.strip_prefix(':') {
            params.insert(name.to_string(), (*path_part).to_string());
        } else if pattern_part != path_part {
            return None;
        }
    }
    Some(params)
}

/// Normalizes a raw navigation fragment: strips the leading `#`
/// marker and defaults the empty path to `/`.
pub fn normalize_fragment(raw: &str) -> &str {
    let path = raw.strip_prefix('#').unwrap_or(raw);
    if path.is_empty() { "/" } else { path }
}

/// The navigation fragment: the current path plus a back-history.
pub struct Location {
    current: String,
    history: Vec<String>,
}

impl Default for Location {
    fn default() -> Self {
        Self::new()
    }
}

impl Location {
    pub fn new() -> Self {
        Self {
            current: "/".to_string(),
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// Moves to `path`, remembering the previous location. Navigating
    /// to the current path is a no-op, as re-assigning an unchanged
    /// fragment fires no change event.
    ///
    /// Returns whether the location actually changed.
    pub fn navigate(&mut self, path: &str) -> bool {
        if path == self.current {
            return false;
        }
        let previous = std::mem::replace(&mut self.current, path.to_string());
        self.history.push(previous);
        true
    }

    /// Replaces the current path without touching the history. Used
    /// for the unknown-path redirect so `/` does not pile up behind
    /// every typo.
    pub fn replace(&mut self, path: &str) {
        self.current = path.to_string();
    }

    /// Pops the previous location, making it current.
    pub fn back(&mut self) -> Option<&str> {
        let previous = self.history.pop()?;
        self.current = previous;
        Some(&self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Router {
        let mut router = Router::new();
        router.register("/", PageTarget::Home);
        router.register("/c/:id", PageTarget::Category);
        router.register("/p/:id", PageTarget::Product);
        router.register("/contact", PageTarget::Contact);
        router
    }

    #[test]
    fn literal_paths_resolve() {
        let router = table();
        assert_eq!(router.resolve("/").unwrap().target, PageTarget::Home);
        assert_eq!(router.resolve("/contact").unwrap().target, PageTarget::Contact);
    }

    #[test]
    fn parameter_segments_bind() {
        let router = table();
        let matched = router.resolve("/c/42").unwrap();
        assert_eq!(matched.target, PageTarget::Category);
        assert_eq!(matched.params.get("id").map(String::as_str), Some("42"));
    }

    #[test]
    fn segment_count_must_agree() {
        let router = table();
        assert!(router.resolve("/c").is_none());
        assert!(router.resolve("/c/42/extra").is_none());
    }

    #[test]
    fn literal_segments_must_match_exactly() {
        let router = table();
        assert!(router.resolve("/x/42").is_none());
        assert!(router.resolve("/Contact").is_none());
    }

    #[test]
    fn first_registered_match_wins() {
        let mut router = Router::new();
        router.register("/p/:id", PageTarget::Product);
        router.register("/p/special", PageTarget::Contact);
        // The parameter route shadows the later literal one.
        assert_eq!(router.resolve("/p/special").unwrap().target, PageTarget::Product);
    }

    #[test]
    fn fragment_normalization() {
        assert_eq!(normalize_fragment(""), "/");
        assert_eq!(normalize_fragment("#"), "/");
        assert_eq!(normalize_fragment("#/c/1"), "/c/1");
        assert_eq!(normalize_fragment("/p/9"), "/p/9");
    }

    #[test]
    fn location_tracks_history() {
        let mut location = Location::new();
        assert!(location.navigate("/c/1"));
        assert!(location.navigate("/p/9"));
        assert_eq!(location.back(), Some("/c/1"));
        assert_eq!(location.back(), Some("/"));
        assert_eq!(location.back(), None);
    }

    #[test]
    fn navigating_to_current_path_is_a_no_op() {
        let mut location = Location::new();
        location.navigate("/contact");
        assert!(!location.navigate("/contact"));
        assert_eq!(location.back(), Some("/"));
        assert_eq!(location.back(), None);
    }

    #[test]
    fn replace_leaves_history_alone() {
        let mut location = Location::new();
        location.navigate("/c/1");
        location.replace("/");
        assert_eq!(location.current(), "/");
        assert_eq!(location.back(), Some("/"));
    }
}
