//! Route matching logic.
//!
//! # Responsibilities
//! - Resolve a pathname against the route table in registration order
//! - Capture `:name` parameters from the pathname
//! - Recognize trailing `*` catch-all patterns
//!
//! # Design Decisions
//! - No regex: segment-wise comparison keeps matching O(n) and predictable
//! - Case-sensitive, exact-length matching; no prefix matches and no
//!   trailing-slash normalization
//! - Captured values are the literal, un-decoded path segment text
//! - Registration order is the only tie-break

use crate::routing::route::{Route, RouteTable};

/// A matched route with the parameters captured from the pathname.
pub struct RouteMatch<'a> {
    /// The matched route.
    pub route: &'a Route,
    /// Captured parameters, in the order the `:name` tokens appear in the
    /// pattern.
    pub params: Vec<(String, String)>,
}

impl RouteMatch<'_> {
    /// Get a captured parameter value by name.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// First route in registration order that matches `pathname`.
///
/// Note that registration order is the only priority: a more specific
/// route registered after a parameterized route that also matches will
/// never be selected. Register specific routes first.
pub fn find_match<'a>(pathname: &str, table: &'a RouteTable) -> Option<RouteMatch<'a>> {
    table.iter().find_map(|route| {
        match_pattern(route.pattern(), pathname).map(|params| RouteMatch { route, params })
    })
}

/// Whether `pattern` is a catch-all.
///
/// Covers `*` on its own, a trailing `/*`, and the form produced when a
/// base URL is prepended directly in front of a bare `*` at registration.
fn is_catch_all(pattern: &str) -> bool {
    pattern.ends_with('*')
}

/// Match one pattern against a pathname, returning captured parameters.
///
/// Catch-alls match unconditionally with no captures. Everything else
/// must match segment for segment: equal segment counts (a trailing slash
/// adds an empty segment, so `/about` and `/about/` never match each
/// other), literal segments compared case-sensitively, and `:name`
/// segments capturing exactly one non-empty pathname segment.
fn match_pattern(pattern: &str, pathname: &str) -> Option<Vec<(String, String)>> {
    if is_catch_all(pattern) {
        return Some(Vec::new());
    }

    let pattern_segments: Vec<&str> = pattern.split('/').collect();
    let path_segments: Vec<&str> = pathname.split('/').collect();
    if pattern_segments.len() != path_segments.len() {
        return None;
    }

    let mut params = Vec::new();
    for (pattern_segment, path_segment) in pattern_segments.iter().zip(&path_segments) {
        if let Some(name) = pattern_segment.strip_prefix(':') {
            if path_segment.is_empty() {
                return None;
            }
            params.push((name.to_string(), (*path_segment).to_string()));
        } else if pattern_segment != path_segment {
            return None;
        }
    }
    Some(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::route::Route;

    fn page(pattern: &str, tag: &str) -> Route {
        Route::fragment(pattern, tag, || std::future::ready(Ok(())))
    }

    fn table(routes: Vec<Route>) -> RouteTable {
        let mut table = RouteTable::default();
        for route in routes {
            table.push(route);
        }
        table
    }

    fn matched_tag<'a>(m: &'a RouteMatch<'_>) -> &'a str {
        match m.route.target {
            crate::routing::route::RouteTarget::Fragment { ref tag, .. } => tag,
            _ => panic!("expected fragment route"),
        }
    }

    #[test]
    fn literal_pattern_matches_exactly() {
        let table = table(vec![page("/app/about", "about-page")]);
        assert!(find_match("/app/about", &table).is_some());
        assert!(find_match("/app/abou", &table).is_none());
        assert!(find_match("/app/about/extra", &table).is_none());
    }

    #[test]
    fn trailing_slash_is_a_different_path() {
        let table1 = table(vec![page("/app/about", "about-page")]);
        assert!(find_match("/app/about/", &table1).is_none());

        let table2 = table(vec![page("/app/about/", "about-page")]);
        assert!(find_match("/app/about", &table2).is_none());
        assert!(find_match("/app/about/", &table2).is_some());
    }

    #[test]
    fn matching_is_case_sensitive() {
        let table = table(vec![page("/app/About", "about-page")]);
        assert!(find_match("/app/about", &table).is_none());
        assert!(find_match("/app/About", &table).is_some());
    }

    #[test]
    fn captures_single_parameter() {
        let table = table(vec![page("/app/chat/:id", "chat-page")]);
        let m = find_match("/app/chat/123", &table).unwrap();
        assert_eq!(m.param("id"), Some("123"));
    }

    #[test]
    fn captures_parameters_in_pattern_order() {
        let table = table(vec![page("/app/user/:user_id/post/:post_id", "post-page")]);
        let m = find_match("/app/user/42/post/99", &table).unwrap();
        assert_eq!(
            m.params,
            vec![
                ("user_id".to_string(), "42".to_string()),
                ("post_id".to_string(), "99".to_string()),
            ]
        );
    }

    #[test]
    fn captured_values_are_not_decoded() {
        let table = table(vec![page("/app/chat/:id", "chat-page")]);
        let m = find_match("/app/chat/a%20b", &table).unwrap();
        assert_eq!(m.param("id"), Some("a%20b"));
    }

    #[test]
    fn parameter_refuses_empty_segment() {
        let table = table(vec![page("/app/chat/:id", "chat-page")]);
        assert!(find_match("/app/chat/", &table).is_none());
    }

    #[test]
    fn parameter_spans_a_single_segment_only() {
        let table = table(vec![page("/app/chat/:id", "chat-page")]);
        assert!(find_match("/app/chat/1/2", &table).is_none());
    }

    #[test]
    fn catch_all_forms_match_any_pathname() {
        for pattern in ["*", "/app/*", "/app*"] {
            let table = table(vec![page(pattern, "not-found-page")]);
            assert!(
                find_match("/anything/at/all", &table).is_some(),
                "pattern {pattern:?} should match unconditionally"
            );
        }
    }

    #[test]
    fn first_registered_route_wins() {
        let table = table(vec![
            page("/app/page/:slug", "generic-page"),
            page("/app/page/:slug", "duplicate-page"),
        ]);
        let m = find_match("/app/page/test", &table).unwrap();
        assert_eq!(matched_tag(&m), "generic-page");
    }

    #[test]
    fn later_specific_route_loses_to_earlier_parameterized_route() {
        let table = table(vec![
            page("/app/users/:id", "user-page"),
            page("/app/users/new", "new-user-page"),
        ]);
        let m = find_match("/app/users/new", &table).unwrap();
        assert_eq!(matched_tag(&m), "user-page");
        assert_eq!(m.param("id"), Some("new"));
    }

    #[test]
    fn catch_all_yields_to_earlier_matches() {
        let table = table(vec![
            page("/app/", "home-page"),
            page("/app*", "not-found-page"),
        ]);
        let m = find_match("/app/", &table).unwrap();
        assert_eq!(matched_tag(&m), "home-page");

        let m = find_match("/app/unknown-path", &table).unwrap();
        assert_eq!(matched_tag(&m), "not-found-page");
        assert!(m.params.is_empty());
    }
}
