//! Route <-> URL path conversion.
//!
//! Route `r` lives at path `/r`. Leading and trailing slashes are not part of
//! a route; inner slashes are, so nested content keys such as `notes/first`
//! survive a reload.

#[cfg(test)]
#[path = "path_test.rs"]
mod path_test;

/// Route for a location pathname, or `default` for the root path.
#[must_use]
pub fn route_from_path(path: &str, default: &str) -> String {
    let route = path.trim_matches('/');
    if route.is_empty() {
        default.to_owned()
    } else {
        route.to_owned()
    }
}

/// URL path that shows `route`.
#[must_use]
pub fn path_for_route(route: &str) -> String {
    format!("/{route}")
}
