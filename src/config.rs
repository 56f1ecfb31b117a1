//! Router configuration.
//!
//! There is no environment or CLI surface; boot uses [`SiteConfig::default`].
//! Tests and embedders override individual fields with struct update syntax.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::{
    CONTENT_ID, DEFAULT_ROUTE, MANIFEST_URL, NAV_ID, TRANSITION_CLASS, TRANSITION_MS,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Where the manifest is fetched from.
    pub manifest_url: String,
    /// Route for the root path.
    pub default_route: String,
    pub nav_id: String,
    pub content_id: String,
    /// Delay in milliseconds before the content swap.
    pub transition_ms: u32,
    pub transition_class: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            manifest_url: MANIFEST_URL.to_owned(),
            default_route: DEFAULT_ROUTE.to_owned(),
            nav_id: NAV_ID.to_owned(),
            content_id: CONTENT_ID.to_owned(),
            transition_ms: TRANSITION_MS,
            transition_class: TRANSITION_CLASS.to_owned(),
        }
    }
}
