//! Site-wide constants: endpoint, DOM contract and transition timing.

/// Manifest endpoint, relative to the site root.
pub const MANIFEST_URL: &str = "/content.json";

/// Route shown for `/` and the empty path.
pub const DEFAULT_ROUTE: &str = "about";

/// Id of the navigation container.
pub const NAV_ID: &str = "nav";

/// Id of the content container.
pub const CONTENT_ID: &str = "content";

/// Delay between starting a navigation and swapping the content.
pub const TRANSITION_MS: u32 = 150;

/// Class applied to the content container while a swap is pending.
pub const TRANSITION_CLASS: &str = "fade";

/// Class of every navigation item.
pub const NAV_ITEM_CLASS: &str = "nav-item";

/// Replaces the content container when the manifest cannot be loaded.
pub const FAILURE_HTML: &str = "<p>Failed to load content</p>";
