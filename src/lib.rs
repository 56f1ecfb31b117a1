//! # verso-site
//!
//! Browser runtime for a static personal site, compiled to WebAssembly.
//!
//! The host page ships three containers: `#nav`, `#content` and optionally
//! `#particles-canvas`. At startup this crate fetches `/content.json`,
//! renders one navigation item per page, swaps page fragments into the
//! content container with a short fade, and keeps the address bar and
//! back/forward buttons in sync. The animated background lives in the
//! separate `particles` crate and is started from here.
//!
//! | Module | Role |
//! |---|---|
//! | [`config`] | `SiteConfig` with the host page defaults |
//! | [`error`] | `SiteError` |
//! | [`net`] | manifest types and fetch |
//! | [`state`] | `RouterCore`, the DOM-free navigation state machine |
//! | [`components`] | Leptos navigation list |
//! | [`util`] | route and path conversion |
//! | `router` | browser host for `RouterCore` (feature `csr`) |
//! | `app` | boot wiring (feature `csr`) |
//!
//! Everything outside `router` and `app` builds natively, so `cargo test`
//! covers the navigation rules without a browser.

pub mod components;
pub mod config;
pub mod consts;
pub mod error;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
pub mod app;
#[cfg(feature = "csr")]
pub mod router;

/// wasm entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    app::boot();
}
