//! Browser boot: logging, the particle background and the router.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router and the particle field share no state. The one link is the
//! router's page-shown hook, which asks the field to start on any canvas the
//! new page brought in. A canvas already in the static host page is picked up
//! by the single call made here at boot.

use log::Level;
use particles::ParticleField;

use crate::config::SiteConfig;
use crate::router::Router;

/// Wire everything up. Called once from the wasm start function.
pub fn boot() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(Level::Debug) {
        web_sys::console::warn_1(&format!("logger already installed: {e}").into());
    }

    let field = ParticleField::default();
    if !field.try_initialize() {
        log::debug!("boot: no particle canvas on the host page yet");
    }

    let router = match Router::new(SiteConfig::default()) {
        Ok(router) => router,
        Err(e) => {
            log::error!("Failed to load content: {e}");
            return;
        }
    };
    router.on_page_shown(move |_route| {
        field.try_initialize();
    });

    wasm_bindgen_futures::spawn_local(async move {
        router.initialize().await;
    });
}
