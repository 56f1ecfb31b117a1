//! Browser host for [`RouterCore`]: DOM containers, transition timer,
//! history and `popstate`.
//!
//! ARCHITECTURE
//! ============
//! `Router` is a cheap clonable handle over shared state. Navigation rules
//! live in [`RouterCore`]; this module only turns its [`Action`]s into DOM
//! calls. The navigation list is a Leptos component mounted into the nav
//! container; its active item follows an `RwSignal` set by
//! [`Action::MarkActive`].
//!
//! TIMERS
//! ======
//! The pending swap is a `gloo-timers` [`Timeout`] held in a single slot.
//! Starting a navigation replaces the slot, and dropping a `Timeout` cancels
//! it, so only the newest navigation swaps content. Timer and event closures
//! hold `Weak` references so the router never keeps itself alive.
//!
//! ERROR HANDLING
//! ==============
//! Manifest failures are logged at error level and end in the failure
//! message. Unknown routes are logged at error level too, but change
//! nothing. Failed browser calls are logged and skipped; nothing here panics.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, HtmlElement, Window};

use crate::components::nav::NavList;
use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::net::api::fetch_manifest;
use crate::state::router::{Action, RouterCore};

type PageShownHook = Box<dyn Fn(&str)>;
type PopStateCallback = Closure<dyn FnMut(Event)>;

struct Inner {
    config: SiteConfig,
    core: RefCell<RouterCore>,
    nav: HtmlElement,
    content: Element,
    active: RwSignal<Option<String>>,
    pending: RefCell<Option<Timeout>>,
    on_page_shown: RefCell<Option<PageShownHook>>,
    popstate: RefCell<Option<PopStateCallback>>,
}

/// Client-side router bound to the host page's nav and content containers.
#[derive(Clone)]
pub struct Router {
    inner: Rc<Inner>,
}

impl Router {
    /// Bind to the containers named in `config`.
    ///
    /// # Errors
    ///
    /// [`SiteError::MissingElement`] when the document or either container
    /// is absent.
    pub fn new(config: SiteConfig) -> Result<Self, SiteError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| SiteError::MissingElement("document".to_owned()))?;
        let lookup = |id: &str| {
            document
                .get_element_by_id(id)
                .ok_or_else(|| SiteError::MissingElement(id.to_owned()))
        };
        let nav = lookup(&config.nav_id)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| SiteError::MissingElement(config.nav_id.clone()))?;
        let content = lookup(&config.content_id)?;

        let core = RouterCore::new(config.default_route.clone());
        Ok(Self {
            inner: Rc::new(Inner {
                config,
                core: RefCell::new(core),
                nav,
                content,
                active: RwSignal::new(None),
                pending: RefCell::new(None),
                on_page_shown: RefCell::new(None),
                popstate: RefCell::new(None),
            }),
        })
    }

    fn from_weak(weak: &Weak<Inner>) -> Option<Self> {
        weak.upgrade().map(|inner| Self { inner })
    }

    /// Register a callback fired after every completed content swap.
    pub fn on_page_shown(&self, hook: impl Fn(&str) + 'static) {
        *self.inner.on_page_shown.borrow_mut() = Some(Box::new(hook));
    }

    /// Load the manifest, render navigation, show the page for the current
    /// location and start following `popstate`.
    ///
    /// On any manifest failure the content container shows the failure
    /// message instead.
    pub async fn initialize(&self) {
        let manifest = match fetch_manifest(&self.inner.config.manifest_url).await {
            Ok(manifest) => manifest,
            Err(e) => {
                log::error!("Failed to load content: {e}");
                let actions = self.inner.core.borrow_mut().fail();
                self.apply(actions);
                return;
            }
        };
        log::info!("router: manifest loaded ({} pages)", manifest.len());
        self.inner.core.borrow_mut().load(manifest);

        self.render_navigation();
        let route = self.inner.core.borrow().initial_route(&current_path());
        self.go(&route, false);

        if let Err(e) = self.listen_popstate() {
            log::warn!("router: failed to listen for popstate: {e:?}");
        }
    }

    /// Replace the nav container's children with one item per route.
    pub fn render_navigation(&self) {
        let routes = self.inner.core.borrow().nav_routes();
        let active = self.inner.active.read_only();
        let weak = Rc::downgrade(&self.inner);
        let on_select: Rc<dyn Fn(&str)> = Rc::new(move |route: &str| {
            if let Some(router) = Self::from_weak(&weak) {
                router.go(route, true);
            }
        });

        self.inner.nav.set_inner_html("");
        leptos::mount::mount_to(self.inner.nav.clone(), move || {
            view! { <NavList routes=routes active=active on_select=on_select /> }
        })
        .forget();
    }

    /// Navigate to `route`, swapping content once the transition window
    /// elapses.
    ///
    /// # Errors
    ///
    /// [`SiteError::RouteNotFound`] when the manifest has no such route. The
    /// miss is logged and the page is left as it is.
    pub fn navigate_to(&self, route: &str, push_history: bool) -> Result<(), SiteError> {
        let transition = self
            .inner
            .core
            .borrow_mut()
            .navigate(route, push_history)
            .inspect_err(|e| log::error!("{e}"))?;
        self.apply(transition.actions);

        let weak = Rc::downgrade(&self.inner);
        let ticket = transition.ticket;
        let timeout = Timeout::new(self.inner.config.transition_ms, move || {
            if let Some(router) = Self::from_weak(&weak) {
                router.finish(ticket);
            }
        });
        // Replacing the slot drops, and so cancels, a superseded swap.
        *self.inner.pending.borrow_mut() = Some(timeout);
        Ok(())
    }

    /// Navigate from an event handler, where there is no caller to report to.
    fn go(&self, route: &str, push_history: bool) {
        // Unknown routes are already logged by `navigate_to`.
        if let Err(e) = self.navigate_to(route, push_history) {
            if e.is_load_failure() {
                log::error!("router: navigation failed: {e}");
            }
        }
    }

    fn finish(&self, ticket: u64) {
        let actions = self.inner.core.borrow_mut().complete(ticket);
        self.apply(actions);
    }

    fn listen_popstate(&self) -> Result<(), JsValue> {
        if self.inner.popstate.borrow().is_some() {
            return Ok(());
        }
        let weak = Rc::downgrade(&self.inner);
        let callback = Closure::wrap(Box::new(move |_event: Event| {
            let Some(router) = Self::from_weak(&weak) else {
                return;
            };
            let route = router.inner.core.borrow().initial_route(&current_path());
            router.go(&route, false);
        }) as Box<dyn FnMut(Event)>);

        window()?
            .add_event_listener_with_callback("popstate", callback.as_ref().unchecked_ref())?;
        *self.inner.popstate.borrow_mut() = Some(callback);
        Ok(())
    }

    fn apply(&self, actions: Vec<Action>) {
        for action in actions {
            if let Err(e) = self.apply_one(action) {
                log::warn!("router: DOM update failed: {e:?}");
            }
        }
    }

    fn apply_one(&self, action: Action) -> Result<(), JsValue> {
        let inner = &self.inner;
        let fade = inner.config.transition_class.as_str();
        match action {
            Action::BeginTransition => inner.content.class_list().add_1(fade)?,
            Action::ReplaceContent(html) => inner.content.set_inner_html(&html),
            Action::EndTransition => inner.content.class_list().remove_1(fade)?,
            Action::MarkActive(route) => inner.active.set(Some(route)),
            Action::PushHistory(path) => {
                let history = window()?.history()?;
                history.push_state_with_url(&JsValue::NULL, "", Some(&path))?;
            }
            Action::ScrollToTop => window()?.scroll_to_with_x_and_y(0.0, 0.0),
            Action::PageShown(route) => {
                log::debug!("router: showing {route}");
                if let Some(hook) = inner.on_page_shown.borrow().as_ref() {
                    hook(&route);
                }
            }
        }
        Ok(())
    }
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

fn current_path() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    match window.location().pathname() {
        Ok(path) => path,
        Err(e) => {
            log::warn!("router: failed to read location: {e:?}");
            String::new()
        }
    }
}
