//! Navigation state machine.
//!
//! DESIGN
//! ======
//! `RouterCore` owns the manifest and the current route and decides what a
//! navigation does, but never touches the DOM. Each decision comes back as a
//! list of [`Action`]s that the browser host applies in order. That keeps
//! every navigation rule testable under plain `cargo test`.
//!
//! A navigation is two steps. [`RouterCore::navigate`] validates the route
//! and starts the transition window; [`RouterCore::complete`] is called by
//! the host's timer when the window elapses and produces the swap. Every
//! navigation gets a fresh ticket and only the newest ticket completes, so a
//! navigation issued during the window supersedes the pending one.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use crate::consts::FAILURE_HTML;
use crate::error::SiteError;
use crate::net::manifest::Manifest;
use crate::util::path::{path_for_route, route_from_path};

/// A DOM effect requested by the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Add the transition class to the content container.
    BeginTransition,
    /// Replace the content container's children with this HTML.
    ReplaceContent(String),
    /// Remove the transition class.
    EndTransition,
    /// Mark exactly the navigation item for this route as active.
    MarkActive(String),
    /// Push a history entry for this URL path.
    PushHistory(String),
    ScrollToTop,
    /// The swap for this route is visible.
    PageShown(String),
}

/// The navigation waiting for its transition window to elapse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pending {
    pub route: String,
    pub push_history: bool,
    pub ticket: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Transitioning(Pending),
}

/// A started navigation: the immediate actions plus the ticket the host
/// hands back to [`RouterCore::complete`] once the window elapses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub ticket: u64,
    pub actions: Vec<Action>,
}

#[derive(Debug, Clone, Default)]
pub struct RouterCore {
    default_route: String,
    manifest: Manifest,
    current_route: Option<String>,
    phase: Phase,
    next_ticket: u64,
}

impl RouterCore {
    #[must_use]
    pub fn new(default_route: impl Into<String>) -> Self {
        Self {
            default_route: default_route.into(),
            ..Self::default()
        }
    }

    /// Install the manifest. Navigation before this finds no routes.
    pub fn load(&mut self, manifest: Manifest) {
        self.manifest = manifest;
    }

    // --- Queries ---

    #[must_use]
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Route keys for the navigation list, in manifest order.
    #[must_use]
    pub fn nav_routes(&self) -> Vec<String> {
        self.manifest.routes().map(str::to_owned).collect()
    }

    #[must_use]
    pub fn current_route(&self) -> Option<&str> {
        self.current_route.as_deref()
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Route to show for the location `pathname` at startup or on popstate.
    #[must_use]
    pub fn initial_route(&self, pathname: &str) -> String {
        route_from_path(pathname, &self.default_route)
    }

    // --- Navigation ---

    /// Start navigating to `route`.
    ///
    /// Supersedes any transition still pending.
    ///
    /// # Errors
    ///
    /// [`SiteError::RouteNotFound`] when the manifest has no such route; the
    /// router state is left untouched.
    pub fn navigate(&mut self, route: &str, push_history: bool) -> Result<Transition, SiteError> {
        if !self.manifest.contains(route) {
            return Err(SiteError::RouteNotFound(route.to_owned()));
        }

        self.next_ticket += 1;
        let ticket = self.next_ticket;
        self.current_route = Some(route.to_owned());
        self.phase = Phase::Transitioning(Pending {
            route: route.to_owned(),
            push_history,
            ticket,
        });

        Ok(Transition {
            ticket,
            actions: vec![Action::BeginTransition],
        })
    }

    /// Finish the transition identified by `ticket`.
    ///
    /// Returns no actions when `ticket` was superseded or already completed.
    pub fn complete(&mut self, ticket: u64) -> Vec<Action> {
        let pending = match std::mem::take(&mut self.phase) {
            Phase::Transitioning(pending) if pending.ticket == ticket => pending,
            other => {
                self.phase = other;
                return Vec::new();
            }
        };
        let route = pending.route;
        let Some(page) = self.manifest.get(&route) else {
            return Vec::new();
        };

        let mut actions = vec![
            Action::ReplaceContent(page.content.clone()),
            Action::EndTransition,
            Action::MarkActive(route.clone()),
        ];
        if pending.push_history {
            actions.push(Action::PushHistory(path_for_route(&route)));
        }
        actions.push(Action::ScrollToTop);
        actions.push(Action::PageShown(route));
        actions
    }

    /// The manifest could not be loaded: drop any pending transition and
    /// show the failure message.
    pub fn fail(&mut self) -> Vec<Action> {
        self.phase = Phase::Idle;
        vec![
            Action::ReplaceContent(FAILURE_HTML.to_owned()),
            Action::EndTransition,
        ]
    }
}
