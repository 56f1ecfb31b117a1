use super::*;

use crate::net::manifest::Page;

/// In-memory stand-in for the DOM the host drives.
#[derive(Debug, Default)]
struct PageModel {
    content: String,
    fading: bool,
    nav: Vec<(String, bool)>,
    history: Vec<String>,
    scrolled: usize,
    shown: Vec<String>,
}

impl PageModel {
    fn with_nav(core: &RouterCore) -> Self {
        let nav = core.nav_routes().into_iter().map(|r| (r, false));
        Self {
            nav: nav.collect(),
            ..Self::default()
        }
    }

    fn apply(&mut self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::BeginTransition => self.fading = true,
                Action::ReplaceContent(html) => self.content = html,
                Action::EndTransition => self.fading = false,
                Action::MarkActive(route) => {
                    for (key, active) in &mut self.nav {
                        *active = *key == route;
                    }
                }
                Action::PushHistory(path) => self.history.push(path),
                Action::ScrollToTop => self.scrolled += 1,
                Action::PageShown(route) => self.shown.push(route),
            }
        }
    }

    fn active(&self) -> Vec<&str> {
        self.nav
            .iter()
            .filter(|(_, active)| *active)
            .map(|(key, _)| key.as_str())
            .collect()
    }
}

fn two_pages() -> Manifest {
    Manifest::from_pages([
        ("about", Page::new("<h1>About</h1>")),
        ("work", Page::new("<h1>Work</h1>")),
    ])
}

fn loaded() -> RouterCore {
    let mut core = RouterCore::new("about");
    core.load(two_pages());
    core
}

/// Navigate and let the transition window elapse.
fn go(
    core: &mut RouterCore,
    page: &mut PageModel,
    route: &str,
    push: bool,
) -> Result<(), SiteError> {
    let transition = core.navigate(route, push)?;
    page.apply(transition.actions);
    page.apply(core.complete(transition.ticket));
    Ok(())
}

fn fragment(core: &RouterCore, route: &str) -> String {
    let page = core.manifest().get(route).expect("route exists");
    page.content.clone()
}

// =============================================================
// Navigation list
// =============================================================

#[test]
fn nav_routes_follow_manifest_order() {
    assert_eq!(loaded().nav_routes(), ["about", "work"]);
}

#[test]
fn nav_routes_empty_before_load() {
    assert!(RouterCore::new("about").nav_routes().is_empty());
}

// =============================================================
// Initial route
// =============================================================

#[test]
fn root_path_navigates_to_default_route() {
    let mut core = loaded();
    let mut page = PageModel::with_nav(&core);
    let route = core.initial_route("/");
    go(&mut core, &mut page, &route, false).expect("about exists");
    assert_eq!(page.content, "<h1>About</h1>");
    assert_eq!(page.active(), ["about"]);
}

#[test]
fn initial_work_path_renders_work_without_history() {
    let mut core = loaded();
    let mut page = PageModel::with_nav(&core);
    let route = core.initial_route("/work");
    go(&mut core, &mut page, &route, false).expect("work exists");
    assert_eq!(page.content, "<h1>Work</h1>");
    assert_eq!(page.active(), ["work"]);
    assert!(page.history.is_empty());
}

// =============================================================
// Navigate
// =============================================================

#[test]
fn navigate_sets_content_and_single_active_item() {
    let mut core = loaded();
    let mut page = PageModel::with_nav(&core);
    for route in ["about", "work", "about"] {
        go(&mut core, &mut page, route, true).expect("route exists");
        assert_eq!(page.content, fragment(&core, route));
        assert_eq!(page.active(), [route]);
        assert!(!page.fading);
    }
    assert_eq!(page.history, ["/about", "/work", "/about"]);
    assert_eq!(page.scrolled, 3);
    assert_eq!(page.shown, ["about", "work", "about"]);
}

#[test]
fn navigate_sets_current_route_immediately() {
    let mut core = loaded();
    let transition = core.navigate("work", true).expect("work exists");
    assert_eq!(core.current_route(), Some("work"));
    let expected = Phase::Transitioning(Pending {
        route: "work".to_owned(),
        push_history: true,
        ticket: transition.ticket,
    });
    assert_eq!(core.phase(), &expected);
}

#[test]
fn navigate_only_fades_until_window_elapses() {
    let mut core = loaded();
    let transition = core.navigate("work", true).expect("work exists");
    assert_eq!(transition.actions, [Action::BeginTransition]);
}

#[test]
fn complete_orders_swap_actions() {
    let mut core = loaded();
    let transition = core.navigate("work", true).expect("work exists");
    assert_eq!(
        core.complete(transition.ticket),
        [
            Action::ReplaceContent("<h1>Work</h1>".into()),
            Action::EndTransition,
            Action::MarkActive("work".into()),
            Action::PushHistory("/work".into()),
            Action::ScrollToTop,
            Action::PageShown("work".into()),
        ]
    );
    assert_eq!(core.phase(), &Phase::Idle);
}

#[test]
fn complete_without_push_skips_history() {
    let mut core = loaded();
    let transition = core.navigate("about", false).expect("about exists");
    let actions = core.complete(transition.ticket);
    let pushes = actions.iter().filter(|a| matches!(a, Action::PushHistory(_)));
    assert_eq!(pushes.count(), 0);
}

#[test]
fn missing_route_leaves_ui_unchanged() {
    let mut core = loaded();
    let mut page = PageModel::with_nav(&core);
    go(&mut core, &mut page, "about", false).expect("about exists");

    let err = go(&mut core, &mut page, "blog", true).expect_err("blog is missing");
    assert_eq!(err, SiteError::RouteNotFound("blog".into()));
    assert_eq!(page.content, "<h1>About</h1>");
    assert_eq!(page.active(), ["about"]);
    assert_eq!(core.current_route(), Some("about"));
    assert_eq!(core.phase(), &Phase::Idle);
}

#[test]
fn navigate_before_load_is_not_found() {
    let mut core = RouterCore::new("about");
    let err = core.navigate("about", true).expect_err("no manifest yet");
    assert!(matches!(err, SiteError::RouteNotFound(_)));
}

// =============================================================
// Superseded transitions
// =============================================================

#[test]
fn newer_navigation_supersedes_pending_swap() {
    let mut core = loaded();
    let mut page = PageModel::with_nav(&core);
    let first = core.navigate("work", true).expect("work exists");
    let second = core.navigate("about", true).expect("about exists");
    assert_ne!(first.ticket, second.ticket);

    assert!(core.complete(first.ticket).is_empty());
    page.apply(core.complete(second.ticket));
    assert_eq!(page.content, "<h1>About</h1>");
    assert_eq!(page.active(), ["about"]);
    assert_eq!(page.history, ["/about"]);
}

#[test]
fn stale_ticket_keeps_newer_transition_pending() {
    let mut core = loaded();
    let first = core.navigate("work", true).expect("work exists");
    let second = core.navigate("about", true).expect("about exists");
    assert!(core.complete(first.ticket).is_empty());
    let Phase::Transitioning(pending) = core.phase() else {
        panic!("newer transition should still be pending");
    };
    assert_eq!(pending.ticket, second.ticket);
}

#[test]
fn completing_twice_is_a_noop() {
    let mut core = loaded();
    let transition = core.navigate("work", true).expect("work exists");
    assert!(!core.complete(transition.ticket).is_empty());
    assert!(core.complete(transition.ticket).is_empty());
}

#[test]
fn complete_while_idle_is_a_noop() {
    let mut core = loaded();
    assert!(core.complete(1).is_empty());
}

// =============================================================
// Failure
// =============================================================

#[test]
fn failure_shows_exactly_one_message_element() {
    let mut core = RouterCore::new("about");
    let mut page = PageModel::with_nav(&core);
    page.content = "<p>loading</p><p>please wait</p>".into();
    page.apply(core.fail());
    assert_eq!(page.content, "<p>Failed to load content</p>");
    assert_eq!(page.content.matches("<p>").count(), 1);
    assert!(page.active().is_empty());
}

#[test]
fn failure_drops_pending_transition() {
    let mut core = loaded();
    let transition = core.navigate("work", true).expect("work exists");
    core.fail();
    assert!(core.complete(transition.ticket).is_empty());
}
