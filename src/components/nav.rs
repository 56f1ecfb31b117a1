//! Navigation list, one item per manifest route.
//!
//! DESIGN
//! ======
//! Items carry their route key in `data-route` and derive `active` from the
//! router's active-route signal by key, so labels never drive state.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use std::rc::Rc;

use leptos::prelude::*;

use crate::consts::NAV_ITEM_CLASS;

/// Whether the item for `route` is the active one.
fn is_current(active: Option<&str>, route: &str) -> bool {
    active == Some(route)
}

/// Clickable navigation items in manifest order.
#[component]
pub fn NavList(
    routes: Vec<String>,
    active: ReadSignal<Option<String>>,
    on_select: Rc<dyn Fn(&str)>,
) -> impl IntoView {
    routes
        .into_iter()
        .map(|route| {
            let key = route.clone();
            let is_active = move || active.with(|current| is_current(current.as_deref(), &key));
            let select = Rc::clone(&on_select);
            let target = route.clone();
            let label = route.clone();
            view! {
                <div
                    class=NAV_ITEM_CLASS
                    class:active=is_active
                    data-route=route
                    on:click=move |_ev: leptos::ev::MouseEvent| select(&target)
                >
                    {label}
                </div>
            }
        })
        .collect_view()
}
