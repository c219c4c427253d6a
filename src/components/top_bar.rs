//! Shared dashboard header with identity display and logout.

use leptos::prelude::*;

use crate::state::session::AppSessionStore;

/// Header bar shown on every authenticated screen. The logout button is
/// the only UI writer of `SessionStore::logout`; clearing the session
/// makes the route gate carry the visitor to `/login`.
#[component]
pub fn TopBar(#[prop(into)] title: String) -> impl IntoView {
    let session = expect_context::<RwSignal<AppSessionStore>>();

    let identity = move || {
        session.with(|store| {
            store
                .current()
                .map(|s| format!("{} · {}", s.display_name, s.role.as_str()))
                .unwrap_or_default()
        })
    };

    view! {
        <header class="top-bar">
            <h1 class="top-bar__title">{title}</h1>
            <div class="top-bar__spacer"></div>
            <span class="top-bar__identity">{identity}</span>
            <button class="btn" on:click=move |_| session.update(|store| store.logout())>
                "Log out"
            </button>
        </header>
    }
}
