//! Root application component with routing and context providers.
//!
//! ARCHITECTURE
//! ============
//! `App` owns the shared state signals and the router. Every declared
//! route (and the fallback) renders the same [`Gate`] component, which
//! asks `routing::decide` what to do with the current location: redirects
//! run in an effect, renders dispatch to the page components. Policy
//! never lives here; this module only executes decisions.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::pages::{
    chat::ChatPage, counselor::CounselorDashboard, login::LoginPage, signup::SignupPage,
    student::StudentDashboard, teacher::TeacherDashboard,
};
use crate::routing::{Decision, Page, decide};
use crate::state::chat::ChatState;
use crate::state::session::AppSessionStore;
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store and chat state contexts, runs the one-time
/// session bootstrap on mount, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(AppSessionStore::new(BrowserStorage));
    let chat = RwSignal::new(ChatState::default());

    provide_context(session);
    provide_context(chat);

    // One-time hydration from persisted storage. Effects only run in the
    // browser, so server renders stay in the loading phase.
    Effect::new(move || {
        if session.with_untracked(|store| store.is_loading()) {
            session.update(|store| store.bootstrap());
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/edupulse.css"/>
        <Title text="EduPulse"/>

        <Router>
            <Routes fallback=|| view! { <Gate/> }>
                <Route path=StaticSegment("") view=Gate/>
                <Route path=StaticSegment("login") view=Gate/>
                <Route path=StaticSegment("signup") view=Gate/>
                <Route path=StaticSegment("student") view=Gate/>
                <Route path=StaticSegment("teacher") view=Gate/>
                <Route path=StaticSegment("counselor") view=Gate/>
                <Route path=StaticSegment("chat") view=Gate/>
            </Routes>
        </Router>
    }
}

/// Route gate: evaluates the authorization decision for the current
/// location on every session or navigation change.
///
/// Redirect decisions navigate in an effect after render; render
/// decisions dispatch to the matching page. Nothing is rendered while the
/// session store is still loading, so a stored session never flashes the
/// login screen.
#[component]
fn Gate() -> impl IntoView {
    let session = expect_context::<RwSignal<AppSessionStore>>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    Effect::new(move || {
        let path = pathname.get();
        let store = session.get();
        if store.is_loading() {
            return;
        }
        if let Decision::Redirect(to) = decide(store.current(), &path) {
            navigate(to, NavigateOptions::default());
        }
    });

    move || {
        let path = pathname.get();
        let store = session.get();
        if store.is_loading() {
            return view! { <div class="boot-screen"></div> }.into_any();
        }
        match decide(store.current(), &path) {
            Decision::Render(page) => page_view(page),
            Decision::Redirect(_) => ().into_any(),
        }
    }
}

/// Exhaustive page dispatch for render decisions.
fn page_view(page: Page) -> AnyView {
    match page {
        Page::Login => view! { <LoginPage/> }.into_any(),
        Page::Signup => view! { <SignupPage/> }.into_any(),
        Page::StudentDashboard => view! { <StudentDashboard/> }.into_any(),
        Page::TeacherDashboard => view! { <TeacherDashboard/> }.into_any(),
        Page::CounselorDashboard => view! { <CounselorDashboard/> }.into_any(),
        Page::Chat => view! { <ChatPage/> }.into_any(),
    }
}
