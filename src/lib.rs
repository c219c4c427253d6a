//! # edupulse-client
//!
//! Leptos + WASM frontend shell for the EduPulse student performance and
//! wellbeing platform. The shell owns session bootstrap from browser
//! storage and role-based route authorization; the role dashboards, chat
//! panel, and the HTTP API behind them are thin collaborators.
//!
//! This crate contains pages, components, application state, the route
//! authorization core, and the REST helpers used by the login and signup
//! flows.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/console logging hooks and hydrates
/// the application into the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
