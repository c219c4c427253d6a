//! Login page with email + password auth.
//!
//! On success the API's token response becomes a fully populated session
//! handed to the session store; the route gate then bounces the visitor
//! off `/login` to their dashboard. No manual redirect here.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::state::session::AppSessionStore;

fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<AppSessionStore>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        match validate_login_input(&email.get(), &password.get()) {
            Err(msg) => info.set(msg.to_owned()),
            Ok((email_value, password_value)) => {
                busy.set(true);
                info.set("Signing in...".to_owned());

                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    match crate::net::api::login(&email_value, &password_value).await {
                        Ok(new_session) => session.update(|store| store.login(new_session)),
                        Err(e) => {
                            info.set(format!("Sign-in failed: {e}"));
                            busy.set(false);
                        }
                    }
                });

                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (email_value, password_value, session);
                    busy.set(false);
                }
            }
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"EduPulse"</h1>
                <p class="login-card__subtitle">"Sign in to your dashboard"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@school.edu"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "New here? " <a href="/signup">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
