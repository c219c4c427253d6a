//! Signup page creating a student, teacher, or counselor account.
//!
//! Signup does not authenticate; on success the visitor is returned to
//! `/login` to sign in with the new credentials.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use crate::net::types::SignupRequest;

fn validate_signup_input(
    name: &str,
    email: &str,
    password: &str,
    role: &str,
) -> Result<SignupRequest, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Enter name, email, and password.");
    }
    Ok(SignupRequest {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        role: role.to_owned(),
    })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new("student".to_owned());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        match validate_signup_input(&name.get(), &email.get(), &password.get(), &role.get()) {
            Err(msg) => info.set(msg.to_owned()),
            Ok(request) => {
                busy.set(true);
                info.set("Creating account...".to_owned());

                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    match crate::net::api::signup(&request).await {
                        Ok(()) => {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().set_href("/login");
                            }
                        }
                        Err(e) => {
                            info.set(format!("Signup failed: {e}"));
                            busy.set(false);
                        }
                    }
                });

                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = request;
                    busy.set(false);
                }
            }
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"EduPulse"</h1>
                <p class="login-card__subtitle">"Create your account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                    <select
                        class="login-input"
                        prop:value=move || role.get()
                        on:change=move |ev| role.set(event_target_value(&ev))
                    >
                        <option value="student">"Student"</option>
                        <option value="teacher">"Teacher"</option>
                        <option value="counselor">"Counselor"</option>
                    </select>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign Up"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "Already registered? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
