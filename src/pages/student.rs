//! Student dashboard page.

use leptos::prelude::*;

use crate::components::top_bar::TopBar;

/// Landing screen for the student role: performance, wellbeing check-in,
/// and counseling entry points.
#[component]
pub fn StudentDashboard() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <TopBar title="Student Dashboard"/>
            <div class="dashboard-page__grid">
                <section class="panel">
                    <h2>"My Performance"</h2>
                    <p>"Marks, attendance, and assignment scores at a glance."</p>
                </section>
                <section class="panel">
                    <h2>"Wellbeing Check-In"</h2>
                    <p>"Answer the daily questionnaire to track mood and study habits."</p>
                </section>
                <section class="panel">
                    <h2>"Counseling"</h2>
                    <p>"Request a session with a counselor, or "
                        <a href="/chat">"open chat"</a>
                        "."
                    </p>
                </section>
            </div>
        </div>
    }
}
