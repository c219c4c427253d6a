//! Teacher dashboard page.

use leptos::prelude::*;

use crate::components::top_bar::TopBar;

/// Landing screen for the teacher role: class analytics and per-student
/// performance views.
#[component]
pub fn TeacherDashboard() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <TopBar title="Teacher Dashboard"/>
            <div class="dashboard-page__grid">
                <section class="panel">
                    <h2>"Class Overview"</h2>
                    <p>"Average marks, attendance, and risk levels across the class."</p>
                </section>
                <section class="panel">
                    <h2>"Students"</h2>
                    <p>"Per-student academic records and predicted performance."</p>
                </section>
                <section class="panel">
                    <h2>"Messages"</h2>
                    <p><a href="/chat">"Open chat"</a> " with students and counselors."</p>
                </section>
            </div>
        </div>
    }
}
