//! Counselor dashboard page.

use leptos::prelude::*;

use crate::components::top_bar::TopBar;

/// Landing screen for the counselor role: incoming requests and student
/// remarks. Also the fallback dashboard for unrecognized roles.
#[component]
pub fn CounselorDashboard() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <TopBar title="Counselor Dashboard"/>
            <div class="dashboard-page__grid">
                <section class="panel">
                    <h2>"Counseling Requests"</h2>
                    <p>"Pending and accepted session requests from students."</p>
                </section>
                <section class="panel">
                    <h2>"Student Remarks"</h2>
                    <p>"Notes recorded after counseling sessions."</p>
                </section>
                <section class="panel">
                    <h2>"Messages"</h2>
                    <p><a href="/chat">"Open chat"</a> " with students."</p>
                </section>
            </div>
        </div>
    }
}
