//! Dashboard overview page.
//!
//! The metric values are placeholders until the bot exposes real counters.

use yew::prelude::*;

use crate::components::StatCard;

/// Dashboard page component.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    html! {
        <main class="page">
            <h1>{"Dashboard Overview"}</h1>
            <div class="stats-grid">
                <StatCard value="128" label="Active Members" accent="accent-success" />
                <StatCard value="12" label="New In Town" accent="accent-info" />
                <StatCard value="3" label="Open Flags" accent="accent-danger" />
            </div>
        </main>
    }
}
