//! SAM Reports placeholder page.

use yew::prelude::*;

/// SAM Reports page component.
#[function_component(SamReportsPage)]
pub fn sam_reports_page() -> Html {
    html! {
        <main class="page">
            <h1>{"SAM Reports"}</h1>
            <div class="card">
                <p>{"SAM Reports content will go here."}</p>
            </div>
        </main>
    }
}
