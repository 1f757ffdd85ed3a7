//! Configuration placeholder page.

use yew::prelude::*;

/// Configuration page component.
#[function_component(ConfigurationPage)]
pub fn configuration_page() -> Html {
    html! {
        <main class="page">
            <h1>{"Configuration"}</h1>
            <div class="card">
                <p>{"Configuration content will go here."}</p>
            </div>
        </main>
    }
}
