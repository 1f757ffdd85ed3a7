//! Loading spinner shown while a dashboard fetch is pending.

use yew::prelude::*;

/// Properties for Loading component.
#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    /// Accessible description of what is being waited on.
    #[prop_or(AttrValue::Static("Loading the WLM dashboard"))]
    pub label: AttrValue,
}

/// Spinner with an accessible status label.
#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="loading" role="status" aria-label={props.label.clone()}>
            <div class="spinner"></div>
        </div>
    }
}
