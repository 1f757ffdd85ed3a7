//! Full-screen remediation view for missing bot configuration.

use yew::prelude::*;

/// Properties for ConfigError component.
#[derive(Properties, PartialEq)]
pub struct ConfigErrorProps {
    /// Missing configuration keys, listed verbatim in server order.
    pub missing_keys: Vec<String>,
}

/// Configuration error screen shown instead of the shell when the bot
/// reports missing configuration keys.
#[function_component(ConfigError)]
pub fn config_error(props: &ConfigErrorProps) -> Html {
    html! {
        <div class="screen-center config-error">
            <div class="card config-error-card">
                <h1>{"Configuration Error"}</h1>
                <p>
                    {"The bot failed to start due to missing or invalid configuration. \
                      Please resolve the following issues in your configuration or \
                      environment file:"}
                </p>
                <ul class="config-error-keys">
                    { for props.missing_keys.iter().map(|key| html! {
                        <li key={key.clone()} class="config-key">{ key }</li>
                    })}
                </ul>
                <p class="config-error-footer">
                    {"After correcting the configuration, please restart the bot."}
                </p>
            </div>
        </div>
    }
}
