//! Root application: status gate, routing, and the navigation shell.

use web_types::BotStatus;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{ConfigError, Loading};
use crate::config::{ApiConfig, use_api_config};
use crate::fetch::{FetchEvent, FetchState, MountToken, get_json, log_failure};
use crate::pages::{ConfigurationPage, DashboardPage, SamReportsPage, WelcomeWagonPage};

/// Application routes, one per sidebar entry.
#[derive(Clone, Copy, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/welcome-wagon")]
    WelcomeWagon,
    #[at("/sam-reports")]
    SamReports,
    #[at("/configuration")]
    Configuration,
}

/// Route switch function.
fn switch(route: Route) -> Html {
    match route {
        Route::Dashboard => html! { <DashboardPage /> },
        Route::WelcomeWagon => html! { <WelcomeWagonPage /> },
        Route::SamReports => html! { <SamReportsPage /> },
        Route::Configuration => html! { <ConfigurationPage /> },
    }
}

/// The four mutually exclusive display modes of the status gate.
#[derive(Debug, Clone, PartialEq, Eq)]
enum StatusView {
    Loading,
    Unreachable(String),
    MissingConfig(Vec<String>),
    Ready,
}

/// Pick the gate's display mode from the status fetch state.
fn classify(state: &FetchState<BotStatus>) -> StatusView {
    match state {
        FetchState::Idle | FetchState::Loading => StatusView::Loading,
        FetchState::Failed(message) => StatusView::Unreachable(message.clone()),
        FetchState::Ready(status) if status.has_missing_config() => {
            StatusView::MissingConfig(status.missing_config.clone())
        }
        FetchState::Ready(_) => StatusView::Ready,
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ContextProvider<ApiConfig> context={ApiConfig::default()}>
            <StatusGate />
        </ContextProvider<ApiConfig>>
    }
}

/// Root gate: fetches the bot status once and decides whether to show the
/// shell, a remediation view, or an error screen.
#[function_component(StatusGate)]
fn status_gate() -> Html {
    let config = use_api_config();
    let status = use_reducer(FetchState::<BotStatus>::default);

    {
        let status = status.clone();
        let url = config.status_url();
        use_effect_with((), move |_| {
            let token = MountToken::new();
            let in_flight = token.clone();
            status.dispatch(FetchEvent::Started);
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = get_json::<BotStatus>(&url).await;
                if !in_flight.is_live() {
                    return;
                }
                match outcome {
                    Ok(report) => status.dispatch(FetchEvent::Loaded(report)),
                    Err(e) => {
                        let message = e.to_string();
                        log_failure("Failed to fetch bot status", &message);
                        status.dispatch(FetchEvent::Failed(message));
                    }
                }
            });
            move || token.revoke()
        });
    }

    match classify(&status) {
        StatusView::Loading => html! {
            <div class="screen-center">
                <Loading />
            </div>
        },
        StatusView::Unreachable(message) => html! {
            <div class="screen-center">
                { format!("Error: {}", message) }
            </div>
        },
        StatusView::MissingConfig(keys) => html! {
            <ConfigError missing_keys={keys} />
        },
        StatusView::Ready => html! {
            <BrowserRouter>
                <div class="app-container">
                    <Sidebar />
                    <div class="content-column">
                        <Header />
                        <Switch<Route> render={switch} />
                    </div>
                </div>
            </BrowserRouter>
        },
    }
}

/// One sidebar navigation entry.
struct NavEntry {
    label: &'static str,
    route: Route,
    /// Heroicon-style outline path data.
    icon: &'static str,
}

const ICON_CHART_BAR: &str = "M3 13.125C3 12.504 3.504 12 4.125 12h2.25c.621 0 1.125.504 \
     1.125 1.125v6.75C7.5 20.496 6.996 21 6.375 21h-2.25A1.125 1.125 0 013 19.875v-6.75zM9.75 \
     8.625c0-.621.504-1.125 1.125-1.125h2.25c.621 0 1.125.504 1.125 1.125v11.25c0 \
     .621-.504 1.125-1.125 1.125h-2.25a1.125 1.125 0 01-1.125-1.125V8.625zM16.5 \
     4.125c0-.621.504-1.125 1.125-1.125h2.25C20.496 3 21 3.504 21 4.125v15.75c0 \
     .621-.504 1.125-1.125 1.125h-2.25a1.125 1.125 0 01-1.125-1.125V4.125z";
const ICON_USERS: &str = "M15 19.128a9.38 9.38 0 002.625.372 9.337 9.337 0 \
     004.121-.952 4.125 4.125 0 00-7.533-2.493M15 19.128v-.003c0-1.113-.285-2.16-.786-3.07M15 \
     19.128v.106A12.318 12.318 0 018.624 21c-2.331 0-4.512-.645-6.374-1.766l-.001-.109a6.375 \
     6.375 0 0111.964-3.07M12 6.375a3.375 3.375 0 11-6.75 0 3.375 3.375 0 016.75 0zm8.25 \
     2.25a2.625 2.625 0 11-5.25 0 2.625 2.625 0 015.25 0z";
const ICON_SHIELD_CHECK: &str = "M9 12.75L11.25 15 15 9.75m-3-7.036A11.959 11.959 0 \
     013.598 6 11.99 11.99 0 003 9.749c0 5.592 3.824 10.29 9 11.623 5.176-1.332 \
     9-6.03 9-11.622 0-1.31-.21-2.571-.598-3.751h-.152c-3.196 0-6.1-1.248-8.25-3.285z";
const ICON_COG: &str = "M10.343 3.94c.09-.542.56-.94 1.11-.94h1.093c.55 0 \
     1.02.398 1.11.94l.149.894c.07.424.384.764.78.93.398.164.855.142 \
     1.205-.108l.737-.527a1.125 1.125 0 011.45.12l.773.774c.39.389.44 1.002.12 \
     1.45l-.527.737c-.25.35-.272.806-.107 1.204.165.397.505.71.93.78l.893.15c.543.09.94.559.94 \
     1.109v1.094c0 .55-.397 1.02-.94 1.11l-.894.149c-.424.07-.764.383-.929.78-.165.398-.143.854.107 \
     1.204l.527.738c.32.447.269 1.06-.12 1.45l-.774.773a1.125 1.125 0 01-1.449.12l-.738-.527c-.35-.25-.806-.272-1.203-.107-.398.165-.71.505-.781.929l-.149.894c-.09.542-.56.94-1.11.94h-1.094c-.55 \
     0-1.019-.398-1.11-.94l-.148-.894c-.071-.424-.384-.764-.781-.93-.398-.164-.854-.142-1.204.108l-.738.527a1.125 \
     1.125 0 01-1.449-.12l-.773-.774a1.125 1.125 0 01-.12-1.45l.527-.737c.25-.35.272-.806.108-1.204-.165-.397-.506-.71-.93-.78l-.894-.15c-.542-.09-.94-.56-.94-1.109v-1.094c0-.55.398-1.02.94-1.11l.894-.149c.424-.07.765-.383.93-.78.165-.398.143-.854-.108-1.204l-.526-.738a1.125 \
     1.125 0 01.12-1.45l.773-.773a1.125 1.125 0 011.45-.12l.737.527c.35.25.807.272 \
     1.204.107.397-.165.71-.505.78-.929l.15-.894zM15 12a3 3 0 11-6 0 3 3 0 016 0z";

const NAV_ENTRIES: [NavEntry; 4] = [
    NavEntry {
        label: "Dashboard",
        route: Route::Dashboard,
        icon: ICON_CHART_BAR,
    },
    NavEntry {
        label: "Welcome Wagon",
        route: Route::WelcomeWagon,
        icon: ICON_USERS,
    },
    NavEntry {
        label: "SAM Reports",
        route: Route::SamReports,
        icon: ICON_SHIELD_CHECK,
    },
    NavEntry {
        label: "Configuration",
        route: Route::Configuration,
        icon: ICON_COG,
    },
];

/// Class for a sidebar link; only the entry matching the current route
/// exactly gets the active highlight.
fn nav_link_class(current: Option<Route>, entry: Route) -> &'static str {
    if current == Some(entry) {
        "nav-link active"
    } else {
        "nav-link"
    }
}

/// Sidebar navigation component.
#[function_component(Sidebar)]
fn sidebar() -> Html {
    let current = use_route::<Route>();

    html! {
        <aside class="sidebar">
            <div class="sidebar-brand">{"WLM Network"}</div>
            <nav>
                <ul class="nav-links">
                    { for NAV_ENTRIES.iter().map(|entry| {
                        let classes = nav_link_class(current, entry.route);
                        html! {
                            <li key={entry.label}>
                                <Link<Route> to={entry.route} classes={classes}>
                                    <svg
                                        class="nav-icon"
                                        viewBox="0 0 24 24"
                                        fill="none"
                                        stroke="currentColor"
                                        stroke-width="1.5"
                                        aria-hidden="true"
                                    >
                                        <path
                                            stroke-linecap="round"
                                            stroke-linejoin="round"
                                            d={entry.icon}
                                        />
                                    </svg>
                                    { entry.label }
                                </Link<Route>>
                            </li>
                        }
                    })}
                </ul>
            </nav>
        </aside>
    }
}

/// Static page header.
#[function_component(Header)]
fn header() -> Html {
    html! {
        <header class="header">
            <h1>{"WLM Bot Dashboard"}</h1>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_map_one_to_one_onto_paths() {
        assert_eq!(Route::Dashboard.to_path(), "/");
        assert_eq!(Route::WelcomeWagon.to_path(), "/welcome-wagon");
        assert_eq!(Route::SamReports.to_path(), "/sam-reports");
        assert_eq!(Route::Configuration.to_path(), "/configuration");
        assert_eq!(Route::recognize("/sam-reports"), Some(Route::SamReports));
        assert_eq!(Route::recognize("/welcome-wagon"), Some(Route::WelcomeWagon));
    }

    #[test]
    fn only_the_current_route_gets_the_active_highlight() {
        assert_eq!(
            nav_link_class(Some(Route::WelcomeWagon), Route::WelcomeWagon),
            "nav-link active"
        );
        assert_eq!(
            nav_link_class(Some(Route::WelcomeWagon), Route::Dashboard),
            "nav-link"
        );
        // Unmatched paths highlight nothing.
        assert_eq!(nav_link_class(None, Route::Dashboard), "nav-link");
    }

    #[test]
    fn sidebar_entries_follow_the_fixed_order() {
        let labels: Vec<_> = NAV_ENTRIES.iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            ["Dashboard", "Welcome Wagon", "SAM Reports", "Configuration"]
        );
    }

    #[test]
    fn pending_and_idle_states_both_gate_on_loading() {
        assert_eq!(classify(&FetchState::Idle), StatusView::Loading);
        assert_eq!(classify(&FetchState::Loading), StatusView::Loading);
    }

    #[test]
    fn fetch_failure_never_reaches_the_shell() {
        let view = classify(&FetchState::Failed("HTTP error! status: 503".into()));
        assert_eq!(
            view,
            StatusView::Unreachable("HTTP error! status: 503".into())
        );
    }

    #[test]
    fn missing_keys_are_listed_verbatim_in_order() {
        let status = BotStatus {
            logged_in: false,
            missing_config: vec!["DISCORD_TOKEN".into(), "GUILD_ID".into()],
        };
        let view = classify(&FetchState::Ready(status));
        assert_eq!(
            view,
            StatusView::MissingConfig(vec!["DISCORD_TOKEN".into(), "GUILD_ID".into()])
        );
    }

    #[test]
    fn complete_config_opens_the_shell() {
        let status = BotStatus {
            logged_in: true,
            missing_config: Vec::new(),
        };
        assert_eq!(classify(&FetchState::Ready(status)), StatusView::Ready);
    }
}
