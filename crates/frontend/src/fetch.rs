//! Single-attempt JSON fetch plumbing shared by the status gate and the
//! Welcome Wagon page.
//!
//! Each fetch-on-mount cycle is modelled as an explicit [`FetchState`]
//! advanced by a single transition function, so the loading / error / ready
//! display modes are mutually exclusive by construction rather than by
//! convention. In-flight requests carry a [`MountToken`] tied to the
//! issuing component; a response that settles after teardown is dropped
//! instead of being applied to a torn-down view.

use std::cell::Cell;
use std::rc::Rc;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;
use yew::Reducible;

/// Why a fetch produced no data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response (connection refused, DNS, CORS).
    #[error("request failed: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("HTTP error! status: {0}")]
    Status(u16),
    /// The body was not the JSON shape we expected.
    #[error("malformed response: {0}")]
    Decode(String),
}

/// View state of one fetch-on-mount cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState<T> {
    /// Mounted, request not yet issued.
    Idle,
    /// Request in flight.
    Loading,
    /// Request settled with a failure; the message is what the user sees.
    Failed(String),
    /// Request settled with decoded data.
    Ready(T),
}

/// Events that advance a [`FetchState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchEvent<T> {
    /// The request was issued.
    Started,
    /// The request failed; carries the display message.
    Failed(String),
    /// The request succeeded; carries the decoded body.
    Loaded(T),
}

impl<T> FetchState<T> {
    /// The single transition function for the fetch lifecycle.
    pub fn apply(self, event: FetchEvent<T>) -> Self {
        match event {
            FetchEvent::Started => Self::Loading,
            FetchEvent::Failed(message) => Self::Failed(message),
            FetchEvent::Loaded(data) => Self::Ready(data),
        }
    }

    /// True while the request has not settled.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Idle | Self::Loading)
    }

    /// The failure message, if the request failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// The decoded data, if the request succeeded.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T: Clone> Reducible for FetchState<T> {
    type Action = FetchEvent<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).clone().apply(action))
    }
}

/// Liveness token tying an in-flight request to its issuing component.
///
/// The effect cleanup revokes the token on teardown; the spawned task
/// checks it before applying the settled result.
#[derive(Clone, Debug)]
pub struct MountToken(Rc<Cell<bool>>);

impl Default for MountToken {
    fn default() -> Self {
        Self::new()
    }
}

impl MountToken {
    /// A live token for a freshly mounted component.
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    /// Mark the owning component as torn down.
    pub fn revoke(&self) {
        self.0.set(false);
    }

    /// True until [`revoke`](Self::revoke) is called.
    pub fn is_live(&self) -> bool {
        self.0.get()
    }
}

/// One GET request, no retry, no timeout.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

/// Log a fetch failure to the browser console without blocking the render.
pub fn log_failure(context: &'static str, message: &str) {
    let line = format!("{}: {}", context, message);
    gloo_timers::callback::Timeout::new(0, move || {
        web_sys::console::error_1(&line.into());
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mount_starts_idle_then_loads() {
        let state = FetchState::<Vec<u32>>::default();
        assert!(state.is_loading());

        let state = state.apply(FetchEvent::Started);
        assert_eq!(state, FetchState::Loading);
        assert!(state.is_loading());
        assert_eq!(state.error(), None);
        assert_eq!(state.data(), None);
    }

    #[test]
    fn failure_is_terminal_and_exclusive() {
        let state = FetchState::<Vec<u32>>::Loading.apply(FetchEvent::Failed("boom".into()));
        assert_eq!(state.error(), Some("boom"));
        assert!(!state.is_loading());
        assert_eq!(state.data(), None);
    }

    #[test]
    fn success_carries_the_decoded_body() {
        let state = FetchState::Loading.apply(FetchEvent::Loaded(vec![1, 2, 3]));
        assert_eq!(state.data(), Some(&vec![1, 2, 3]));
        assert_eq!(state.error(), None);
        assert!(!state.is_loading());
    }

    #[test]
    fn http_failure_message_matches_display_contract() {
        assert_eq!(
            FetchError::Status(503).to_string(),
            "HTTP error! status: 503"
        );
    }

    #[test]
    fn default_token_is_live_like_a_new_one() {
        assert!(MountToken::default().is_live());
        assert!(MountToken::new().is_live());
    }

    #[test]
    fn token_revocation_is_observable_through_clones() {
        let token = MountToken::new();
        let in_flight = token.clone();
        assert!(in_flight.is_live());
        token.revoke();
        assert!(!in_flight.is_live());
    }
}
