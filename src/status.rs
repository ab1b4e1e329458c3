use std::cell::Cell;
use std::fmt;
use std::future::Future;
use std::rc::Rc;

use gloo::console;
use wasm_bindgen_futures::spawn_local;
use web_sys::AbortController;
use yew::prelude::*;

use crate::backend::{fetch_status, BackendError};
use crate::config::Config;

pub const HEADING: &str = "ShareFoods";
pub const STATUS_PREFIX: &str = "Backend Status: ";
pub const BACKEND_UNREACHABLE: &str = "Error connecting to backend";

/// The one piece of display state. Empty until the backend call settles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusMessage(String);

impl StatusMessage {
    /// Every failure collapses to the same user-facing text.
    pub fn from_outcome(outcome: Result<String, BackendError>) -> Self {
        match outcome {
            Ok(message) => Self(message),
            Err(_) => Self(BACKEND_UNREACHABLE.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn status_line(message: &StatusMessage) -> String {
    format!("{STATUS_PREFIX}{message}")
}

/// Liveness flag for one mount of a component. Clones share the flag, so the
/// effect teardown can end it while a spawned task still holds a copy.
#[derive(Debug, Clone)]
pub struct Mount {
    live: Rc<Cell<bool>>,
}

impl Mount {
    pub fn new() -> Self {
        Self {
            live: Rc::new(Cell::new(true)),
        }
    }

    pub fn is_live(&self) -> bool {
        self.live.get()
    }

    pub fn end(&self) {
        self.live.set(false);
    }
}

/// Awaits `request` and hands back its outcome, or `None` if the mount
/// ended before it settled.
pub async fn settle<F>(mount: &Mount, request: F) -> Option<Result<String, BackendError>>
where
    F: Future<Output = Result<String, BackendError>>,
{
    let outcome = request.await;
    mount.is_live().then_some(outcome)
}

/// Writes a settled outcome into state. Failures go to `report` first.
pub fn apply(
    outcome: Option<Result<String, BackendError>>,
    report: impl FnOnce(&BackendError),
    set: impl FnOnce(StatusMessage),
) {
    let Some(outcome) = outcome else { return };
    if let Err(err) = &outcome {
        report(err);
    }
    set(StatusMessage::from_outcome(outcome));
}

/// One mount's worth of work: a single call to `request`, then `apply`.
pub async fn load_status<Req, Fut>(
    mount: Mount,
    request: Req,
    report: impl FnOnce(&BackendError),
    set: impl FnOnce(StatusMessage),
) where
    Req: FnOnce() -> Fut,
    Fut: Future<Output = Result<String, BackendError>>,
{
    apply(settle(&mount, request()).await, report, set);
}

#[derive(Properties, PartialEq)]
pub struct StatusPanelProps {
    pub message: StatusMessage,
}

#[function_component(StatusPanel)]
pub fn status_panel(props: &StatusPanelProps) -> Html {
    html! {
        <>
            <h1>{ HEADING }</h1>
            <p>{ status_line(&props.message) }</p>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusViewProps {
    pub config: Config,
}

#[function_component(StatusView)]
pub fn status_view(props: &StatusViewProps) -> Html {
    let message = use_state(StatusMessage::default);

    // Ask the backend once per mount.
    {
        let message = message.clone();
        let config = props.config.clone();

        use_effect_with((), move |_| {
            let mount = Mount::new();
            let abort = AbortController::new().ok();
            let signal = abort.as_ref().map(AbortController::signal);

            spawn_local(load_status(
                mount.clone(),
                move || async move { fetch_status(&config, signal.as_ref()).await },
                |err| console::error!("Error connecting to backend:", err.to_string()),
                move |next| message.set(next),
            ));

            move || {
                mount.end();
                if let Some(controller) = abort {
                    controller.abort();
                }
            }
        });
    }

    html! { <StatusPanel message={(*message).clone()} /> }
}
