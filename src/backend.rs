use gloo_net::http::Request;
use serde::Deserialize;
use web_sys::AbortSignal;

use crate::config::Config;

/// Anything that keeps the backend message from reaching the screen.
/// The UI shows the same fallback for every variant; the detail is only
/// for the console.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),
    #[error("backend answered HTTP {0}")]
    Status(u16),
    #[error("unexpected response body: {0}")]
    Body(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct StatusBody {
    message: String,
}

/// One `GET {base}/`, no extra headers. `signal` lets the caller abort it.
pub async fn fetch_status(
    config: &Config,
    signal: Option<&AbortSignal>,
) -> Result<String, BackendError> {
    let resp = Request::get(&config.status_url())
        .abort_signal(signal)
        .send()
        .await?;
    let status = resp.status();
    let body = resp.text().await?;
    read_status(status, &body)
}

pub fn read_status(status: u16, body: &str) -> Result<String, BackendError> {
    if !(200..300).contains(&status) {
        return Err(BackendError::Status(status));
    }
    let parsed: StatusBody = serde_json::from_str(body)?;
    Ok(parsed.message)
}
