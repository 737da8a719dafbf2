//! One-shot JSON loading with explicit loading/error/data states.
//!
//! Every chart mount resolves exactly one [`DataSource`]: a GET against a
//! remote endpoint, or a bundled fixture shipped with the build. There is no
//! caching and no retry; remounting a chart issues a fresh load.

use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("HTTP error: Status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid payload: {0}")]
    Decode(String),
}

/// Where a chart's dataset comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Remote(&'static str),
    Bundled(&'static str),
}

/// The three-way display state every chart derives its body from.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Failed(String),
    Ready(T),
}

impl<T: Clone> LoadState<T> {
    /// Collapse a pending/settled fetch result into display state. `None`
    /// means the request is still in flight.
    pub fn from_result(result: Option<&Result<T, FetchError>>) -> Self {
        match result {
            None => Self::Loading,
            Some(Ok(data)) => Self::Ready(data.clone()),
            Some(Err(err)) => Self::Failed(err.to_string()),
        }
    }
}

/// Resolve a data source to its parsed payload.
pub async fn load<T: DeserializeOwned>(source: DataSource) -> Result<T, FetchError> {
    match source {
        DataSource::Remote(url) => fetch_json(url).await,
        DataSource::Bundled(raw) => parse_bundled(raw),
    }
}

/// GET `url` and parse the body as JSON. Exactly one request per call; a
/// non-success status is surfaced rather than followed by a retry.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let response = reqwest::get(url).await.map_err(|err| {
        tracing::warn!(%url, error = %err, "network request failed");
        FetchError::Network(err.to_string())
    })?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(%url, status = status.as_u16(), "endpoint returned non-success status");
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = response
        .text()
        .await
        .map_err(|err| FetchError::Network(err.to_string()))?;
    serde_json::from_str(&body).map_err(|err| FetchError::Decode(err.to_string()))
}

fn parse_bundled<T: DeserializeOwned>(raw: &str) -> Result<T, FetchError> {
    serde_json::from_str(raw).map_err(|err| {
        tracing::warn!(error = %err, "bundled fixture failed to parse");
        FetchError::Decode(err.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_success_status_yields_a_visible_message() {
        let state = LoadState::<Vec<u32>>::from_result(Some(&Err(FetchError::Status(404))));
        match state {
            LoadState::Failed(message) => {
                assert!(!message.is_empty());
                assert_eq!(message, "HTTP error: Status 404");
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn pending_results_stay_loading() {
        let state = LoadState::<u32>::from_result(None);
        assert_eq!(state, LoadState::Loading);
    }

    #[test]
    fn success_carries_the_payload() {
        let state = LoadState::from_result(Some(&Ok(vec![1u32, 2, 3])));
        assert_eq!(state, LoadState::Ready(vec![1, 2, 3]));
    }

    #[test]
    fn bundled_decode_errors_surface() {
        let result: Result<Vec<u32>, FetchError> = parse_bundled("not json");
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[test]
    fn bundled_payloads_parse() {
        let result: Result<Vec<u32>, FetchError> = parse_bundled("[1, 2]");
        assert_eq!(result.unwrap(), vec![1, 2]);
    }
}
