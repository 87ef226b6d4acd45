use std::time::Duration;

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use ureq::{Agent, Request, Response};
use url::Url;

use crate::config::ServerConfig;
use crate::error::BreatheError;
use crate::store::types::{
    BreathSession, CreateResponse, Health, NewSession, NewTiming, Profile, TimingRecord,
};
use crate::store::Store;

/// Blocking REST client for the Store.
#[derive(Clone)]
pub struct HttpStore {
    agent: Agent,
    root: String,
    api: String,
}

/// Error body the Store sends with non-2xx answers.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl HttpStore {
    /// Build a client for the given server settings.
    #[must_use]
    pub fn new(server: &ServerConfig) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(secs) = server.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let root = server.base_url.trim_end_matches('/').to_string();
        let prefix = server.api_prefix.trim_matches('/');
        let api = if prefix.is_empty() {
            root.clone()
        } else {
            format!("{root}/{prefix}")
        };

        Self {
            agent: builder.build(),
            root,
            api,
        }
    }

    /// Full URL of an API route, e.g. `timings` -> `http://host/api/timings`.
    #[must_use]
    pub fn api_url(&self, route: &str) -> String {
        format!("{}/{}", self.api, route.trim_start_matches('/'))
    }

    /// Full URL of a route outside the API prefix.
    #[must_use]
    pub fn root_url(&self, route: &str) -> String {
        format!("{}/{}", self.root, route.trim_start_matches('/'))
    }

    /// URL of one timing. The id is percent-encoded as a single path segment.
    ///
    /// # Errors
    ///
    /// Returns `BreatheError::Config` if the configured server URL is not a
    /// valid base URL.
    pub fn timing_url(&self, id: &str) -> Result<String, BreatheError> {
        let mut url = Url::parse(&self.api_url("timings"))
            .map_err(|e| BreatheError::Config(format!("invalid server URL '{}': {e}", self.api)))?;
        url.path_segments_mut()
            .map_err(|()| BreatheError::Config(format!("server URL '{}' cannot take a path", self.api)))?
            .push(id);
        Ok(url.into())
    }

    /// Send a request and map transport and status failures.
    fn send(
        &self,
        request: Request,
        body: Option<serde_json::Value>,
    ) -> Result<Response, BreatheError> {
        let method = request.method().to_string();
        let url = request.url().to_string();
        debug!("{method} {url}");

        let result = match body {
            Some(json) => request.send_json(json),
            None => request.call(),
        };

        match result {
            Ok(response) => Ok(response),
            Err(ureq::Error::Status(status, response)) => {
                let text = response.into_string().unwrap_or_default();
                let message = serde_json::from_str::<ErrorBody>(&text)
                    .map(|b| b.error)
                    .unwrap_or(text);
                warn!("{method} {url} rejected with {status}: {message}");
                Err(BreatheError::StoreRejected { status, message })
            }
            Err(ureq::Error::Transport(transport)) => {
                warn!("{method} {url} failed: {transport}");
                Err(BreatheError::StoreUnavailable(transport.to_string()))
            }
        }
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, BreatheError> {
        let response = self.send(self.agent.get(url), None)?;
        read_json(response)
    }

    fn post_json<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, BreatheError> {
        let value = serde_json::to_value(body)?;
        let response = self.send(self.agent.post(url), Some(value))?;
        read_json(response)
    }

    fn delete(&self, url: &str) -> Result<(), BreatheError> {
        self.send(self.agent.delete(url), None).map(|_| ())
    }
}

fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, BreatheError> {
    let text = response
        .into_string()
        .map_err(|e| BreatheError::StoreUnavailable(format!("failed to read response: {e}")))?;
    Ok(serde_json::from_str(&text)?)
}

impl Store for HttpStore {
    fn create_timing(&self, timing: &NewTiming) -> Result<CreateResponse, BreatheError> {
        self.post_json(&self.api_url("timings"), timing)
    }

    fn list_timings(&self) -> Result<Vec<TimingRecord>, BreatheError> {
        self.get_json(&self.api_url("timings"))
    }

    fn delete_timing(&self, id: &str) -> Result<(), BreatheError> {
        self.delete(&self.timing_url(id)?)
    }

    fn create_session(&self, session: &NewSession) -> Result<CreateResponse, BreatheError> {
        self.post_json(&self.api_url("sessions"), session)
    }

    fn list_sessions(&self) -> Result<Vec<BreathSession>, BreatheError> {
        self.get_json(&self.api_url("sessions"))
    }

    fn get_profile(&self) -> Result<Profile, BreatheError> {
        self.get_json(&self.api_url("profile"))
    }

    fn save_profile(&self, profile: &Profile) -> Result<(), BreatheError> {
        let _: serde_json::Value = self.post_json(&self.api_url("profile"), profile)?;
        Ok(())
    }

    fn clear_all(&self) -> Result<(), BreatheError> {
        self.delete(&self.api_url("clear"))
    }

    fn health(&self) -> Result<Health, BreatheError> {
        self.get_json(&self.root_url("health"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server(base_url: &str, api_prefix: &str) -> ServerConfig {
        ServerConfig {
            base_url: base_url.to_string(),
            api_prefix: api_prefix.to_string(),
            timeout_secs: None,
        }
    }

    #[test]
    fn test_urls() {
        let store = HttpStore::new(&server("http://localhost:5000/", "/api"));
        assert_eq!(store.api_url("timings"), "http://localhost:5000/api/timings");
        assert_eq!(store.api_url("/timings/3"), "http://localhost:5000/api/timings/3");
        assert_eq!(store.root_url("health"), "http://localhost:5000/health");
    }

    #[test]
    fn test_timing_url_encodes_id() {
        let store = HttpStore::new(&server("http://localhost:5000", "/api"));
        assert_eq!(
            store.timing_url("3").unwrap(),
            "http://localhost:5000/api/timings/3"
        );
        assert_eq!(
            store.timing_url("a/b?c#d").unwrap(),
            "http://localhost:5000/api/timings/a%2Fb%3Fc%23d"
        );
    }

    #[test]
    fn test_timing_url_rejects_bad_server() {
        let store = HttpStore::new(&server("not a url", "/api"));
        assert!(matches!(
            store.timing_url("3"),
            Err(BreatheError::Config(_))
        ));
    }

    #[test]
    fn test_urls_without_prefix() {
        let store = HttpStore::new(&server("http://example.test", ""));
        assert_eq!(store.api_url("clear"), "http://example.test/clear");
    }

    #[test]
    fn test_unreachable_store_is_unavailable() {
        // Port 9 (discard) is closed on test machines; connecting is refused.
        let mut config = server("http://127.0.0.1:9", "/api");
        config.timeout_secs = Some(2);
        let store = HttpStore::new(&config);

        let err = store.list_timings().unwrap_err();
        assert!(matches!(err, BreatheError::StoreUnavailable(_)));
    }
}
