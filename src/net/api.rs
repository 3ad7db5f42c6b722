//! REST helpers for the panel's client API startup endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; non-2xx responses carry the
//! server's own error detail so callers can show it verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
#[cfg(any(test, feature = "hydrate"))]
use super::types::{ServerResponse, StartupListResponse, VariableUpdateResponse};
use super::types::{StartupData, VariableUpdate};
use crate::state::variable_edit::StartupApi;

#[cfg(any(test, feature = "hydrate"))]
fn server_endpoint(api_base: &str, server_uuid: &str) -> String {
    format!("{}/servers/{server_uuid}", api_base.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn startup_endpoint(api_base: &str, server_uuid: &str) -> String {
    format!("{}/startup", server_endpoint(api_base, server_uuid))
}

#[cfg(any(test, feature = "hydrate"))]
fn startup_variable_endpoint(api_base: &str, server_uuid: &str) -> String {
    format!("{}/startup/variable", server_endpoint(api_base, server_uuid))
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_startup(body: &str) -> Result<StartupData, ApiError> {
    let raw: StartupListResponse = serde_json::from_str(body).map_err(|e| ApiError::decode(&e))?;
    Ok(raw.into())
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_variable_update(body: &str) -> Result<VariableUpdate, ApiError> {
    let raw: VariableUpdateResponse = serde_json::from_str(body).map_err(|e| ApiError::decode(&e))?;
    Ok(raw.into())
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_permissions(body: &str) -> Result<Vec<String>, ApiError> {
    let raw: ServerResponse = serde_json::from_str(body).map_err(|e| ApiError::decode(&e))?;
    Ok(raw.into_permissions())
}

/// Send a prepared request and return the body of a 2xx response.
#[cfg(feature = "hydrate")]
async fn send(request: gloo_net::http::Request) -> Result<String, ApiError> {
    let resp = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::from_status(status, &body));
    }
    Ok(body)
}

#[cfg(feature = "hydrate")]
fn get(url: &str) -> Result<gloo_net::http::Request, ApiError> {
    gloo_net::http::Request::get(url)
        .header("Accept", "application/json")
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))
}

/// Fetch variables, invocation and docker images from
/// `GET {api_base}/servers/{uuid}/startup`.
///
/// # Errors
///
/// Returns an error if the request fails, the server rejects it, or the body
/// does not match the startup schema.
pub async fn fetch_startup(api_base: &str, server_uuid: &str) -> Result<StartupData, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = send(get(&startup_endpoint(api_base, server_uuid))?).await?;
        parse_startup(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api_base, server_uuid);
        Err(ApiError::Unavailable)
    }
}

/// Set one variable via `PUT {api_base}/servers/{uuid}/startup/variable`.
///
/// # Errors
///
/// Returns an error if the request fails, the value is rejected, or the
/// response is malformed.
pub async fn update_startup_variable(
    api_base: &str,
    server_uuid: &str,
    env_variable: &str,
    value: &str,
) -> Result<VariableUpdate, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::UpdateVariableRequest {
            key: env_variable,
            value,
        };
        let request = gloo_net::http::Request::put(&startup_variable_endpoint(api_base, server_uuid))
            .header("Accept", "application/json")
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let body = send(request).await?;
        parse_variable_update(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api_base, server_uuid, env_variable, value);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the current user's capabilities on a server from
/// `GET {api_base}/servers/{uuid}` (`meta.user_permissions`).
///
/// # Errors
///
/// Returns an error if the request fails or the body is malformed.
pub async fn fetch_permissions(api_base: &str, server_uuid: &str) -> Result<Vec<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = send(get(&server_endpoint(api_base, server_uuid))?).await?;
        parse_permissions(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api_base, server_uuid);
        Err(ApiError::Unavailable)
    }
}

/// `StartupApi` backed by the panel's HTTP endpoints.
#[derive(Clone, Debug)]
pub struct HttpStartupApi {
    api_base: String,
}

impl HttpStartupApi {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }
}

impl StartupApi for HttpStartupApi {
    async fn update_variable(
        &self,
        server_uuid: &str,
        env_variable: &str,
        value: &str,
    ) -> Result<VariableUpdate, ApiError> {
        update_startup_variable(&self.api_base, server_uuid, env_variable, value).await
    }
}
