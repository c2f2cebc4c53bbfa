use async_trait::async_trait;
use common::{HistoryResponse, SummaryResponse};
use compute::{DashboardApi, DashboardError, Location, Result};
use gloo_net::http::{Request, Response};
use serde::Deserialize;

use crate::settings;

pub fn history_endpoint(location: &Location) -> String {
    format!("/api/data/{}", encode_segment(location))
}

pub fn summary_endpoint(location: &Location) -> String {
    format!("/api/summary/{}", encode_segment(location))
}

pub fn report_endpoint(location: &Location) -> String {
    format!("/api/report/{}", encode_segment(location))
}

fn encode_segment(location: &Location) -> String {
    String::from(js_sys::encode_uri_component(location.as_str()))
}

/// Issues a GET and fails on transport errors and non-2xx statuses.
async fn send_get(endpoint: &str) -> Result<Response> {
    let url = settings::get_settings().api_url(endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url).send().await.map_err(|e| {
        log::error!("GET {} - Request failed: {}", endpoint, e);
        DashboardError::Transport(e.to_string())
    })?;

    if !response.ok() {
        log::error!("GET {} - HTTP error: {}", endpoint, response.status());
        return Err(DashboardError::Http {
            endpoint: endpoint.to_string(),
            status: response.status(),
        });
    }

    Ok(response)
}

/// GET handler for JSON endpoints
pub async fn get_json<T>(endpoint: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let response = send_get(endpoint).await?;

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let body = response.json::<T>().await.map_err(|e| {
        log::error!("GET {} - Failed to parse response: {}", endpoint, e);
        DashboardError::Decode(e.to_string())
    })?;

    log::info!("GET {} - Success", endpoint);
    Ok(body)
}

/// GET handler for binary endpoints
pub async fn get_bytes(endpoint: &str) -> Result<Vec<u8>> {
    let response = send_get(endpoint).await?;

    let bytes = response.binary().await.map_err(|e| {
        log::error!("GET {} - Failed to read body: {}", endpoint, e);
        DashboardError::Decode(e.to_string())
    })?;

    log::info!("GET {} - Success ({} bytes)", endpoint, bytes.len());
    Ok(bytes)
}

/// The deforestation service reached over HTTP.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpDashboardApi;

#[async_trait(?Send)]
impl DashboardApi for HttpDashboardApi {
    async fn history(&self, location: &Location) -> Result<HistoryResponse> {
        get_json(&history_endpoint(location)).await
    }

    async fn summary(&self, location: &Location) -> Result<SummaryResponse> {
        get_json(&summary_endpoint(location)).await
    }

    async fn report(&self, location: &Location) -> Result<Vec<u8>> {
        get_bytes(&report_endpoint(location)).await
    }
}
