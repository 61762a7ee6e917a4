use anyhow::{Context, Result};
use log::debug;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use std::time::Duration;

use crate::config::settings::ApiSettings;

/// JSON client for the squad service, sending the account token on every
/// request.
pub struct AuthedClient {
    client: Client,
    base_url: String,
    token: String,
}

impl AuthedClient {
    pub fn new(settings: &ApiSettings, token: &str) -> Result<Self> {
        let client = Self::build_client(settings.user_agent, settings.timeout_secs)?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get(&self, path: &str) -> Result<Response> {
        self.send(self.request(Method::GET, path)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Response> {
        self.send(self.request(Method::DELETE, path)).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    pub async fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        self.send(self.request(Method::PATCH, path).json(body)).await
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        debug!("{} {}", method, url);
        self.client.request(method, url).bearer_auth(&self.token)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        request.send().await.context("Failed to reach squad service")
    }
}

/// Turn a non-2xx response into an error carrying the HTTP status.
pub async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    if body.is_empty() {
        anyhow::bail!("Squad service returned status: {}", status);
    }
    anyhow::bail!("Squad service returned status: {} ({})", status, body.trim());
}
