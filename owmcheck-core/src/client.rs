use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::{config::Config, error::CheckError};

/// Thin wrapper over [`reqwest::Client`] that appends the configured API key
/// to every request and requires an exact 200 status.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    /// Issue `GET {base_url}/{endpoint}` with `params` plus the `appid`
    /// credential as the query string, and decode the body as JSON.
    ///
    /// Any status other than 200 fails with the received status code; no
    /// retries, no timeout beyond the client default.
    pub async fn get_json(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<Value, CheckError> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let mut query = params.to_vec();
        query.push(("appid", self.api_key.clone()));

        let res = self.http.get(&url).query(&query).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if status != StatusCode::OK {
            return Err(CheckError::UnexpectedStatus {
                status,
                body: truncate_body(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
