//! Wordmark client: talks to the HTTP API and drives the page.
//!
//! [`HttpWordmarkApi`] keeps a cookie store, so the history token is
//! round-tripped the same way a browser would carry it.

mod clipboard;
mod orchestrator;
mod render;

pub use clipboard::*;
pub use orchestrator::*;
pub use render::*;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::*;

/// HTTP client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error: {0}")]
    Server(String),

    #[error("History was not saved")]
    NotSaved,
}

/// The three calls the page makes.
#[async_trait]
pub trait WordmarkApi: Send + Sync {
    async fn read_history(&self) -> Result<HistoryList, ClientError>;

    async fn fetch_word(&self) -> Result<WordRecord, ClientError>;

    async fn append_history(&self, entries: &[HistoryEntry]) -> Result<(), ClientError>;
}

/// [`WordmarkApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpWordmarkApi {
    base_url: String,
    client: Client,
}

impl HttpWordmarkApi {
    /// Create client from WORDMARK_URL.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(crate::config::server_url_from_env())
    }

    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = Client::builder().cookie_store(true).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ClientError::Server(format!("{}: {}", status, body)))
        }
    }
}

#[async_trait]
impl WordmarkApi for HttpWordmarkApi {
    async fn read_history(&self) -> Result<HistoryList, ClientError> {
        let response = self.client.get(self.url("/history")).send().await?;
        self.handle_response(response).await
    }

    async fn fetch_word(&self) -> Result<WordRecord, ClientError> {
        let response = self.client.get(self.url("/words")).send().await?;
        self.handle_response(response).await
    }

    async fn append_history(&self, entries: &[HistoryEntry]) -> Result<(), ClientError> {
        let response = self
            .client
            .post(self.url("/history"))
            .json(entries)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let ack: AppendAck = response.json().await?;
                if ack.success {
                    Ok(())
                } else {
                    Err(ClientError::NotSaved)
                }
            }
            StatusCode::INTERNAL_SERVER_ERROR => Err(ClientError::NotSaved),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(ClientError::Server(format!("{}: {}", status, body)))
            }
        }
    }
}
