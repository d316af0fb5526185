use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

use crate::config;
use crate::quiz::flow::QuizError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayFailure {
    #[error("request failed: {0}")]
    Request(String),
    #[error("server answered with status {0}")]
    Status(u16),
    #[error(transparent)]
    Quiz(#[from] QuizError),
}

pub type RelayResult = Result<(), RelayFailure>;

/// Delivers a finished lead message somewhere a human will read it.
#[async_trait(?Send)]
pub trait LeadSender {
    async fn send(&self, message: &str) -> RelayResult;
}

#[derive(Serialize)]
struct LeadRequest<'a> {
    message: &'a str,
}

/// Posts leads to the backend's Telegram relay.
#[derive(Debug, Clone, Default)]
pub struct HttpLeadSender;

#[async_trait(?Send)]
impl LeadSender for HttpLeadSender {
    async fn send(&self, message: &str) -> RelayResult {
        let request = Request::post(&config::lead_endpoint())
            .json(&LeadRequest { message })
            .map_err(|e| RelayFailure::Request(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| RelayFailure::Request(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(RelayFailure::Status(response.status()))
        }
    }
}
