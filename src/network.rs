use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{OutputLanguage, SummaryOutput, SummaryStyle};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000/ingest-youtube";

pub const ERROR_PREFIX: &str = "Error fetching summary: ";

/// Snapshot of the form values taken when a submission starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IngestRequest {
    pub youtube_url: String,
    pub language: OutputLanguage,
    pub summary_type: SummaryStyle,
}

#[derive(Serialize)]
struct IngestForm<'a> {
    youtube_url: &'a str,
    language: &'static str,
    summary_type: &'static str,
}

impl<'a> From<&'a IngestRequest> for IngestForm<'a> {
    fn from(req: &'a IngestRequest) -> Self {
        Self {
            youtube_url: &req.youtube_url,
            language: req.language.as_wire(),
            summary_type: req.summary_type.as_wire(),
        }
    }
}

/// Body of a successful `/ingest-youtube` reply. Fields the backend leaves out render empty.
#[derive(Debug, Default, Deserialize)]
pub struct IngestResponse {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl From<IngestResponse> for SummaryOutput {
    fn from(resp: IngestResponse) -> Self {
        let summary = match (resp.summary, resp.error) {
            (Some(summary), _) => summary,
            (None, Some(error)) => format!("Backend reported an error: {}", error),
            (None, None) => String::new(),
        };
        SummaryOutput {
            summary,
            answer: resp.answer.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    /// The backend answered with a non-success status.
    #[error("Status: {status}, Data: {data}")]
    Server { status: u16, data: String },

    /// The request went out but no response came back.
    #[error("{}", error_chain(.0))]
    Transport(#[source] reqwest::Error),

    /// The request could not be built, or the reply could not be read.
    #[error("{0}")]
    Other(String),
}

impl SubmitError {
    /// Text shown in the summary region for this failure.
    pub fn diagnostic(&self) -> String {
        format!("{}{}", ERROR_PREFIX, self)
    }
}

/// `err` followed by each of its causes, joined with `": "`.
fn error_chain(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            SubmitError::Other(err.to_string())
        } else {
            SubmitError::Transport(err)
        }
    }
}

#[derive(Clone, Debug)]
pub struct SummaryClient {
    http: Client,
    endpoint: String,
}

impl SummaryClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one request and maps every outcome onto the two display strings.
    pub async fn submit(&self, request: &IngestRequest) -> SummaryOutput {
        match self.try_submit(request).await {
            Ok(resp) => resp.into(),
            Err(err) => {
                tracing::error!(error = %err, "Error fetching summary");
                SummaryOutput {
                    summary: err.diagnostic(),
                    answer: String::new(),
                }
            }
        }
    }

    pub async fn try_submit(&self, request: &IngestRequest) -> Result<IngestResponse, SubmitError> {
        tracing::info!(
            endpoint = %self.endpoint,
            language = request.language.as_wire(),
            summary_type = request.summary_type.as_wire(),
            "submitting video for summary"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .form(&IngestForm::from(request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SubmitError::Server {
                status: status.as_u16(),
                data: serialize_body(&body),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SubmitError::Other(e.to_string()))?;
        let parsed = serde_json::from_str::<IngestResponse>(&body)
            .map_err(|e| SubmitError::Other(format!("invalid response body: {}", e)))?;
        tracing::info!(status = status.as_u16(), "summary received");
        Ok(parsed)
    }
}

/// Compact JSON for JSON bodies, a JSON string literal for anything else.
fn serialize_body(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value.to_string(),
        Err(_) => serde_json::Value::String(body.to_string()).to_string(),
    }
}
