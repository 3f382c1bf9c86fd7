//! HTTP client for the form submission endpoint.
//!
//! This module provides a synchronous `ureq` client behind the
//! [`SubmitTransport`] trait. The form talks to the endpoint only through the
//! trait, which lets tests substitute a scripted transport and assert that
//! locally rejected input never produces a network call.

use crate::config::Config;
use crate::error::{SubmitError, SubmitResult};
use crate::models::{ApiResponse, ContactFormValues};
use std::sync::Arc;
use std::time::Duration;

/// Path of the mock submission endpoint.
pub const SUBMIT_PATH: &str = "/api/v1/demo/submit";

/// Transport seam between the form and the submission endpoint.
pub trait SubmitTransport {
    /// Submit form values and return the endpoint's structured response.
    ///
    /// A response the endpoint produced on purpose (success, validation
    /// error, internal error) is `Ok`; only transport faults and responses
    /// the endpoint could not have produced are `Err`.
    fn submit(&self, values: &ContactFormValues) -> SubmitResult<ApiResponse>;
}

/// HTTP client for the submission endpoint.
#[derive(Clone)]
pub struct SubmitClient {
    /// Base URL of the endpoint host
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,
}

impl SubmitClient {
    /// Create a new SubmitClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.endpoint_url.clone(),
            agent: Arc::new(agent),
        }
    }

    /// Create a SubmitClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            agent: Arc::new(agent),
        }
    }

    /// Build the full submission URL.
    fn build_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{}{}", base, SUBMIT_PATH)
    }

    /// Map a ureq transport error to a SubmitError.
    fn map_transport_error(transport: ureq::Transport) -> SubmitError {
        if transport.kind() == ureq::ErrorKind::ConnectionFailed {
            SubmitError::HttpError("Connection failed".to_string())
        } else if transport.kind() == ureq::ErrorKind::Io {
            SubmitError::Timeout
        } else {
            SubmitError::HttpError(transport.to_string())
        }
    }
}

impl SubmitTransport for SubmitClient {
    fn submit(&self, values: &ContactFormValues) -> SubmitResult<ApiResponse> {
        let url = self.build_url();

        tracing::debug!("POST {}", url);

        let body = serde_json::to_value(values)?;
        let result = self
            .agent
            .post(&url)
            .set("Content-Type", "application/json")
            .send_json(&body);

        match result {
            Ok(response) => {
                let text = response
                    .into_string()
                    .map_err(|e| SubmitError::HttpError(e.to_string()))?;
                let parsed = serde_json::from_str(&text)?;
                tracing::debug!("POST {} - Success", url);
                Ok(parsed)
            }
            Err(ureq::Error::Status(code, response)) => {
                // 400 and 500 carry a structured ApiResponse body; surface it
                // like any other response so the form can map field errors.
                let text = response.into_string().unwrap_or_default();
                match serde_json::from_str::<ApiResponse>(&text) {
                    Ok(parsed) => {
                        tracing::debug!("POST {} - Status {} with structured body", url, code);
                        Ok(parsed)
                    }
                    Err(_) => {
                        tracing::error!("POST {} - Unexpected status {}", url, code);
                        Err(SubmitError::UnexpectedResponse {
                            status: code,
                            message: text,
                        })
                    }
                }
            }
            Err(ureq::Error::Transport(transport)) => {
                tracing::error!("POST {} - Transport error: {}", url, transport);
                Err(Self::map_transport_error(transport))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_joins_cleanly() {
        let client = SubmitClient::with_base_url("http://localhost:8080/".to_string());
        assert_eq!(
            client.build_url(),
            "http://localhost:8080/api/v1/demo/submit"
        );

        let client = SubmitClient::with_base_url("http://localhost:8080".to_string());
        assert_eq!(
            client.build_url(),
            "http://localhost:8080/api/v1/demo/submit"
        );
    }
}
