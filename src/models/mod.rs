//! Request and response payloads shared by the form client and the endpoint.
//!
//! These are transient wire types: created at submission time, discarded once
//! the result is rendered. Nothing here is persisted.

use serde::{Deserialize, Serialize};

/// The values a contact form submits.
///
/// Deserialization is deliberately lenient about missing fields (they fall
/// back to their empty defaults) so that a structurally thin body surfaces as
/// a validation message rather than a parse fault. Wrongly typed fields still
/// fail to parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactFormValues {
    /// Email address (required, validated by the shared schema)
    pub email: String,

    /// Phone number (optional; empty is always valid)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Per-field validation messages, at most one per field (first issue only).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    /// Message for the email field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Message for the phone field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl FieldErrors {
    /// True when no field carries a message.
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.phone.is_none()
    }
}

/// Structured response from the submission endpoint, tagged by `status`.
///
/// `errors` is present only when validation (not a generic server fault)
/// caused the failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ApiResponse {
    /// The submission was accepted.
    Success { message: String },

    /// The submission was rejected.
    Error {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        errors: Option<FieldErrors>,
    },
}

impl ApiResponse {
    /// The response for an accepted submission.
    pub fn success() -> Self {
        ApiResponse::Success {
            message: "Form submitted successfully".to_string(),
        }
    }

    /// The response for a submission rejected by the shared schema.
    pub fn validation_error(errors: FieldErrors) -> Self {
        ApiResponse::Error {
            message: "Validation error".to_string(),
            errors: Some(errors),
        }
    }

    /// The response for an unparseable body or any other server fault.
    pub fn internal_error() -> Self {
        ApiResponse::Error {
            message: "Internal server error".to_string(),
            errors: None,
        }
    }

    /// True for the success variant.
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success { .. })
    }
}
