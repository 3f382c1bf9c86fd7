//! Contact Form Demo - a marketing contact form and the mock API it submits to.
//!
//! This library provides the validation-and-submission flow shared by a
//! contact form and a mock backend endpoint: one schema checks field values
//! on both sides of the network boundary, so the client cannot bypass server
//! checks and the server cannot reject input the client already accepted.
//!
//! # Architecture
//!
//! - **models**: request/response payloads exchanged over the wire
//! - **schema**: shared field validation rules and phone display formatting
//! - **form**: client-side form state machine (idle/submitting/success/error)
//! - **client**: HTTP client for the submission endpoint
//! - **server**: mock endpoint that re-validates and echoes a structured status
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables

// Re-export commonly used types
pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod schema;
pub mod server;

pub use client::{SubmitClient, SubmitTransport, SUBMIT_PATH};
pub use config::Config;
pub use error::{ConfigError, SubmitError};
pub use form::{ContactForm, FormStatus};
pub use models::{ApiResponse, ContactFormValues, FieldErrors};
pub use schema::{format_phone, validate, ValidationError};
