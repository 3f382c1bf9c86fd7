//! Client-side contact form state machine.
//!
//! A [`ContactForm`] tracks the two field values and a single tagged
//! submission status. Client-side validation runs against the same shared
//! schema the endpoint uses, so input rejected here is exactly the input the
//! endpoint would reject, and it never produces a network call.

use crate::client::SubmitTransport;
use crate::error::SubmitResult;
use crate::models::{ApiResponse, ContactFormValues, FieldErrors};
use crate::schema;

/// Banner message shown when the endpoint cannot be reached.
pub const NETWORK_FAILURE_MESSAGE: &str =
    "An error occurred when submitting the form. Please try again later.";

/// Submission status of one form instance.
///
/// A single tagged value rather than independent flags, so every state the
/// form can be in is one of these four.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    /// No submission attempted since the form was created or last cleared.
    Idle,

    /// A submission is in flight.
    Submitting,

    /// The last submission was accepted; the fields have been cleared.
    Success { message: String },

    /// The last submission failed. `field_errors` carries inline messages
    /// when validation caused the failure, and is empty for generic faults.
    Error {
        message: String,
        field_errors: FieldErrors,
    },
}

/// A contact form instance: field values, status, and the transport it
/// submits through.
pub struct ContactForm<T: SubmitTransport> {
    email: String,
    phone: String,
    status: FormStatus,
    transport: T,
}

impl<T: SubmitTransport> ContactForm<T> {
    /// Create an empty form in the idle state.
    pub fn new(transport: T) -> Self {
        Self {
            email: String::new(),
            phone: String::new(),
            status: FormStatus::Idle,
            transport,
        }
    }

    /// Current email field value.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Current phone field display value.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Current submission status.
    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Inline field messages, when the status is a validation error.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match &self.status {
            FormStatus::Error { field_errors, .. } if !field_errors.is_empty() => {
                Some(field_errors)
            }
            _ => None,
        }
    }

    /// Access the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Update the email field.
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    /// Update the phone field from raw input, applying display formatting.
    pub fn set_phone(&mut self, value: &str) {
        self.phone = schema::format_phone(value);
    }

    /// Current field values as a submission payload.
    fn values(&self) -> ContactFormValues {
        ContactFormValues {
            email: self.email.clone(),
            phone: Some(self.phone.clone()),
        }
    }

    /// Submit the current values.
    ///
    /// Any prior terminal status is cleared on entry. Client-side validation
    /// runs first; on failure the status carries the field messages and the
    /// transport is not called. On success the fields are cleared; on a
    /// server-reported validation error they are kept so the user can
    /// correct them.
    pub fn submit(&mut self) -> &FormStatus {
        self.status = FormStatus::Submitting;
        let values = self.values();

        if let Err(field_errors) = schema::validate(&values) {
            self.status = FormStatus::Error {
                message: "Validation error".to_string(),
                field_errors,
            };
            return &self.status;
        }

        self.status = Self::apply_response(self.transport.submit(&values));
        if matches!(self.status, FormStatus::Success { .. }) {
            self.email.clear();
            self.phone.clear();
        }
        &self.status
    }

    /// Map a transport result onto a terminal status.
    fn apply_response(result: SubmitResult<ApiResponse>) -> FormStatus {
        match result {
            Ok(ApiResponse::Success { message }) => FormStatus::Success { message },
            Ok(ApiResponse::Error { message, errors }) => FormStatus::Error {
                message,
                field_errors: errors.unwrap_or_default(),
            },
            Err(e) => {
                tracing::warn!("Form submission failed: {}", e);
                FormStatus::Error {
                    message: NETWORK_FAILURE_MESSAGE.to_string(),
                    field_errors: FieldErrors::default(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SubmitError;

    struct RefusingTransport;

    impl SubmitTransport for RefusingTransport {
        fn submit(&self, _values: &ContactFormValues) -> SubmitResult<ApiResponse> {
            Err(SubmitError::HttpError("Connection failed".to_string()))
        }
    }

    #[test]
    fn test_new_form_is_idle_and_empty() {
        let form = ContactForm::new(RefusingTransport);
        assert_eq!(*form.status(), FormStatus::Idle);
        assert_eq!(form.email(), "");
        assert_eq!(form.phone(), "");
    }

    #[test]
    fn test_set_phone_formats_input() {
        let mut form = ContactForm::new(RefusingTransport);
        form.set_phone("(412) 977-8194");
        assert_eq!(form.phone(), "412-977-8194");
    }

    #[test]
    fn test_network_failure_sets_generic_message() {
        let mut form = ContactForm::new(RefusingTransport);
        form.set_email("a@b.com");
        form.submit();

        assert_eq!(
            *form.status(),
            FormStatus::Error {
                message: NETWORK_FAILURE_MESSAGE.to_string(),
                field_errors: FieldErrors::default(),
            }
        );
        assert!(form.field_errors().is_none());
    }
}
