//! Contact form submission

use super::{present, ValidationError};

/// A validated contact form submission
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactSubmission {
    name: String,
    phone: Option<String>,
    email: String,
    message: String,
}

impl ContactSubmission {
    /// Creates a submission from raw form values.
    ///
    /// `name`, `email` and `message` are required; an empty string counts as
    /// missing. An empty `phone` is treated as not given.
    pub fn new(
        name: Option<String>,
        phone: Option<String>,
        email: Option<String>,
        message: Option<String>,
    ) -> Result<Self, ValidationError> {
        match (present(name), present(email), present(message)) {
            (Some(name), Some(email), Some(message)) => Ok(Self {
                name,
                phone: present(phone),
                email,
                message,
            }),
            (name, email, message) => Err(ValidationError::missing(&[
                ("name", name.is_none()),
                ("email", email.is_none()),
                ("message", message.is_none()),
            ])),
        }
    }

    /// The submitter's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The submitter's phone number, if given
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// The submitter's email address
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The message body
    pub fn message(&self) -> &str {
        &self.message
    }
}
