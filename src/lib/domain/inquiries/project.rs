//! Project inquiry submission

use super::{present, ValidationError};

/// A validated project inquiry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectSubmission {
    name: String,
    phone: Option<String>,
    email: String,
    project_name: String,
    project_location: Option<String>,
}

impl ProjectSubmission {
    /// Creates a submission from raw form values.
    ///
    /// `name`, `email` and `project_name` are required. Missing fields are
    /// reported by the names the project form sends them under.
    pub fn new(
        name: Option<String>,
        phone: Option<String>,
        email: Option<String>,
        project_name: Option<String>,
        project_location: Option<String>,
    ) -> Result<Self, ValidationError> {
        match (present(name), present(email), present(project_name)) {
            (Some(name), Some(email), Some(project_name)) => Ok(Self {
                name,
                phone: present(phone),
                email,
                project_name,
                project_location: present(project_location),
            }),
            (name, email, project_name) => Err(ValidationError::missing(&[
                ("Name", name.is_none()),
                ("Email", email.is_none()),
                ("Project Name", project_name.is_none()),
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

    /// The name of the project
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Where the project is, if given
    pub fn project_location(&self) -> Option<&str> {
        self.project_location.as_deref()
    }
}
