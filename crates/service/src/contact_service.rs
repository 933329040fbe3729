//! Contact-form validation and submission.
//!
//! Validation is pure and runs in a fixed order, stopping at the first bad
//! field so the client always sees one rejection at a time.

use sea_orm::DatabaseConnection;
use serde::Deserialize;
use thiserror::Error;

use crate::errors::ServiceError;
use models::contact::{self, ContactFields};

/// Raw submission as posted by the client. Every field is optional at this
/// point; `validate` decides what is actually required.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactInput {
    pub name: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub project_type: Option<String>,
    pub message: Option<String>,
    pub timeline: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactRejection {
    #[error("name is required")]
    Name,
    #[error("a valid email address is required")]
    Email,
    #[error("project type is required")]
    ProjectType,
    #[error("message is required")]
    Message,
}

impl ContactRejection {
    /// Stable wire identifier for the rejected field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Name => "invalid_name",
            Self::Email => "invalid_email",
            Self::ProjectType => "invalid_project_type",
            Self::Message => "invalid_message",
        }
    }
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error(transparent)]
    Rejected(#[from] ContactRejection),
    #[error(transparent)]
    Store(#[from] ServiceError),
}

impl ContactInput {
    /// Check fields in order: name, email, project type, message. The email
    /// check is deliberately minimal: anything containing `@` passes.
    pub fn validate(self) -> Result<ContactFields, ContactRejection> {
        let name = non_empty(self.name).ok_or(ContactRejection::Name)?;
        let email = non_empty(self.email)
            .filter(|e| e.contains('@'))
            .ok_or(ContactRejection::Email)?;
        let project_type = non_empty(self.project_type).ok_or(ContactRejection::ProjectType)?;
        let message = non_empty(self.message).ok_or(ContactRejection::Message)?;
        Ok(ContactFields {
            name,
            company: non_empty(self.company),
            email,
            project_type,
            message,
            timeline: non_empty(self.timeline),
        })
    }
}

/// Trimmed value, with empty-after-trim collapsing to `None`.
fn non_empty(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Validate and append one submission, returning the stored row.
pub async fn submit(
    db: &DatabaseConnection,
    input: ContactInput,
) -> Result<contact::Model, ContactError> {
    let fields = input.validate()?;
    let row = contact::append(db, fields).await.map_err(ServiceError::from)?;
    Ok(row)
}
