//! User domain entity
//!
//! Represents a blog author. A user owns zero or more posts.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Placeholder stored when a user is created without a profile image
pub const DEFAULT_IMAGE_URL: &str =
    "https://www.freeiconspng.com/uploads/icon-user-blue-symbol-people-person-generic--public-domain--21.png";

/// Unique identifier for a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A blog author
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub image_url: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Data needed to create a new user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    /// `None` stores [`DEFAULT_IMAGE_URL`]
    pub image_url: Option<String>,
}

impl NewUser {
    pub fn new(first_name: String, last_name: String, image_url: Option<String>) -> Self {
        Self {
            first_name,
            last_name,
            image_url: non_blank(image_url),
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        require("first_name", &self.first_name)?;
        require("last_name", &self.last_name)
    }

    /// The image URL to persist for this user
    pub fn image_url_or_default(&self) -> &str {
        self.image_url.as_deref().unwrap_or(DEFAULT_IMAGE_URL)
    }
}

/// Edit applied to an existing user.
///
/// Names are always overwritten. The image URL is only replaced when
/// `image_url` is `Some`; an empty submission keeps the stored value.
#[derive(Debug, Clone)]
pub struct UserChanges {
    pub first_name: String,
    pub last_name: String,
    pub image_url: Option<String>,
}

impl UserChanges {
    pub fn new(first_name: String, last_name: String, image_url: Option<String>) -> Self {
        Self {
            first_name,
            last_name,
            image_url: non_blank(image_url),
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        require("first_name", &self.first_name)?;
        require("last_name", &self.last_name)
    }

    /// Apply the edit to a user in place
    pub fn apply(&self, user: &mut User) {
        user.first_name = self.first_name.clone();
        user.last_name = self.last_name.clone();
        if let Some(url) = &self.image_url {
            user.image_url = url.clone();
        }
    }
}

/// Fail with a validation error when a required text field is blank
pub(crate) fn require(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
