//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::constants::{INITIAL_VERSION, LETTERS_ONLY, USER_STATUS_ACTIVE, USER_STATUS_DELETED};

/// User status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Deleted,
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserStatus::Active => write!(f, "{}", USER_STATUS_ACTIVE),
            UserStatus::Deleted => write!(f, "{}", USER_STATUS_DELETED),
        }
    }
}

/// User domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Opaque unique identifier
    pub id: String,
    /// Letters only
    pub name: String,
    pub address: String,
    /// Letters only, omitted when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Starts at 1, bumped by every mutation
    pub version: u64,
}

impl User {
    /// Build a fresh active user from already validated input.
    pub fn new(input: CreateUser) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            address: input.address,
            nickname: input.nickname,
            status: UserStatus::Active,
            created_at: now,
            updated_at: now,
            version: INITIAL_VERSION,
        }
    }

    /// Check if user is soft deleted
    pub fn is_deleted(&self) -> bool {
        self.status == UserStatus::Deleted
    }

    /// Check if user is active (not deleted)
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    /// Apply every present field of an already validated update.
    ///
    /// Returns `false` when the update carried no fields, leaving the user
    /// untouched.
    pub fn apply(&mut self, update: UpdateUser) -> bool {
        if update.is_empty() {
            return false;
        }

        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        if let Some(nickname) = update.nickname {
            self.nickname = Some(nickname);
        }
        self.touch();
        true
    }

    /// Soft delete the user. The record stays in storage.
    pub fn soft_delete(&mut self) {
        self.status = UserStatus::Deleted;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
        self.version += 1;
    }
}

/// User creation data transfer object
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateUser {
    /// Letters only
    #[validate(
        length(min = 1, message = "name is required"),
        regex(path = *LETTERS_ONLY, message = "name must contain letters only")
    )]
    #[cfg_attr(feature = "openapi", schema(example = "Ana"))]
    pub name: String,
    /// Free text
    #[validate(length(min = 1, message = "address is required"))]
    #[cfg_attr(feature = "openapi", schema(example = "Main St"))]
    pub address: String,
    /// Optional, letters only
    #[serde(default)]
    #[validate(regex(path = *LETTERS_ONLY, message = "nickname must contain letters only"))]
    pub nickname: Option<String>,
}

impl CreateUser {
    /// An empty nickname means "no nickname".
    pub fn normalized(mut self) -> Self {
        if self.nickname.as_deref() == Some("") {
            self.nickname = None;
        }
        self
    }
}

/// User partial update data transfer object
///
/// `None` means "leave unchanged". Present fields are validated as a whole
/// before any of them is applied.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateUser {
    #[serde(default)]
    #[validate(regex(path = *LETTERS_ONLY, message = "name must contain letters only"))]
    pub name: Option<String>,
    /// Not validated
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    #[validate(regex(path = *LETTERS_ONLY, message = "nickname must contain letters only"))]
    pub nickname: Option<String>,
}

impl UpdateUser {
    /// Check if no field is present
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.address.is_none() && self.nickname.is_none()
    }
}
