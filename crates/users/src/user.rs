//! User directory record (fixed schema).
//!
//! Field aliases match the keys of the user fixture files. A few Rust field
//! names differ from their alias (`time_zone`/`tz`, `picture`/`picture_url`,
//! `ip`/`ip_address`), so projection requests always go by alias.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─────────────────────────────────────────────────────────────────────────────
// User ID
// ─────────────────────────────────────────────────────────────────────────────

/// Unique identifier of a user record.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl core::fmt::Display for UserId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for UserId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// User
// ─────────────────────────────────────────────────────────────────────────────

/// One user of the directory.
///
/// Missing keys in a fixture decode to their zero value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub surname: String,
    pub age: i64,
    pub job_title: String,
    pub country: String,
    pub city: String,
    pub address: String,
    #[serde(rename = "tz")]
    pub time_zone: String,
    #[serde(rename = "picture_url")]
    pub picture: String,
    pub phone: String,
    pub company: String,
    pub password: String,
    pub bio: String,
    pub email: String,
    pub gender: String,
    #[serde(rename = "ip_address")]
    pub ip: String,
    pub archived_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

partial_core::fixed_schema!(User {
    "id" => id,
    "first_name" => first_name,
    "middle_name" => middle_name,
    "last_name" => last_name,
    "surname" => surname,
    "age" => age,
    "job_title" => job_title,
    "country" => country,
    "city" => city,
    "address" => address,
    "tz" => time_zone,
    "picture_url" => picture,
    "phone" => phone,
    "company" => company,
    "password" => password,
    "bio" => bio,
    "email" => email,
    "gender" => gender,
    "ip_address" => ip,
    "archived_at" => archived_at,
    "created_at" => created_at,
    "updated_at" => updated_at,
});
