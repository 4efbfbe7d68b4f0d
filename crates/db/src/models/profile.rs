//! Profile entity model.
//!
//! Profiles are the authenticated principals. Apart from the startup
//! bootstrap they are read-only to the running application.

use allagro_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full profile row from the `profiles` table.
///
/// Contains the password hash -- never serialize this to API responses
/// directly. Use [`ProfileResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Profile {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    pub full_name: Option<String>,
    /// Role name, `admin` or `employee` (`ck_profiles_role`).
    pub role: String,
    pub created_at: Timestamp,
}

/// Safe profile representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: DbId,
    pub username: String,
    pub full_name: Option<String>,
    pub role: String,
    pub created_at: Timestamp,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id,
            username: profile.username,
            full_name: profile.full_name,
            role: profile.role,
            created_at: profile.created_at,
        }
    }
}

/// DTO for the bootstrap insert.
#[derive(Debug, Clone)]
pub struct CreateProfile {
    pub username: String,
    pub password_hash: String,
    pub full_name: Option<String>,
    pub role: String,
}
