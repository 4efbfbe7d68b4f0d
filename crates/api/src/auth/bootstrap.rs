//! First-run creation of the admin profile.
//!
//! Profiles are read-only to the running application, so without a seed
//! there would be no way to log in at all. On startup, if the `profiles`
//! table is empty and `ADMIN_PASSWORD` is configured, a single admin
//! profile is created.

use allagro_core::error::CoreError;
use allagro_core::roles::ROLE_ADMIN;
use allagro_db::models::profile::CreateProfile;
use allagro_db::repositories::ProfileRepo;
use allagro_db::DbPool;

use crate::auth::password::{hash_password, validate_password_strength};
use crate::config::ServerConfig;
use crate::error::{AppError, AppResult};

/// Minimum length for the bootstrapped admin password.
const MIN_ADMIN_PASSWORD_LEN: usize = 8;

/// Create the admin profile if no profile exists yet.
///
/// A no-op when profiles already exist. When the table is empty but
/// `ADMIN_PASSWORD` is unset, logs a warning and skips -- the service
/// still starts, but no login is possible until a profile is created.
pub async fn ensure_admin_profile(pool: &DbPool, config: &ServerConfig) -> AppResult<()> {
    if ProfileRepo::count(pool).await? > 0 {
        return Ok(());
    }

    let Some(password) = config.admin_password.as_deref() else {
        tracing::warn!(
            "No profiles exist and ADMIN_PASSWORD is not set; skipping admin bootstrap"
        );
        return Ok(());
    };

    validate_password_strength(password, MIN_ADMIN_PASSWORD_LEN)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let profile = ProfileRepo::create(
        pool,
        &CreateProfile {
            username: config.admin_username.clone(),
            password_hash,
            full_name: None,
            role: ROLE_ADMIN.to_string(),
        },
    )
    .await?;

    tracing::info!(
        profile_id = profile.id,
        username = %profile.username,
        "Bootstrapped admin profile"
    );
    Ok(())
}
