//! Create or update an admin account.
//!
//! Reads `DATABASE_URL`, `ADMIN_EMAIL` and `ADMIN_PASSWORD`. An existing
//! user with that email gets the new password, loses all sessions and is
//! given the admin role.

use anyhow::{bail, Context};
use reel_api::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use reel_core::roles::ROLE_ADMIN;
use reel_db::models::user::CreateUser;
use reel_db::repositories::{ProfileRepo, SessionRepo, UserRepo};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reel_create_admin=info".into()),
        )
        .init();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let email = std::env::var("ADMIN_EMAIL").context("ADMIN_EMAIL must be set")?;
    let password = std::env::var("ADMIN_PASSWORD").context("ADMIN_PASSWORD must be set")?;

    let email = email.trim().to_lowercase();
    if !email.contains('@') {
        bail!("ADMIN_EMAIL '{email}' is not an email address");
    }
    if let Err(msg) = validate_password_strength(&password, MIN_PASSWORD_LENGTH) {
        bail!(msg);
    }

    let pool = reel_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    reel_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let password_hash =
        hash_password(&password).map_err(|e| anyhow::anyhow!("Password hashing failed: {e}"))?;

    let user = match UserRepo::find_by_email(&pool, &email).await? {
        Some(existing) => {
            UserRepo::update_password(&pool, existing.id, &password_hash).await?;
            let revoked = SessionRepo::revoke_all_for_user(&pool, existing.id).await?;
            tracing::info!(user_id = existing.id, revoked, "Updated password for existing user");
            existing
        }
        None => {
            let created = UserRepo::create(
                &pool,
                &CreateUser {
                    email: email.clone(),
                    password_hash,
                },
            )
            .await?;
            tracing::info!(user_id = created.id, "Created user");
            created
        }
    };

    ProfileRepo::upsert_role(&pool, user.id, ROLE_ADMIN).await?;
    tracing::info!(user_id = user.id, email = %user.email, "Admin role granted");
    Ok(())
}
