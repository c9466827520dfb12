use bcrypt::{DEFAULT_COST, hash, verify};
use tracing::error;

use crate::error::AppError;

pub const MIN_PASSWORD_LENGTH: usize = 8;
// bcrypt truncates input past 72 bytes
pub const MAX_PASSWORD_LENGTH: usize = 72;

/// Hash a password with bcrypt on the blocking pool.
pub async fn hash_password(password: &str) -> Result<String, AppError> {
    let password = password.to_string();

    tokio::task::spawn_blocking(move || hash(password, DEFAULT_COST))
        .await
        .map_err(|e| {
            error!(error = %e, "password hashing task failed");
            AppError::Internal
        })?
        .map_err(|e| {
            error!(error = %e, "password hashing failed");
            AppError::Internal
        })
}

/// Verify a password against a stored bcrypt hash on the blocking pool.
pub async fn verify_password(password: &str, hashed: &str) -> Result<bool, AppError> {
    let password = password.to_string();
    let hashed = hashed.to_string();

    tokio::task::spawn_blocking(move || verify(password, &hashed))
        .await
        .map_err(|e| {
            error!(error = %e, "password verification task failed");
            AppError::Internal
        })?
        .map_err(|e| {
            error!(error = %e, "password verification failed");
            AppError::Internal
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_then_verify_round_trip() {
        let hashed = hash_password("correct horse battery").await.unwrap();

        assert!(verify_password("correct horse battery", &hashed)
            .await
            .unwrap());
        assert!(!verify_password("wrong horse", &hashed).await.unwrap());
    }
}
