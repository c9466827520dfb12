/*
 * Responsibility
 * - 認証系 (register/login) の request/response DTO
 * - validation (形式チェック) 用の validate() を持たせる
 */
use serde::{Deserialize, Serialize};

use crate::services::auth::password::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.username.trim().is_empty() {
            return Err("username is required");
        }
        if self.username.len() > 64 {
            return Err("username must be <= 64 chars");
        }
        if self.password.len() < MIN_PASSWORD_LENGTH {
            return Err("password must be at least 8 chars");
        }
        if self.password.len() > MAX_PASSWORD_LENGTH {
            return Err("password must be <= 72 chars");
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.username.trim().is_empty() {
            return Err("username is required");
        }
        if self.password.is_empty() {
            return Err("password is required");
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Usually "Bearer"
    pub token_type: String,
    /// Seconds until expiry.
    pub expires_in: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_rejects_short_password() {
        let req = RegisterRequest {
            username: "alice".into(),
            password: "short".into(),
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn register_accepts_reasonable_input() {
        let req = RegisterRequest {
            username: "alice".into(),
            password: "long enough password".into(),
        };

        assert!(req.validate().is_ok());
    }
}
