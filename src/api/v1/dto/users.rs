/*
 * Responsibility
 * - Users の response DTO (登録は auth 側の責務)
 */
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub roles: Vec<String>,
}
