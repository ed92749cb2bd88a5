use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT payload: identity and role claims attached to every guarded request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub sub: Uuid,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
    pub iat: usize,
    pub exp: usize,
    pub iss: String,
    pub aud: String,
}
