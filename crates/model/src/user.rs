use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::HasId;

/// Account data as the backend returns it. Credentials live with the
/// identity provider, not here.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct User {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl HasId for User {
    type IdType = String;
}

/// Registration payload.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Partial profile update; only the set fields are sent.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct UserUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
