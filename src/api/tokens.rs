#[derive(serde::Serialize, Clone, Debug)]
pub struct CreateRequest {
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct TokenGrant {
    pub token: String,

    #[serde(rename = "isAdmin")]
    pub is_admin: bool,

    // The service emits naive UTC timestamps, no offset.
    #[serde(rename = "createdAt")]
    pub created_at: chrono::NaiveDateTime,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Detail {
    pub detail: String,
}
