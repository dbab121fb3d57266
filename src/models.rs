use serde::{Deserialize, Serialize};

// Spin request body; `{}` parses and is treated as a missing userId
#[derive(Deserialize, Clone, Default)]
pub struct SpinRequest {
    #[serde(default, rename = "userId")]
    pub user_id: Option<String>,
}

// Successful spin response
#[derive(Serialize, Clone)]
pub struct SpinResponse {
    pub prize: &'static str,
}
