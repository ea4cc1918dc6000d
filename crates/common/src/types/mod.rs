use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Wire-level error/notice body returned by every API endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ApiMessage {
    pub code: u16,
    pub message: String,
}

impl ApiMessage {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }
}
