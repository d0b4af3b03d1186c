/*
 * Responsibility
 * - the standard response envelope used across the API
 * - { success, message, statusCode, data? } with camelCase field names
 */
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiEnvelope<T> {
    pub fn ok(status_code: u16, message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            status_code,
            data: Some(data),
        }
    }

    pub fn failure(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            status_code,
            data: None,
        }
    }
}
