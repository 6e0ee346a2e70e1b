//! Small pieces shared by the resource routers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// Body returned by DELETE endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Parses a path segment into a typed id, or a 400 naming the resource.
pub fn parse_id<T: FromStr>(raw: &str, resource: &str) -> Result<T, ApiError> {
    raw.parse().map_err(|_| ApiError::invalid_id(resource))
}
