//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to create a post. Every field is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostCreateRequest {
    pub title: String,
    pub content: String,
    pub author: String,
}

/// Request to update a post. Absent (or `null`) fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostUpdateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// Query string of the listing endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPostsQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

/// A post as returned by every read or write endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author: String,
    pub publication_date: DateTime<Utc>,
}
