//! Learning resource models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::Patch;
use crate::utils::helpers::{optional_timestamp, timestamp};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceCategory {
    LessonPlan,
    Worksheet,
    Video,
    Presentation,
    Assessment,
    Other,
    /// Category name this client does not know
    #[serde(untagged)]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub subject_id: Option<i64>,
    #[serde(default)]
    pub grade_level: Option<String>,
    pub category: ResourceCategory,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub is_public: bool,
    pub uploaded_by: i64,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "optional_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceCreate {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade_level: Option<String>,
    pub category: ResourceCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
}

/// Partial update; only fields that are not `Patch::Missing` are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceUpdate {
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub title: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub description: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub file_url: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub video_url: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub subject_id: Patch<i64>,
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub grade_level: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub category: Patch<ResourceCategory>,
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub tags: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub is_public: Patch<bool>,
}

/// Filters for listing resources
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResourceFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ResourceCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRating {
    pub id: i64,
    pub resource_id: i64,
    pub user_id: i64,
    pub rating: u8,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceComment {
    pub id: i64,
    pub resource_id: i64,
    pub user_id: i64,
    pub comment: String,
    #[serde(default)]
    pub parent_comment_id: Option<i64>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// New comment; `parent_comment_id` threads it under an existing comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewResourceComment {
    pub comment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_comment_id: Option<i64>,
}

/// Response of the file upload endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadReceipt {
    pub filename: String,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
}
