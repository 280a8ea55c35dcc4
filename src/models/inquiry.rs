//! Inquiry (support ticket) models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::common::Patch;
use crate::utils::helpers::{optional_timestamp, timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InquiryStatus {
    New,
    InProgress,
    Resolved,
    Closed,
}

impl InquiryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryStatus::New => "new",
            InquiryStatus::InProgress => "in_progress",
            InquiryStatus::Resolved => "resolved",
            InquiryStatus::Closed => "closed",
        }
    }
}

impl fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Department an inquiry is routed to. The backend stores a free string, so
/// names outside the known set are kept as [`InquiryDepartment::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InquiryDepartment {
    Admissions,
    Academics,
    Finance,
    ItSupport,
    General,
    #[serde(untagged)]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryPriority {
    Low,
    Medium,
    High,
    Urgent,
    #[serde(untagged)]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inquiry {
    pub id: i64,
    pub ticket_number: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub department: InquiryDepartment,
    #[serde(default)]
    pub priority: Option<InquiryPriority>,
    pub status: InquiryStatus,
    #[serde(default)]
    pub assigned_to: Option<i64>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "optional_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, with = "optional_timestamp")]
    pub resolved_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InquiryCreate {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub department: InquiryDepartment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<InquiryPriority>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InquiryUpdate {
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub status: Patch<InquiryStatus>,
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub department: Patch<InquiryDepartment>,
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub priority: Patch<InquiryPriority>,
    /// `Patch::Null` unassigns the ticket.
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub assigned_to: Patch<i64>,
}

/// Filters for listing inquiries
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InquiryFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InquiryStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<InquiryDepartment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryComment {
    pub id: i64,
    pub inquiry_id: i64,
    pub user_id: i64,
    pub comment: String,
    #[serde(default)]
    pub is_internal: bool,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryCommentCreate {
    pub comment: String,
    #[serde(default)]
    pub is_internal: bool,
}

/// Response of the assign and status endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InquiryActionResult {
    pub message: String,
    pub inquiry: Inquiry,
}
