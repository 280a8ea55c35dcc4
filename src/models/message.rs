//! Messaging models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::helpers::timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Direct,
    Group,
    Support,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub sender_id: i64,
    #[serde(default)]
    pub recipient_id: Option<i64>,
    #[serde(default)]
    pub group_id: Option<i64>,
    pub message_type: MessageType,
    #[serde(default)]
    pub subject: Option<String>,
    pub content: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCreate {
    pub message_type: MessageType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub content: String,
}

impl MessageCreate {
    pub fn direct(recipient_id: i64, subject: Option<String>, content: impl Into<String>) -> Self {
        Self {
            message_type: MessageType::Direct,
            recipient_id: Some(recipient_id),
            group_id: None,
            subject,
            content: content.into(),
        }
    }

    pub fn group(group_id: i64, subject: Option<String>, content: impl Into<String>) -> Self {
        Self {
            message_type: MessageType::Group,
            recipient_id: None,
            group_id: Some(group_id),
            subject,
            content: content.into(),
        }
    }

    pub fn support(subject: Option<String>, content: impl Into<String>) -> Self {
        Self {
            message_type: MessageType::Support,
            recipient_id: None,
            group_id: None,
            subject,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageGroup {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub group_type: Option<String>,
    pub created_by: i64,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageGroupCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_type: Option<String>,
}

/// Membership of a user in a group; `role` is free text (e.g. "member", "admin").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageGroupMember {
    pub group_id: i64,
    pub user_id: i64,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageGroupMemberCreate {
    pub user_id: i64,
    pub role: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnreadCount {
    pub unread_count: u64,
}
