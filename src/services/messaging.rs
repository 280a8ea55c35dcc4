//! Messaging service implementation
//!
//! Wraps `/api/messages`: direct, group and support messages, plus group
//! management.

use tracing::{debug, info};

use super::client::ApiClient;
use crate::models::{
    Acknowledgement, Message, MessageCreate, MessageGroup, MessageGroupCreate, MessageGroupMember,
    MessageGroupMemberCreate, Pagination, UnreadCount,
};
use crate::utils::errors::Result;

/// Messaging service for in-app messages and groups
#[derive(Debug, Clone)]
pub struct MessagingService {
    client: ApiClient,
}

impl MessagingService {
    /// Create a new MessagingService instance
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn send_message(&self, message: &MessageCreate) -> Result<Message> {
        debug!(kind = ?message.message_type, recipient = ?message.recipient_id, group = ?message.group_id, "Sending message");
        let sent: Message = self.client.post("", message).await?;
        info!(message_id = sent.id, "Message sent");
        Ok(sent)
    }

    /// Messages sent or received by the current user, newest first
    pub async fn list_messages(&self, page: &Pagination) -> Result<Vec<Message>> {
        self.client.get_with_query("", page).await
    }

    pub async fn unread_count(&self) -> Result<u64> {
        let count: UnreadCount = self.client.get("unread-count").await?;
        Ok(count.unread_count)
    }

    /// Fetch one message; the backend marks it read when the recipient opens it
    pub async fn get_message(&self, message_id: i64) -> Result<Message> {
        self.client.get(&message_id.to_string()).await
    }

    pub async fn mark_as_read(&self, message_id: i64) -> Result<Acknowledgement> {
        self.client.post_empty(&format!("{}/read", message_id)).await
    }

    pub async fn create_group(&self, group: &MessageGroupCreate) -> Result<MessageGroup> {
        debug!(name = %group.name, "Creating message group");
        let created: MessageGroup = self.client.post("groups", group).await?;
        info!(group_id = created.id, "Message group created");
        Ok(created)
    }

    /// Groups the current user belongs to
    pub async fn list_groups(&self) -> Result<Vec<MessageGroup>> {
        self.client.get("groups").await
    }

    pub async fn get_group(&self, group_id: i64) -> Result<MessageGroup> {
        self.client.get(&format!("groups/{}", group_id)).await
    }

    pub async fn add_group_member(&self, group_id: i64, member: &MessageGroupMemberCreate) -> Result<Acknowledgement> {
        let body = MessageGroupMember {
            group_id,
            user_id: member.user_id,
            role: member.role.clone(),
        };
        let ack: Acknowledgement = self.client.post(&format!("groups/{}/members", group_id), &body).await?;
        info!(group_id = group_id, user_id = member.user_id, "User added to message group");
        Ok(ack)
    }

    /// Post to the support channel; the backend forces the support type
    pub async fn send_support_message(&self, message: &MessageCreate) -> Result<Message> {
        self.client.post("support", message).await
    }
}
