//! Inquiry service implementation
//!
//! Wraps `/api/inquiries`: support tickets, their comments, assignment and
//! status changes.

use serde::Serialize;
use tracing::{debug, info};

use super::client::ApiClient;
use crate::models::{
    Acknowledgement, Inquiry, InquiryActionResult, InquiryComment, InquiryCommentCreate, InquiryCreate,
    InquiryFilter, InquiryStatus, InquiryUpdate,
};
use crate::utils::errors::Result;
use crate::utils::helpers::encode_path_segment;

#[derive(Serialize)]
struct InquiryCommentBody<'a> {
    inquiry_id: i64,
    #[serde(flatten)]
    comment: &'a InquiryCommentCreate,
}

#[derive(Serialize)]
struct AssignQuery {
    assignee_id: i64,
}

#[derive(Serialize)]
struct StatusQuery {
    status: InquiryStatus,
}

/// Inquiry service for support tickets
#[derive(Debug, Clone)]
pub struct InquiryService {
    client: ApiClient,
}

impl InquiryService {
    /// Create a new InquiryService instance
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Open a ticket; the backend assigns the ticket number
    pub async fn create_inquiry(&self, inquiry: &InquiryCreate) -> Result<Inquiry> {
        debug!(subject = %inquiry.subject, department = ?inquiry.department, "Creating inquiry");
        let created: Inquiry = self.client.post("", inquiry).await?;
        info!(inquiry_id = created.id, ticket = %created.ticket_number, "Inquiry created");
        Ok(created)
    }

    pub async fn list_inquiries(&self, filter: &InquiryFilter) -> Result<Vec<Inquiry>> {
        self.client.get_with_query("", filter).await
    }

    pub async fn get_inquiry(&self, inquiry_id: i64) -> Result<Inquiry> {
        self.client.get(&inquiry_id.to_string()).await
    }

    /// Look a ticket up by its public number (e.g. `INQ-20240301-0001`)
    pub async fn get_inquiry_by_ticket(&self, ticket_number: &str) -> Result<Inquiry> {
        self.client
            .get(&format!("ticket/{}", encode_path_segment(ticket_number)?))
            .await
    }

    pub async fn update_inquiry(&self, inquiry_id: i64, update: &InquiryUpdate) -> Result<Inquiry> {
        debug!(inquiry_id = inquiry_id, "Updating inquiry");
        self.client.put(&inquiry_id.to_string(), update).await
    }

    pub async fn add_comment(&self, inquiry_id: i64, comment: &InquiryCommentCreate) -> Result<Acknowledgement> {
        debug!(inquiry_id = inquiry_id, internal = comment.is_internal, "Adding inquiry comment");
        let body = InquiryCommentBody { inquiry_id, comment };
        self.client.post(&format!("{}/comments", inquiry_id), &body).await
    }

    pub async fn get_comments(&self, inquiry_id: i64) -> Result<Vec<InquiryComment>> {
        self.client.get(&format!("{}/comments", inquiry_id)).await
    }

    /// Hand the ticket to a staff member
    pub async fn assign_inquiry(&self, inquiry_id: i64, assignee_id: i64) -> Result<InquiryActionResult> {
        let result: InquiryActionResult = self
            .client
            .post_with_query(&format!("{}/assign", inquiry_id), &AssignQuery { assignee_id })
            .await?;
        info!(inquiry_id = inquiry_id, assignee_id = assignee_id, "Inquiry assigned");
        Ok(result)
    }

    pub async fn update_status(&self, inquiry_id: i64, status: InquiryStatus) -> Result<InquiryActionResult> {
        let result: InquiryActionResult = self
            .client
            .post_with_query(&format!("{}/status", inquiry_id), &StatusQuery { status })
            .await?;
        info!(inquiry_id = inquiry_id, status = %status, "Inquiry status updated");
        Ok(result)
    }
}
