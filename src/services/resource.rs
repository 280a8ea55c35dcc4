//! Resource service implementation
//!
//! Wraps `/api/resources`: the shared teaching-material hub with ratings, threaded
//! comments and file upload.

use reqwest::multipart::{Form, Part};
use serde::Serialize;
use tracing::{debug, info};

use super::client::ApiClient;
use crate::models::{
    Acknowledgement, NewResourceComment, Resource, ResourceComment, ResourceCreate, ResourceFilter, ResourceRating,
    ResourceUpdate, UploadReceipt,
};
use crate::utils::errors::{SchoolAdminError, Result};

/// Multipart field name the upload endpoint reads
pub const UPLOAD_FIELD: &str = "file";

#[derive(Serialize)]
struct RatingBody {
    resource_id: i64,
    rating: u8,
}

#[derive(Serialize)]
struct CommentBody<'a> {
    resource_id: i64,
    #[serde(flatten)]
    comment: &'a NewResourceComment,
}

/// Resource service for the learning resource hub
#[derive(Debug, Clone)]
pub struct ResourceService {
    client: ApiClient,
}

impl ResourceService {
    /// Create a new ResourceService instance
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn create_resource(&self, resource: &ResourceCreate) -> Result<Resource> {
        debug!(title = %resource.title, category = ?resource.category, "Creating resource");
        let created: Resource = self.client.post("", resource).await?;
        info!(resource_id = created.id, "Resource created");
        Ok(created)
    }

    pub async fn list_resources(&self, filter: &ResourceFilter) -> Result<Vec<Resource>> {
        self.client.get_with_query("", filter).await
    }

    pub async fn get_resource(&self, resource_id: i64) -> Result<Resource> {
        self.client.get(&resource_id.to_string()).await
    }

    pub async fn update_resource(&self, resource_id: i64, update: &ResourceUpdate) -> Result<Resource> {
        debug!(resource_id = resource_id, "Updating resource");
        self.client.put(&resource_id.to_string(), update).await
    }

    pub async fn delete_resource(&self, resource_id: i64) -> Result<Acknowledgement> {
        let ack: Acknowledgement = self.client.delete(&resource_id.to_string()).await?;
        info!(resource_id = resource_id, "Resource deleted");
        Ok(ack)
    }

    /// Rate a resource. The backend enforces the 1-5 range.
    pub async fn rate_resource(&self, resource_id: i64, rating: u8) -> Result<ResourceRating> {
        let body = RatingBody { resource_id, rating };
        self.client.post(&format!("{}/ratings", resource_id), &body).await
    }

    pub async fn get_ratings(&self, resource_id: i64) -> Result<Vec<ResourceRating>> {
        self.client.get(&format!("{}/ratings", resource_id)).await
    }

    pub async fn comment_on_resource(&self, resource_id: i64, comment: &NewResourceComment) -> Result<ResourceComment> {
        debug!(resource_id = resource_id, reply_to = ?comment.parent_comment_id, "Commenting on resource");
        let body = CommentBody { resource_id, comment };
        self.client.post(&format!("{}/comments", resource_id), &body).await
    }

    pub async fn get_comments(&self, resource_id: i64) -> Result<Vec<ResourceComment>> {
        self.client.get(&format!("{}/comments", resource_id)).await
    }

    /// Upload a file as a single multipart `file` field
    pub async fn upload_resource_file(
        &self,
        file_name: &str,
        content_type: &str,
        contents: Vec<u8>,
    ) -> Result<UploadReceipt> {
        debug!(file_name = file_name, size = contents.len(), "Uploading resource file");

        let part = Part::bytes(contents)
            .file_name(file_name.to_string())
            .mime_str(content_type)
            .map_err(|_| SchoolAdminError::InvalidInput(format!("invalid content type: {}", content_type)))?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let receipt: UploadReceipt = self.client.post_multipart("upload", form).await?;
        info!(file_name = %receipt.filename, "Resource file uploaded");
        Ok(receipt)
    }
}
