use chrono::Utc;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{DocStatus, DocType, Document, UserProfile, UserRole};
use crate::services::summarizer::{FALLBACK_SUMMARY, Summarizer};
use crate::utils::validation::validate_upload;

/// What the upload form collects before a document exists.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub file_name: String,
    pub subject: String,
    pub doc_type: DocType,
    /// Local object reference; nothing is actually stored.
    pub file_url: String,
}

pub struct UploadService {
    summarizer: Box<dyn Summarizer>,
}

impl UploadService {
    pub fn new(summarizer: Box<dyn Summarizer>) -> Self {
        Self { summarizer }
    }

    /// Validate the request, fetch an AI summary, and build the document
    /// record. The summary call is best-effort: on failure the document
    /// still goes through, carrying the fallback text. Status is derived
    /// from the uploader's role; professor uploads need no review.
    pub async fn prepare(
        &self,
        user: &UserProfile,
        request: UploadRequest,
    ) -> Result<Document, AppError> {
        let file_name = validate_upload(&request.file_name, &request.subject)?;

        let summary = match self
            .summarizer
            .summarize(&file_name, &request.subject, request.doc_type)
            .await
        {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Summarizer failed for '{}': {}", file_name, e);
                FALLBACK_SUMMARY.to_string()
            }
        };

        let status = match user.role {
            UserRole::Professor => DocStatus::Approved,
            UserRole::Student => DocStatus::Submitted,
        };

        Ok(Document {
            id: Uuid::new_v4(),
            file_name,
            subject: request.subject,
            doc_type: request.doc_type,
            year: user.year.clone().unwrap_or_else(|| "N/A".to_string()),
            branch: user.branch.clone().unwrap_or_else(|| "N/A".to_string()),
            upload_date: Utc::now().date_naive(),
            uploader_id: user.id.clone(),
            uploader_name: user.name.clone(),
            uploader_role: user.role,
            status,
            file_url: request.file_url,
            remarks: None,
            ai_summary: Some(summary),
        })
    }
}
