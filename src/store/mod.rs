//! Application shell: the single owner of all session state.
//!
//! Views receive read-only slices and raise intents; every mutation goes
//! through one of the reducer methods here, synchronously. Nothing is
//! persisted: the store is seeded from a fixed mock dataset and dies with
//! the process.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{DocStatus, DocType, Document, Notification, UserProfile, UserRole};

/// Outcome a professor picks when reviewing a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject,
}

impl ReviewDecision {
    fn status(self) -> DocStatus {
        match self {
            ReviewDecision::Approve => DocStatus::Approved,
            ReviewDecision::Reject => DocStatus::Rejected,
        }
    }
}

pub struct AppShell {
    current_user: Option<UserProfile>,
    documents: Vec<Document>,
    notifications: Vec<Notification>,
}

impl AppShell {
    pub fn new() -> Self {
        Self {
            current_user: None,
            documents: Vec::new(),
            notifications: Vec::new(),
        }
    }

    /// Shell pre-loaded with the mock dataset the app starts from.
    pub fn seeded() -> Self {
        let mut shell = Self::new();
        shell.documents = seed_documents();
        shell
    }

    pub fn current_user(&self) -> Option<&UserProfile> {
        self.current_user.as_ref()
    }

    /// Documents, newest upload first.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Notifications, most recent first.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// Swap in the fixed mock profile for the chosen role.
    pub fn login(&mut self, role: UserRole) -> &UserProfile {
        let profile = match role {
            UserRole::Student => mock_student(),
            UserRole::Professor => mock_professor(),
        };
        info!("👤 {} logged in as {}", profile.name, profile.role);
        self.current_user.insert(profile)
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.current_user.take() {
            info!("👋 {} logged out", user.name);
        }
    }

    /// Prepend a freshly uploaded document. Student uploads raise a
    /// "New Submission" notification for the professors' review queue;
    /// professor uploads arrive pre-approved and stay silent.
    pub fn add_document(&mut self, doc: Document) {
        info!(
            "📄 New document '{}' ({}) by {}",
            doc.file_name, doc.status, doc.uploader_name
        );

        if doc.uploader_role == UserRole::Student {
            self.push_notification(
                format!("New Submission: {}", doc.file_name),
                format!(
                    "{} uploaded a document for {}.",
                    doc.uploader_name, doc.subject
                ),
            );
        }

        self.documents.insert(0, doc);
    }

    /// Professor review: move a Submitted document to its terminal state
    /// and notify the uploader. Approved and Rejected documents cannot be
    /// re-reviewed.
    pub fn review(
        &mut self,
        id: Uuid,
        decision: ReviewDecision,
        remarks: Option<String>,
    ) -> Result<&Document, AppError> {
        match self.current_user.as_ref() {
            Some(user) if user.is_professor() => {}
            _ => {
                return Err(AppError::Forbidden(
                    "Only professors can review submissions".to_string(),
                ));
            }
        }

        let doc = self
            .documents
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| AppError::NotFound(format!("No document with id {id}")))?;

        if doc.status.is_terminal() {
            return Err(AppError::InvalidTransition(format!(
                "'{}' is already {}",
                doc.file_name, doc.status
            )));
        }

        let status = decision.status();
        let remarks = remarks.filter(|r| !r.trim().is_empty());

        doc.status = status;
        doc.remarks = remarks.clone();

        info!("⚖️  '{}' reviewed: {}", doc.file_name, status);

        let title = format!("Document {status}");
        let message = match &remarks {
            Some(r) => format!(
                "Your document \"{}\" has been {}: {}",
                doc.file_name,
                status.to_string().to_lowercase(),
                r
            ),
            None => format!(
                "Your document \"{}\" has been {}.",
                doc.file_name,
                status.to_string().to_lowercase()
            ),
        };

        let idx = self
            .documents
            .iter()
            .position(|d| d.id == id)
            .expect("document was found above");
        self.push_notification(title, message);

        Ok(&self.documents[idx])
    }

    /// Idempotent: repeated calls leave every flag true.
    pub fn mark_all_read(&mut self) {
        for n in &mut self.notifications {
            n.read = true;
        }
    }

    pub fn clear_notifications(&mut self) {
        self.notifications.clear();
    }

    fn push_notification(&mut self, title: String, message: String) {
        let now = Utc::now();
        let mut id = now.timestamp_millis();
        // Timestamp ids can collide within a millisecond; bump past the
        // newest existing id to keep them unique.
        if let Some(latest) = self.notifications.first() {
            if id <= latest.id {
                id = latest.id + 1;
            }
        }

        self.notifications.insert(
            0,
            Notification {
                id,
                title,
                message,
                date: now,
                read: false,
            },
        );
    }
}

impl Default for AppShell {
    fn default() -> Self {
        Self::new()
    }
}

pub fn mock_student() -> UserProfile {
    UserProfile {
        id: "s1".to_string(),
        name: "Alex Johnson".to_string(),
        role: UserRole::Student,
        email: "alex.j@university.edu".to_string(),
        roll_number: Some("CS2021-042".to_string()),
        branch: Some("Computer Science".to_string()),
        year: Some("3rd Year".to_string()),
    }
}

pub fn mock_professor() -> UserProfile {
    UserProfile {
        id: "p1".to_string(),
        name: "Dr. Sarah Miller".to_string(),
        role: UserRole::Professor,
        email: "sarah.miller@university.edu".to_string(),
        roll_number: None,
        branch: None,
        year: None,
    }
}

fn seed_documents() -> Vec<Document> {
    vec![
        Document {
            id: Uuid::new_v4(),
            file_name: "DataStructures_L1.pdf".to_string(),
            subject: "Data Structures".to_string(),
            doc_type: DocType::Notes,
            year: "2nd Year".to_string(),
            branch: "CS".to_string(),
            upload_date: chrono::NaiveDate::from_ymd_opt(2023, 10, 15).expect("valid date"),
            uploader_id: "p1".to_string(),
            uploader_name: "Dr. Sarah Miller".to_string(),
            uploader_role: UserRole::Professor,
            status: DocStatus::Approved,
            file_url: "https://example.com/file1".to_string(),
            remarks: None,
            ai_summary: Some("Comprehensive overview of linked lists and stacks.".to_string()),
        },
        Document {
            id: Uuid::new_v4(),
            file_name: "Cloud_Computing_Proj.docx".to_string(),
            subject: "Cloud Computing".to_string(),
            doc_type: DocType::Assignment,
            year: "4th Year".to_string(),
            branch: "IT".to_string(),
            upload_date: chrono::NaiveDate::from_ymd_opt(2023, 11, 1).expect("valid date"),
            uploader_id: "s1".to_string(),
            uploader_name: "Alex Johnson".to_string(),
            uploader_role: UserRole::Student,
            status: DocStatus::Submitted,
            file_url: "https://example.com/file2".to_string(),
            remarks: None,
            ai_summary: None,
        },
    ]
}
