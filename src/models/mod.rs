use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Student,
    Professor,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Student => write!(f, "Student"),
            UserRole::Professor => write!(f, "Professor"),
        }
    }
}

/// Review lifecycle of a document. `Submitted` is the only non-terminal
/// state: it can move to `Approved` or `Rejected`, never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocStatus {
    Submitted,
    Approved,
    Rejected,
}

impl DocStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, DocStatus::Submitted)
    }
}

impl std::fmt::Display for DocStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocStatus::Submitted => write!(f, "Submitted"),
            DocStatus::Approved => write!(f, "Approved"),
            DocStatus::Rejected => write!(f, "Rejected"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocType {
    Assignment,
    Notes,
    Research,
    Syllabus,
}

impl DocType {
    pub const ALL: &'static [DocType] = &[
        DocType::Assignment,
        DocType::Notes,
        DocType::Research,
        DocType::Syllabus,
    ];

    pub fn parse(s: &str) -> Option<DocType> {
        match s.trim().to_lowercase().as_str() {
            "assignment" => Some(DocType::Assignment),
            "notes" => Some(DocType::Notes),
            "research" | "research paper" => Some(DocType::Research),
            "syllabus" => Some(DocType::Syllabus),
            _ => None,
        }
    }
}

impl std::fmt::Display for DocType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocType::Assignment => write!(f, "Assignment"),
            DocType::Notes => write!(f, "Notes"),
            DocType::Research => write!(f, "Research Paper"),
            DocType::Syllabus => write!(f, "Syllabus"),
        }
    }
}

/// Identity of a logged-in user. Immutable for the whole session.
/// Roll number, branch and year are only set for students.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub role: UserRole,
    pub email: String,
    pub roll_number: Option<String>,
    pub branch: Option<String>,
    pub year: Option<String>,
}

impl UserProfile {
    pub fn is_student(&self) -> bool {
        self.role == UserRole::Student
    }

    pub fn is_professor(&self) -> bool {
        self.role == UserRole::Professor
    }
}

/// An uploaded academic file record. The uploader fields are denormalized
/// at creation time and never change; a professor review may update
/// `status` and `remarks`, nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: Uuid,
    pub file_name: String,
    pub subject: String,
    pub doc_type: DocType,
    pub year: String,
    pub branch: String,
    pub upload_date: NaiveDate,
    pub uploader_id: String,
    pub uploader_name: String,
    pub uploader_role: UserRole,
    pub status: DocStatus,
    pub file_url: String,
    pub remarks: Option<String>,
    pub ai_summary: Option<String>,
}

impl Document {
    pub fn is_uploaded_by(&self, user_id: &str) -> bool {
        self.uploader_id == user_id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub title: String,
    pub message: String,
    pub date: DateTime<Utc>,
    pub read: bool,
}
