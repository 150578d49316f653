use academia_repo::error::AppError;
use academia_repo::models::{DocStatus, DocType, UserRole};
use academia_repo::services::summarizer::NoopSummarizer;
use academia_repo::services::upload::{UploadRequest, UploadService};
use academia_repo::store::{AppShell, ReviewDecision, mock_student};

fn upload_request(file_name: &str, subject: &str, doc_type: DocType) -> UploadRequest {
    UploadRequest {
        file_name: file_name.to_string(),
        subject: subject.to_string(),
        doc_type,
        file_url: format!("file:///tmp/{file_name}"),
    }
}

#[tokio::test]
async fn test_submission_review_flow() {
    let uploads = UploadService::new(Box::new(NoopSummarizer));
    let mut shell = AppShell::seeded();

    // 1. Student signs in and uploads a midterm paper.
    shell.login(UserRole::Student);
    let doc = uploads
        .prepare(
            &mock_student(),
            upload_request("Midterm.pdf", "Physics", DocType::Assignment),
        )
        .await
        .unwrap();
    assert_eq!(doc.status, DocStatus::Submitted);
    let doc_id = doc.id;
    shell.add_document(doc);

    // The upload lands on top and raises a submission notification.
    assert_eq!(shell.documents()[0].file_name, "Midterm.pdf");
    assert_eq!(shell.notifications().len(), 1);
    assert_eq!(shell.notifications()[0].title, "New Submission: Midterm.pdf");
    assert!(shell.notifications()[0]
        .message
        .contains("Alex Johnson uploaded a document for Physics."));

    // 2. Professor signs in and rejects it with a remark.
    shell.login(UserRole::Professor);
    let doc = shell
        .review(doc_id, ReviewDecision::Reject, Some("Missing page 3".to_string()))
        .unwrap();
    assert_eq!(doc.status, DocStatus::Rejected);
    assert_eq!(doc.remarks.as_deref(), Some("Missing page 3"));

    let latest = &shell.notifications()[0];
    assert_eq!(latest.title, "Document Rejected");
    assert_eq!(
        latest.message,
        "Your document \"Midterm.pdf\" has been rejected: Missing page 3"
    );

    // 3. The decision is final.
    let err = shell
        .review(doc_id, ReviewDecision::Approve, None)
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidTransition(_)));

    // 4. The student reads the feed.
    shell.login(UserRole::Student);
    assert_eq!(shell.unread_count(), 2);
    shell.mark_all_read();
    assert_eq!(shell.unread_count(), 0);
    shell.mark_all_read();
    assert_eq!(shell.unread_count(), 0);
}

#[tokio::test]
async fn test_professor_upload_skips_review() {
    let uploads = UploadService::new(Box::new(NoopSummarizer));
    let mut shell = AppShell::seeded();

    let professor = shell.login(UserRole::Professor).clone();
    let doc = uploads
        .prepare(
            &professor,
            upload_request("Lecture_Slides_W3.pdf", "Databases", DocType::Notes),
        )
        .await
        .unwrap();
    assert_eq!(doc.status, DocStatus::Approved);
    shell.add_document(doc);

    // Pre-approved uploads never enter the notification feed.
    assert!(shell.notifications().is_empty());
    assert_eq!(shell.documents()[0].uploader_role, UserRole::Professor);
}

#[tokio::test]
async fn test_rejected_extension_never_reaches_the_store() {
    let uploads = UploadService::new(Box::new(NoopSummarizer));
    let shell = AppShell::seeded();

    let err = uploads
        .prepare(
            &mock_student(),
            upload_request("malware.exe", "Physics", DocType::Assignment),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(shell.documents().len(), 2);
}
