use std::io;
use std::path::Path;

use crate::models::DocType;
use crate::services::upload::{UploadRequest, UploadService};
use crate::store::AppShell;
use crate::views::prompt;

/// Collect the upload fields, run the upload flow and hand the new
/// document to the shell. The prompt sequence is strictly linear, so a
/// second upload cannot start while the summary request is pending.
pub async fn run(shell: &mut AppShell, uploads: &UploadService) -> io::Result<()> {
    let Some(user) = shell.current_user().cloned() else {
        println!("Sign in before uploading.");
        return Ok(());
    };

    println!("\nUpload Document (PDF, DOC, DOCX)");

    let path = prompt("File path", "")?;
    let file_name = Path::new(&path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("")
        .to_string();

    let subject = prompt("Subject name", "")?;

    let type_names: Vec<String> = DocType::ALL.iter().map(|t| t.to_string()).collect();
    println!("Document types: {}", type_names.join(", "));
    let doc_type = loop {
        let answer = prompt("Document type", "Notes")?;
        match DocType::parse(&answer) {
            Some(t) => break t,
            None => println!("Unknown type '{}'.", answer),
        }
    };

    let request = UploadRequest {
        file_name,
        subject,
        doc_type,
        file_url: format!("file://{path}"),
    };

    println!("AI analyzing…");
    match uploads.prepare(&user, request).await {
        Ok(doc) => {
            println!("Uploaded '{}' ({}).", doc.file_name, doc.status);
            if let Some(summary) = &doc.ai_summary {
                println!("Summary: {}", summary);
            }
            shell.add_document(doc);
        }
        Err(e) => println!("Upload failed: {}", e),
    }
    println!();

    Ok(())
}
