//! Terminal views. Each view renders a slice of shell state and raises
//! intents back to the shell; none of them own any domain state beyond
//! their own display settings (tab, query, grouping).

pub mod login;
pub mod notifications;
pub mod professor;
pub mod profile;
pub mod student;
pub mod upload_form;

use std::io::{self, Write};

use crate::models::{Document, UserRole};

/// Prompt on one line and read a trimmed answer; empty input yields the
/// default.
pub fn prompt(field: &str, default_val: &str) -> io::Result<String> {
    if default_val.is_empty() {
        print!("{}: ", field);
    } else {
        print!("{} [{}]: ", field, default_val);
    }
    io::stdout().flush()?;

    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    let trimmed = buf.trim();
    if trimmed.is_empty() {
        Ok(default_val.to_string())
    } else {
        Ok(trimmed.to_string())
    }
}

pub(crate) fn truncate_for_table(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let mut out = String::new();
        for (i, ch) in s.chars().enumerate() {
            if i >= max_len - 1 {
                out.push('…');
                break;
            }
            out.push(ch);
        }
        out
    }
}

/// Badge shown next to the uploader name, relative to the viewer.
fn uploader_tag(doc: &Document, viewer_id: &str) -> String {
    if doc.is_uploaded_by(viewer_id) {
        "Me".to_string()
    } else if doc.uploader_role == UserRole::Professor {
        format!("{} ✓", doc.uploader_name)
    } else {
        doc.uploader_name.clone()
    }
}

/// Flat table of documents, used by the list layout and group sections.
pub(crate) fn print_document_table(docs: &[&Document], viewer_id: &str) {
    if docs.is_empty() {
        println!("\nNo documents found matching your filters.\n");
        return;
    }

    println!(
        "{:<4} | {:<28} | {:<18} | {:<14} | {:<9} | {:<10} | {}",
        "#", "Document", "Subject", "Type", "Status", "Date", "Uploader"
    );
    println!("{}", "-".repeat(110));

    for (i, doc) in docs.iter().enumerate() {
        println!(
            "{:<4} | {:<28} | {:<18} | {:<14} | {:<9} | {:<10} | {}",
            i + 1,
            truncate_for_table(&doc.file_name, 28),
            truncate_for_table(&doc.subject, 18),
            doc.doc_type,
            doc.status,
            doc.upload_date,
            truncate_for_table(&uploader_tag(doc, viewer_id), 24),
        );
        if let Some(summary) = &doc.ai_summary {
            println!("     └ \"{}\"", truncate_for_table(summary, 96));
        }
    }
    println!();
}
