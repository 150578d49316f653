use std::io;

use crate::grouping::{self, GroupKey, GroupingStrategy, Tab};
use crate::models::{DocStatus, Document, UserRole};
use crate::services::upload::UploadService;
use crate::store::{AppShell, ReviewDecision};
use crate::views::{print_document_table, prompt, truncate_for_table, upload_form};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Submissions,
    Library,
    Analytics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Criteria {
    Subject,
    DocType,
    Status,
    UploaderRole,
}

impl Criteria {
    fn parse(s: &str) -> Option<Criteria> {
        match s {
            "subject" => Some(Criteria::Subject),
            "type" => Some(Criteria::DocType),
            "status" => Some(Criteria::Status),
            "uploader" => Some(Criteria::UploaderRole),
            _ => None,
        }
    }

    fn strategy(self, viewer_id: &str) -> GroupingStrategy {
        match self {
            Criteria::Subject => GroupingStrategy::ByField(GroupKey::Subject),
            Criteria::DocType => GroupingStrategy::ByField(GroupKey::DocType),
            Criteria::Status => GroupingStrategy::ByField(GroupKey::Status),
            Criteria::UploaderRole => GroupingStrategy::ByRoleRelative {
                viewer_id: viewer_id.to_string(),
                viewer_role: UserRole::Professor,
            },
        }
    }
}

/// Professor portal: the submissions review queue, the grouped library,
/// and the analytics counters.
pub struct ProfessorDashboard {
    mode: Mode,
    query: String,
    criteria: Criteria,
}

impl ProfessorDashboard {
    pub fn new() -> Self {
        Self {
            mode: Mode::Submissions,
            query: String::new(),
            criteria: Criteria::Subject,
        }
    }

    /// Student-authored documents, filtered by the submissions search.
    fn submissions<'a>(&self, shell: &'a AppShell) -> Vec<&'a Document> {
        shell
            .documents()
            .iter()
            .filter(|d| d.uploader_role == UserRole::Student)
            .filter(|d| grouping::matches_submission_query(d, &self.query))
            .collect()
    }

    fn render_submissions(&self, shell: &AppShell) {
        let submissions = self.submissions(shell);

        println!("\nReview Submissions");
        if submissions.is_empty() {
            println!("\nNo pending submissions to review.\n");
            return;
        }

        println!(
            "{:<4} | {:<16} | {:<28} | {:<18} | {}",
            "#", "Student", "Document", "Subject", "Status"
        );
        println!("{}", "-".repeat(84));
        for (i, doc) in submissions.iter().enumerate() {
            println!(
                "{:<4} | {:<16} | {:<28} | {:<18} | {}",
                i + 1,
                truncate_for_table(&doc.uploader_name, 16),
                truncate_for_table(&doc.file_name, 28),
                truncate_for_table(&doc.subject, 18),
                doc.status,
            );
        }
        println!();
    }

    fn render_library(&self, shell: &AppShell) {
        let Some(user) = shell.current_user() else {
            return;
        };

        println!("\nDocument Library");
        let filtered = grouping::filter_documents(shell.documents(), &self.query, Tab::All, &user.id);
        let strategy = self.criteria.strategy(&user.id);
        let groups = grouping::group_documents(&filtered, &strategy);

        if groups.is_empty() {
            println!("\nNothing found in the repository.\n");
            return;
        }

        for group in groups {
            println!("\n=== {} ({}) ===", group.label, group.docs.len());
            print_document_table(&group.docs, &user.id);
        }
    }

    fn render_analytics(&self, shell: &AppShell) {
        let submissions: Vec<&Document> = shell
            .documents()
            .iter()
            .filter(|d| d.uploader_role == UserRole::Student)
            .collect();
        let pending = submissions
            .iter()
            .filter(|d| d.status == DocStatus::Submitted)
            .count();
        let approved = submissions
            .iter()
            .filter(|d| d.status == DocStatus::Approved)
            .count();
        let approval_rate = if submissions.is_empty() {
            0
        } else {
            (approved as f64 / submissions.len() as f64 * 100.0).round() as u32
        };

        println!("\nAnalytics");
        println!("  Total submissions : {}", submissions.len());
        println!("  Pending review    : {}", pending);
        println!("  Approval rate     : {}%", approval_rate);
        println!("  Total resources   : {}", shell.documents().len());

        println!("\nSubject-wise distribution:");
        let refs: Vec<&Document> = shell.documents().iter().collect();
        let by_subject =
            grouping::group_documents(&refs, &GroupingStrategy::ByField(GroupKey::Subject));
        for group in by_subject {
            println!(
                "  {:<20} {:>3}  {}",
                truncate_for_table(&group.label, 20),
                group.docs.len(),
                "#".repeat(group.docs.len()),
            );
        }
        println!();
    }

    /// Review the n-th listed submission: show its details, take optional
    /// remarks, then approve or reject.
    fn review(&self, shell: &mut AppShell, index: usize) -> io::Result<()> {
        let Some(doc) = self.submissions(shell).get(index.wrapping_sub(1)).copied() else {
            println!("No submission #{index}.");
            return Ok(());
        };

        if doc.status.is_terminal() {
            println!("'{}' is already {}.", doc.file_name, doc.status);
            return Ok(());
        }

        let id = doc.id;
        println!("\nReview Submission");
        println!("  Document : {}", doc.file_name);
        println!("  Student  : {}", doc.uploader_name);
        println!("  Subject  : {}", doc.subject);
        println!("  Type     : {}", doc.doc_type);
        if let Some(summary) = &doc.ai_summary {
            println!("  Summary  : {}", summary);
        }

        let remarks = prompt("Remarks (optional)", "")?;
        let remarks = if remarks.is_empty() {
            None
        } else {
            Some(remarks)
        };

        let decision = loop {
            let answer = prompt("approve / reject / cancel", "")?.to_lowercase();
            match answer.as_str() {
                "approve" | "a" => break ReviewDecision::Approve,
                "reject" | "r" => break ReviewDecision::Reject,
                "cancel" | "c" => return Ok(()),
                other => println!("Unknown answer '{}'.", other),
            }
        };

        match shell.review(id, decision, remarks) {
            Ok(doc) => println!("'{}' is now {}.\n", doc.file_name, doc.status),
            Err(e) => println!("Review failed: {}\n", e),
        }

        Ok(())
    }

    pub async fn run(
        &mut self,
        shell: &mut AppShell,
        uploads: &UploadService,
    ) -> io::Result<()> {
        loop {
            match self.mode {
                Mode::Submissions => self.render_submissions(shell),
                Mode::Library => self.render_library(shell),
                Mode::Analytics => self.render_analytics(shell),
            }

            println!(
                "Commands: submissions | library | analytics | search <term> | group subject|type|status|uploader | review <n> | upload | back"
            );

            let input = prompt("prof>", "")?;
            let cmd = input.trim();

            match cmd {
                "" => {}
                "submissions" => self.mode = Mode::Submissions,
                "library" => self.mode = Mode::Library,
                "analytics" => self.mode = Mode::Analytics,
                "search" => self.query.clear(),
                "upload" => upload_form::run(shell, uploads).await?,
                "back" => return Ok(()),
                _ if cmd.starts_with("search ") => {
                    self.query = cmd["search ".len()..].trim().to_string();
                }
                _ if cmd.starts_with("group ") => {
                    let key = cmd["group ".len()..].trim();
                    match Criteria::parse(key) {
                        Some(c) => {
                            self.criteria = c;
                            self.mode = Mode::Library;
                        }
                        None => println!("Unknown grouping '{}'.", key),
                    }
                }
                _ if cmd.starts_with("review ") => {
                    match cmd["review ".len()..].trim().parse::<usize>() {
                        Ok(n) => self.review(shell, n)?,
                        Err(_) => println!("Usage: review <number>"),
                    }
                }
                other => println!("Unknown command '{}'.", other),
            }
        }
    }
}
