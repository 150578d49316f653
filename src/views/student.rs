use std::io;

use crate::grouping::{self, GroupKey, GroupingStrategy, Tab};
use crate::services::upload::UploadService;
use crate::store::AppShell;
use crate::views::{print_document_table, prompt, upload_form};

/// Which partitioning the group-by selector currently points at.
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

    fn strategy(self, viewer_id: &str, viewer_role: crate::models::UserRole) -> GroupingStrategy {
        match self {
            Criteria::Subject => GroupingStrategy::ByField(GroupKey::Subject),
            Criteria::DocType => GroupingStrategy::ByField(GroupKey::DocType),
            Criteria::Status => GroupingStrategy::ByField(GroupKey::Status),
            Criteria::UploaderRole => GroupingStrategy::ByRoleRelative {
                viewer_id: viewer_id.to_string(),
                viewer_role,
            },
        }
    }
}

/// Student document repository view: search, All/Mine tabs, sectioned or
/// flat listing, upload.
pub struct StudentDashboard {
    tab: Tab,
    query: String,
    criteria: Criteria,
    sections: bool,
}

impl StudentDashboard {
    pub fn new() -> Self {
        Self {
            tab: Tab::All,
            query: String::new(),
            criteria: Criteria::Subject,
            sections: true,
        }
    }

    fn render(&self, shell: &AppShell) {
        let Some(user) = shell.current_user() else {
            return;
        };

        println!("\nDocument Repository — browse categorized academic resources");
        let tab_label = match self.tab {
            Tab::All => "All Library",
            Tab::Mine => "My Files",
        };
        let query_label = if self.query.is_empty() {
            "(none)".to_string()
        } else {
            format!("\"{}\"", self.query)
        };
        println!("Tab: {} | Search: {}", tab_label, query_label);

        let filtered = grouping::filter_documents(shell.documents(), &self.query, self.tab, &user.id);

        if !self.sections {
            print_document_table(&filtered, &user.id);
            return;
        }

        let strategy = self.criteria.strategy(&user.id, user.role);
        let groups = grouping::group_documents(&filtered, &strategy);

        if groups.is_empty() {
            println!("\nNo documents found matching your filters.\n");
            return;
        }

        for group in groups {
            println!("\n=== {} ({}) ===", group.label, group.docs.len());
            print_document_table(&group.docs, &user.id);
        }
    }

    pub async fn run(
        &mut self,
        shell: &mut AppShell,
        uploads: &UploadService,
    ) -> io::Result<()> {
        loop {
            self.render(shell);
            println!(
                "Commands: all | mine | search <term> | group subject|type|status|uploader | sections | list | upload | back"
            );

            let input = prompt("docs>", "")?;
            let cmd = input.trim();

            match cmd {
                "" => {}
                "all" => self.tab = Tab::All,
                "mine" => self.tab = Tab::Mine,
                "sections" => self.sections = true,
                "list" => self.sections = false,
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
                            self.sections = true;
                        }
                        None => println!("Unknown grouping '{}'.", key),
                    }
                }
                other => println!("Unknown command '{}'.", other),
            }
        }
    }
}
