//! Pure filtering and grouping over document collections.
//!
//! Views never partition documents themselves; they pick a
//! [`GroupingStrategy`] and render the ordered sections this module
//! returns. Grouping by a plain field keys off the raw value in
//! first-encounter order. Grouping by uploader is viewer-relative: the
//! same collection produces different buckets for a student and a
//! professor, in a fixed priority order.

use crate::models::{Document, UserRole};

/// Tab filter on the dashboards: the whole library or only the
/// viewer's own uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    All,
    Mine,
}

/// A document field usable as a plain grouping key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKey {
    Subject,
    DocType,
    Status,
}

/// How to partition a document collection into labeled sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupingStrategy {
    /// Key off the raw field value; sections appear in first-encounter order.
    ByField(GroupKey),
    /// Partition by the uploader's relationship to the viewer; sections
    /// follow a fixed priority order.
    ByRoleRelative {
        viewer_id: String,
        viewer_role: UserRole,
    },
}

/// One of the three viewer-relative sections under
/// [`GroupingStrategy::ByRoleRelative`]. The first three variants exist
/// for student viewers, the last three for professor viewers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleBucket {
    ProfessorResources,
    MyUploads,
    PeerContributions,
    MyResources,
    OtherProfessors,
    StudentSubmissions,
}

impl RoleBucket {
    pub fn label(&self) -> &'static str {
        match self {
            RoleBucket::ProfessorResources => "Official Professor Resources",
            RoleBucket::MyUploads => "My Uploads",
            RoleBucket::PeerContributions => "Peer Contributions",
            RoleBucket::MyResources => "My Resources",
            RoleBucket::OtherProfessors => "Other Professor Uploads",
            RoleBucket::StudentSubmissions => "Student Submissions",
        }
    }

    /// Section order for a given viewer role.
    fn order_for(viewer_role: UserRole) -> [RoleBucket; 3] {
        match viewer_role {
            UserRole::Student => [
                RoleBucket::ProfessorResources,
                RoleBucket::MyUploads,
                RoleBucket::PeerContributions,
            ],
            UserRole::Professor => [
                RoleBucket::MyResources,
                RoleBucket::OtherProfessors,
                RoleBucket::StudentSubmissions,
            ],
        }
    }

    /// Assign a document to exactly one bucket for this viewer.
    pub fn classify(doc: &Document, viewer_id: &str, viewer_role: UserRole) -> RoleBucket {
        match viewer_role {
            UserRole::Student => {
                if doc.uploader_role == UserRole::Professor {
                    RoleBucket::ProfessorResources
                } else if doc.is_uploaded_by(viewer_id) {
                    RoleBucket::MyUploads
                } else {
                    RoleBucket::PeerContributions
                }
            }
            UserRole::Professor => {
                if doc.is_uploaded_by(viewer_id) {
                    RoleBucket::MyResources
                } else if doc.uploader_role == UserRole::Professor {
                    RoleBucket::OtherProfessors
                } else {
                    RoleBucket::StudentSubmissions
                }
            }
        }
    }
}

/// A labeled, ordered section of the grouped output.
#[derive(Debug)]
pub struct DocumentGroup<'a> {
    pub label: String,
    pub docs: Vec<&'a Document>,
}

/// Case-insensitive substring match against file name and subject.
pub fn matches_query(doc: &Document, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let q = query.to_lowercase();
    doc.file_name.to_lowercase().contains(&q) || doc.subject.to_lowercase().contains(&q)
}

/// Match used on the professor's submissions table: file name or the
/// submitting student's name.
pub fn matches_submission_query(doc: &Document, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let q = query.to_lowercase();
    doc.file_name.to_lowercase().contains(&q) || doc.uploader_name.to_lowercase().contains(&q)
}

/// Filter a collection by search query and tab, preserving order.
pub fn filter_documents<'a>(
    docs: &'a [Document],
    query: &str,
    tab: Tab,
    viewer_id: &str,
) -> Vec<&'a Document> {
    docs.iter()
        .filter(|doc| matches_query(doc, query))
        .filter(|doc| match tab {
            Tab::All => true,
            Tab::Mine => doc.is_uploaded_by(viewer_id),
        })
        .collect()
}

/// Partition `docs` into labeled sections per the strategy. Every input
/// document appears in exactly one section; empty sections are omitted.
pub fn group_documents<'a>(
    docs: &[&'a Document],
    strategy: &GroupingStrategy,
) -> Vec<DocumentGroup<'a>> {
    match strategy {
        GroupingStrategy::ByField(key) => group_by_field(docs, *key),
        GroupingStrategy::ByRoleRelative {
            viewer_id,
            viewer_role,
        } => group_by_role(docs, viewer_id, *viewer_role),
    }
}

fn field_value(doc: &Document, key: GroupKey) -> String {
    match key {
        GroupKey::Subject => doc.subject.clone(),
        GroupKey::DocType => doc.doc_type.to_string(),
        GroupKey::Status => doc.status.to_string(),
    }
}

fn group_by_field<'a>(docs: &[&'a Document], key: GroupKey) -> Vec<DocumentGroup<'a>> {
    // The dataset is a few dozen records, so a linear scan per document
    // beats pulling in an ordered map.
    let mut groups: Vec<DocumentGroup<'a>> = Vec::new();

    for doc in docs {
        let label = field_value(doc, key);
        match groups.iter_mut().find(|g| g.label == label) {
            Some(group) => group.docs.push(doc),
            None => groups.push(DocumentGroup {
                label,
                docs: vec![doc],
            }),
        }
    }

    groups
}

fn group_by_role<'a>(
    docs: &[&'a Document],
    viewer_id: &str,
    viewer_role: UserRole,
) -> Vec<DocumentGroup<'a>> {
    let order = RoleBucket::order_for(viewer_role);
    let mut buckets: [Vec<&'a Document>; 3] = [Vec::new(), Vec::new(), Vec::new()];

    for doc in docs {
        let bucket = RoleBucket::classify(doc, viewer_id, viewer_role);
        let slot = order
            .iter()
            .position(|b| *b == bucket)
            .expect("classify returns a bucket from the viewer's own order");
        buckets[slot].push(doc);
    }

    order
        .iter()
        .zip(buckets)
        .filter(|(_, docs)| !docs.is_empty())
        .map(|(bucket, docs)| DocumentGroup {
            label: bucket.label().to_string(),
            docs,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DocStatus, DocType};
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn doc(file_name: &str, subject: &str, uploader_id: &str, role: UserRole) -> Document {
        Document {
            id: Uuid::new_v4(),
            file_name: file_name.to_string(),
            subject: subject.to_string(),
            doc_type: DocType::Notes,
            year: "2nd Year".to_string(),
            branch: "CS".to_string(),
            upload_date: NaiveDate::from_ymd_opt(2023, 10, 15).unwrap(),
            uploader_id: uploader_id.to_string(),
            uploader_name: uploader_id.to_string(),
            uploader_role: role,
            status: DocStatus::Approved,
            file_url: "file:///tmp/doc".to_string(),
            remarks: None,
            ai_summary: None,
        }
    }

    fn sample() -> Vec<Document> {
        vec![
            doc("DataStructures_L1.pdf", "Data Structures", "p1", UserRole::Professor),
            doc("Cloud_Proj.docx", "Cloud Computing", "s1", UserRole::Student),
            doc("Algebra_Notes.pdf", "Maths", "s2", UserRole::Student),
            doc("Syllabus_2024.pdf", "Maths", "p2", UserRole::Professor),
        ]
    }

    #[test]
    fn test_search_matches_filename_and_subject_case_insensitive() {
        let docs = sample();
        let hits = filter_documents(&docs, "maths", Tab::All, "s1");
        assert_eq!(hits.len(), 2);
        let hits = filter_documents(&docs, "CLOUD", Tab::All, "s1");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].file_name, "Cloud_Proj.docx");
        let hits = filter_documents(&docs, "", Tab::All, "s1");
        assert_eq!(hits.len(), 4);
    }

    #[test]
    fn test_mine_tab_restricts_to_viewer() {
        let docs = sample();
        let hits = filter_documents(&docs, "", Tab::Mine, "s1");
        assert_eq!(hits.len(), 1);
        assert!(hits.iter().all(|d| d.uploader_id == "s1"));
    }

    #[test]
    fn test_submission_query_matches_uploader_name() {
        let docs = sample();
        assert!(matches_submission_query(&docs[1], "s1"));
        assert!(!matches_submission_query(&docs[1], "s2"));
    }

    #[test]
    fn test_group_by_field_preserves_first_encounter_order() {
        let docs = sample();
        let refs: Vec<&Document> = docs.iter().collect();
        let groups = group_documents(&refs, &GroupingStrategy::ByField(GroupKey::Subject));
        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["Data Structures", "Cloud Computing", "Maths"]);
        assert_eq!(groups[2].docs.len(), 2);
    }

    #[test]
    fn test_role_grouping_partitions_without_loss_for_student() {
        let docs = sample();
        let refs: Vec<&Document> = docs.iter().collect();
        let strategy = GroupingStrategy::ByRoleRelative {
            viewer_id: "s1".to_string(),
            viewer_role: UserRole::Student,
        };
        let groups = group_documents(&refs, &strategy);

        let total: usize = groups.iter().map(|g| g.docs.len()).sum();
        assert_eq!(total, docs.len());

        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Official Professor Resources",
                "My Uploads",
                "Peer Contributions"
            ]
        );
        assert_eq!(groups[0].docs.len(), 2);
        assert_eq!(groups[1].docs.len(), 1);
        assert_eq!(groups[2].docs.len(), 1);
    }

    #[test]
    fn test_role_grouping_is_viewer_relative_for_professor() {
        let docs = sample();
        let refs: Vec<&Document> = docs.iter().collect();
        let strategy = GroupingStrategy::ByRoleRelative {
            viewer_id: "p1".to_string(),
            viewer_role: UserRole::Professor,
        };
        let groups = group_documents(&refs, &strategy);

        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "My Resources",
                "Other Professor Uploads",
                "Student Submissions"
            ]
        );
        assert_eq!(groups[0].docs[0].uploader_id, "p1");
        assert_eq!(groups[1].docs[0].uploader_id, "p2");
        assert_eq!(groups[2].docs.len(), 2);
    }

    #[test]
    fn test_empty_role_buckets_are_omitted() {
        let docs = vec![doc("A.pdf", "Maths", "p1", UserRole::Professor)];
        let refs: Vec<&Document> = docs.iter().collect();
        let strategy = GroupingStrategy::ByRoleRelative {
            viewer_id: "s1".to_string(),
            viewer_role: UserRole::Student,
        };
        let groups = group_documents(&refs, &strategy);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].label, "Official Professor Resources");
    }
}
