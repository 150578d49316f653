use crate::models::UserRole;
use crate::store::AppShell;
use crate::views::truncate_for_table;

/// Identity card plus the viewer's most recent contributions.
pub fn run(shell: &AppShell) {
    let Some(user) = shell.current_user() else {
        return;
    };

    println!("\nProfile");
    println!("  Name   : {}", user.name);
    println!("  Role   : {}", user.role);
    println!("  Email  : {}", user.email);
    match user.role {
        UserRole::Student => {
            if let Some(roll) = &user.roll_number {
                println!("  Roll   : {}", roll);
            }
            if let Some(branch) = &user.branch {
                println!("  Branch : {}", branch);
            }
            if let Some(year) = &user.year {
                println!("  Year   : {}", year);
            }
        }
        UserRole::Professor => {
            if let Some(branch) = &user.branch {
                println!("  Dept   : {}", branch);
            }
        }
    }

    let mine: Vec<_> = shell
        .documents()
        .iter()
        .filter(|d| d.is_uploaded_by(&user.id))
        .take(3)
        .collect();

    println!("\nRecent contributions:");
    if mine.is_empty() {
        println!("  (none yet)");
    } else {
        for doc in mine {
            println!(
                "  {} — {} ({}, {})",
                truncate_for_table(&doc.file_name, 32),
                truncate_for_table(&doc.subject, 20),
                doc.status,
                doc.upload_date,
            );
        }
    }
    println!();
}
