use std::io;

use crate::models::UserRole;
use crate::views::prompt;

/// Role selector shown before anything else. Credentials are collected
/// but not verified; login is a mock. Returns `None` when the user
/// quits instead of signing in.
pub fn run() -> io::Result<Option<UserRole>> {
    println!();
    println!("AcademiaRepo — The Hub for Academic Excellence");
    println!("==============================================");
    println!("Choose your role to continue:");
    println!("  student     Access notes, upload assignments, track progress");
    println!("  professor   Review submissions, manage course content");
    println!("  quit        Exit");
    println!();

    loop {
        let choice = prompt("Role", "student")?.to_lowercase();
        let role = match choice.as_str() {
            "student" | "s" => UserRole::Student,
            "professor" | "p" => UserRole::Professor,
            "quit" | "q" | "exit" => return Ok(None),
            other => {
                println!("Unknown role '{}'.", other);
                continue;
            }
        };

        let identifier_label = match role {
            UserRole::Student => "University email or roll number",
            UserRole::Professor => "University email",
        };
        let _identifier = prompt(identifier_label, "")?;
        let _password = prompt("Password", "")?;

        println!("Signed in.\n");
        return Ok(Some(role));
    }
}
