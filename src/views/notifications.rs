use std::io;

use crate::store::AppShell;
use crate::views::prompt;

fn render(shell: &AppShell) {
    let notifications = shell.notifications();
    let unread = shell.unread_count();

    if unread > 0 {
        println!("\nNotifications ({} unread)", unread);
    } else {
        println!("\nNotifications");
    }

    if notifications.is_empty() {
        println!("\nNo notifications yet.\n");
        return;
    }

    for n in notifications {
        let marker = if n.read { " " } else { "*" };
        println!(
            "  {} {} — {}",
            marker,
            n.title,
            n.date.format("%Y-%m-%d %H:%M"),
        );
        println!("      {}", n.message);
    }
    println!();
}

/// Notification feed: newest first, with mark-all-read and clear-all.
pub fn run(shell: &mut AppShell) -> io::Result<()> {
    loop {
        render(shell);
        println!("Commands: read | clear | back");

        let input = prompt("notif>", "back")?;
        match input.trim() {
            "read" => shell.mark_all_read(),
            "clear" => shell.clear_notifications(),
            "back" | "" => return Ok(()),
            other => println!("Unknown command '{}'.", other),
        }
    }
}
