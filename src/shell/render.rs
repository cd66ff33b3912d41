// Plain text rendering for the terminal front end.

use crate::modules::users::core::notification::{Notification, NotificationKind};
use crate::modules::users::use_cases::list_registered_users::handler::EMPTY_LIST_MESSAGE;
use crate::modules::users::use_cases::list_registered_users::projection::UserRow;

const HEADERS: [&str; 4] = ["ID", "Name", "Email", "Phone"];

pub fn render_notification(notification: &Notification) -> String {
    let label = match notification.kind {
        NotificationKind::Success => "success",
        NotificationKind::Error => "error",
    };
    format!("[{label}] {}", notification.message)
}

pub fn render_table(rows: &[UserRow]) -> String {
    if rows.is_empty() {
        return format!("{EMPTY_LIST_MESSAGE}\n");
    }

    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|row| {
            [
                row.id.to_string(),
                row.name.clone(),
                row.email.clone(),
                row.phone.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADERS.map(String::from), &widths);
    push_line(&mut out, &widths.map(|w| "-".repeat(w)), &widths);
    for line in &cells {
        push_line(&mut out, line, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    out.push_str(padded.join("  ").trim_end());
    out.push('\n');
}
