//! `key = value` rendering of a Drive file.

use std::fmt::Write;

use reportdrive_core::DriveFile;

/// Render the known fields of `file`, one `key = value` line each.
///
/// Absent fields are skipped, so an id-only reference prints a single line.
pub fn format_file(file: &DriveFile) -> String {
    let mut out = format!("id = {}\n", file.id);
    let mut line = |key: &str, value: &str| {
        let _ = writeln!(out, "{key} = {value}");
    };

    if let Some(title) = &file.title {
        line("title", title);
    }
    if let Some(mime_type) = &file.mime_type {
        line("mime_type", mime_type);
    }
    if let Some(description) = &file.description {
        line("description", description);
    }
    if !file.parent_ids.is_empty() {
        line("parents", &file.parent_ids.join(","));
    }
    if let Some(trashed) = file.trashed {
        line("trashed", &trashed.to_string());
    }
    if let Some(link) = &file.alternate_link {
        line("link", link);
    }
    if let Some(modified) = file.modified_date {
        line("modified", &modified.to_rfc3339());
    }
    out
}

/// Print `file` to stdout.
pub fn display_file(file: &DriveFile) {
    print!("{}", format_file(file));
}
