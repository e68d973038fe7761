//! Drive search query construction.

use reportdrive_core::FOLDER_MIME_TYPE;

/// Escape a value for use inside a single-quoted query literal.
pub fn escape_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Query matching non-trashed folders with exactly this title.
pub fn folder_title_query(title: &str) -> String {
    format!(
        "title = '{}' and mimeType = '{FOLDER_MIME_TYPE}' and trashed = false",
        escape_literal(title)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_title_query() {
        assert_eq!(
            folder_title_query("Account ID#: 555"),
            "title = 'Account ID#: 555' and mimeType = 'application/vnd.google-apps.folder' and trashed = false"
        );
    }

    #[test]
    fn test_escape_quotes_and_backslashes() {
        assert_eq!(escape_literal("O'Brien"), "O\\'Brien");
        assert_eq!(escape_literal("a\\b"), "a\\\\b");
        assert_eq!(escape_literal("\\'"), "\\\\\\'");
    }

    #[test]
    fn test_query_with_quote_in_title() {
        let q = folder_title_query("Joe's reports");
        assert!(q.starts_with("title = 'Joe\\'s reports' and"));
    }
}
