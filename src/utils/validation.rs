use std::path::Path;

/// File extensions the upload form accepts.
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx"];

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub code: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Strip any path components and reserved characters from a filename.
pub fn sanitize_filename(filename: &str) -> Result<String, ValidationError> {
    let name = Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("");

    if name.is_empty() {
        return Err(ValidationError {
            code: "INVALID_FILENAME",
            message: "Filename cannot be empty".to_string(),
        });
    }

    if filename.contains("..") {
        tracing::warn!("Path traversal attempt detected: {}", filename);
    }

    let sanitized: String = name
        .chars()
        .map(|c| {
            if c.is_control()
                || c == '/'
                || c == '\\'
                || c == ':'
                || c == '*'
                || c == '?'
                || c == '"'
                || c == '<'
                || c == '>'
                || c == '|'
                || c == ';'
            {
                '_'
            } else {
                c
            }
        })
        .collect();

    Ok(sanitized)
}

fn validate_extension(filename: &str) -> Result<(), ValidationError> {
    let extension = filename.rsplit('.').next().unwrap_or("").to_lowercase();

    if !filename.contains('.') || !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(ValidationError {
            code: "UNSUPPORTED_TYPE",
            message: format!(
                "File type '.{}' is not accepted (allowed: {})",
                extension,
                ALLOWED_EXTENSIONS.join(", ")
            ),
        });
    }

    Ok(())
}

/// Validate an upload request before any state changes or external calls.
/// Returns the sanitized filename.
pub fn validate_upload(filename: &str, subject: &str) -> Result<String, ValidationError> {
    if filename.trim().is_empty() {
        return Err(ValidationError {
            code: "MISSING_FILE",
            message: "A file is required".to_string(),
        });
    }

    if subject.trim().is_empty() {
        return Err(ValidationError {
            code: "MISSING_SUBJECT",
            message: "A subject is required".to_string(),
        });
    }

    let sanitized = sanitize_filename(filename)?;
    validate_extension(&sanitized)?;

    Ok(sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_upload_requires_file_and_subject() {
        assert!(validate_upload("", "Physics").is_err());
        assert!(validate_upload("Midterm.pdf", "  ").is_err());
        assert!(validate_upload("Midterm.pdf", "Physics").is_ok());
    }

    #[test]
    fn test_validate_extension_allow_list() {
        assert!(validate_upload("notes.pdf", "Maths").is_ok());
        assert!(validate_upload("essay.docx", "History").is_ok());
        assert!(validate_upload("script.sh", "Maths").is_err());
        assert!(validate_upload("noextension", "Maths").is_err());
    }

    #[test]
    fn test_sanitize_strips_path_components() {
        assert_eq!(
            sanitize_filename("/tmp/uploads/Report.pdf").unwrap(),
            "Report.pdf"
        );
        assert_eq!(sanitize_filename("bad:name?.pdf").unwrap(), "bad_name_.pdf");
        assert!(sanitize_filename("").is_err());
    }

    #[test]
    fn test_upload_validation_sanitizes() {
        let name = validate_upload("../../etc/cron.docx", "Systems").unwrap();
        assert_eq!(name, "cron.docx");
    }
}
