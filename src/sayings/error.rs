use thiserror::Error;

/// Every failure the interpreter can produce.
///
/// The `Display` output of each variant is the exact diagnostic line shown on
/// the console, so callers print errors with `{}` and nothing else.
#[derive(Error, Debug)]
pub enum SayingsError {
    #[error("Unknown type: {0}")]
    UnknownRecordType(String),

    #[error("Error: missing required parameter '{field}' for type {record_type}")]
    MissingField { field: String, record_type: String },

    #[error("Error in ADD command: missing semicolon in '{0}'")]
    MalformedAdd(String),

    #[error("Error in REM command: missing '~' character in '{0}'")]
    InvalidCondition(String),

    #[error("Invalid command in file: {0}")]
    UnrecognizedCommand(String),

    #[error("File {0} not found")]
    SourceNotFound(String),

    #[error("File {name} could not be read: {source}")]
    SourceUnreadable {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SayingsError {
    /// Fatal errors abort the whole run; everything else is handled at the
    /// line boundary and processing continues with the next line.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            SayingsError::UnknownRecordType(_)
                | SayingsError::MissingField { .. }
                | SayingsError::MalformedAdd(_)
                | SayingsError::InvalidCondition(_)
                | SayingsError::UnrecognizedCommand(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SayingsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostics_match_console_templates() {
        let cases = [
            (
                SayingsError::UnknownRecordType("UNKNOWN".into()),
                "Unknown type: UNKNOWN",
            ),
            (
                SayingsError::MissingField {
                    field: "author".into(),
                    record_type: "APHORISM".into(),
                },
                "Error: missing required parameter 'author' for type APHORISM",
            ),
            (
                SayingsError::MalformedAdd("APHORISM".into()),
                "Error in ADD command: missing semicolon in 'APHORISM'",
            ),
            (
                SayingsError::InvalidCondition("content=\"x\"".into()),
                "Error in REM command: missing '~' character in 'content=\"x\"'",
            ),
            (
                SayingsError::UnrecognizedCommand("LIST".into()),
                "Invalid command in file: LIST",
            ),
            (
                SayingsError::SourceNotFound("artifact.txt".into()),
                "File artifact.txt not found",
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn only_source_errors_are_fatal() {
        assert!(!SayingsError::MalformedAdd(String::new()).is_fatal());
        assert!(!SayingsError::UnrecognizedCommand(String::new()).is_fatal());
        assert!(SayingsError::SourceNotFound("x".into()).is_fatal());
        assert!(SayingsError::SourceUnreadable {
            name: "x".into(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, "bad utf-8"),
        }
        .is_fatal());
    }
}
