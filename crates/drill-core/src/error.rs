use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the drill crates.
#[derive(Error, Debug)]
pub enum DrillError {
    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON document could not be parsed.
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A token in a whitespace-separated number list is not an integer.
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),

    /// The operation needs more values than were supplied.
    #[error("Need at least {needed} values, got {got}")]
    TooFewValues { needed: usize, got: usize },

    /// The same (machine, process, activity type) row appears more than once.
    #[error("Duplicate {kind} activity for machine {machine_id}, process {process_id}")]
    DuplicateActivity {
        machine_id: i64,
        process_id: i64,
        kind: String,
    },

    /// Every value above the seed shares a digit with it.
    #[error("No value shares no digit with seed {0}")]
    NoDisjointValue(u64),

    /// The digit search ran past `u64::MAX`.
    #[error("Digit search overflowed starting from seed {0}")]
    SearchOverflow(u64),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the drill crates.
pub type Result<T> = std::result::Result<T, DrillError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_file_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = DrillError::FileRead {
            path: PathBuf::from("/some/activity.jsonl"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read file"));
        assert!(msg.contains("/some/activity.jsonl"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_error_display_invalid_number() {
        let err = DrillError::InvalidNumber("4x".to_string());
        assert_eq!(err.to_string(), "Invalid number: \"4x\"");
    }

    #[test]
    fn test_error_display_too_few_values() {
        let err = DrillError::TooFewValues { needed: 2, got: 1 };
        assert_eq!(err.to_string(), "Need at least 2 values, got 1");
    }

    #[test]
    fn test_error_display_duplicate_activity() {
        let err = DrillError::DuplicateActivity {
            machine_id: 1,
            process_id: 0,
            kind: "start".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Duplicate start activity for machine 1, process 0"
        );
    }

    #[test]
    fn test_error_display_no_disjoint_value() {
        let err = DrillError::NoDisjointValue(123_456_789);
        assert_eq!(err.to_string(), "No value shares no digit with seed 123456789");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: DrillError = io_err.into();
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid}").unwrap_err();
        let err: DrillError = json_err.into();
        assert!(err.to_string().contains("Failed to parse JSON"));
    }
}
