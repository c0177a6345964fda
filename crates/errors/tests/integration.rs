//! Integration tests for error types

#[cfg(test)]
mod tests {
    use std::path::Path;
    use zprune_errors::*;

    #[test]
    fn test_error_conversion() {
        let scan_err = ScanError::DirectoryNotFound {
            path: "Saves/World_player".into(),
        };
        let err: Error = scan_err.into();
        assert!(matches!(err, Error::Scan(_)));

        let config_err = ConfigError::Invalid {
            message: "no categories configured".into(),
        };
        let err: Error = config_err.into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::EmptyRange {
            region: "cell".into(),
            axis: "x".into(),
            start: 10,
            end: 10,
        };
        assert_eq!(err.to_string(), "empty x range in region cell: 10..10");
    }

    #[test]
    fn test_error_clone() {
        let err = ScanError::DirectoryUnreadable {
            path: "Saves/World".into(),
            message: "permission denied".into(),
        };
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }

    #[test]
    fn test_listing_errors_keep_the_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = ScanError::from_listing(&io_err, Path::new("Saves/World")).into();
        assert_eq!(err.user_code(), Some("scan.directory_unreadable"));
        assert!(err.user_message().contains("Saves/World"));
        assert!(err.user_hint().is_some());
    }
}
