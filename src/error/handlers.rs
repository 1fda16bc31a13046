//! Error handlers
//!
//! Maps errors to log output and process exit codes.

use crate::error::types::ScaffoldError;
use log::error;

/// Exit code when every required path is present
pub const EXIT_OK: i32 = 0;
/// Exit code when at least one entry failed
pub const EXIT_CHECK_FAILED: i32 = 1;
/// Exit code when the run was aborted by configuration
pub const EXIT_CONFIG: i32 = 2;

/// One-line summary for a suite-level error
pub fn error_summary(err: &ScaffoldError) -> String {
    format!("Check run failed: {}", err)
}

/// Log a suite-level error
pub fn handle_error(err: &ScaffoldError) {
    error!("{}", error_summary(err));
}

/// Convert error to process exit code
pub fn error_to_exit_code(err: &ScaffoldError) -> i32 {
    match err {
        ScaffoldError::Config(_) => EXIT_CONFIG,
        ScaffoldError::ChecksFailed { .. } => EXIT_CHECK_FAILED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_exit_codes() {
        let config = ScaffoldError::Config(ConfigError::EmptyChecklist("structure".into()));
        assert_eq!(error_to_exit_code(&config), EXIT_CONFIG);

        let failed = ScaffoldError::ChecksFailed {
            failed: 1,
            total: 3,
        };
        assert_eq!(error_to_exit_code(&failed), EXIT_CHECK_FAILED);
    }

    #[test]
    fn test_messages_name_the_failure() {
        let err = ScaffoldError::ChecksFailed {
            failed: 2,
            total: 3,
        };
        assert_eq!(err.to_string(), "2 of 3 required paths failed");
    }

    #[test]
    fn test_summary_is_not_tied_to_one_check() {
        let failed = ScaffoldError::ChecksFailed {
            failed: 1,
            total: 4,
        };
        assert_eq!(
            error_summary(&failed),
            "Check run failed: 1 of 4 required paths failed"
        );

        let config = ScaffoldError::Config(ConfigError::EmptyChecklist("docs".into()));
        assert_eq!(
            error_summary(&config),
            "Check run failed: Configuration error: Checklist for 'docs' is empty"
        );
    }
}
