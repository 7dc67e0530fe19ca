use std::io;
use std::path::PathBuf;

use crate::constants::{EXIT_ACCESS_DENIED, EXIT_FAILURE};

/// Conditions that stop a collection run.
///
/// Anything local to a single file or folder is reported as an event instead
/// and never shows up here.
#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    #[error("Failed to create target directory {}: {source}", path.display())]
    TargetDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Permission denied: {}: {reason}", path.display())]
    AccessDenied { path: PathBuf, reason: String },

    #[error("None of the {0} root path(s) could be accessed")]
    NoAccessibleRoots(usize),
}

impl CollectError {
    /// Process exit status for this failure
    pub fn exit_code(&self) -> u8 {
        match self {
            CollectError::AccessDenied { .. } => EXIT_ACCESS_DENIED,
            _ => EXIT_FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let denied = CollectError::AccessDenied {
            path: PathBuf::from("/root/secret"),
            reason: "Permission denied (os error 13)".to_string(),
        };
        assert_eq!(denied.exit_code(), 1);

        let target = CollectError::TargetDir {
            path: PathBuf::from("/readonly/Findings"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert_eq!(target.exit_code(), 2);
        assert_eq!(CollectError::NoAccessibleRoots(2).exit_code(), 2);
    }

    #[test]
    fn test_messages_name_the_path() {
        let denied = CollectError::AccessDenied {
            path: PathBuf::from("/root/secret"),
            reason: "os error 13".to_string(),
        };
        assert_eq!(denied.to_string(), "Permission denied: /root/secret: os error 13");
        assert_eq!(
            CollectError::NoAccessibleRoots(3).to_string(),
            "None of the 3 root path(s) could be accessed"
        );
    }
}
