//! Status messages for operations that produce no record to show.

use std::fmt;

/// Outcome line for deletions and other fire-and-forget operations.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// A successful outcome.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    /// A failed outcome, rendered with an `Error:` prefix.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }

    /// Status for a record deletion attempt.
    pub fn deleted(id: u64, removed: bool) -> Self {
        if removed {
            Self::success(format!("Deleted record {id}"))
        } else {
            Self::failure(format!("Record {id} not found"))
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.success { "Success:" } else { "Error:" };
        writeln!(f, "{prefix} {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deleted_status() {
        assert_eq!(
            OperationStatus::deleted(4, true).to_string(),
            "Success: Deleted record 4\n"
        );
        assert_eq!(
            OperationStatus::deleted(4, false).to_string(),
            "Error: Record 4 not found\n"
        );
    }
}
