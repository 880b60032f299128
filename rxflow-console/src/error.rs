use rxflow_core::CoreError;
use rxflow_order::OrderError;
use rxflow_store::ReportError;
use std::io;

/// Everything a menu action can fail with.
///
/// Input and lookup failures are recoverable: the console prints
/// [`AppError::user_message`] and returns to the menu. `Io` and `InputClosed`
/// end the session.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Input(#[from] CoreError),
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("input closed")]
    InputClosed,
}

impl AppError {
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AppError::Io(_) | AppError::InputClosed)
    }

    pub fn user_message(&self) -> String {
        match self {
            AppError::Input(CoreError::EmptyIdentifier) => "Order ID cannot be empty.".to_string(),
            AppError::Input(CoreError::InvalidPriority(_)) => {
                "Invalid priority. Must be STAT, URGENT, or ROUTINE.".to_string()
            }
            AppError::Order(OrderError::NotFound(_)) => "Order not found.".to_string(),
            AppError::Report(ReportError::WriteFailed { source, .. }) => {
                format!("Error saving report: {}", source)
            }
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            AppError::from(CoreError::EmptyIdentifier).user_message(),
            "Order ID cannot be empty."
        );
        assert_eq!(
            AppError::from(CoreError::InvalidPriority("Stst".into())).user_message(),
            "Invalid priority. Must be STAT, URGENT, or ROUTINE."
        );
        assert_eq!(
            AppError::from(OrderError::NotFound("X".into())).user_message(),
            "Order not found."
        );

        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let report = AppError::from(ReportError::WriteFailed {
            path: "r.txt".into(),
            source: io_err,
        });
        assert_eq!(report.user_message(), "Error saving report: denied");
        assert!(report.is_recoverable());
        assert!(!AppError::InputClosed.is_recoverable());
    }
}
