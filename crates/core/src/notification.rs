//! Notification message rules.

use thiserror::Error;

/// Longest accepted notification message.
pub const MAX_MESSAGE_LEN: usize = 200;

/// Message used when a notification is created without one.
pub const DEFAULT_MESSAGE: &str = "System default";

/// Message stored when an expense update is blocked by the net-income guard.
pub const INSUFFICIENT_FUNDS_MESSAGE: &str = "Updated amount exceeded net income";

/// Error for an over-long notification message.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("message must be at most {MAX_MESSAGE_LEN} characters")]
pub struct MessageTooLong;

/// Resolves the message for a new notification, falling back to the system
/// default and enforcing the length bound.
///
/// # Errors
///
/// Returns `MessageTooLong` if a supplied message exceeds the bound.
pub fn resolve_message(message: Option<String>) -> Result<String, MessageTooLong> {
    let message = message.unwrap_or_else(|| DEFAULT_MESSAGE.to_string());
    if message.chars().count() > MAX_MESSAGE_LEN {
        return Err(MessageTooLong);
    }
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_message_when_absent() {
        assert_eq!(resolve_message(None).unwrap(), DEFAULT_MESSAGE);
    }

    #[test]
    fn test_supplied_message_kept() {
        assert_eq!(
            resolve_message(Some("budget warning".to_string())).unwrap(),
            "budget warning"
        );
    }

    #[test]
    fn test_overlong_message_rejected() {
        let long = "x".repeat(MAX_MESSAGE_LEN + 1);
        assert_eq!(resolve_message(Some(long)), Err(MessageTooLong));

        let exact = "x".repeat(MAX_MESSAGE_LEN);
        assert!(resolve_message(Some(exact)).is_ok());
    }
}
