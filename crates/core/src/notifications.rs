//! User-facing notifications (toasts)
//!
//! Services report outcomes through the [`Notifier`] port; the front end
//! decides how to show them. Titles and descriptions are either literal text
//! or message keys resolved by the presentation layer.

use std::fmt;

use baitulmal_domain::BaitulMalError;

/// Visual weight of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// A transient notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: Option<String>,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    /// Success toast from a `(title, description)` pair
    pub fn success((title, description): (&str, &str)) -> Self {
        Self {
            title: Some(title.to_string()),
            description: description.to_string(),
            variant: ToastVariant::Default,
        }
    }

    /// Destructive toast from a `(title, description)` pair
    pub fn failure((title, description): (&str, &str)) -> Self {
        Self {
            title: Some(title.to_string()),
            description: description.to_string(),
            variant: ToastVariant::Destructive,
        }
    }

    /// Untitled destructive toast carrying the backend message or the
    /// generic fallback
    pub fn from_error(err: &BaitulMalError) -> Self {
        Self { title: None, description: err.user_message(), variant: ToastVariant::Destructive }
    }

    pub const fn is_destructive(&self) -> bool {
        matches!(self.variant, ToastVariant::Destructive)
    }
}

impl fmt::Display for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.title {
            Some(title) => write!(f, "{title}: {}", self.description),
            None => f.write_str(&self.description),
        }
    }
}

/// Sink for toasts raised by services
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

#[cfg(test)]
mod tests {
    use baitulmal_domain::constants::message_keys;
    use baitulmal_domain::{ApiErrorResponse, ApiFailure};

    use super::*;

    #[test]
    fn from_error_uses_backend_message() {
        let err = BaitulMalError::Api(ApiFailure::from_response(
            409,
            Some(ApiErrorResponse {
                message: Some("Sector already exists".into()),
                ..ApiErrorResponse::default()
            }),
        ));
        let toast = Toast::from_error(&err);
        assert!(toast.is_destructive());
        assert!(toast.title.is_none());
        assert_eq!(toast.description, "Sector already exists");
    }

    #[test]
    fn from_error_falls_back_to_generic_text() {
        let toast = Toast::from_error(&BaitulMalError::Network("timed out".into()));
        assert_eq!(toast.description, "An unknown error occurred");
    }

    #[test]
    fn success_toast_displays_title_and_description() {
        let toast = Toast::success(message_keys::TRANSACTION_CREATED_SUCCESS);
        assert!(!toast.is_destructive());
        assert_eq!(
            toast.to_string(),
            "Transaction created successfully: Transaction has been created successfully"
        );
    }
}
