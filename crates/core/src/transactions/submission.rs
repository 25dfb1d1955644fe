//! Placing a failed transaction submission on the right form field

use baitulmal_common::validation::FieldError;
use baitulmal_domain::BaitulMalError;

use super::draft::fields;

/// Where a routed message lands and what it says
#[derive(Debug, Clone, Copy)]
enum Wording {
    Fixed(&'static str),
    Backend,
}

/// One routing rule. The error code is matched first; the message fragment
/// is a fallback for backends that only send free text.
#[derive(Debug, Clone, Copy)]
struct Route {
    code: &'static str,
    fragment: &'static str,
    field: &'static str,
    wording: Wording,
}

// Order matters for fragments: "Promised Amount" also contains "Amount".
const ROUTES: &[Route] = &[
    Route {
        code: "INVALID_PROJECT_ID",
        fragment: "Project Id",
        field: fields::PROJECT_ID,
        wording: Wording::Fixed(
            "Invalid project selected. Please select a valid project or no project.",
        ),
    },
    Route {
        code: "INVALID_PROMISED_AMOUNT",
        fragment: "Promised Amount",
        field: fields::PROMISED_AMOUNT,
        wording: Wording::Backend,
    },
    Route {
        code: "INVALID_AMOUNT",
        fragment: "Amount",
        field: fields::AMOUNT,
        wording: Wording::Backend,
    },
];

const RETRY_MESSAGE: &str = "Error creating transaction. Please try again.";

/// Turn a create failure into one form error
///
/// Known problems go to their input; everything else becomes a form-level
/// (`root`) message. Only the backend's own message is shown or matched;
/// transport and decode failures get the generic retry text.
pub fn route_submission_error(err: &BaitulMalError) -> FieldError {
    let message = err.backend_message();
    let code = err.error_code();

    let by_code = code.and_then(|code| ROUTES.iter().find(|route| route.code == code));
    let by_text = || {
        message
            .and_then(|text| ROUTES.iter().find(|route| text.contains(route.fragment)))
    };

    match (by_code.or_else(by_text), message) {
        (Some(route), text) => {
            let wording = match route.wording {
                Wording::Fixed(fixed) => fixed.to_string(),
                Wording::Backend => text.unwrap_or(RETRY_MESSAGE).to_string(),
            };
            FieldError::new(route.field, wording)
        }
        (None, Some(text)) => {
            FieldError::new(fields::ROOT, format!("Error creating transaction: {text}"))
        }
        (None, None) => FieldError::new(fields::ROOT, RETRY_MESSAGE),
    }
}

#[cfg(test)]
mod tests {
    use baitulmal_domain::{ApiErrorResponse, ApiFailure};

    use super::*;

    fn api(message: Option<&str>, code: Option<&str>) -> BaitulMalError {
        BaitulMalError::Api(ApiFailure::from_response(
            400,
            Some(ApiErrorResponse {
                message: message.map(str::to_string),
                error_code: code.map(str::to_string),
                ..ApiErrorResponse::default()
            }),
        ))
    }

    #[test]
    fn project_errors_use_fixed_wording() {
        let routed = route_submission_error(&api(Some("Project Id does not exist"), None));
        assert_eq!(routed.field, fields::PROJECT_ID);
        assert!(routed.message.starts_with("Invalid project selected"));
    }

    #[test]
    fn promised_amount_is_not_mistaken_for_amount() {
        let routed = route_submission_error(&api(Some("Promised Amount is too large"), None));
        assert_eq!(routed.field, fields::PROMISED_AMOUNT);
        assert_eq!(routed.message, "Promised Amount is too large");

        let routed = route_submission_error(&api(Some("Amount exceeds limit"), None));
        assert_eq!(routed.field, fields::AMOUNT);
    }

    #[test]
    fn error_code_wins_over_text() {
        let routed =
            route_submission_error(&api(Some("Rejected"), Some("INVALID_PROMISED_AMOUNT")));
        assert_eq!(routed.field, fields::PROMISED_AMOUNT);
        assert_eq!(routed.message, "Rejected");
    }

    #[test]
    fn unknown_errors_land_on_root() {
        let routed = route_submission_error(&api(Some("Donor is blocked"), None));
        assert_eq!(routed.field, fields::ROOT);
        assert_eq!(routed.message, "Error creating transaction: Donor is blocked");

        let routed = route_submission_error(&api(None, None));
        assert_eq!(routed.message, RETRY_MESSAGE);
    }

    #[test]
    fn local_failures_ask_for_a_retry() {
        let decode = BaitulMalError::Internal("missing field `receivedAmount`".into());
        let routed = route_submission_error(&decode);
        assert_eq!(routed.field, fields::ROOT);
        assert_eq!(routed.message, RETRY_MESSAGE);

        let routed = route_submission_error(&BaitulMalError::Network("connection reset".into()));
        assert_eq!(routed.field, fields::ROOT);
        assert_eq!(routed.message, RETRY_MESSAGE);
    }
}
