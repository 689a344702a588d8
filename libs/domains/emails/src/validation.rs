//! One-pass validation of inbound send requests.

use crate::error::{EmailError, EmailResult};
use crate::models::{EmailMessage, SendEmailRequest};
use validator::{Validate, ValidationErrors};

/// Order in which violations are reported.
const FIELD_ORDER: [&str; 6] = ["from", "to", "cc", "bcc", "subject", "text"];

/// Fields holding a list of addresses. A bad entry is reported per field,
/// not per address.
const ADDRESS_LIST_FIELDS: [&str; 3] = ["to", "cc", "bcc"];

/// Checks every field of `request` and turns it into an [`EmailMessage`].
///
/// All violations are collected before returning, so the caller gets the
/// full list in one response. Keys outside the schema come last.
pub fn validate_request(request: SendEmailRequest) -> EmailResult<EmailMessage> {
    let mut messages = match request.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => collect_messages(&errors),
    };
    messages.extend(
        request
            .unknown
            .keys()
            .map(|key| format!("\"{}\" is not allowed", key)),
    );
    if !messages.is_empty() {
        return Err(EmailError::Validation(messages));
    }

    match request {
        SendEmailRequest {
            from: Some(from),
            to,
            cc,
            bcc,
            subject: Some(subject),
            text: Some(text),
            ..
        } => Ok(EmailMessage {
            from,
            to: to.unwrap_or_default(),
            cc: cc.unwrap_or_default(),
            bcc: bcc.unwrap_or_default(),
            subject,
            text,
        }),
        // `required` rules already rejected these
        _ => Err(EmailError::Validation(vec![
            "request is missing required fields".to_string(),
        ])),
    }
}

fn collect_messages(errors: &ValidationErrors) -> Vec<String> {
    let field_errors = errors.field_errors();
    let mut messages = Vec::new();

    for field in FIELD_ORDER {
        let Some(errors) = field_errors.get(field) else {
            continue;
        };

        if ADDRESS_LIST_FIELDS.contains(&field) {
            messages.push(format!("\"{}\" contains invalid email(s)", field));
            continue;
        }

        for error in errors.iter() {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("\"{}\" is invalid", field));
            messages.push(message);
        }
    }

    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_request() -> SendEmailRequest {
        SendEmailRequest {
            from: Some("sender@example.com".to_string()),
            to: Some(vec!["to@example.com".to_string()]),
            cc: None,
            bcc: None,
            subject: Some("Hello".to_string()),
            text: Some("Body".to_string()),
            ..Default::default()
        }
    }

    fn messages(result: EmailResult<EmailMessage>) -> Vec<String> {
        match result {
            Err(EmailError::Validation(messages)) => messages,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_request_becomes_message() {
        let message = validate_request(valid_request()).unwrap();

        assert_eq!(message.from, "sender@example.com");
        assert_eq!(message.to, vec!["to@example.com"]);
        assert!(message.cc.is_empty());
        assert!(message.bcc.is_empty());
        assert_eq!(message.subject, "Hello");
    }

    #[test]
    fn test_request_without_recipients_is_accepted() {
        let request = SendEmailRequest {
            to: None,
            ..valid_request()
        };

        let message = validate_request(request).unwrap();
        assert_eq!(message.recipient_count(), 0);
    }

    #[test]
    fn test_empty_request_reports_every_required_field() {
        let messages = messages(validate_request(SendEmailRequest::default()));

        assert_eq!(
            messages,
            vec![
                "\"from\" is required",
                "\"subject\" is required",
                "\"text\" is required",
            ]
        );
    }

    #[test]
    fn test_invalid_sender() {
        let request = SendEmailRequest {
            from: Some("nobody".to_string()),
            ..valid_request()
        };

        assert_eq!(
            messages(validate_request(request)),
            vec!["\"from\" must be a valid email"]
        );
    }

    #[test]
    fn test_address_lists_report_field_name() {
        let request = SendEmailRequest {
            to: Some(vec!["ok@example.com".to_string(), "bad".to_string()]),
            bcc: Some(vec!["also bad".to_string()]),
            ..valid_request()
        };

        assert_eq!(
            messages(validate_request(request)),
            vec![
                "\"to\" contains invalid email(s)",
                "\"bcc\" contains invalid email(s)",
            ]
        );
    }

    #[test]
    fn test_empty_subject_and_text() {
        let request = SendEmailRequest {
            subject: Some(String::new()),
            text: Some(String::new()),
            ..valid_request()
        };

        assert_eq!(
            messages(validate_request(request)),
            vec![
                "\"subject\" is not allowed to be empty",
                "\"text\" is not allowed to be empty",
            ]
        );
    }

    #[test]
    fn test_violations_follow_field_order() {
        let request = SendEmailRequest {
            from: None,
            cc: Some(vec!["x".to_string()]),
            text: None,
            ..valid_request()
        };

        assert_eq!(
            messages(validate_request(request)),
            vec![
                "\"from\" is required",
                "\"cc\" contains invalid email(s)",
                "\"text\" is required",
            ]
        );
    }

    #[test]
    fn test_unknown_keys_are_not_allowed() {
        let mut request = valid_request();
        request.unknown.insert("foo".to_string(), json!("bar"));

        assert_eq!(
            messages(validate_request(request)),
            vec!["\"foo\" is not allowed"]
        );
    }

    #[test]
    fn test_unknown_keys_follow_field_violations() {
        let request: SendEmailRequest = serde_json::from_value(json!({
            "to": ["b@example.com"],
            "subject": "Hello",
            "text": "Body",
            "priority": "high",
            "attachments": []
        }))
        .unwrap();

        assert_eq!(
            messages(validate_request(request)),
            vec![
                "\"from\" is required",
                "\"attachments\" is not allowed",
                "\"priority\" is not allowed",
            ]
        );
    }
}
