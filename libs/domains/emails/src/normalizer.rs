use crate::models::{DispatchOutcome, DispatchResult, QUEUED_MESSAGE, SENT_MESSAGE};
use chrono::{DateTime, Utc};

/// Builds the client reply for `outcome`, stamped with the current time.
pub fn normalize(outcome: &DispatchOutcome) -> DispatchResult {
    normalize_at(outcome, Utc::now())
}

/// Like [`normalize`] with an explicit completion time.
pub fn normalize_at(outcome: &DispatchOutcome, completed_at: DateTime<Utc>) -> DispatchResult {
    let message = if outcome.is_sent() {
        SENT_MESSAGE
    } else {
        QUEUED_MESSAGE
    };

    DispatchResult {
        timestamp: completed_at.timestamp_millis(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_sent_outcome() {
        let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let result = normalize_at(&DispatchOutcome::Sent { provider: "sendgrid" }, at);

        assert_eq!(result.timestamp, 1_700_000_000_123);
        assert_eq!(result.message, "Your email has been sent");
    }

    #[test]
    fn test_every_other_outcome_is_queued() {
        let outcomes = [
            DispatchOutcome::Rejected {
                provider: "mailgun",
                status: 400,
            },
            DispatchOutcome::SendFailed {
                provider: "sendgrid",
                reason: "connection reset".to_string(),
            },
            DispatchOutcome::Unreachable,
        ];

        for outcome in &outcomes {
            assert_eq!(
                normalize(outcome).message,
                "Your email has been added to the queue"
            );
        }
    }

    #[test]
    fn test_timestamp_is_current_epoch_millis() {
        let before = Utc::now().timestamp_millis();
        let result = normalize(&DispatchOutcome::Unreachable);
        let after = Utc::now().timestamp_millis();

        assert!(result.timestamp >= before && result.timestamp <= after);
    }
}
