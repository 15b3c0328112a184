//! The submit-then-verify workflow: create the order, then poll its status
//! until the backend settles on a terminal state. Runs inside a spawned task;
//! the event loop hears about progress and completion through a channel.

use tokio::sync::mpsc::UnboundedSender;
use uuid::Uuid;

use crate::api::ApiClient;
use crate::models::{OrderRequest, ProcessingStatus};

/// What the waiting popup is currently showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Sending,
    Verifying,
}

/// Messages from the submission task to the event loop.
#[derive(Clone, Debug)]
pub enum SubmissionEvent {
    Phase(SubmitPhase),
    Done(SubmissionOutcome),
}

/// Final result of one submission, however far it got. `status` is `None`
/// when the flow failed before reaching a terminal backend status.
#[derive(Clone, Debug)]
pub struct SubmissionOutcome {
    pub order_id: Option<Uuid>,
    pub status: Option<ProcessingStatus>,
    pub message: String,
}

impl SubmissionOutcome {
    /// Only a terminal ACCEPTED counts as success; REJECTED/ERROR and every
    /// client-side failure surface as an error toast.
    pub fn is_success(&self) -> bool {
        self.status == Some(ProcessingStatus::Accepted)
    }
}

/// Drive order creation and status verification in sequence, reporting the
/// phase switch over `events` once the order id is known.
pub async fn run_submission(
    api: &ApiClient,
    order: OrderRequest,
    events: &UnboundedSender<SubmissionEvent>,
) -> SubmissionOutcome {
    let created = match api.create_order(&order).await {
        Ok(created) => created,
        Err(err) => {
            log::error!("order creation failed: {err:?}");
            return SubmissionOutcome {
                order_id: None,
                status: None,
                message: err.to_string(),
            };
        }
    };

    log::info!("order {} created, verifying status", created.id);
    let _ = events.send(SubmissionEvent::Phase(SubmitPhase::Verifying));

    match api.poll_status(created.id).await {
        Ok(status) => {
            log::info!(
                "order {} settled on {}: {}",
                created.id,
                status.status,
                status.detail
            );
            SubmissionOutcome {
                order_id: Some(created.id),
                status: Some(status.status),
                message: status.detail,
            }
        }
        Err(err) => {
            log::error!("status verification for order {} failed: {err:?}", created.id);
            SubmissionOutcome {
                order_id: Some(created.id),
                status: None,
                message: err.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_accepted_is_a_success() {
        let outcome = SubmissionOutcome {
            order_id: None,
            status: Some(ProcessingStatus::Accepted),
            message: "Order has been accepted and queued".to_string(),
        };
        assert!(outcome.is_success());

        for status in [
            Some(ProcessingStatus::Rejected),
            Some(ProcessingStatus::Error),
            Some(ProcessingStatus::Processing),
            None,
        ] {
            let outcome = SubmissionOutcome {
                order_id: None,
                status,
                message: String::new(),
            };
            assert!(!outcome.is_success());
        }
    }
}
