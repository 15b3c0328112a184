use std::fmt::{self, Display};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of `POST /api/orders/`. Fields are already trimmed and validated.
#[derive(Clone, Debug, Serialize)]
pub struct OrderRequest {
    pub user_name: String,
    pub phone_number: String,
}

/// Response of `POST /api/orders/`: the server-assigned order id.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct OrderCreated {
    pub id: Uuid,
}

/// Response of `GET /api/orders/{id}/status`. `detail` is shown to the user
/// verbatim.
#[derive(Clone, Debug, Deserialize)]
pub struct OrderStatus {
    pub status: ProcessingStatus,
    pub detail: String,
}

/// Backend processing state of a submitted order.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProcessingStatus {
    Processing,
    Accepted,
    Rejected,
    Error,
}

impl ProcessingStatus {
    /// Terminal statuses end the polling loop.
    pub fn is_terminal(self) -> bool {
        !matches!(self, ProcessingStatus::Processing)
    }
}

impl Display for ProcessingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ProcessingStatus::Processing => "PROCESSING",
                ProcessingStatus::Accepted => "ACCEPTED",
                ProcessingStatus::Rejected => "REJECTED",
                ProcessingStatus::Error => "ERROR",
            }
        )
    }
}

/// A completed submission, kept in memory for the History tab.
/// Nothing is persisted between sessions.
#[derive(Clone, Debug)]
pub struct OrderRecord {
    pub submitted_at: DateTime<Local>,
    pub user_name: String,
    pub phone_number: String,
    pub order_id: Option<Uuid>,
    pub status: Option<ProcessingStatus>,
    pub message: String,
}

impl OrderRecord {
    /// Short status cell for the history table: the backend status when the
    /// order got that far, "FAILED" otherwise.
    pub fn status_label(&self) -> String {
        match self.status {
            Some(status) => status.to_string(),
            None => "FAILED".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn processing_status_wire_names() {
        let status: ProcessingStatus = serde_json::from_str("\"ACCEPTED\"").unwrap();
        assert_eq!(status, ProcessingStatus::Accepted);
        let status: ProcessingStatus = serde_json::from_str("\"PROCESSING\"").unwrap();
        assert_eq!(status, ProcessingStatus::Processing);
        assert!(serde_json::from_str::<ProcessingStatus>("\"accepted\"").is_err());
    }

    #[test]
    fn only_processing_is_non_terminal() {
        assert!(!ProcessingStatus::Processing.is_terminal());
        assert!(ProcessingStatus::Accepted.is_terminal());
        assert!(ProcessingStatus::Rejected.is_terminal());
        assert!(ProcessingStatus::Error.is_terminal());
    }
}
