use serde::{Deserialize, Serialize};

use crate::api::BatchId;

// =========================================================
// Approval types
// =========================================================

/// Outcome of promoting a draft batch to the active timetable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApprovalData {
    pub batch_id: BatchId,
    /// Draft rows promoted to approved.
    pub approved: usize,
    /// Previously approved rows for the same term moved to archived.
    pub archived: usize,
}

/// Outcome of rejecting a draft batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectionData {
    pub batch_id: BatchId,
    /// Draft rows deleted by the rejection.
    pub deleted: usize,
}

/// Route function name constant for batch approval
pub const APPROVE_SCHEDULE_BATCH: &str = "approve_schedule_batch";

/// Route function name constant for batch rejection
pub const REJECT_SCHEDULE_BATCH: &str = "reject_schedule_batch";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approval_data_serializes_counts() {
        let data = ApprovalData {
            batch_id: BatchId::generate(),
            approved: 10,
            archived: 8,
        };
        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["approved"], 10);
        assert_eq!(value["archived"], 8);
        assert!(value["batch_id"].is_string());
    }

    #[test]
    fn test_rejection_data_round_trip() {
        let data = RejectionData {
            batch_id: BatchId::generate(),
            deleted: 5,
        };
        let json = serde_json::to_string(&data).unwrap();
        let back: RejectionData = serde_json::from_str(&json).unwrap();
        assert_eq!(back.batch_id, data.batch_id);
        assert_eq!(back.deleted, 5);
    }

    #[test]
    fn test_const_values() {
        assert_eq!(APPROVE_SCHEDULE_BATCH, "approve_schedule_batch");
        assert_eq!(REJECT_SCHEDULE_BATCH, "reject_schedule_batch");
    }
}
