//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use chrono::{TimeZone, Utc};
use repulink::core::models::{Interaction, InteractionStatus, UserPublic, UsersPublic};
use repulink::core::services::InteractionView;
use repulink::output::{
    EndorsementList, EndorsementSide, InteractionDetail, InteractionRow, OperationResult, OutputMode,
    SearchResult,
};
use serde_json::json;

fn interaction() -> Interaction {
    Interaction {
        id: "i1".to_string(),
        initiator_id: "u2".to_string(),
        target_id: "u1".to_string(),
        message: Some("hello".to_string()),
        status: InteractionStatus::Pending,
        created_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
    }
}

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// Serialization Tests
// =============================================================================

#[test]
fn search_result_serialization() {
    let page = UsersPublic {
        data: vec![UserPublic {
            id: "u1".to_string(),
            email: "ali@example.com".to_string(),
            full_name: None,
            is_active: true,
            is_superuser: false,
        }],
        count: 1,
    };
    let value = serde_json::to_value(SearchResult::new("ali", page)).unwrap();

    assert_eq!(value["query"], "ali");
    assert_eq!(value["count"], 1);
    assert_eq!(value["data"][0]["email"], "ali@example.com");
}

#[test]
fn interaction_row_from_view() {
    let i = interaction();
    let row = InteractionRow::from(&InteractionView::new(&i, "u1", &[]));

    assert_eq!(row.direction, "Received");
    assert_eq!(row.counterpart_id, "u2");
    assert!(row.can_respond);
    assert!(!row.can_rate);
    assert_eq!(row.created_at, "2025-06-01T12:00:00+00:00");
}

#[test]
fn interaction_detail_flattens_row() {
    let i = interaction();
    let detail = InteractionDetail {
        row: InteractionRow::from(&InteractionView::new(&i, "u2", &[])),
        message: i.message.clone(),
        ratings: vec![],
    };
    let value = serde_json::to_value(&detail).unwrap();

    assert_eq!(value["id"], "i1");
    assert_eq!(value["direction"], "Sent");
    assert_eq!(value["status"], "pending");
    assert_eq!(value["message"], "hello");
    assert_eq!(value["can_respond"], false);
    assert_eq!(value["ratings"], json!([]));
}

#[test]
fn endorsement_side_is_lowercase() {
    let list = EndorsementList {
        side: EndorsementSide::Received,
        endorsements: vec![],
    };
    assert_eq!(serde_json::to_value(&list).unwrap(), json!({"side": "received", "endorsements": []}));
}

#[test]
fn operation_result_omits_missing_data() {
    let result = OperationResult::ok("Saved", None);
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({"success": true, "message": "Saved"})
    );
}
