#![allow(clippy::unwrap_used, clippy::expect_used)]

use champ_core::errors::{ChampError, TxError, TxErrorKind};
use champ_core::logging_facility::test_capture::init_test_capture;
use champ_core::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_ERR_CODE, FIELD_ERR_KIND,
};
use champ_core::{log_op_end, log_op_error, log_op_start};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    capture.assert_event_exists(op_name, EVENT_START);
}

#[test]
fn test_log_op_end_records_duration_and_extra_fields() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42u64, row_count = 3usize);

    let end_events: Vec<_> = capture
        .events_for(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .collect();
    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].duration_ms(), Some(42));
    assert_eq!(end_events[0].row_count(), Some(3));
}

#[test]
fn test_log_op_error_includes_kind_and_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = ChampError::DataAccess {
        message: "no such table: transactions".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10u64);

    let error_event = capture
        .find_event(op_name, EVENT_END_ERROR)
        .expect("Should have error event");
    assert_eq!(error_event.err_code(), Some("ERR_DATA_ACCESS"));
    assert_eq!(error_event.field(FIELD_ERR_KIND), Some("DataAccess"));
    assert_eq!(error_event.err_kind(), Some("DataAccess"));
    assert_eq!(error_event.duration_ms(), Some(10));
    assert!(error_event
        .field("error")
        .unwrap()
        .contains("no such table"));
}

#[test]
fn test_log_op_error_accepts_structured_error() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_4";

    let err = TxError::new(TxErrorKind::ConnectionUnavailable).with_message("unable to open");
    log_op_error!(op_name, err, duration_ms = 1u64, transaction_number = "T-9");

    let error_event = capture
        .find_event(op_name, EVENT_END_ERROR)
        .expect("Should have error event");
    assert_eq!(
        error_event.field(FIELD_ERR_CODE),
        Some("ERR_CONNECTION_UNAVAILABLE")
    );
    assert_eq!(error_event.field("transaction_number"), Some("T-9"));
}

#[test]
fn test_boundary_ownership_single_start_end() {
    let capture = init_test_capture();
    let op_name = "test_boundary_ownership_unique_5";

    log_op_start!(op_name, transaction_number = "T-1");
    log_op_end!(op_name, duration_ms = 7u64);

    let starts = capture.count_events(|e| {
        e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_START)
    });
    let ends = capture.count_events(|e| {
        e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END)
    });

    assert_eq!(starts, 1, "Should have exactly one start event");
    assert_eq!(ends, 1, "Should have exactly one end event");
}

#[test]
fn test_component_is_module_path() {
    let capture = init_test_capture();
    let op_name = "test_component_unique_6";

    log_op_start!(op_name);

    let event = capture.find_event(op_name, EVENT_START).unwrap();
    assert_eq!(event.component.as_deref(), Some("logging_facility_tests"));
}
