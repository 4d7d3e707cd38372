#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Logging emitted by repository operations

mod common;

use champ_core::logging_facility::test_capture::init_test_capture;
use champ_core::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_ERR_CODE, FIELD_ROWS_AFFECTED,
    FIELD_TRANSACTION_NUMBER,
};
use champ_store::TransactionRepository;
use common::{record, setup_repo, UnreachableProvider};
use tracing::Level;

#[test]
fn test_update_emits_start_and_end_with_rows_affected() {
    let capture = init_test_capture();
    let repo = setup_repo();
    let _ = repo.insert_transaction(&record(1, "T-LOG-1", "C-1"));

    let _ = repo.update_transaction_status("T-LOG-1", "PAID");

    let events: Vec<_> = capture
        .events_for("update_transaction_status")
        .into_iter()
        .filter(|e| e.field(FIELD_TRANSACTION_NUMBER) == Some("T-LOG-1"))
        .collect();
    let start = events
        .iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_START))
        .count();
    let end = events
        .iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END))
        .expect("end event");

    assert_eq!(start, 1);
    assert_eq!(end.field(FIELD_ROWS_AFFECTED), Some("1"));
    assert_eq!(
        end.component.as_deref(),
        Some("champ_store::repo::transaction_repo")
    );
}

#[test]
fn test_multiple_rows_update_is_logged_as_error() {
    let capture = init_test_capture();
    let repo = setup_repo();
    let _ = repo.insert_transaction(&record(1, "T-LOG-DUP", "C-1"));
    let _ = repo.insert_transaction(&record(2, "T-LOG-DUP", "C-1"));

    let _ = repo.update_transaction_status("T-LOG-DUP", "PAID");

    let errors: Vec<_> = capture
        .events()
        .into_iter()
        .filter(|e| {
            e.level == Level::ERROR && e.field(FIELD_TRANSACTION_NUMBER) == Some("T-LOG-DUP")
        })
        .collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field(FIELD_ROWS_AFFECTED), Some("2"));

    // The statement itself succeeded, so the operation still ends normally.
    let end = capture
        .events_for("update_transaction_status")
        .into_iter()
        .find(|e| {
            e.event.as_deref() == Some(EVENT_END)
                && e.field(FIELD_TRANSACTION_NUMBER) == Some("T-LOG-DUP")
        })
        .expect("end event");
    assert_eq!(end.field(FIELD_ROWS_AFFECTED), Some("2"));
}

#[test]
fn test_swallowed_write_failure_is_logged_as_error() {
    let capture = init_test_capture();
    let repo = TransactionRepository::new(UnreachableProvider);

    let _ = repo.insert_transaction(&record(1, "T-LOG-FAIL", "C-1"));

    let error = capture
        .events_for("insert_transaction")
        .into_iter()
        .find(|e| {
            e.event.as_deref() == Some(EVENT_END_ERROR)
                && e.field(FIELD_TRANSACTION_NUMBER) == Some("T-LOG-FAIL")
        })
        .expect("end_error event");

    assert_eq!(error.level, Level::ERROR);
    assert_eq!(
        error.field(FIELD_ERR_CODE),
        Some("ERR_CONNECTION_UNAVAILABLE")
    );
}

#[test]
fn test_read_failure_is_logged_as_data_access() {
    let capture = init_test_capture();
    let repo = TransactionRepository::new(UnreachableProvider);

    assert!(repo.find_by_user_id().is_err());

    let error = capture
        .find_event("find_by_user_id", EVENT_END_ERROR)
        .expect("end_error event");
    assert_eq!(error.field(FIELD_ERR_CODE), Some("ERR_DATA_ACCESS"));
}

#[test]
fn test_read_end_event_reports_row_count() {
    let capture = init_test_capture();
    let repo = setup_repo();
    let _ = repo.insert_transaction(&record(1, "T-LOG-READ-1", "C-LOG-READ"));
    let _ = repo.insert_transaction(&record(2, "T-LOG-READ-2", "C-LOG-READ"));

    let found = repo.find_by_user_number("U-LOG-READ-NOBODY").unwrap();
    assert!(found.is_empty());
    let all = repo.find_all().unwrap();

    // Other tests in this binary log find_all too; match on this repo's count.
    assert!(capture
        .events_for("find_all")
        .iter()
        .any(|e| e.event.as_deref() == Some(EVENT_END)
            && e.row_count() == Some(all.len())
            && e.duration_ms().is_some()));
    assert!(capture
        .events_for("find_by_user_number")
        .iter()
        .any(|e| e.event.as_deref() == Some(EVENT_END) && e.row_count() == Some(0)));
}
