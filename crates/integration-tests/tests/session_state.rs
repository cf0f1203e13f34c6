//! Persisted session documents and their degradation contract.

use fresh_bowl_core::SessionRecord;
use fresh_bowl_storefront::StateStore;

use fresh_bowl_integration_tests::{offline_file_state, offline_state};

#[test]
fn seeded_session_is_visible_through_the_client() {
    let state = offline_state();
    let record = SessionRecord {
        user_id: "u-01".into(),
        name: "Ana".to_owned(),
        email: "ana@example.com".to_owned(),
        phone: None,
        token: Some("tok-123".to_owned()),
    };
    state.store().save_session(&record).expect("save");

    assert!(state.api().is_logged_in());
    let current = state.api().current_user().expect("session");
    assert_eq!(current.user_id.as_str(), "u-01");
    assert_eq!(current.token.as_deref(), Some("tok-123"));
}

#[test]
fn logout_drops_the_persisted_session() {
    let state = offline_state();
    let record = SessionRecord {
        user_id: "u-01".into(),
        name: "Ana".to_owned(),
        email: "ana@example.com".to_owned(),
        phone: None,
        token: None,
    };
    state.store().save_session(&record).expect("save");

    state.api().logout().expect("logout");

    assert!(!state.api().is_logged_in());
    assert!(state.store().get_raw("fb_session").expect("raw").is_none());

    // Logging out again stays a no-op.
    state.api().logout().expect("idempotent logout");
}

#[test]
fn malformed_session_document_reads_as_logged_out() {
    let state = offline_state();
    state
        .store()
        .put_raw("fb_session", "{not json")
        .expect("put");

    assert!(!state.api().is_logged_in());
    assert!(state.api().current_user().is_none());
}

#[test]
fn session_survives_process_restart_on_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    {
        let state = offline_file_state(dir.path());
        let record = SessionRecord {
            user_id: "u-02".into(),
            name: "Benito".to_owned(),
            email: "benito@example.com".to_owned(),
            phone: Some("+56 9 1234 5678".to_owned()),
            token: Some("tok-456".to_owned()),
        };
        state.store().save_session(&record).expect("save");
    }

    let state = offline_file_state(dir.path());
    let current = state.api().current_user().expect("session");
    assert_eq!(current.name, "Benito");
    assert_eq!(current.phone.as_deref(), Some("+56 9 1234 5678"));
}
