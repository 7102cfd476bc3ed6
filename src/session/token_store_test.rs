use super::*;

// Tests run on the native fallback slot; it is thread-local, so each test
// thread sees isolated storage.

// =============================================================
// save / read
// =============================================================

#[test]
fn read_is_absent_initially() {
    assert_eq!(read(), None);
}

#[test]
fn save_then_read_round_trips() {
    save("tok-1");
    assert_eq!(read(), Some("tok-1".to_owned()));
}

#[test]
fn save_overwrites_previous_value() {
    save("tok-old");
    save("tok-new");
    assert_eq!(read(), Some("tok-new".to_owned()));
}

// =============================================================
// clear
// =============================================================

#[test]
fn clear_removes_stored_token() {
    save("tok-2");
    clear();
    assert_eq!(read(), None);
}

#[test]
fn clear_is_idempotent_when_absent() {
    clear();
    clear();
    assert_eq!(read(), None);
}
