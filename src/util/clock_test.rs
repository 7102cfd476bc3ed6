use super::*;

#[test]
fn now_secs_is_past_2020() {
    // 2020-01-01T00:00:00Z.
    assert!(now_secs() > 1_577_836_800);
}

#[test]
fn now_secs_is_monotonic_enough() {
    let first = now_secs();
    let second = now_secs();
    assert!(second >= first);
}
