use super::*;

#[test]
fn flash_state_default_is_empty() {
    assert!(FlashState::default().items.is_empty());
}

#[test]
fn add_assigns_increasing_ids() {
    let mut flashes = FlashState::default();
    let a = flashes.add(None, None, "a");
    let b = flashes.add(Some("k"), None, "b");
    assert!(b > a);
    assert_eq!(flashes.items.len(), 2);
}

#[test]
fn clear_only_touches_matching_key() {
    let mut flashes = FlashState::default();
    flashes.add(Some("server:startup:A"), None, "a failed");
    flashes.add(Some("server:startup:B"), None, "b failed");
    flashes.add(None, None, "global");

    flashes.clear("server:startup:A");

    assert!(flashes.by_key(Some("server:startup:A")).is_empty());
    assert_eq!(flashes.by_key(Some("server:startup:B")).len(), 1);
    assert_eq!(flashes.by_key(None).len(), 1);
}

#[test]
fn clear_and_add_error_leaves_single_error_for_key() {
    let mut flashes = FlashState::default();
    flashes.clear_and_add_error("k", "first");
    flashes.clear_and_add_error("k", "second");

    let scoped = flashes.by_key(Some("k"));
    assert_eq!(scoped.len(), 1);
    assert_eq!(scoped[0].message, "second");
    assert_eq!(scoped[0].kind);
    assert_eq!(scoped[0].title.as_deref(), Some("Error"));
}

#[test]
fn dismiss_removes_by_id() {
    let mut flashes = FlashState::default();
    let id = flashes.add(Some("k"), None, "w");
    flashes.add(Some("k"), None, "w2");
    flashes.dismiss(id);
    let scoped = flashes.by_key(Some("k"));
    assert_eq!(scoped.len(), 1);
    assert_eq!(scoped[0].message, "w2");
}

#[test]
fn clear_all_empties_everything() {
    let mut flashes = FlashState::default();
    flashes.add(Some("k"), None, "e");
    flashes.add(None, None, "i");
    flashes.clear_all();
    assert!(flashes.items.is_empty());
}
