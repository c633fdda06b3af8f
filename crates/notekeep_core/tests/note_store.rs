use notekeep_core::{NoteColor, NoteDraft, NotePatch, NoteStore, DEFAULT_TITLE};
use std::collections::HashSet;

fn titled(title: &str) -> NoteDraft {
    NoteDraft::default().with_title(title)
}

/// Builds `[A, B, C, D]` in that order and returns the ids.
fn abcd(store: &mut NoteStore) -> Vec<String> {
    let mut ids: Vec<String> = ["D", "C", "B", "A"]
        .into_iter()
        .map(|title| store.create(titled(title)).unwrap())
        .collect();
    ids.reverse();
    ids
}

fn titles(store: &NoteStore) -> Vec<&str> {
    store.notes().iter().map(|note| note.title.as_str()).collect()
}

#[test]
fn created_ids_are_unique() {
    let mut store = NoteStore::new();
    for idx in 0..50 {
        store.create(titled(&format!("note {idx}"))).unwrap();
    }
    let ids: HashSet<&str> = store.notes().iter().map(|note| note.id.as_str()).collect();
    assert_eq!(ids.len(), 50);
}

#[test]
fn empty_draft_is_rejected() {
    let mut store = NoteStore::new();
    assert!(store.create(NoteDraft::default()).is_none());
    assert!(store
        .create(NoteDraft::from_text("   ", " \n\t\n"))
        .is_none());
    assert_eq!(store.len(), 0);
    assert_eq!(store.version(), 0);
}

#[test]
fn content_only_draft_gets_default_title_and_color() {
    let mut store = NoteStore::new();
    let id = store
        .create(NoteDraft::default().with_content(["x"]))
        .unwrap();
    let note = store.get(&id).unwrap();
    assert_eq!(note.title, DEFAULT_TITLE);
    assert_eq!(note.content, vec!["x".to_string()]);
    assert_eq!(note.color, NoteColor::White);
    assert!(note.created_at > 0);
}

#[test]
fn create_prepends_newest_first() {
    let mut store = NoteStore::new();
    store.create(titled("first")).unwrap();
    store.create(titled("second")).unwrap();
    assert_eq!(titles(&store), vec!["second", "first"]);
}

#[test]
fn notes_sharing_default_title_coexist() {
    let mut store = NoteStore::new();
    let first = store.create(NoteDraft::default().with_content(["a"])).unwrap();
    let second = store.create(NoteDraft::default().with_content(["b"])).unwrap();
    assert_ne!(first, second);
    assert_eq!(titles(&store), vec![DEFAULT_TITLE, DEFAULT_TITLE]);
}

#[test]
fn update_changes_only_patched_field() {
    let mut store = NoteStore::new();
    let ids = abcd(&mut store);
    let before = store.get(&ids[1]).unwrap().clone();
    let order_before: Vec<String> = store.notes().iter().map(|note| note.id.clone()).collect();

    assert!(store.update(&ids[1], NotePatch::title("T")));

    let after = store.get(&ids[1]).unwrap();
    assert_eq!(after.title, "T");
    assert_eq!(after.id, before.id);
    assert_eq!(after.created_at, before.created_at);
    assert_eq!(after.content, before.content);
    assert_eq!(after.color, before.color);
    assert_eq!(after.tags, before.tags);
    let order_after: Vec<String> = store.notes().iter().map(|note| note.id.clone()).collect();
    assert_eq!(order_after, order_before);
}

#[test]
fn update_normalizes_patch_fields() {
    let mut store = NoteStore::new();
    let id = store.create(titled("t")).unwrap();
    let patch = NotePatch::default()
        .with_content(["one", "", "  ", "two"])
        .with_color(NoteColor::Purple)
        .with_tags(["a", " a ", "b", ""]);
    assert!(store.update(&id, patch));

    let note = store.get(&id).unwrap();
    assert_eq!(note.content, vec!["one".to_string(), "two".to_string()]);
    assert_eq!(note.color, NoteColor::Purple);
    assert_eq!(note.tags, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn update_unknown_id_is_a_no_op() {
    let mut store = NoteStore::new();
    abcd(&mut store);
    let version = store.version();
    assert!(!store.update("missing", NotePatch::title("T")));
    assert_eq!(store.version(), version);
    assert_eq!(titles(&store), vec!["A", "B", "C", "D"]);
}

#[test]
fn delete_removes_exactly_one() {
    let mut store = NoteStore::new();
    let ids = abcd(&mut store);

    assert!(store.delete(&ids[2]));
    assert_eq!(store.len(), 3);
    assert_eq!(titles(&store), vec!["A", "B", "D"]);

    assert!(!store.delete(&ids[2]));
    assert!(!store.delete("missing"));
    assert_eq!(titles(&store), vec!["A", "B", "D"]);
}

#[test]
fn reorder_moves_source_to_destination_index() {
    let mut store = NoteStore::new();
    let ids = abcd(&mut store);

    assert!(store.reorder(&ids[1], &ids[3]));
    assert_eq!(titles(&store), vec!["A", "C", "D", "B"]);
}

#[test]
fn reorder_backwards_shifts_right() {
    let mut store = NoteStore::new();
    let ids = abcd(&mut store);

    assert!(store.reorder(&ids[3], &ids[0]));
    assert_eq!(titles(&store), vec!["D", "A", "B", "C"]);
}

#[test]
fn reorder_same_or_unknown_id_is_a_no_op() {
    let mut store = NoteStore::new();
    let ids = abcd(&mut store);
    let version = store.version();

    assert!(!store.reorder(&ids[0], &ids[0]));
    assert!(!store.reorder(&ids[0], "missing"));
    assert!(!store.reorder("missing", &ids[0]));
    assert_eq!(titles(&store), vec!["A", "B", "C", "D"]);
    assert_eq!(store.version(), version);
}
