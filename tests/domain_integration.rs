use notelist_core::domain::{Color, Note, PALETTE, pick_color, sort_notes};

#[test]
fn pick_color_is_deterministic_for_a_seed() {
    let first = pick_color(&PALETTE, 42);
    let second = pick_color(&PALETTE, 42);

    assert_eq!(first, second);
    assert!(PALETTE.contains(&first));
}

#[test]
fn pick_color_walks_the_whole_palette() {
    for (i, expected) in PALETTE.iter().enumerate() {
        assert_eq!(pick_color(&PALETTE, i as u64), *expected);
    }

    // Seeds wrap around the palette length.
    assert_eq!(pick_color(&PALETTE, PALETTE.len() as u64), PALETTE[0]);
}

#[test]
fn pick_color_on_empty_palette_falls_back_to_white() {
    assert_eq!(pick_color(&[], 7), Color::WHITE);
}

#[test]
fn new_note_is_unpinned_with_palette_color_and_unique_id() {
    let a = Note::new("A", "first");
    let b = Note::new("B", "second");

    assert!(!a.is_pinned);
    assert!(PALETTE.contains(&a.color));
    assert_ne!(a.id, b.id);
}

#[test]
fn empty_title_and_content_are_permitted() {
    let note = Note::new("", "");

    assert_eq!(note.title, "");
    assert_eq!(note.content, "");
}

#[test]
fn matches_is_case_insensitive_over_title_and_content() {
    let note = Note::new("Rust Tips", "Mind the borrow checker");

    assert!(note.matches("rust"));
    assert!(note.matches("CHECKER"));
    assert!(note.matches("oRr")); // "borrow"
    assert!(!note.matches("python"));
}

#[test]
fn empty_query_matches_everything() {
    let note = Note::new("", "");

    assert!(note.matches(""));
}

#[test]
fn sort_puts_pinned_first_then_newest() {
    let mut old_pinned = Note::new("old pinned", "");
    old_pinned.timestamp_ms = 100;
    old_pinned.is_pinned = true;

    let mut newest = Note::new("newest", "");
    newest.timestamp_ms = 300;

    let mut oldest = Note::new("oldest", "");
    oldest.timestamp_ms = 50;

    let mut notes = vec![oldest.clone(), newest.clone(), old_pinned.clone()];
    sort_notes(&mut notes);

    let titles: Vec<&str> = notes.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, ["old pinned", "newest", "oldest"]);
}

#[test]
fn sort_is_stable_for_equal_keys() {
    let mut a = Note::new("a", "");
    a.timestamp_ms = 200;
    let mut b = Note::new("b", "");
    b.timestamp_ms = 200;

    let mut notes = vec![a.clone(), b.clone()];
    sort_notes(&mut notes);

    assert_eq!(notes[0].id, a.id);
    assert_eq!(notes[1].id, b.id);
}
