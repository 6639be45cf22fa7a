use easter_eggs::events::{parse_key, Key};

#[test]
fn parse_named_keys() {
    assert_eq!(parse_key("Up"), Some(Key::ArrowUp));
    assert_eq!(parse_key("down"), Some(Key::ArrowDown));
    assert_eq!(parse_key("LEFT"), Some(Key::ArrowLeft));
    assert_eq!(parse_key("Right"), Some(Key::ArrowRight));
    assert_eq!(parse_key("Shift"), Some(Key::Shift));
    assert_eq!(parse_key("Space"), Some(Key::Space));
    assert_eq!(parse_key("Escape"), Some(Key::Escape));
}

#[test]
fn parse_single_characters_lowercased() {
    assert_eq!(parse_key("B"), Some(Key::Char('b')));
    assert_eq!(parse_key("a"), Some(Key::Char('a')));
    assert_eq!(parse_key("7"), Some(Key::Char('7')));
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    assert_eq!(parse_key("  Up  "), Some(Key::ArrowUp));
    assert_eq!(parse_key(" b "), Some(Key::Char('b')));
}

#[test]
fn parse_invalid_names() {
    assert_eq!(parse_key(""), None);
    assert_eq!(parse_key("   "), None);
    assert_eq!(parse_key("NotAKey"), None);
}
