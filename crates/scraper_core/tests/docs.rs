use pretty_assertions::assert_eq;
use scraper_core::{macro_documentation, parse_macro, Command};

#[test]
fn documentation_covers_exactly_the_command_table() {
    let docs = macro_documentation();
    let keys: Vec<&str> = docs.keys().copied().collect();
    assert_eq!(
        keys,
        vec![
            "CLICK_ELEMENT",
            "EXTRACT_TEXT",
            "SAVE_HTML",
            "SCROLL_PAGE",
            "WAIT"
        ]
    );
    for key in keys {
        assert!(Command::from_name(key).is_some());
    }
}

#[test]
fn every_example_parses_into_its_own_command() {
    for (name, doc) in macro_documentation() {
        let parsed = parse_macro(doc.example)
            .unwrap_or_else(|| panic!("example for {name} did not parse: {}", doc.example));
        assert_eq!(parsed.name, name);
    }
}

#[test]
fn entries_carry_complete_help_text() {
    for (name, doc) in macro_documentation() {
        assert!(!doc.description.is_empty(), "{name} missing description");
        assert!(doc.syntax.starts_with(name), "{name} syntax mismatch");
        assert!(!doc.example.is_empty(), "{name} missing example");
    }
}

#[test]
fn documentation_serializes_for_the_dashboard() {
    let json = serde_json::to_value(macro_documentation()).unwrap();
    let wait = &json["WAIT"];
    assert_eq!(wait["syntax"], "WAIT(seconds=2)");
    assert_eq!(wait["parameters"][0]["name"], "seconds");
}
