use pretty_assertions::assert_eq;
use scraper_core::{parse_macro, script_lines};

#[test]
fn parses_name_and_quoted_params() {
    let parsed = parse_macro("CLICK_ELEMENT(selector='button.submit', type='css')").unwrap();
    assert_eq!(parsed.name, "CLICK_ELEMENT");
    assert_eq!(parsed.params.get("selector").unwrap(), "button.submit");
    assert_eq!(parsed.params.get("type").unwrap(), "css");
}

#[test]
fn command_name_is_uppercased() {
    let parsed = parse_macro("click_element(selector='#go')").unwrap();
    assert_eq!(parsed.name, "CLICK_ELEMENT");
}

#[test]
fn empty_argument_list_yields_empty_params() {
    let parsed = parse_macro("WAIT()").unwrap();
    assert_eq!(parsed.name, "WAIT");
    assert!(parsed.params.is_empty());
}

#[test]
fn double_quotes_are_stripped_too() {
    let parsed = parse_macro(r#"EXTRACT_TEXT(selector="h1")"#).unwrap();
    assert_eq!(parsed.params.get("selector").unwrap(), "h1");
}

#[test]
fn unquoted_values_run_to_the_next_comma() {
    let parsed = parse_macro("SCROLL_PAGE(direction=down, pixels=500)").unwrap();
    assert_eq!(parsed.params.get("direction").unwrap(), "down");
    assert_eq!(parsed.params.get("pixels").unwrap(), "500");
}

#[test]
fn quoted_values_may_contain_commas_and_spaces() {
    let parsed = parse_macro("CLICK_ELEMENT(selector='div > a, span.item')").unwrap();
    assert_eq!(parsed.params.get("selector").unwrap(), "div > a, span.item");
}

#[test]
fn duplicate_keys_keep_the_last_value() {
    let parsed = parse_macro("WAIT(seconds=1, seconds=3)").unwrap();
    assert_eq!(parsed.params.get("seconds").unwrap(), "3");
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let parsed = parse_macro("   WAIT(seconds=2)   ").unwrap();
    assert_eq!(parsed.name, "WAIT");
    assert_eq!(parsed.params.get("seconds").unwrap(), "2");
}

#[test]
fn trailing_text_after_the_call_is_ignored() {
    // The argument span ends at the first closing paren.
    let parsed = parse_macro("WAIT(seconds=2) # pause before the click").unwrap();
    assert_eq!(parsed.name, "WAIT");
    assert_eq!(parsed.params.get("seconds").unwrap(), "2");
}

#[test]
fn non_call_lines_do_not_parse() {
    assert!(parse_macro("NOT_A_MACRO").is_none());
    assert!(parse_macro("").is_none());
    assert!(parse_macro("just some prose").is_none());
    assert!(parse_macro("(selector='#go')").is_none());
}

#[test]
fn unknown_command_names_still_parse() {
    // The parser does not validate names; the dispatcher rejects them.
    let parsed = parse_macro("FROBNICATE(x=1)").unwrap();
    assert_eq!(parsed.name, "FROBNICATE");
    assert_eq!(parsed.params.get("x").unwrap(), "1");
}

#[test]
fn malformed_fragments_are_skipped_silently() {
    let parsed = parse_macro("WAIT(bogus, seconds=4)").unwrap();
    assert!(!parsed.params.contains_key("bogus"));
    assert_eq!(parsed.params.get("seconds").unwrap(), "4");
}

#[test]
fn parsing_is_idempotent() {
    let line = "EXTRACT_TEXT(selector='h1.title', type='css')";
    assert_eq!(parse_macro(line), parse_macro(line));
}

#[test]
fn script_lines_drop_blanks_and_comments() {
    let text = "\n# setup\nCLICK_ELEMENT(selector='#go')\n\n// capture\n  SAVE_HTML()  \n";
    let lines = script_lines(text);
    assert_eq!(lines, vec!["CLICK_ELEMENT(selector='#go')", "SAVE_HTML()"]);
}

#[test]
fn script_lines_preserve_source_order() {
    let text = "WAIT(seconds=1)\nWAIT(seconds=2)\nWAIT(seconds=3)";
    let lines = script_lines(text);
    assert_eq!(
        lines,
        vec!["WAIT(seconds=1)", "WAIT(seconds=2)", "WAIT(seconds=3)"]
    );
}

#[test]
fn empty_script_has_no_lines() {
    assert!(script_lines("").is_empty());
    assert!(script_lines("\n  \n# only comments\n").is_empty());
}
