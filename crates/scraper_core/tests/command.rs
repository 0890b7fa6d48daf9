use pretty_assertions::assert_eq;
use scraper_core::{Command, ScrollDirection, SelectorType};

#[test]
fn lookup_knows_exactly_the_five_commands() {
    assert_eq!(Command::from_name("CLICK_ELEMENT"), Some(Command::ClickElement));
    assert_eq!(Command::from_name("SCROLL_PAGE"), Some(Command::ScrollPage));
    assert_eq!(Command::from_name("SAVE_HTML"), Some(Command::SaveHtml));
    assert_eq!(Command::from_name("WAIT"), Some(Command::Wait));
    assert_eq!(Command::from_name("EXTRACT_TEXT"), Some(Command::ExtractText));
    assert_eq!(Command::from_name("NAVIGATE"), None);
    // Lookup is exact; lowercase names were already normalized away.
    assert_eq!(Command::from_name("wait"), None);
}

#[test]
fn command_names_round_trip() {
    for command in Command::ALL {
        assert_eq!(Command::from_name(command.name()), Some(command));
    }
}

#[test]
fn selector_type_parse_is_permissive() {
    assert_eq!(SelectorType::parse("css"), SelectorType::Css);
    assert_eq!(SelectorType::parse("XPath"), SelectorType::Xpath);
    assert_eq!(SelectorType::parse("ID"), SelectorType::Id);
    assert_eq!(SelectorType::parse("class"), SelectorType::Class);
    // Anything unrecognized falls back to CSS.
    assert_eq!(SelectorType::parse("query"), SelectorType::Css);
    assert_eq!(SelectorType::parse(""), SelectorType::Css);
}

#[test]
fn scroll_direction_parse_rejects_unknowns() {
    assert_eq!(ScrollDirection::parse("down"), Some(ScrollDirection::Down));
    assert_eq!(ScrollDirection::parse("UP"), Some(ScrollDirection::Up));
    assert_eq!(ScrollDirection::parse("Top"), Some(ScrollDirection::Top));
    assert_eq!(ScrollDirection::parse("bottom"), Some(ScrollDirection::Bottom));
    assert_eq!(ScrollDirection::parse("sideways"), None);
}
