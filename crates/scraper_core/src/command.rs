use std::fmt;

/// The fixed macro vocabulary.
///
/// Adding a command means adding a variant here, one dispatch arm and one
/// handler in the engine, and one documentation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    ClickElement,
    ScrollPage,
    SaveHtml,
    Wait,
    ExtractText,
}

impl Command {
    pub const ALL: [Command; 5] = [
        Command::ClickElement,
        Command::ScrollPage,
        Command::SaveHtml,
        Command::Wait,
        Command::ExtractText,
    ];

    /// Exact lookup against the uppercased name produced by the parser.
    /// Unknown names are reported by the dispatcher, not here.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "CLICK_ELEMENT" => Some(Command::ClickElement),
            "SCROLL_PAGE" => Some(Command::ScrollPage),
            "SAVE_HTML" => Some(Command::SaveHtml),
            "WAIT" => Some(Command::Wait),
            "EXTRACT_TEXT" => Some(Command::ExtractText),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::ClickElement => "CLICK_ELEMENT",
            Command::ScrollPage => "SCROLL_PAGE",
            Command::SaveHtml => "SAVE_HTML",
            Command::Wait => "WAIT",
            Command::ExtractText => "EXTRACT_TEXT",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Addressing scheme for locating a page element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectorType {
    #[default]
    Css,
    Xpath,
    Id,
    Class,
}

impl SelectorType {
    /// Case-insensitive; anything unrecognized falls back to CSS.
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "xpath" => SelectorType::Xpath,
            "id" => SelectorType::Id,
            "class" => SelectorType::Class,
            _ => SelectorType::Css,
        }
    }
}

/// Direction for `SCROLL_PAGE`.
///
/// `parse` returns `None` for unrecognized directions; the handler treats
/// that as "scroll nowhere" rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Down,
    Up,
    Top,
    Bottom,
}

impl ScrollDirection {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "down" => Some(ScrollDirection::Down),
            "up" => Some(ScrollDirection::Up),
            "top" => Some(ScrollDirection::Top),
            "bottom" => Some(ScrollDirection::Bottom),
            _ => None,
        }
    }
}
