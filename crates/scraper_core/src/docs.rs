use std::collections::BTreeMap;

use serde::Serialize;

use crate::Command;

/// One documented macro parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamDoc {
    pub name: &'static str,
    pub description: &'static str,
}

/// Help text for one macro command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MacroDoc {
    pub description: &'static str,
    pub syntax: &'static str,
    pub parameters: Vec<ParamDoc>,
    pub example: &'static str,
}

/// Help text for every supported macro, keyed by command name.
///
/// Pure and stateless, derived from the fixed command table; the
/// dashboard renders this as its instruction reference. Every `example`
/// string parses back into its own command.
pub fn macro_documentation() -> BTreeMap<&'static str, MacroDoc> {
    Command::ALL
        .into_iter()
        .map(|command| (command.name(), doc_for(command)))
        .collect()
}

fn doc_for(command: Command) -> MacroDoc {
    match command {
        Command::ClickElement => MacroDoc {
            description: "Clicks an element on the page",
            syntax: "CLICK_ELEMENT(selector='css_selector', type='css')",
            parameters: vec![
                ParamDoc {
                    name: "selector",
                    description: "CSS selector, XPath, ID, or class name",
                },
                ParamDoc {
                    name: "type",
                    description: "Selector type: 'css', 'xpath', 'id', 'class' (default: 'css')",
                },
            ],
            example: "CLICK_ELEMENT(selector='button.submit', type='css')",
        },
        Command::ScrollPage => MacroDoc {
            description: "Scrolls the page in the specified direction",
            syntax: "SCROLL_PAGE(direction='down', pixels=500)",
            parameters: vec![
                ParamDoc {
                    name: "direction",
                    description: "'down', 'up', 'top', 'bottom' (default: 'down')",
                },
                ParamDoc {
                    name: "pixels",
                    description: "Number of pixels to scroll (default: 500)",
                },
            ],
            example: "SCROLL_PAGE(direction='down', pixels=800)",
        },
        Command::SaveHtml => MacroDoc {
            description: "Saves the current page HTML to a file",
            syntax: "SAVE_HTML(filename='page.html')",
            parameters: vec![ParamDoc {
                name: "filename",
                description: "Output filename (optional, auto-generated if not provided)",
            }],
            example: "SAVE_HTML(filename='scraped_data.html')",
        },
        Command::Wait => MacroDoc {
            description: "Waits for the specified number of seconds",
            syntax: "WAIT(seconds=2)",
            parameters: vec![ParamDoc {
                name: "seconds",
                description: "Number of seconds to wait (default: 2)",
            }],
            example: "WAIT(seconds=5)",
        },
        Command::ExtractText => MacroDoc {
            description: "Extracts text from an element",
            syntax: "EXTRACT_TEXT(selector='css_selector', type='css')",
            parameters: vec![
                ParamDoc {
                    name: "selector",
                    description: "CSS selector, XPath, ID, or class name",
                },
                ParamDoc {
                    name: "type",
                    description: "Selector type: 'css', 'xpath', 'id', 'class' (default: 'css')",
                },
            ],
            example: "EXTRACT_TEXT(selector='h1.title', type='css')",
        },
    }
}
