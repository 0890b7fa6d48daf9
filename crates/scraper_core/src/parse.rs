use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// One parsed macro line: uppercased command name plus keyword parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub params: HashMap<String, String>,
}

// Non-greedy: the argument span ends at the first `)`, trailing text on
// the line is ignored.
static MACRO_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)\((.*?)\)").expect("macro shape regex"));

/// Parses one instruction line into a command call.
///
/// Recognizes the shape `NAME(key=value, key='quoted value', ...)` and
/// returns `None` for anything else. The command name is uppercased; the
/// dispatcher decides whether it is known. Argument scanning is
/// deliberately best-effort: malformed fragments are skipped, a duplicate
/// key keeps its last value, and an unquoted value runs verbatim to the
/// next comma or the end of the argument span.
pub fn parse_macro(line: &str) -> Option<ParsedCommand> {
    let line = line.trim();
    let caps = MACRO_SHAPE.captures(line)?;
    let name = caps[1].to_uppercase();
    let params = parse_params(caps.get(2).map_or("", |m| m.as_str()));
    Some(ParsedCommand { name, params })
}

fn parse_params(raw: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    let mut rest = raw;
    loop {
        rest = rest.trim_start_matches(|c: char| c.is_whitespace() || c == ',');
        if rest.is_empty() {
            break;
        }

        let key_len = rest
            .find(|c: char| !(c.is_alphanumeric() || c == '_'))
            .unwrap_or(rest.len());
        if key_len == 0 || !rest[key_len..].starts_with('=') {
            // Not a key=value fragment; skip ahead to the next comma.
            match rest.find(',') {
                Some(idx) => {
                    rest = &rest[idx + 1..];
                    continue;
                }
                None => break,
            }
        }
        let key = &rest[..key_len];
        rest = &rest[key_len + 1..];

        let value: &str;
        match rest.chars().next() {
            Some(quote @ ('\'' | '"')) => {
                let body = &rest[quote.len_utf8()..];
                match body.find(quote) {
                    Some(end) => {
                        value = &body[..end];
                        // Anything between the closing quote and the next
                        // comma is discarded.
                        rest = match body[end + quote.len_utf8()..].find(',') {
                            Some(idx) => &body[end + quote.len_utf8() + idx + 1..],
                            None => "",
                        };
                    }
                    None => {
                        // Unterminated quote: the remainder is the value.
                        value = body;
                        rest = "";
                    }
                }
            }
            _ => match rest.find(',') {
                Some(idx) => {
                    value = &rest[..idx];
                    rest = &rest[idx + 1..];
                }
                None => {
                    value = rest;
                    rest = "";
                }
            },
        }
        params.insert(key.to_string(), value.to_string());
    }
    params
}
