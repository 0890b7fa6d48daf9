/// Executable lines of a macro script: trimmed, with blank lines and
/// comment lines (`#` or `//` prefix) removed. Source order is preserved.
pub fn script_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !line.starts_with('#') && !line.starts_with("//"))
        .collect()
}
