/// Splits raw input into candidate rule UUIDs: one per non-blank line, trimmed, in order.
///
/// Both `\n` and `\r\n` line endings are accepted. Nothing is validated here.
pub fn parse_rule_uuids(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
