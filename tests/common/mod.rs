#![allow(dead_code)]

pub const SAMPLE_UUID: &str = "550e8400-e29b-41d4-a716-446655440000";

/// Deterministic, distinct, well-formed rule UUID for index `n`.
pub fn rule_uuid(n: usize) -> String {
    format!("{:08x}-e29b-41d4-a716-{:012x}", n, n)
}

pub fn rule_uuids(count: usize) -> Vec<String> {
    (0..count).map(rule_uuid).collect()
}

pub fn stdin_text(uuids: &[String]) -> String {
    let mut s = uuids.join("\n");
    s.push('\n');
    s
}

/// Output lines that carry the query statement, in emission order.
pub fn query_lines(stdout: &str) -> Vec<&str> {
    stdout.lines().filter(|l| l.contains(" query ")).collect()
}
