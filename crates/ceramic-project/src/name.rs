//! Project names and package identifiers

use regex::Regex;
use std::sync::OnceLock;

fn valid_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?:@[a-z\d\-*~][a-z\d\-*._~]*/)?[a-z\d\-~][a-z\d\-._~]*$")
            .expect("project name pattern is valid")
    })
}

/// Whether `name` is usable as a package name as typed.
pub fn is_valid_project_name(name: &str) -> bool {
    valid_name_pattern().is_match(name)
}

/// Directory name for a new project.
pub fn normalize_project_name(name: &str) -> String {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    static INVALID: OnceLock<Regex> = OnceLock::new();

    let whitespace = WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"));
    let invalid = INVALID.get_or_init(|| Regex::new(r"[^a-z\d\-~]+").expect("valid regex"));

    let lowered = name.trim().to_lowercase();
    let dashed = whitespace.replace_all(&lowered, "-");
    let stripped = dashed.strip_prefix(&['.', '_'][..]).unwrap_or(&dashed);

    invalid.replace_all(stripped, "-").into_owned()
}

/// Turn free text into a package identifier, keeping an `@scope/` prefix
/// when one is given.
pub fn to_valid_project_id(from: &str) -> String {
    let lowered = from.to_lowercase();
    let input = lowered.trim_matches('/');

    let (scope, name) = match input.split_once('/') {
        Some((scope, name)) if input.starts_with('@') => (scope, name),
        _ => ("", input),
    };

    let scope = sanitize(scope);
    let name = sanitize(name);

    if scope.is_empty() {
        name
    } else {
        format!("@{scope}/{name}")
    }
}

fn sanitize(part: &str) -> String {
    let is_id_char = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit() || "-._~".contains(c);
    let is_edge_char = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '~';

    let replaced: String = part
        .chars()
        .map(|c| if is_id_char(c) { c } else { '-' })
        .collect();

    replaced.trim_matches(|c: char| !is_edge_char(c)).to_string()
}
