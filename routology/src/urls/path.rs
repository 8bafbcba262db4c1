//! Pattern to Axum path translation.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::IntoRouterError;

/// Matches `<converter:name>` and `<name>` placeholders.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(?:(?P<converter>[A-Za-z_][A-Za-z0-9_]*):)?(?P<name>[A-Za-z_][A-Za-z0-9_]*)>")
        .expect("hardcoded regex is valid")
});

/// Matches `(?P<name>...)` and `(?<name>...)` groups without nested groups.
static NAMED_GROUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(\?P?<(?P<name>[A-Za-z_][A-Za-z0-9_]*)>[^()]*\)")
        .expect("hardcoded regex is valid")
});

/// Translate a path pattern into an Axum path.
///
/// `<int:pk>` becomes `{pk}` and `<path:rest>` becomes `{*rest}`.
pub(crate) fn from_path_pattern(pattern: &str) -> String {
    let path = PLACEHOLDER.replace_all(pattern, |caps: &Captures<'_>| {
        match caps.name("converter").map(|converter| converter.as_str()) {
            Some("path") => format!("{{*{}}}", &caps["name"]),
            _ => format!("{{{}}}", &caps["name"]),
        }
    });

    format!("/{}", path.trim_start_matches('/'))
}

/// Translate a regular expression pattern into an Axum path.
///
/// Only anchors, literal characters (escaped or not) and named groups are supported: Axum has no
/// regular expression routing.
pub(crate) fn from_regex_pattern(pattern: &str) -> Result<String, IntoRouterError> {
    Regex::new(pattern).map_err(|err| IntoRouterError::InvalidRegex {
        pattern: pattern.to_owned(),
        err,
    })?;

    let unsupported = || IntoRouterError::UnsupportedRegex {
        pattern: pattern.to_owned(),
    };

    let body = pattern.strip_prefix('^').unwrap_or(pattern);
    let body = body.strip_suffix('$').unwrap_or(body);

    let mut path = String::with_capacity(body.len() + 1);
    let mut last = 0;

    for caps in NAMED_GROUP.captures_iter(body) {
        let group = caps.get(0).expect("group 0 always matches");

        path.push_str(&unescape_literal(&body[last..group.start()]).ok_or_else(unsupported)?);
        path.push('{');
        path.push_str(&caps["name"]);
        path.push('}');

        last = group.end();
    }

    path.push_str(&unescape_literal(&body[last..]).ok_or_else(unsupported)?);

    Ok(format!("/{}", path.trim_start_matches('/')))
}

/// Reject the path segments that Axum refuses to route.
///
/// Axum panics on segments starting with `:` or `*`, the capture syntaxes of its previous
/// versions.
pub(crate) fn check_segments(path: &str) -> Result<(), &'static str> {
    for segment in path.split('/') {
        if segment.starts_with(':') {
            return Err("path segments must not start with `:`, use `{capture}` instead");
        }

        if segment.starts_with('*') {
            return Err("path segments must not start with `*`, use `{*wildcard}` instead");
        }
    }

    Ok(())
}

/// Unescape a literal regular expression fragment.
///
/// Returns `None` if the fragment contains anything but literal characters.
fn unescape_literal(fragment: &str) -> Option<String> {
    let mut literal = String::with_capacity(fragment.len());
    let mut chars = fragment.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(escaped) if escaped.is_ascii_punctuation() => literal.push(escaped),
                _ => return None,
            },
            '.' | '^' | '$' | '*' | '+' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '|' => {
                return None;
            }
            c => literal.push(c),
        }
    }

    Some(literal)
}
