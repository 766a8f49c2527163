/*
[INPUT]:  validator::ValidationErrors collected over a request
[OUTPUT]: One deterministic multi-line report, shared rule functions
[POS]:    Validation layer - aggregation of structural rule violations
[UPDATE]: When adding shared rules or changing report format
*/

use std::borrow::Cow;
use std::net::IpAddr;

use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

pub(crate) const BLANK: &str = "cannot be blank";

/// Render every violation as `path: message`, one per line, sorted by path.
///
/// Struct-level (cross-field) violations are reported under their parent path.
/// List indices compare numerically, so `groups[2]` comes before `groups[10]`.
pub fn render_errors(errors: &ValidationErrors) -> String {
    let mut lines = Vec::new();
    collect(errors, "", &mut lines);
    lines.sort_by(|a, b| natural_key(a).cmp(&natural_key(b)).then_with(|| a.cmp(b)));
    lines.join("\n")
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Chunk<'a> {
    // digit count first, then the digits, so values never overflow
    Number(usize, &'a str),
    Text(&'a str),
}

fn natural_key(line: &str) -> Vec<Chunk<'_>> {
    let mut chunks = Vec::new();
    let mut rest = line;
    while let Some(first) = rest.chars().next() {
        let digits = first.is_ascii_digit();
        let end = rest
            .find(|c: char| c.is_ascii_digit() != digits)
            .unwrap_or(rest.len());
        let (chunk, tail) = rest.split_at(end);
        chunks.push(if digits {
            let trimmed = chunk.trim_start_matches('0');
            Chunk::Number(trimmed.len(), trimmed)
        } else {
            Chunk::Text(chunk)
        });
        rest = tail;
    }
    chunks
}

fn collect(errors: &ValidationErrors, prefix: &str, lines: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if field == "__all__" {
            prefix.to_string()
        } else if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(items) => {
                for item in items {
                    lines.push(render_line(&path, item));
                }
            }
            ValidationErrorsKind::Struct(nested) => collect(nested, &path, lines),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect(nested, &format!("{path}[{index}]"), lines);
                }
            }
        }
    }
}

fn render_line(path: &str, error: &ValidationError) -> String {
    let message = error
        .message
        .as_deref()
        .map(str::to_string)
        .unwrap_or_else(|| error.code.to_string());
    if path.is_empty() {
        message
    } else {
        format!("{path}: {message}")
    }
}

/// Build an error carrying a message
pub(crate) fn violation(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

/// CIDR notation: an IPv4/IPv6 address, `/`, and an in-range prefix length
pub(crate) fn validate_cidr(value: &str) -> Result<(), ValidationError> {
    let invalid = || violation("cidr", format!("invalid CIDR address: {value}"));

    let (address, prefix) = value.split_once('/').ok_or_else(invalid)?;
    let address: IpAddr = address.parse().map_err(|_| invalid())?;
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let prefix: u8 = prefix.parse().map_err(|_| invalid())?;
    let max = if address.is_ipv4() { 32 } else { 128 };
    if prefix > max {
        return Err(invalid());
    }
    Ok(())
}

pub(crate) fn validate_cidr_list(values: &[String]) -> Result<(), ValidationError> {
    values.iter().try_for_each(|value| validate_cidr(value))
}

/// Require a value to be one of the allowed set
pub(crate) fn one_of<T: PartialEq + std::fmt::Display>(
    value: &T,
    allowed: &[T],
) -> Result<(), ValidationError> {
    if allowed.contains(value) {
        return Ok(());
    }
    let allowed: Vec<String> = allowed.iter().map(|v| format!("'{v}'")).collect();
    Err(violation(
        "one_of",
        format!("value '{value}' is invalid. Must be one of: {}", allowed.join(", ")),
    ))
}
