//! @ai:module:intent Split a directive group into its tag, argument tokens and description
//! @ai:module:layer application
//! @ai:module:public_api split_field, Field
//! @ai:module:depends_on scanner, warning
//! @ai:module:stateless true

use crate::scanner::DirectiveGroup;
use crate::warning::Warning;
use regex::Regex;
use std::sync::LazyLock;

// `:<tokens>: <rest>`; a backslash-escaped colon does not close the token run.
static RE_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^:(?P<field>(?:\\.|[^:\\])*):(?P<body>.*)$").expect("Invalid regex")
});

/// @ai:intent One split directive: `:tag args...: description`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub tag: String,
    pub args: Vec<String>,
    pub description: String,
}

/// @ai:intent Split a directive group into a field
/// @ai:pre group.line is trimmed and starts with ':'
/// @ai:post on failure, the returned warning names the literal directive line
/// @ai:effects pure
pub fn split_field(group: &DirectiveGroup) -> Result<Field, Warning> {
    let captures = RE_FIELD
        .captures(&group.line)
        .ok_or_else(|| Warning::MissingPair(group.line.clone()))?;

    let mut tokens = captures["field"].split_whitespace().map(str::to_string);
    let tag = tokens
        .next()
        .ok_or_else(|| Warning::MissingPair(group.line.clone()))?;
    let args: Vec<String> = tokens.collect();

    let mut description = captures["body"].trim().to_string();
    if !group.continuation.is_empty() {
        if !description.is_empty() {
            description.push(' ');
        }
        description.push_str(&group.continuation);
    }

    Ok(Field {
        tag,
        args,
        description,
    })
}
