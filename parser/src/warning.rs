//! @ai:module:intent Define parse diagnostics and the append-only collector threaded through a parse
//! @ai:module:layer domain
//! @ai:module:public_api Warning, WarningCategory, ElementKind, Diagnostic, Warnings
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// @ai:intent Coarse category callers can match on instead of message text
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WarningCategory {
    /// The directive group was dropped
    Malformed,
    /// The directive still contributed data under first-wins / inline-wins rules
    Conflict,
    /// A documented name has no counterpart in the signature
    Unmatched,
}

/// @ai:intent Named element buffers that share duplicate diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Parameter,
    Attribute,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Parameter => f.write_str("parameter"),
            ElementKind::Attribute => f.write_str("attribute"),
        }
    }
}

/// @ai:intent One anomaly found while parsing a docstring; Display is the stable message
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    #[error("Failed to get ':directive: value' pair from '{0}'")]
    MissingPair(String),

    #[error("Failed to parse field directive from '{0}'")]
    FieldDirective(String),

    #[error("Failed to get {kind} name from '{line}'")]
    MissingName { kind: ElementKind, line: String },

    #[error("Failed to parse exception directive from '{0}'")]
    ExceptionDirective(String),

    #[error("Duplicate {kind} entry for '{name}'")]
    DuplicateEntry { kind: ElementKind, name: String },

    #[error("Duplicate {kind} information for '{name}'")]
    DuplicateInformation { kind: ElementKind, name: String },

    #[error("No matching parameter for '{0}'")]
    NoMatchingParameter(String),
}

impl Warning {
    /// @ai:intent Classify the warning by severity family
    /// @ai:effects pure
    pub fn category(&self) -> WarningCategory {
        match self {
            Warning::MissingPair(_)
            | Warning::FieldDirective(_)
            | Warning::MissingName { .. }
            | Warning::ExceptionDirective(_) => WarningCategory::Malformed,
            Warning::DuplicateEntry { .. } | Warning::DuplicateInformation { .. } => {
                WarningCategory::Conflict
            }
            Warning::NoMatchingParameter(_) => WarningCategory::Unmatched,
        }
    }
}

/// @ai:intent A warning tied to the docstring line of the directive that caused it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line in the docstring
    pub line: usize,
    pub warning: Warning,
}

impl Diagnostic {
    pub fn category(&self) -> WarningCategory {
        self.warning.category()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.warning, f)
    }
}

impl Serialize for Diagnostic {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Diagnostic", 3)?;
        state.serialize_field("line", &self.line)?;
        state.serialize_field("category", &self.category())?;
        state.serialize_field("message", &self.warning.to_string())?;
        state.end()
    }
}

/// @ai:intent Append-only warning sequence, in discovery order
#[derive(Debug, Default)]
pub struct Warnings {
    line: usize,
    items: Vec<Diagnostic>,
}

impl Warnings {
    pub fn new() -> Self {
        Self::default()
    }

    /// @ai:intent Set the line that subsequent warnings are attributed to
    pub fn at_line(&mut self, line: usize) {
        self.line = line;
    }

    /// @ai:intent Record one anomaly
    pub fn push(&mut self, warning: Warning) {
        tracing::debug!(line = self.line, category = ?warning.category(), "{}", warning);
        self.items.push(Diagnostic {
            line: self.line,
            warning,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_stable() {
        let warning = Warning::DuplicateEntry {
            kind: ElementKind::Attribute,
            name: "foo".to_string(),
        };
        assert_eq!(warning.to_string(), "Duplicate attribute entry for 'foo'");

        let warning = Warning::MissingName {
            kind: ElementKind::Parameter,
            line: ":type: str".to_string(),
        };
        assert_eq!(
            warning.to_string(),
            "Failed to get parameter name from ':type: str'"
        );
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            Warning::MissingPair(":param foo".into()).category(),
            WarningCategory::Malformed
        );
        assert_eq!(
            Warning::DuplicateInformation {
                kind: ElementKind::Parameter,
                name: "foo".into()
            }
            .category(),
            WarningCategory::Conflict
        );
        assert_eq!(
            Warning::NoMatchingParameter("foo".into()).category(),
            WarningCategory::Unmatched
        );
    }

    #[test]
    fn test_collector_keeps_order_and_lines() {
        let mut warnings = Warnings::new();
        warnings.at_line(3);
        warnings.push(Warning::NoMatchingParameter("a".into()));
        warnings.at_line(5);
        warnings.push(Warning::MissingPair(":raise x".into()));

        let items = warnings.into_vec();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].warning, Warning::NoMatchingParameter("a".into()));
        assert_eq!(items[0].line, 3);
        assert_eq!(items[1].line, 5);
    }

    #[test]
    fn test_serialized_diagnostic() {
        let diagnostic = Diagnostic {
            line: 7,
            warning: Warning::NoMatchingParameter("x".into()),
        };
        let json = serde_json::to_value(&diagnostic).unwrap();

        assert_eq!(json["line"], 7);
        assert_eq!(json["category"], "unmatched");
        assert_eq!(json["message"], "No matching parameter for 'x'");
        assert_eq!(diagnostic.to_string(), "No matching parameter for 'x'");
    }
}
