//! @ai:module:intent Define the parsed docstring sections and their elements
//! @ai:module:layer domain
//! @ai:module:public_api Section, SectionKind, DocParameter, DocAttribute, DocReturn, DocRaise
//! @ai:module:stateless true

use crate::signature::ParameterKind;
use serde::{Deserialize, Serialize};

/// @ai:intent Categorizes sections in their fixed output order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Text,
    Parameters,
    Attributes,
    Returns,
    Raises,
}

/// @ai:intent One typed, ordered group of parsed documentation content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Section {
    Text(String),
    Parameters(Vec<DocParameter>),
    Attributes(Vec<DocAttribute>),
    Returns(DocReturn),
    Raises(Vec<DocRaise>),
}

/// @ai:intent A documented parameter, possibly enriched from the signature
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DocParameter {
    pub name: String,
    pub annotation: Option<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature_kind: Option<ParameterKind>,
}

/// @ai:intent A documented attribute of a class or module
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DocAttribute {
    pub name: String,
    pub annotation: Option<String>,
    pub description: String,
}

/// @ai:intent The single documented return value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DocReturn {
    pub annotation: Option<String>,
    pub description: String,
}

/// @ai:intent A documented raised exception; the annotation is the exception type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DocRaise {
    pub annotation: String,
    pub description: String,
}

impl Section {
    /// @ai:intent Get the kind of this section
    /// @ai:effects pure
    pub fn kind(&self) -> SectionKind {
        match self {
            Section::Text(_) => SectionKind::Text,
            Section::Parameters(_) => SectionKind::Parameters,
            Section::Attributes(_) => SectionKind::Attributes,
            Section::Returns(_) => SectionKind::Returns,
            Section::Raises(_) => SectionKind::Raises,
        }
    }
}

impl DocParameter {
    /// @ai:intent Create a parameter with just a name and description
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }
}

impl DocAttribute {
    /// @ai:intent Create an attribute with just a name and description
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotation: None,
            description: description.into(),
        }
    }

    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }
}

impl DocRaise {
    pub fn new(exception: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            annotation: exception.into(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_serializes_with_kind_tag() {
        let section = Section::Raises(vec![DocRaise::new("ValueError", "bad input")]);
        let json = serde_json::to_value(&section).unwrap();

        assert_eq!(json["kind"], "raises");
        assert_eq!(json["value"][0]["annotation"], "ValueError");
    }

    #[test]
    fn test_section_kind_order() {
        assert!(SectionKind::Text < SectionKind::Parameters);
        assert!(SectionKind::Parameters < SectionKind::Attributes);
        assert!(SectionKind::Attributes < SectionKind::Returns);
        assert!(SectionKind::Returns < SectionKind::Raises);
    }

    #[test]
    fn test_parameter_skips_missing_signature_data() {
        let json = serde_json::to_value(DocParameter::new("foo", "text")).unwrap();

        assert!(json.get("default_value").is_none());
        assert!(json.get("signature_kind").is_none());
        assert!(json["annotation"].is_null());
    }
}
