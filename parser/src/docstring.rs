//! @ai:module:intent Parse one docstring into sections and warnings
//! @ai:module:layer application
//! @ai:module:public_api parse, Parsed, ParseOptions
//! @ai:module:depends_on scanner, field, dialect, accumulator, signature, warning
//! @ai:module:stateless true

use crate::accumulator::Accumulator;
use crate::dialect::Dialect;
use crate::field::split_field;
use crate::scanner::scan;
use crate::section::{DocAttribute, DocParameter, DocRaise, DocReturn, Section};
use crate::signature::{SignatureRef, SignatureView};
use crate::warning::{Diagnostic, Warnings};
use serde::{Deserialize, Serialize};

/// @ai:intent Caller-controlled parser switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Warn when a documented parameter is missing from the function signature
    pub warn_unknown_params: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            warn_unknown_params: true,
        }
    }
}

/// @ai:intent Ordered sections plus the warnings found on the way
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parsed {
    pub sections: Vec<Section>,
    pub warnings: Vec<Diagnostic>,
}

/// @ai:intent Parse a docstring, optionally cross-referencing the owner's signature
/// @ai:pre none; any text is accepted
/// @ai:post sections[0] is always a text section
/// @ai:post sections after it follow the order parameters, attributes, returns, raises
/// @ai:post malformed input only ever shows up in warnings
/// @ai:effects pure
/// @ai:example parse(":param foo: text", Dialect::Sphinx, None, &ParseOptions::default()) -> [Text(""), Parameters([foo])]
pub fn parse(
    text: &str,
    dialect: Dialect,
    signature: Option<&SignatureView>,
    options: &ParseOptions,
) -> Parsed {
    let scanned = scan(text);
    let mut warnings = Warnings::new();
    let mut accumulator = Accumulator::new(
        dialect.table(),
        SignatureRef::new(signature),
        options.warn_unknown_params,
    );

    for group in &scanned.groups {
        warnings.at_line(group.line_number);
        match split_field(group) {
            Ok(field) => accumulator.feed(&group.line, field, &mut warnings),
            Err(warning) => warnings.push(warning),
        }
    }

    Parsed {
        sections: accumulator.finish(scanned.free_text),
        warnings: warnings.into_vec(),
    }
}

impl Dialect {
    /// @ai:intent Parse a docstring in this dialect
    /// @ai:effects pure
    pub fn parse(
        self,
        text: &str,
        signature: Option<&SignatureView>,
        options: &ParseOptions,
    ) -> Parsed {
        parse(text, self, signature, options)
    }
}

impl Parsed {
    /// @ai:intent Get the free text of the docstring
    pub fn text(&self) -> &str {
        match self.sections.first() {
            Some(Section::Text(text)) => text.as_str(),
            _ => "",
        }
    }

    pub fn parameters(&self) -> &[DocParameter] {
        self.sections
            .iter()
            .find_map(|s| match s {
                Section::Parameters(items) => Some(items.as_slice()),
                _ => None,
            })
            .unwrap_or_default()
    }

    pub fn attributes(&self) -> &[DocAttribute] {
        self.sections
            .iter()
            .find_map(|s| match s {
                Section::Attributes(items) => Some(items.as_slice()),
                _ => None,
            })
            .unwrap_or_default()
    }

    pub fn returns(&self) -> Option<&DocReturn> {
        self.sections.iter().find_map(|s| match s {
            Section::Returns(ret) => Some(ret),
            _ => None,
        })
    }

    pub fn raises(&self) -> &[DocRaise] {
        self.sections
            .iter()
            .find_map(|s| match s {
                Section::Raises(items) => Some(items.as_slice()),
                _ => None,
            })
            .unwrap_or_default()
    }

    /// @ai:intent Get the warnings as display strings, in discovery order
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let parsed = parse(
            "Summary.\n\n:param a: x\n:var b: y\n:returns: z\n:raises E: w",
            Dialect::Sphinx,
            None,
            &ParseOptions::default(),
        );

        assert_eq!(parsed.text(), "Summary.");
        assert_eq!(parsed.parameters().len(), 1);
        assert_eq!(parsed.attributes()[0].name, "b");
        assert_eq!(parsed.returns().map(|r| r.description.as_str()), Some("z"));
        assert_eq!(parsed.raises()[0].annotation, "E");
        assert!(parsed.warning_messages().is_empty());
    }

    #[test]
    fn test_dialect_parse_forwards() {
        let options = ParseOptions::default();
        assert_eq!(
            Dialect::Rst.parse(":argument foo: bar", None, &options),
            parse(":argument foo: bar", Dialect::Rst, None, &options)
        );
    }

    #[test]
    fn test_parsed_serializes() {
        let parsed = parse(":raise: oops", Dialect::Sphinx, None, &ParseOptions::default());
        let json = serde_json::to_value(&parsed).unwrap();

        assert_eq!(json["sections"][0]["kind"], "text");
        assert_eq!(json["warnings"][0]["category"], "malformed");
    }
}
