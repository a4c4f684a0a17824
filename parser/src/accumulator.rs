//! @ai:module:intent Fold classified directives into section buffers and emit the ordered sections
//! @ai:module:layer application
//! @ai:module:public_api Accumulator
//! @ai:module:depends_on dialect, field, section, signature, warning
//! @ai:module:stateless false
//!
//! Type directives may arrive before or after the directive they describe, so explicit types
//! that have no element yet wait in a pending map keyed by name. Signature data is only
//! consulted at finalization, which keeps every explicit docstring type ahead of it.

use crate::dialect::{DirectiveRole, DirectiveTable};
use crate::field::Field;
use crate::section::{DocAttribute, DocParameter, DocRaise, DocReturn, Section};
use crate::signature::{ParameterKind, SignatureRef};
use crate::warning::{ElementKind, Warning, Warnings};

/// @ai:intent A named element under construction (parameter or attribute)
#[derive(Debug)]
struct NamedEntry {
    name: String,
    annotation: Option<String>,
    description: String,
    default_value: Option<String>,
    kind: Option<ParameterKind>,
}

/// @ai:intent Insertion-ordered entries plus types waiting for their entry
#[derive(Debug)]
struct NamedBuffer {
    kind: ElementKind,
    entries: Vec<NamedEntry>,
    pending_types: Vec<(String, String)>,
}

#[derive(Debug, Default)]
struct ReturnBuffer {
    seen: bool,
    description: String,
    annotation: Option<String>,
}

/// @ai:intent Per-parse state machine; one instance per docstring
#[derive(Debug)]
pub struct Accumulator<'a> {
    table: &'static DirectiveTable,
    signature: SignatureRef<'a>,
    warn_unknown_params: bool,
    parameters: NamedBuffer,
    attributes: NamedBuffer,
    returns: ReturnBuffer,
    raises: Vec<DocRaise>,
}

impl NamedBuffer {
    fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
            pending_types: Vec::new(),
        }
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut NamedEntry> {
        self.entries.iter_mut().find(|e| e.name == name)
    }

    fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    fn take_pending(&mut self, name: &str) -> Option<String> {
        let idx = self.pending_types.iter().position(|(n, _)| n == name)?;
        Some(self.pending_types.remove(idx).1)
    }

    /// @ai:intent Start a new entry unless the name is taken
    /// @ai:post first occurrence wins; an inline type beats a pending type directive
    /// @ai:effects pure
    fn insert(
        &mut self,
        name: String,
        inline_type: Option<String>,
        description: String,
        warnings: &mut Warnings,
    ) -> Option<&mut NamedEntry> {
        if self.contains(&name) {
            warnings.push(Warning::DuplicateEntry {
                kind: self.kind,
                name,
            });
            return None;
        }

        let pending = self.take_pending(&name);
        let annotation = match (inline_type, pending) {
            (Some(inline), Some(_)) => {
                warnings.push(Warning::DuplicateInformation {
                    kind: self.kind,
                    name: name.clone(),
                });
                Some(inline)
            }
            (inline, pending) => inline.or(pending),
        };

        self.entries.push(NamedEntry {
            name,
            annotation,
            description,
            default_value: None,
            kind: None,
        });
        self.entries.last_mut()
    }

    /// @ai:intent Attach a type directive to its entry, or park it until the entry shows up
    /// @ai:effects pure
    fn apply_type(&mut self, name: String, annotation: String, warnings: &mut Warnings) {
        let kind = self.kind;
        if let Some(entry) = self.find_mut(&name) {
            if entry.annotation.is_some() {
                warnings.push(Warning::DuplicateInformation { kind, name });
            } else {
                entry.annotation = Some(annotation);
            }
            return;
        }

        if self.pending_types.iter().any(|(n, _)| *n == name) {
            warnings.push(Warning::DuplicateInformation { kind, name });
        } else {
            self.pending_types.push((name, annotation));
        }
    }
}

impl<'a> Accumulator<'a> {
    pub fn new(
        table: &'static DirectiveTable,
        signature: SignatureRef<'a>,
        warn_unknown_params: bool,
    ) -> Self {
        Self {
            table,
            signature,
            warn_unknown_params,
            parameters: NamedBuffer::new(ElementKind::Parameter),
            attributes: NamedBuffer::new(ElementKind::Attribute),
            returns: ReturnBuffer::default(),
            raises: Vec::new(),
        }
    }

    /// @ai:intent Fold one split directive into the buffers
    /// @ai:pre directives are fed in the order they appear in the docstring
    /// @ai:post malformed directives contribute nothing and record one warning
    pub fn feed(&mut self, line: &str, field: Field, warnings: &mut Warnings) {
        let Some(role) = self.table.classify(&field.tag) else {
            tracing::trace!(tag = %field.tag, "ignoring unknown directive");
            return;
        };
        tracing::trace!(?role, tag = %field.tag, "directive");

        match role {
            DirectiveRole::Parameter => self.read_parameter(line, field, warnings),
            DirectiveRole::ParameterType => {
                self.read_type(ElementKind::Parameter, line, field, warnings)
            }
            DirectiveRole::Attribute => self.read_attribute(line, field, warnings),
            DirectiveRole::AttributeType => {
                self.read_type(ElementKind::Attribute, line, field, warnings)
            }
            DirectiveRole::Return => self.read_return(line, field, warnings),
            DirectiveRole::ReturnType => self.read_return_type(line, field, warnings),
            DirectiveRole::Raise => self.read_raise(line, field, warnings),
        }
    }

    fn read_parameter(&mut self, line: &str, field: Field, warnings: &mut Warnings) {
        let Some((name, inline_type)) = name_and_inline_type(field.args) else {
            warnings.push(Warning::FieldDirective(line.to_string()));
            return;
        };

        let signature = self.signature;
        let enrich_kind = self.table.enrich_parameter_kind;
        let warn_unknown = self.warn_unknown_params;
        let Some(entry) = self
            .parameters
            .insert(name, inline_type, field.description, warnings)
        else {
            return;
        };

        match signature.lookup_parameter(&entry.name) {
            Some(declared) => {
                entry.default_value = declared.default_value.clone();
                if enrich_kind {
                    entry.kind = declared.kind;
                }
            }
            None if warn_unknown && signature.has_parameters() => {
                warnings.push(Warning::NoMatchingParameter(entry.name.clone()));
            }
            None => {}
        }
    }

    fn read_attribute(&mut self, line: &str, field: Field, warnings: &mut Warnings) {
        let Some((name, inline_type)) = name_and_inline_type(field.args) else {
            warnings.push(Warning::FieldDirective(line.to_string()));
            return;
        };
        self.attributes
            .insert(name, inline_type, field.description, warnings);
    }

    /// @ai:intent Handle `:type name:` and `:vartype name:` companion directives
    fn read_type(&mut self, kind: ElementKind, line: &str, field: Field, warnings: &mut Warnings) {
        let Ok([name]) = <[String; 1]>::try_from(field.args) else {
            warnings.push(Warning::MissingName {
                kind,
                line: line.to_string(),
            });
            return;
        };
        if field.description.is_empty() {
            warnings.push(Warning::MissingPair(line.to_string()));
            return;
        }

        let buffer = match kind {
            ElementKind::Parameter => &mut self.parameters,
            ElementKind::Attribute => &mut self.attributes,
        };
        buffer.apply_type(name, field.description, warnings);
    }

    /// Repeated return directives overwrite the description.
    fn read_return(&mut self, line: &str, field: Field, warnings: &mut Warnings) {
        if !field.args.is_empty() {
            warnings.push(Warning::MissingPair(line.to_string()));
            return;
        }
        self.returns.seen = true;
        self.returns.description = field.description;
    }

    /// Repeated rtype directives overwrite the type.
    fn read_return_type(&mut self, line: &str, field: Field, warnings: &mut Warnings) {
        if !field.args.is_empty() || field.description.is_empty() {
            warnings.push(Warning::MissingPair(line.to_string()));
            return;
        }
        self.returns.annotation = Some(field.description);
    }

    fn read_raise(&mut self, line: &str, field: Field, warnings: &mut Warnings) {
        let Ok([exception]) = <[String; 1]>::try_from(field.args) else {
            warnings.push(Warning::ExceptionDirective(line.to_string()));
            return;
        };
        self.raises.push(DocRaise {
            annotation: exception,
            description: field.description,
        });
    }

    /// @ai:intent Emit non-empty sections in fixed kind order after the text section
    /// @ai:post the first section is always Section::Text
    /// @ai:effects pure
    pub fn finish(self, free_text: String) -> Vec<Section> {
        let mut sections = vec![Section::Text(free_text)];
        let signature = self.signature;

        if !self.parameters.entries.is_empty() {
            let parameters = self
                .parameters
                .entries
                .into_iter()
                .map(|entry| {
                    let declared = signature.lookup_parameter(&entry.name);
                    DocParameter {
                        annotation: resolve_annotation(
                            entry.annotation,
                            declared.and_then(|p| p.annotation.as_deref()),
                        ),
                        name: entry.name,
                        description: entry.description,
                        default_value: entry.default_value,
                        signature_kind: entry.kind,
                    }
                })
                .collect();
            sections.push(Section::Parameters(parameters));
        }

        if !self.attributes.entries.is_empty() {
            let attributes = self
                .attributes
                .entries
                .into_iter()
                .map(|entry| {
                    let declared = signature.lookup_member(&entry.name);
                    DocAttribute {
                        annotation: resolve_annotation(
                            entry.annotation,
                            declared.and_then(|m| m.annotation.as_deref()),
                        ),
                        name: entry.name,
                        description: entry.description,
                    }
                })
                .collect();
            sections.push(Section::Attributes(attributes));
        }

        if self.returns.seen {
            sections.push(Section::Returns(DocReturn {
                annotation: resolve_annotation(
                    self.returns.annotation,
                    signature.return_annotation(),
                ),
                description: self.returns.description,
            }));
        }

        if !self.raises.is_empty() {
            sections.push(Section::Raises(self.raises));
        }

        sections
    }
}

/// `[name]` or `[type, name]`; any other shape is malformed.
fn name_and_inline_type(args: Vec<String>) -> Option<(String, Option<String>)> {
    let mut args = args.into_iter();
    match (args.next(), args.next(), args.next()) {
        (Some(name), None, None) => Some((name, None)),
        (Some(annotation), Some(name), None) => Some((name, Some(annotation))),
        _ => None,
    }
}

/// @ai:intent Pick the docstring type over the declared one
/// @ai:post docstring types have " or " unions rewritten to " | "; declared types are kept as-is
/// @ai:effects pure
fn resolve_annotation(explicit: Option<String>, declared: Option<&str>) -> Option<String> {
    match explicit {
        Some(annotation) => Some(normalize_union(&annotation)),
        None => declared.map(str::to_string),
    }
}

/// @ai:intent Rewrite `A or B` union spelling to `A | B`
/// @ai:effects pure
pub fn normalize_union(annotation: &str) -> String {
    if annotation.contains(" or ") {
        annotation.replace(" or ", " | ")
    } else {
        annotation.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::Dialect;

    fn field(tag: &str, args: &[&str], description: &str) -> Field {
        Field {
            tag: tag.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_normalize_union() {
        assert_eq!(normalize_union("str or None"), "str | None");
        assert_eq!(normalize_union("None or str"), "None | str");
        assert_eq!(normalize_union("str or int or float"), "str | int | float");
        assert_eq!(normalize_union("Optional[str]"), "Optional[str]");
    }

    #[test]
    fn test_name_and_inline_type() {
        assert_eq!(name_and_inline_type(vec![]), None);
        assert_eq!(
            name_and_inline_type(vec!["foo".into()]),
            Some(("foo".to_string(), None))
        );
        assert_eq!(
            name_and_inline_type(vec!["str".into(), "foo".into()]),
            Some(("foo".to_string(), Some("str".to_string())))
        );
        assert_eq!(
            name_and_inline_type(vec!["dict(str,".into(), "int)".into(), "foo".into()]),
            None
        );
    }

    #[test]
    fn test_sections_emitted_in_kind_order() {
        let mut warnings = Warnings::new();
        let mut acc = Accumulator::new(Dialect::Sphinx.table(), SignatureRef::new(None), true);

        acc.feed(":raise E:", field("raise", &["E"], "boom"), &mut warnings);
        acc.feed(":return:", field("return", &[], "value"), &mut warnings);
        acc.feed(":var a:", field("var", &["a"], "attr"), &mut warnings);
        acc.feed(":param p:", field("param", &["p"], "param"), &mut warnings);

        let kinds: Vec<_> = acc.finish(String::new()).iter().map(Section::kind).collect();
        assert_eq!(
            kinds,
            vec![
                crate::section::SectionKind::Text,
                crate::section::SectionKind::Parameters,
                crate::section::SectionKind::Attributes,
                crate::section::SectionKind::Returns,
                crate::section::SectionKind::Raises,
            ]
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_pending_type_applied_on_arrival() {
        let mut warnings = Warnings::new();
        let mut acc = Accumulator::new(Dialect::Sphinx.table(), SignatureRef::new(None), true);

        acc.feed(":vartype x:", field("vartype", &["x"], "int or None"), &mut warnings);
        acc.feed(":var x:", field("var", &["x"], "an x"), &mut warnings);

        let sections = acc.finish(String::new());
        assert_eq!(
            sections[1],
            Section::Attributes(vec![DocAttribute::new("x", "an x").with_annotation("int | None")])
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_unknown_tag_ignored() {
        let mut warnings = Warnings::new();
        let mut acc = Accumulator::new(Dialect::Rst.table(), SignatureRef::new(None), true);

        acc.feed(":note:", field("note", &[], "remember"), &mut warnings);

        assert_eq!(acc.finish("text".into()), vec![Section::Text("text".into())]);
        assert!(warnings.is_empty());
    }
}
