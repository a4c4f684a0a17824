//! @ai:module:intent Define the directive vocabularies of the supported docstring dialects
//! @ai:module:layer domain
//! @ai:module:public_api Dialect, DirectiveTable, DirectiveRole
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// @ai:intent A field-list docstring dialect sharing the same parsing engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Terse convention: `arguments` alias, no signature-derived parameter kind
    #[default]
    Sphinx,
    /// Verbose convention: `argument` alias, parameters carry their signature kind
    Rst,
}

/// @ai:intent Semantic role of a directive tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveRole {
    Parameter,
    ParameterType,
    Attribute,
    AttributeType,
    Return,
    ReturnType,
    Raise,
}

/// @ai:intent Immutable alias table and feature flags for one dialect
#[derive(Debug)]
pub struct DirectiveTable {
    pub parameter: &'static [&'static str],
    pub parameter_type: &'static [&'static str],
    pub attribute: &'static [&'static str],
    pub attribute_type: &'static [&'static str],
    pub returns: &'static [&'static str],
    pub return_type: &'static [&'static str],
    pub raises: &'static [&'static str],
    pub enrich_parameter_kind: bool,
}

static SPHINX: DirectiveTable = DirectiveTable {
    parameter: &["param", "parameter", "arg", "arguments", "key", "keyword"],
    parameter_type: &["type"],
    attribute: &["var", "ivar", "cvar"],
    attribute_type: &["vartype"],
    returns: &["return", "returns"],
    return_type: &["rtype"],
    raises: &["raise", "raises", "except", "exception"],
    enrich_parameter_kind: false,
};

static RST: DirectiveTable = DirectiveTable {
    parameter: &["param", "parameter", "arg", "argument", "key", "keyword"],
    parameter_type: &["type"],
    attribute: &["var", "ivar", "cvar"],
    attribute_type: &["vartype"],
    returns: &["return", "returns"],
    return_type: &["rtype"],
    raises: &["raise", "raises", "except", "exception"],
    enrich_parameter_kind: true,
};

impl Dialect {
    pub const ALL: [Dialect; 2] = [Dialect::Sphinx, Dialect::Rst];

    /// @ai:intent Get the directive table of this dialect
    /// @ai:effects pure
    pub fn table(&self) -> &'static DirectiveTable {
        match self {
            Dialect::Sphinx => &SPHINX,
            Dialect::Rst => &RST,
        }
    }

    /// @ai:intent Get the lowercase name of this dialect
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Sphinx => "sphinx",
            Dialect::Rst => "rst",
        }
    }
}

impl DirectiveTable {
    /// @ai:intent Map a directive tag to its role; tags are matched exactly and case-sensitively
    /// @ai:post returns None for tags outside the vocabulary
    /// @ai:effects pure
    pub fn classify(&self, tag: &str) -> Option<DirectiveRole> {
        let roles: [(&[&str], DirectiveRole); 7] = [
            (self.parameter, DirectiveRole::Parameter),
            (self.parameter_type, DirectiveRole::ParameterType),
            (self.attribute, DirectiveRole::Attribute),
            (self.attribute_type, DirectiveRole::AttributeType),
            (self.returns, DirectiveRole::Return),
            (self.return_type, DirectiveRole::ReturnType),
            (self.raises, DirectiveRole::Raise),
        ];

        roles
            .into_iter()
            .find(|(aliases, _)| aliases.contains(&tag))
            .map(|(_, role)| role)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sphinx" => Ok(Dialect::Sphinx),
            "rst" | "restructuredtext" => Ok(Dialect::Rst),
            other => Err(format!("unknown dialect: {} (expected sphinx or rst)", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_aliases_differ() {
        let sphinx = Dialect::Sphinx.table();
        let rst = Dialect::Rst.table();

        assert_eq!(sphinx.classify("arguments"), Some(DirectiveRole::Parameter));
        assert_eq!(sphinx.classify("argument"), None);
        assert_eq!(rst.classify("argument"), Some(DirectiveRole::Parameter));
        assert_eq!(rst.classify("arguments"), None);
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        let table = Dialect::Sphinx.table();

        assert_eq!(table.classify("param"), Some(DirectiveRole::Parameter));
        assert_eq!(table.classify("Param"), None);
    }

    #[test]
    fn test_shared_roles() {
        for dialect in Dialect::ALL {
            let table = dialect.table();
            assert_eq!(table.classify("type"), Some(DirectiveRole::ParameterType));
            assert_eq!(table.classify("cvar"), Some(DirectiveRole::Attribute));
            assert_eq!(table.classify("vartype"), Some(DirectiveRole::AttributeType));
            assert_eq!(table.classify("returns"), Some(DirectiveRole::Return));
            assert_eq!(table.classify("rtype"), Some(DirectiveRole::ReturnType));
            assert_eq!(table.classify("except"), Some(DirectiveRole::Raise));
            assert_eq!(table.classify("note"), None);
        }
    }

    #[test]
    fn test_dialect_from_str() {
        assert_eq!("Sphinx".parse::<Dialect>(), Ok(Dialect::Sphinx));
        assert_eq!("rst".parse::<Dialect>(), Ok(Dialect::Rst));
        assert!("numpy".parse::<Dialect>().is_err());
    }
}
