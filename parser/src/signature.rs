//! @ai:module:intent Describe a documented element's declared signature and look names up in it
//! @ai:module:layer domain
//! @ai:module:public_api SignatureView, FunctionSignature, ContainerSignature, SignatureParameter, SignatureMember, ParameterKind, SignatureRef
//! @ai:module:stateless true
//!
//! The signature view is produced by whatever introspects the source code. The parser only
//! reads it, and every lookup degrades to `None` when no view was supplied.

use serde::{Deserialize, Serialize};

/// @ai:intent How a parameter may be passed, as declared in the signature
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ParameterKind {
    PositionalOnly,
    PositionalOrKeyword,
    VarPositional,
    KeywordOnly,
    VarKeyword,
}

/// @ai:intent Read-only description of the element that owns the docstring
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SignatureView {
    Function(FunctionSignature),
    Container(ContainerSignature),
}

/// @ai:intent Declared parameters and return annotation of a function-like element
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FunctionSignature {
    #[serde(default)]
    pub parameters: Vec<SignatureParameter>,
    #[serde(default)]
    pub returns: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SignatureParameter {
    pub name: String,
    #[serde(default)]
    pub annotation: Option<String>,
    #[serde(default)]
    pub default_value: Option<String>,
    #[serde(default)]
    pub kind: Option<ParameterKind>,
}

/// @ai:intent Named members of a container-like element (class or module)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ContainerSignature {
    #[serde(default)]
    pub members: Vec<SignatureMember>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SignatureMember {
    pub name: String,
    #[serde(default)]
    pub annotation: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

impl FunctionSignature {
    pub fn new() -> Self {
        Self::default()
    }

    /// @ai:intent Append a declared parameter, keeping declaration order
    pub fn with_parameter(mut self, parameter: SignatureParameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_returns(mut self, annotation: impl Into<String>) -> Self {
        self.returns = Some(annotation.into());
        self
    }
}

impl SignatureParameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
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

    pub fn with_kind(mut self, kind: ParameterKind) -> Self {
        self.kind = Some(kind);
        self
    }
}

impl ContainerSignature {
    pub fn new() -> Self {
        Self::default()
    }

    /// @ai:intent Append a declared member, keeping declaration order
    pub fn with_member(
        mut self,
        name: impl Into<String>,
        annotation: Option<&str>,
        value: Option<&str>,
    ) -> Self {
        self.members.push(SignatureMember {
            name: name.into(),
            annotation: annotation.map(str::to_string),
            value: value.map(str::to_string),
        });
        self
    }
}

impl From<FunctionSignature> for SignatureView {
    fn from(signature: FunctionSignature) -> Self {
        SignatureView::Function(signature)
    }
}

impl From<ContainerSignature> for SignatureView {
    fn from(signature: ContainerSignature) -> Self {
        SignatureView::Container(signature)
    }
}

/// @ai:intent Optional, borrowed adapter over a signature view used during one parse
#[derive(Debug, Clone, Copy, Default)]
pub struct SignatureRef<'a> {
    view: Option<&'a SignatureView>,
}

impl<'a> SignatureRef<'a> {
    pub fn new(view: Option<&'a SignatureView>) -> Self {
        Self { view }
    }

    /// @ai:intent Whether there is a parameter mapping to validate parameter names against
    /// @ai:effects pure
    pub fn has_parameters(&self) -> bool {
        matches!(self.view, Some(SignatureView::Function(_)))
    }

    /// @ai:intent Find a declared parameter by exact name
    /// @ai:effects pure
    pub fn lookup_parameter(&self, name: &str) -> Option<&'a SignatureParameter> {
        match self.view? {
            SignatureView::Function(function) => {
                function.parameters.iter().find(|p| p.name == name)
            }
            SignatureView::Container(_) => None,
        }
    }

    /// @ai:intent Find a declared container member by exact name
    /// @ai:effects pure
    pub fn lookup_member(&self, name: &str) -> Option<&'a SignatureMember> {
        match self.view? {
            SignatureView::Container(container) => {
                container.members.iter().find(|m| m.name == name)
            }
            SignatureView::Function(_) => None,
        }
    }

    /// @ai:effects pure
    pub fn return_annotation(&self) -> Option<&'a str> {
        match self.view? {
            SignatureView::Function(function) => function.returns.as_deref(),
            SignatureView::Container(_) => None,
        }
    }
}
