//! @ai:module:intent Field-list docstring parser library
//! @ai:module:layer infrastructure
//! @ai:module:public_api docstring, dialect, section, signature, warning, linter, output, config, error
//! @ai:module:stateless true
//!
//! # docfields
//!
//! Parses `:param name: text` style docstrings (Sphinx and reST field lists) into ordered
//! sections, cross-referencing the documented element's signature when one is available.
//!
//! ## Example
//!
//! ```rust
//! use docfields::{
//!     parse, Dialect, FunctionSignature, ParseOptions, Section, SignatureParameter, SignatureView,
//! };
//!
//! let signature: SignatureView = FunctionSignature::new()
//!     .with_parameter(SignatureParameter::new("path").with_annotation("str"))
//!     .into();
//! let parsed = parse(
//!     "Open a file.\n\n:param path: Where to look.\n:returns: The handle.\n:rtype: int or None",
//!     Dialect::Sphinx,
//!     Some(&signature),
//!     &ParseOptions::default(),
//! );
//!
//! assert_eq!(parsed.sections[0], Section::Text("Open a file.".to_string()));
//! assert_eq!(parsed.parameters()[0].annotation.as_deref(), Some("str"));
//! assert_eq!(parsed.returns().and_then(|r| r.annotation.as_deref()), Some("int | None"));
//! assert!(parsed.warnings.is_empty());
//! ```

pub mod accumulator;
pub mod config;
pub mod dialect;
pub mod docstring;
pub mod error;
pub mod field;
pub mod linter;
pub mod output;
pub mod scanner;
pub mod section;
pub mod signature;
pub mod warning;

pub use accumulator::normalize_union;
pub use config::DocfieldsConfig;
pub use dialect::{Dialect, DirectiveRole, DirectiveTable};
pub use docstring::{parse, ParseOptions, Parsed};
pub use error::{Error, Result};
pub use linter::{lint_directory, lint_file, LintIssue, LintResult, Severity};
pub use output::{format_lint_result, format_parsed, OutputFormat};
pub use scanner::cleandoc;
pub use section::{DocAttribute, DocParameter, DocRaise, DocReturn, Section, SectionKind};
pub use signature::{
    ContainerSignature, FunctionSignature, ParameterKind, SignatureMember, SignatureParameter,
    SignatureView,
};
pub use warning::{Diagnostic, ElementKind, Warning, WarningCategory};
