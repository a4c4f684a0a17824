//! @ai:module:intent Check docstring files for malformed or conflicting field lists
//! @ai:module:layer application
//! @ai:module:public_api lint_file, lint_directory, load_signature, signature_sidecar, LintResult, LintIssue, Severity, Location
//! @ai:module:depends_on docstring, config, signature, warning, error
//! @ai:module:stateless true

use crate::config::DocfieldsConfig;
use crate::docstring::parse;
use crate::error::{Error, Result};
use crate::signature::SignatureView;
use crate::warning::{Diagnostic, WarningCategory};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// @ai:intent Severity level for lint issues
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    #[default]
    Warning,
    Info,
}

/// @ai:intent Represents a location in a docstring file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    pub file: PathBuf,
    pub line: usize,
}

/// @ai:intent A single issue found in a docstring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintIssue {
    pub severity: Severity,
    pub category: WarningCategory,
    pub message: String,
    pub location: Location,
}

/// @ai:intent Result of checking a file or directory
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LintResult {
    pub files_checked: usize,
    pub issues: Vec<LintIssue>,
    pub errors: usize,
    pub warnings: usize,
}

impl Severity {
    /// @ai:intent Map a warning category onto a lint severity
    /// @ai:effects pure
    pub fn for_category(category: WarningCategory) -> Self {
        match category {
            WarningCategory::Malformed => Severity::Error,
            WarningCategory::Conflict => Severity::Warning,
            WarningCategory::Unmatched => Severity::Info,
        }
    }
}

impl Location {
    pub fn new(file: PathBuf, line: usize) -> Self {
        Self { file, line }
    }
}

impl LintResult {
    /// @ai:intent Check if linting passed (no errors, and no warnings when they are denied)
    pub fn passed(&self, deny_warnings: bool) -> bool {
        if deny_warnings {
            self.issues.is_empty()
        } else {
            self.errors == 0
        }
    }

    /// @ai:intent Merge another lint result into this one
    pub fn merge(&mut self, other: LintResult) {
        self.files_checked += other.files_checked;
        self.issues.extend(other.issues);
        self.errors += other.errors;
        self.warnings += other.warnings;
    }

    fn record(&mut self, file: &Path, diagnostic: &Diagnostic) {
        let severity = Severity::for_category(diagnostic.category());
        match severity {
            Severity::Error => self.errors += 1,
            Severity::Warning => self.warnings += 1,
            Severity::Info => {}
        }
        self.issues.push(LintIssue {
            severity,
            category: diagnostic.category(),
            message: diagnostic.to_string(),
            location: Location::new(file.to_path_buf(), diagnostic.line),
        });
    }
}

/// @ai:intent Path of the optional signature file that sits next to a docstring file
/// @ai:effects pure
/// @ai:example signature_sidecar("docs/f.txt") -> "docs/f.txt.sig.json"
pub fn signature_sidecar(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".sig.json");
    PathBuf::from(name)
}

/// @ai:intent Read a JSON signature view
/// @ai:effects fs:read
pub fn load_signature(path: &Path) -> Result<SignatureView> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| Error::Signature {
        path: path.to_path_buf(),
        source: e,
    })
}

/// @ai:intent Check a single docstring file, using its sidecar signature when present
/// @ai:effects fs:read
pub fn lint_file(path: &Path, config: &DocfieldsConfig) -> Result<LintResult> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let sidecar = signature_sidecar(path);
    let signature = if sidecar.is_file() {
        Some(load_signature(&sidecar)?)
    } else {
        None
    };

    let parsed = parse(
        &content,
        config.dialect,
        signature.as_ref(),
        &config.parse_options(),
    );

    let mut result = LintResult {
        files_checked: 1,
        ..Default::default()
    };
    for diagnostic in &parsed.warnings {
        result.record(path, diagnostic);
    }
    Ok(result)
}

/// @ai:intent Check all docstring files under a directory
/// @ai:post unreadable files become error issues instead of aborting the walk
/// @ai:effects fs:read
pub fn lint_directory(path: &Path, config: &DocfieldsConfig) -> Result<LintResult> {
    let mut result = LintResult::default();

    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::Walk {
            path: path.to_path_buf(),
            source: e,
        })?;
        let file_path = entry.path();
        if !entry.file_type().is_file() || !config.check.matches(file_path) {
            continue;
        }

        match lint_file(file_path, config) {
            Ok(file_result) => result.merge(file_result),
            Err(e) => {
                tracing::warn!("skipping {}: {}", file_path.display(), e);
                result.issues.push(LintIssue {
                    severity: Severity::Error,
                    category: WarningCategory::Malformed,
                    message: format!("Failed to check file: {}", e),
                    location: Location::new(file_path.to_path_buf(), 0),
                });
                result.errors += 1;
            }
        }
    }

    Ok(result)
}
