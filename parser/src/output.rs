//! @ai:module:intent Format parse and check results for display (JSON, text)
//! @ai:module:layer infrastructure
//! @ai:module:public_api OutputFormat, format_parsed, format_lint_result
//! @ai:module:depends_on docstring, linter, section
//! @ai:module:stateless true

use crate::docstring::Parsed;
use crate::linter::{LintResult, Severity};
use crate::section::Section;
use colored::Colorize;

/// @ai:intent Output format options
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    JsonPretty,
}

/// @ai:intent Format a parsed docstring as a string
/// @ai:effects pure
pub fn format_parsed(parsed: &Parsed, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(parsed).unwrap_or_default(),
        OutputFormat::JsonPretty => serde_json::to_string_pretty(parsed).unwrap_or_default(),
        OutputFormat::Text => format_parsed_text(parsed),
    }
}

/// @ai:intent Format a parsed docstring as human-readable text
/// @ai:effects pure
fn format_parsed_text(parsed: &Parsed) -> String {
    let mut output = String::new();

    for section in &parsed.sections {
        match section {
            Section::Text(text) => {
                if !text.is_empty() {
                    output.push_str(text);
                    output.push_str("\n\n");
                }
            }
            Section::Parameters(parameters) => {
                output.push_str(&format!("{}\n", "Parameters:".bold()));
                for param in parameters {
                    output.push_str(&format!(
                        "  {}{}{}: {}\n",
                        param.name.cyan(),
                        type_suffix(param.annotation.as_deref()),
                        param
                            .default_value
                            .as_deref()
                            .map(|v| format!(" = {}", v))
                            .unwrap_or_default(),
                        param.description
                    ));
                }
            }
            Section::Attributes(attributes) => {
                output.push_str(&format!("{}\n", "Attributes:".bold()));
                for attr in attributes {
                    output.push_str(&format!(
                        "  {}{}: {}\n",
                        attr.name.cyan(),
                        type_suffix(attr.annotation.as_deref()),
                        attr.description
                    ));
                }
            }
            Section::Returns(ret) => {
                output.push_str(&format!("{}\n", "Returns:".bold()));
                output.push_str(&format!(
                    "  {}{}\n",
                    ret.annotation
                        .as_deref()
                        .map(|a| format!("{}: ", a.yellow()))
                        .unwrap_or_default(),
                    ret.description
                ));
            }
            Section::Raises(raises) => {
                output.push_str(&format!("{}\n", "Raises:".bold()));
                for raise in raises {
                    output.push_str(&format!(
                        "  {}: {}\n",
                        raise.annotation.yellow(),
                        raise.description
                    ));
                }
            }
        }
    }

    for diagnostic in &parsed.warnings {
        output.push_str(&format!(
            "{} line {} - {}\n",
            "WARN".yellow().bold(),
            diagnostic.line,
            diagnostic
        ));
    }

    output
}

fn type_suffix(annotation: Option<&str>) -> String {
    annotation
        .map(|a| format!(" ({})", a.yellow()))
        .unwrap_or_default()
}

/// @ai:intent Format lint results as a string
/// @ai:effects pure
pub fn format_lint_result(result: &LintResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(result).unwrap_or_default(),
        OutputFormat::JsonPretty => serde_json::to_string_pretty(result).unwrap_or_default(),
        OutputFormat::Text => format_lint_result_text(result),
    }
}

/// @ai:intent Format lint results as human-readable text
/// @ai:effects pure
fn format_lint_result_text(result: &LintResult) -> String {
    let mut output = String::new();

    for issue in &result.issues {
        let severity_str = match issue.severity {
            Severity::Error => "ERROR".red().bold(),
            Severity::Warning => "WARN".yellow().bold(),
            Severity::Info => "INFO".blue(),
        };

        let location = format!(
            "{}:{}",
            issue.location.file.display(),
            issue.location.line
        );

        output.push_str(&format!(
            "{} {} - {}\n",
            severity_str,
            location.dimmed(),
            issue.message
        ));
    }

    output.push('\n');
    output.push_str(&format!("Checked {} files\n", result.files_checked));

    if result.errors > 0 {
        output.push_str(&format!(
            "{} errors, {} warnings\n",
            result.errors.to_string().red().bold(),
            result.warnings.to_string().yellow()
        ));
    } else if result.warnings > 0 {
        output.push_str(&format!(
            "{} {} warnings\n",
            "OK".green().bold(),
            result.warnings.to_string().yellow()
        ));
    } else {
        output.push_str(&format!("{} No issues found\n", "OK".green().bold()));
    }

    output
}
