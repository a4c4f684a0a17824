//! @ai:module:intent CLI entry point for parsing and checking field-list docstrings
//! @ai:module:layer presentation
//! @ai:module:public_api main
//! @ai:module:depends_on docstring, linter, output, config

use clap::{Parser, Subcommand, ValueEnum};
use docfields::config::DEFAULT_CONFIG_FILE;
use docfields::linter::{self, load_signature};
use docfields::{output, parse, Dialect, DocfieldsConfig, OutputFormat};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "docfields")]
#[command(author, version, about = "Parse and check Sphinx / reST field-list docstrings")]
struct Cli {
    /// Path to configuration file (defaults to ./docfields.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one docstring and print its sections and warnings
    Parse {
        /// Docstring file, or '-' for stdin
        path: PathBuf,

        /// Docstring dialect (overrides config)
        #[arg(long, short)]
        dialect: Option<Dialect>,

        /// JSON signature view of the documented element
        #[arg(long, short)]
        signature: Option<PathBuf>,

        /// Do not warn about parameters missing from the signature
        #[arg(long)]
        no_warn_unknown_params: bool,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: Format,
    },

    /// Check docstring files under a path, CI-style
    Check {
        /// File or directory to check
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Docstring dialect (overrides config)
        #[arg(long, short)]
        dialect: Option<Dialect>,

        /// Fail on any issue, not only on malformed directives
        #[arg(long)]
        deny_warnings: bool,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: Format,
    },

    /// Write a default configuration file
    Init {
        /// Output path for config file
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    JsonPretty,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
            Format::JsonPretty => OutputFormat::JsonPretty,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "docfields=debug"
    } else {
        "docfields=warn"
    };
    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(
        default_directive
            .parse::<tracing_subscriber::filter::Directive>()
            .unwrap_or_else(|_| tracing_subscriber::filter::LevelFilter::WARN.into()),
    );

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Commands::Init { output } = &cli.command {
        return match DocfieldsConfig::default().save(output) {
            Ok(()) => {
                println!("Wrote {}", output.display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::from(2)
            }
        };
    }

    let mut config = match DocfieldsConfig::discover(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    match cli.command {
        Commands::Parse {
            path,
            dialect,
            signature,
            no_warn_unknown_params,
            format,
        } => {
            if let Some(dialect) = dialect {
                config.dialect = dialect;
            }
            if no_warn_unknown_params {
                config.warn_unknown_params = false;
            }

            match run_parse(&path, signature.as_deref(), &config, format.into()) {
                Ok(rendered) => {
                    println!("{}", rendered);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::from(2)
                }
            }
        }

        Commands::Check {
            path,
            dialect,
            deny_warnings,
            format,
        } => {
            if let Some(dialect) = dialect {
                config.dialect = dialect;
            }
            if deny_warnings {
                config.check.deny_warnings = true;
            }

            let result = if path.is_file() {
                linter::lint_file(&path, &config)
            } else {
                linter::lint_directory(&path, &config)
            };

            match result {
                Ok(lint_result) => {
                    println!("{}", output::format_lint_result(&lint_result, format.into()));

                    if lint_result.passed(config.check.deny_warnings) {
                        ExitCode::SUCCESS
                    } else {
                        ExitCode::from(1)
                    }
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::from(2)
                }
            }
        }

        Commands::Init { .. } => ExitCode::SUCCESS,
    }
}

/// @ai:intent Parse one docstring file (or stdin) and render the result
/// @ai:effects fs:read, io:stdin
fn run_parse(
    path: &Path,
    signature: Option<&Path>,
    config: &DocfieldsConfig,
    format: OutputFormat,
) -> docfields::Result<String> {
    let text = if path == Path::new("-") {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        input
    } else {
        std::fs::read_to_string(path).map_err(|e| docfields::Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?
    };

    let signature = signature.map(load_signature).transpose()?;
    let parsed = parse(
        &text,
        config.dialect,
        signature.as_ref(),
        &config.parse_options(),
    );

    Ok(output::format_parsed(&parsed, format))
}
