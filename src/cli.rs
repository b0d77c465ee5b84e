//! Command-line interface implementation for localizer-gen.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for localizer-gen.
#[derive(Parser, Debug)]
#[command(author, version, about = "localizer-gen: message accessors generated from .properties files", long_about = None)]
pub struct Args {
    /// Directory containing the resource files
    #[arg(value_name = "BASE_DIR")]
    pub base_dir: PathBuf,

    /// Directory where generated sources are written
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Glob pattern selecting resource files (repeatable)
    #[arg(short, long, value_name = "GLOB")]
    pub include: Vec<String>,

    /// Glob pattern excluding resource files (repeatable)
    #[arg(short, long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Only process resource files with this exact name, e.g. Messages.properties
    #[arg(long, value_name = "NAME")]
    pub file_mask: Option<String>,

    /// Path of the runtime crate used by generated code
    #[arg(long, value_name = "PATH")]
    pub runtime_crate: Option<String>,

    /// Configuration file (defaults to localizer.json/.yml/.yaml in BASE_DIR)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Emit the units that succeeded even if some resource files fail
    #[arg(short, long)]
    pub keep_going: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let printed = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                if let Err(e) = printed {
                    eprintln!("Failed to print help: {}", e);
                }
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
