//! Blockgen library crate
//!
//! This crate provides the core functionality for the `blockgen` CLI. It is
//! organized into small modules: `block` (block definition model and input
//! parsing), `script` (registration script assembly), and `clipboard`
//! (cross-platform clipboard helper). The binary `src/main.rs` calls
//! `blockgen_lib::run()` to execute the CLI.
//!
//! Public API
//!
//! - `run()` — CLI entrypoint used by the binary.
//!
//! See each module for detailed documentation on functions and behavior.

pub mod block;
pub mod clipboard;
pub mod script;

use std::io::Read;

use clap::{ArgAction, Parser, Subcommand};

use crate::block::{BlockForm, validate_id};
use crate::clipboard::{copy_output, copy_to_clipboard};
use crate::script::{BuildOptions, build_script};

/// Top-level CLI types and runner. Keep `main.rs` thin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a block registration script
    Generate {
        /// Block identifier (letters, digits and underscores)
        id: String,

        /// Block material (passed through to the declaration as-is)
        #[arg(short = 'm', long = "material", default_value = "rock")]
        material: String,

        /// Mark the block unbreakable
        #[arg(long = "unbreakable", action = ArgAction::SetTrue)]
        unbreakable: bool,

        /// Use the strength model (hardness + blast resistance together)
        #[arg(long = "use-strength", action = ArgAction::SetTrue)]
        use_strength: bool,

        /// Hardness for the strength model
        #[arg(long = "strength-hardness", value_name = "VALUE")]
        strength_hardness: Option<String>,

        /// Blast resistance for the strength model
        #[arg(long = "resistance", value_name = "VALUE")]
        resistance: Option<String>,

        /// Standalone hardness (ignored under --use-strength)
        #[arg(long = "hardness", value_name = "VALUE")]
        hardness: Option<String>,

        /// Harvest level (omitted when 0)
        #[arg(long = "harvest-level", value_name = "VALUE")]
        harvest_level: Option<String>,

        /// Light level 0-15 (omitted when 0)
        #[arg(long = "light-level", value_name = "VALUE")]
        light_level: Option<String>,

        /// Light opacity 0-255 (omitted when 0)
        #[arg(long = "light-opacity", value_name = "VALUE")]
        light_opacity: Option<String>,

        /// Slipperiness 0-1 (omitted when 0.6)
        #[arg(long = "slipperiness", value_name = "VALUE")]
        slipperiness: Option<String>,

        /// Only emit a standalone hardness clause for values above zero
        #[arg(long = "positive-hardness-only", action = ArgAction::SetTrue)]
        positive_hardness_only: bool,

        /// Copy the generated script to the clipboard
        #[arg(long = "clipboard", action = ArgAction::SetTrue)]
        clipboard: bool,
    },
    /// Copy a previously generated script to the clipboard
    Copy {
        /// File to copy; reads stdin when absent
        file: Option<String>,
    },
    /// Check whether an identifier is valid for use in a script
    Check {
        /// Identifier to check
        id: String,
    },
}

/// Run the blockgen CLI.
///
/// This function is the high-level entrypoint used by the `blockgen` binary.
/// It parses CLI arguments and dispatches to module functions. Errors are
/// printed to stderr and cause the process to exit with a non-zero code
/// where appropriate.
///
/// Behavior summary:
/// - `generate` — build the registration script for one block definition,
///   print it to stdout and optionally copy it to the clipboard. Numeric
///   options are free text; a value that does not parse is treated as
///   absent. An invalid identifier aborts with no output.
/// - `copy` — copy text from a file (or stdin) to the clipboard, refusing
///   blank input.
/// - `check` — validate a single identifier and report the result.
///
/// Example:
///
/// ```no_run
/// blockgen_lib::run(); // called from src/main.rs
/// ```
pub fn run() {
    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            id,
            material,
            unbreakable,
            use_strength,
            strength_hardness,
            resistance,
            hardness,
            harvest_level,
            light_level,
            light_opacity,
            slipperiness,
            positive_hardness_only,
            clipboard,
        } => {
            let form = BlockForm {
                id,
                material,
                unbreakable,
                use_strength,
                hardness: strength_hardness,
                resistance,
                hardness_only: hardness,
                harvest_level,
                light_level,
                light_opacity,
                slipperiness,
            };
            let options = BuildOptions {
                positive_hardness_only,
            };
            let code = build_script(&form.parse(), options).unwrap_or_else(|e| {
                eprintln!("error: {}", e);
                std::process::exit(1);
            });

            print!("{}", code);

            if clipboard {
                match copy_to_clipboard(&code) {
                    Ok(()) => eprintln!("copied to clipboard"),
                    Err(e) => eprintln!("warning: failed to copy to clipboard: {}", e),
                }
            }
        }
        Commands::Copy { file } => {
            let text = read_copy_source(file.as_deref()).unwrap_or_else(|e| {
                eprintln!("error: {}", e);
                std::process::exit(1);
            });
            match copy_output(&text) {
                Ok(()) => eprintln!("copied to clipboard"),
                Err(e) => {
                    eprintln!("error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Check { id } => match validate_id(id.trim()) {
            Ok(()) => println!("ok: {} is a valid block id", id.trim()),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        },
    }
}

/// Read the text for the `copy` subcommand from `file`, or from stdin when
/// no file was given.
fn read_copy_source(file: Option<&str>) -> Result<String, String> {
    match file {
        Some(path) => {
            std::fs::read_to_string(path).map_err(|e| format!("failed to read {}: {}", path, e))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("failed to read stdin: {}", e))?;
            Ok(buf)
        }
    }
}
