//! The Flit compiler CLI.
//!
//! Provides `flit build` and `flit run`, delegating compilation, assembly,
//! and linking to the [`driver`] module and error reporting to the
//! [`diagnostics`] module.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use flit::diagnostics;
use flit::driver;

/// Command-line interface for the Flit compiler.
#[derive(Parser)]
#[command(name = "flit")]
#[command(about = "The Flit programming language", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a Flit program into a native executable.
    Build {
        /// The source file to compile (e.g. `hello.fl`).
        file: PathBuf,

        /// Output path for the executable. Defaults to the input filename
        /// without its extension.
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,
    },
    /// Compile and run a Flit program.
    Run {
        /// The source file to run (e.g. `hello.fl`).
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { file, output } => {
            let output = output.unwrap_or_else(|| driver::default_output_path(&file));
            match driver::build(&file, &output) {
                Ok(()) => println!("Built: {}", output.display()),
                Err(error) => report_and_exit(&file, &error),
            }
        }
        Commands::Run { file } => match driver::run(&file) {
            Ok(exit_code) => std::process::exit(exit_code),
            Err(error) => report_and_exit(&file, &error),
        },
    }
}

/// Prints a diagnostic for `error` and exits with status 1. Re-reads the
/// source file for the snippet; if that fails too (the file vanished
/// between the original read and now), falls back to the plain message.
fn report_and_exit(file: &Path, error: &driver::CompileError) -> ! {
    let filename = file.to_string_lossy();
    match std::fs::read_to_string(file) {
        Ok(source) => diagnostics::report_error(&filename, &source, error),
        Err(_) => eprintln!("{error}"),
    }
    std::process::exit(1);
}
