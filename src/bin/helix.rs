//! Helix CLI: loads a program, wires up stdin/stdout, and runs it.
//!
//! USAGE:
//!     helix [OPTIONS] <path>
//!
//! OPTIONS:
//!     --max-steps <n>    Halt with a fault after this many instructions.
//!     -v, --verbose      Enable debug-level tracing on stderr.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use helix_vm::error::HaltReason;
use helix_vm::interpreter::Interpreter;
use helix_vm::io::{StdinInput, StdoutOutput};
use helix_vm::loader::load_str;

/// Run a Helix program.
#[derive(Parser, Debug)]
#[command(version, author, about, long_about = None)]
struct Opts {
    /// Path to the Helix source file.
    path: PathBuf,
    /// Abort the run with a fault after this many instructions.
    #[arg(long)]
    max_steps: Option<u64>,
    /// Enable debug-level tracing on stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let opts = Opts::parse();

    let filter = if opts.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    match run(opts) {
        Ok(code) => code,
        Err(message) => {
            tracing::error!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(opts: Opts) -> Result<ExitCode, String> {
    let source = fs::read_to_string(&opts.path).map_err(|e| format!("reading {:?}: {e}", opts.path))?;
    let strand = load_str(&source).map_err(|e| e.to_string())?;

    let mut vm = Interpreter::new(strand, StdinInput::default(), StdoutOutput::default());
    if let Some(budget) = opts.max_steps {
        vm = vm.with_budget(budget);
    }

    match vm.run() {
        Ok(HaltReason::Stop) | Ok(HaltReason::OutOfBounds) | Ok(HaltReason::NoStart) => Ok(ExitCode::SUCCESS),
        Err(fault) => Err(fault.to_string()),
    }
}
