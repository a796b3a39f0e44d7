//! Command line front end: one-shot operations and the interactive menu

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use sparse_ops::session::{self, title};
use sparse_ops::{OutputConfig, OutputLayout, Operation, Session, SparseError};

#[derive(Parser)]
#[command(name = "sparse-ops")]
#[command(about = "Add, subtract and multiply sparse matrices stored as text files")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add the second matrix to the first
    Add(OperandArgs),
    /// Subtract the second matrix from the first
    Subtract(OperandArgs),
    /// Multiply the first matrix by the second
    Multiply(OperandArgs),
    /// Prompt for two matrix files, then choose operations from a menu
    Interactive(OutputArgs),
}

#[derive(Args)]
struct OperandArgs {
    /// First (left) matrix file
    left: PathBuf,
    /// Second (right) matrix file
    right: PathBuf,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
struct OutputArgs {
    /// Directory receiving result files
    #[arg(long, default_value = sparse_ops::config::DEFAULT_RESULT_DIR)]
    out_dir: PathBuf,
    /// Write entries in row-major order
    #[arg(long)]
    sorted: bool,
    /// Prefix results with the rows=/cols= header
    #[arg(long)]
    with_header: bool,
}

impl OutputArgs {
    fn config(&self) -> OutputConfig {
        OutputConfig::with_result_dir(&self.out_dir).layout(OutputLayout {
            sorted: self.sorted,
            header: self.with_header,
        })
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Add(args) => run_once(Operation::Add, &args),
        Commands::Subtract(args) => run_once(Operation::Subtract, &args),
        Commands::Multiply(args) => run_once(Operation::Multiply, &args),
        Commands::Interactive(args) => run_interactive(&args.config()),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

/// Run a single operation given on the command line
fn run_once(op: Operation, args: &OperandArgs) -> Result<(), SparseError> {
    let loaded = Session::load(&args.left, &args.right)?;
    let path = loaded.run(op, &args.output.config())?;
    println!("{} result written to {}", title(op), path.display());
    Ok(())
}

/// Prompt for two matrix files, then hand over to the operation menu
fn run_interactive(config: &OutputConfig) -> Result<(), SparseError> {
    println!("Sparse Matrix Operations");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    let left = session::prompt(&mut input, &mut output, "Enter file path for first matrix: ")?;
    let right = session::prompt(&mut input, &mut output, "Enter file path for second matrix: ")?;
    let loaded = Session::load(left, right)?;

    session::run_menu(&mut input, &mut output, &loaded, config)
}
