//! RV32I single-cycle simulator CLI.
//!
//! This binary loads a textual program image and runs it on the datapath. It performs:
//! 1. **Configuration:** Reads an optional JSON config and applies command-line overrides.
//! 2. **Logging:** Installs a `tracing` subscriber; `--debug` also appends to `debug.log`.
//! 3. **Run:** Optionally lists the program, runs it to completion, and prints the final
//!    register file, statistics, and execution time.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use rv32sc_core::config::{Config, MemoryBacking};
use rv32sc_core::isa::disasm::disassemble;
use rv32sc_core::sim::{HaltReason, Simulator};

/// File that receives a copy of the log output in debug mode.
const DEBUG_LOG: &str = "debug.log";

#[derive(Parser, Debug)]
#[command(
    name = "rv32sc",
    version,
    about = "RV32I single-cycle datapath simulator",
    long_about = "Run a program image on a single-cycle RV32I datapath.\n\nThe image is text: one 32-digit binary instruction per line, most significant bit first.\n\nExamples:\n  rv32sc run program.txt\n  rv32sc run program.txt --debug --list\n  rv32sc run program.txt --in-memory --max-cycles 1000"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program image until it halts.
    Run(RunArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Program image (one 32-bit binary word per line).
    program: PathBuf,

    /// JSON configuration file; flags below override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// File backing the data memory (truncated at start).
    #[arg(long, conflicts_with = "in_memory")]
    data_memory: Option<PathBuf>,

    /// Keep data memory in a heap buffer instead of a file.
    #[arg(long)]
    in_memory: bool,

    /// Data memory size in bytes.
    #[arg(long)]
    memory_size: Option<usize>,

    /// Stop after this many cycles.
    #[arg(long)]
    max_cycles: Option<u64>,

    /// Log every cycle at debug level and append the log to debug.log.
    #[arg(short, long)]
    debug: bool,

    /// Print the program listing before running.
    #[arg(short, long)]
    list: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => cmd_run(args),
    }
}

/// Installs the global subscriber.
///
/// Outside debug mode the filter comes from `RUST_LOG` (default `warn`).
///
/// # Errors
///
/// Any I/O error opening the debug log.
fn init_logging(debug: bool) -> io::Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let file_layer = if debug {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(DEBUG_LOG)?;
        Some(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).compact())
        .with(file_layer)
        .init();
    Ok(())
}

/// Builds the run configuration from the config file and flags.
fn build_config(args: &RunArgs) -> Result<Config, String> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path).map_err(|e| e.to_string())?,
        None => Config::default(),
    };

    if let Some(path) = &args.data_memory {
        config.memory.backing = MemoryBacking::File;
        config.memory.path.clone_from(path);
    }
    if args.in_memory {
        config.memory.backing = MemoryBacking::Buffer;
    }
    if let Some(size) = args.memory_size {
        config.memory.size_bytes = size;
    }
    if args.max_cycles.is_some() {
        config.general.max_cycles = args.max_cycles;
    }
    if args.debug {
        config.general.trace_instructions = true;
    }
    Ok(config)
}

/// Loads, optionally lists, and runs a program.
///
/// Exits with code 0 when the program ends or hits the cycle limit, and 1
/// if it cannot be loaded or faults.
fn cmd_run(args: RunArgs) -> ExitCode {
    if let Err(e) = init_logging(args.debug) {
        eprintln!("Error: could not open {DEBUG_LOG}: {e}");
        return ExitCode::FAILURE;
    }

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("[*] Program: {}", args.program.display());
    match config.memory.backing {
        MemoryBacking::File => println!(
            "    Data memory: {} ({} bytes)",
            config.memory.path.display(),
            config.memory.size_bytes
        ),
        MemoryBacking::Buffer => println!(
            "    Data memory: in memory ({} bytes)",
            config.memory.size_bytes
        ),
    }

    let mut sim = match Simulator::load(&args.program, &config) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if args.list {
        print_listing(&sim);
    }

    match sim.run() {
        Ok(summary) => {
            match summary.reason {
                HaltReason::EndOfProgram => println!("\n[*] Program finished"),
                HaltReason::CycleLimit => {
                    println!("\n[*] Cycle limit reached ({} cycles)", summary.cycles);
                }
                HaltReason::Faulted => eprintln!("\n[!] CPU is in a faulted state"),
            }
            print_final_state(&sim);
            println!("Execution time: {:.6} s", summary.elapsed.as_secs_f64());
            if summary.reason.is_clean() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("\n[!] FATAL: {e}");
            print_final_state(&sim);
            ExitCode::FAILURE
        }
    }
}

/// Prints address, raw bits, and disassembly of every loaded instruction.
fn print_listing(sim: &Simulator) {
    println!("\nProgram listing:");
    for (addr, inst) in sim.cpu.instruction_memory().iter() {
        println!("  {addr:#010x}: {inst}  {}", disassemble(inst.raw()));
    }
    println!();
}

/// Prints the PC, register file, and statistics.
fn print_final_state(sim: &Simulator) {
    println!("\nPC: {:#010x}", sim.cpu.pc());
    println!("{}", sim.cpu.regs());
    sim.cpu.stats.print();
}
