//! An LS-8 microcomputer emulator.
//!
//! Loads a program from a text file of binary literals and runs it to
//! completion.
//!
//! # Usage
//! ```text
//! ls8 <program.ls8> [OPTIONS]
//! ```
//!
//! # Arguments
//! - `program.ls8`: Program file, one 8-bit binary literal per line
//!
//! # Options
//! - `--trace`: Print the PC, instruction bytes, and registers before each step
//!
//! Exits 0 on a clean `HLT`, 1 on any load or execution error.

use ls8::emulator::cpu::Cpu;
use ls8::emulator::loader;
use ls8::{error, info};
use std::env;
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage(&args[0]);
        process::exit(if args.len() < 2 { 1 } else { 0 });
    }

    let mut program_path: Option<&str> = None;
    let mut trace = false;

    for arg in &args[1..] {
        match arg.as_str() {
            "--trace" => trace = true,
            other if other.starts_with('-') => {
                eprintln!("Unexpected argument: {}\n", other);
                print_usage(&args[0]);
                process::exit(1);
            }
            other => {
                if program_path.is_some() {
                    eprintln!("Only one program file may be given\n");
                    print_usage(&args[0]);
                    process::exit(1);
                }
                program_path = Some(other);
            }
        }
    }

    let path = match program_path {
        Some(path) => path,
        None => {
            print_usage(&args[0]);
            process::exit(1);
        }
    };

    let program = match loader::load_file(Path::new(path)) {
        Ok(program) => program,
        Err(e) => {
            error!("failed to load {}: {}", path, e);
            process::exit(1);
        }
    };
    info!("loaded {} bytes from {}", program.len(), path);

    let mut cpu = Cpu::new();
    cpu.set_trace(trace);
    if let Err(e) = cpu.load(&program) {
        error!("failed to load {}: {}", path, e);
        process::exit(1);
    }
    if let Err(e) = cpu.run() {
        error!("{}", e);
        process::exit(1);
    }
}

const USAGE: &str = "\
LS-8 Emulator

USAGE:
    {program} <program.ls8> [OPTIONS]

ARGS:
    <program.ls8>    Program file, one 8-bit binary literal per line;
                     `#` starts a comment

OPTIONS:
    --trace          Print the PC, instruction bytes, and registers before
                     each step
    -h, --help       Print this help message

EXAMPLES:
    # Print the number 8
    {program} programs/print8.ls8

    # Watch a program execute step by step
    {program} programs/mult.ls8 --trace
";

/// Prints usage information to stderr.
fn print_usage(program: &str) {
    eprintln!("{}", USAGE.replace("{program}", program));
}
