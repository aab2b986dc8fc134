//! Regenerate the equation reference from the registry.
//!
//! ```bash
//! cargo run --bin gen-equations                 # write the default file
//! cargo run --bin gen-equations -- --check      # fail if it is stale
//! cargo run --bin gen-equations -- docs/EQ.md   # write somewhere else
//! ```
//!
//! Paths are relative to the workspace root.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use calc_core::equations::{generate_equations_markdown, ALL_EQUATIONS};

const DEFAULT_OUTPUT: &str = "calc_core/src/equations/EQUATIONS.md";

fn main() -> ExitCode {
    let mut check = false;
    let mut output = PathBuf::from(DEFAULT_OUTPUT);
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--check" => check = true,
            _ => output = PathBuf::from(&arg),
        }
    }

    let markdown = generate_equations_markdown();

    if check {
        return match fs::read_to_string(&output) {
            Ok(current) if current == markdown => ExitCode::SUCCESS,
            Ok(_) => {
                eprintln!("{} is out of date; run gen-equations", output.display());
                ExitCode::FAILURE
            }
            Err(e) => {
                eprintln!("cannot read {}: {}", output.display(), e);
                ExitCode::FAILURE
            }
        };
    }

    if let Err(e) = fs::write(&output, &markdown) {
        eprintln!("cannot write {}: {}", output.display(), e);
        return ExitCode::FAILURE;
    }
    println!("{} equations, {} bytes -> {}", ALL_EQUATIONS.len(), markdown.len(), output.display());
    ExitCode::SUCCESS
}
