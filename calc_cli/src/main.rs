//! # Faultline CLI Application
//!
//! Terminal front end for the calc_core calculators. Each invocation runs one
//! calculation and prints it as text or, with `--json`, as JSON.
//!
//! ```text
//! calc_cli cable --sm 1300 --ik 2500 --tf 2.5
//! calc_cli short-circuit --sk 200
//! calc_cli network --rsn 10.65 --xsn 24.02 --rsn-min 34.88 --xsn-min 65.68
//! calc_cli --ratings substation.toml eval request.json --json
//! ```

mod cli;
mod render;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

use calc_core::calculations::{
    CableInput, CalculationRequest, NetworkInput, PrecisionMode, ShortCircuitInput,
};
use calc_core::equations::{equations_for, generate_equations_markdown, ALL_EQUATIONS};
use calc_core::format::parse_or_zero;
use calc_core::{load_ratings, load_request, save_ratings, CalcError, EquipmentRatings};

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: logging unavailable: {}", e);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            if cli.json {
                if let Some(calc_error) = e.downcast_ref::<CalcError>() {
                    if let Ok(json) = serde_json::to_string_pretty(calc_error) {
                        eprintln!("{}", json);
                    }
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let ratings = match &cli.ratings {
        Some(path) => load_ratings(path)
            .with_context(|| format!("loading ratings from {}", path.display()))?,
        None => EquipmentRatings::default(),
    };

    let request = match &cli.command {
        Commands::Cable { sm, ik, tf } => CalculationRequest::Cable(CableInput {
            sm: parse_or_zero(sm),
            ik: parse_or_zero(ik),
            tf: parse_or_zero(tf),
        }),
        Commands::ShortCircuit { sk } => CalculationRequest::ShortCircuit(ShortCircuitInput {
            sk: parse_or_zero(sk),
        }),
        Commands::Network {
            rsn,
            xsn,
            rsn_min,
            xsn_min,
            full_precision,
        } => CalculationRequest::Network(NetworkInput {
            rsn: parse_or_zero(rsn),
            xsn: parse_or_zero(xsn),
            rsn_min: parse_or_zero(rsn_min),
            xsn_min: parse_or_zero(xsn_min),
            precision: if *full_precision {
                PrecisionMode::Full
            } else {
                PrecisionMode::Legacy
            },
        }),
        Commands::Eval { request } => load_request(request)
            .with_context(|| format!("reading request {}", request.display()))?,
        Commands::Ratings { out } => {
            match out {
                Some(path) => {
                    save_ratings(&ratings, path)
                        .with_context(|| format!("writing ratings to {}", path.display()))?;
                    info!(path = %path.display(), "ratings written");
                }
                None if cli.json => print_json(&ratings)?,
                None => print!("{}", ratings.to_toml_string()?),
            }
            return Ok(());
        }
        Commands::Equations { calculator } => {
            match calculator {
                Some(calc) => {
                    let equations = equations_for(calc.calc_type());
                    if cli.json {
                        print_json(&equations)?;
                    } else {
                        print!("{}", render::equations(&equations));
                    }
                }
                None if cli.json => print_json(&ALL_EQUATIONS)?,
                None => print!("{}", generate_equations_markdown()),
            }
            return Ok(());
        }
    };

    let output = request.evaluate(&ratings);
    if cli.json {
        print_json(&output)?;
    } else {
        print!("{}", render::output(&output));
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serializing output")?;
    println!("{}", json);
    Ok(())
}
