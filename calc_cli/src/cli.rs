use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Cable sizing and short-circuit currents", long_about = None)]
pub struct Cli {
    /// Set the logging level
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: tracing::Level,

    /// Equipment ratings file (TOML); defaults are used for anything it omits
    #[arg(long, global = true)]
    pub ratings: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Numeric arguments are taken as text: anything that does not parse is 0.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Size a group of parallel cables
    Cable {
        /// Apparent power of the group, Sm
        #[arg(long, default_value = "1300", allow_hyphen_values = true)]
        sm: String,
        /// Short-circuit current in A, Ik
        #[arg(long, default_value = "2500", allow_hyphen_values = true)]
        ik: String,
        /// Fault clearing time in s, tf
        #[arg(long, default_value = "2.5", allow_hyphen_values = true)]
        tf: String,
    },
    /// Fault current at a single 10 kV bus
    ShortCircuit {
        /// Short-circuit power of the source in MVA, Sk
        #[arg(long, default_value = "200", allow_hyphen_values = true)]
        sk: String,
    },
    /// Fault currents at the 110 kV bus, the 10 kV bus and point 10
    Network {
        /// System resistance, normal mode (ohm)
        #[arg(long, default_value = "10.65", allow_hyphen_values = true)]
        rsn: String,
        /// System reactance, normal mode (ohm)
        #[arg(long, default_value = "24.02", allow_hyphen_values = true)]
        xsn: String,
        /// System resistance, minimum mode (ohm)
        #[arg(long, default_value = "34.88", allow_hyphen_values = true)]
        rsn_min: String,
        /// System reactance, minimum mode (ohm)
        #[arg(long, default_value = "65.68", allow_hyphen_values = true)]
        xsn_min: String,
        /// Derive two-phase currents from unrounded three-phase currents
        #[arg(long)]
        full_precision: bool,
    },
    /// Evaluate a JSON calculation request file
    Eval {
        /// Path to the request file
        request: PathBuf,
    },
    /// Print the effective equipment ratings as TOML
    Ratings {
        /// Write the ratings to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Print the equation reference as markdown (or JSON with --json)
    Equations {
        /// Only the equations behind one calculator
        #[arg(long = "for", value_enum)]
        calculator: Option<Calculator>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Calculator {
    Cable,
    ShortCircuit,
    Network,
}

impl Calculator {
    /// Type name used by calculation requests
    pub fn calc_type(self) -> &'static str {
        match self {
            Calculator::Cable => "Cable",
            Calculator::ShortCircuit => "ShortCircuit",
            Calculator::Network => "Network",
        }
    }
}
