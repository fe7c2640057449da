use clap::{ArgAction, Parser, Subcommand};
use ga_algebra::{CodeFormat, CodeFormatBuilder};

/// Expands products of geometric algebra terms and prints them as code.
///
/// Without a subcommand, every built-in formula is printed.
#[derive(Debug, Parser)]
#[command(name = "ga-solver", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Also print each result as an equation
    #[arg(long, global = true)]
    pub equation: bool,

    /// Suffix appended to numeric literals in generated code
    #[arg(long, global = true, default_value = ".0f", allow_hyphen_values = true)]
    pub suffix: String,

    /// Left-hand side used for the scalar part in generated code
    #[arg(long, global = true, default_value = "scalar")]
    pub scalar_name: String,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable logging
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Rotation of a vector by a quaternion, q v q⁻¹
    Rotate,

    /// Product of two quaternions
    QuatMul,

    /// Product of two whitespace-separated term lists, such as "s izy" and "ax by"
    Product {
        /// The left-hand term list
        lhs: String,

        /// The right-hand term list
        rhs: String,

        /// Code to substitute for a multiplier, as `name=expression`; repeatable
        #[arg(long = "map", value_parser = parse_mapping)]
        mappings: Vec<(String, String)>,

        /// Multiplier names in the order they are sorted within a term, such as `sijkabc`
        #[arg(long)]
        order: Option<String>,
    },
}

/// Parses a `name=expression` code mapping.
fn parse_mapping(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, expr)) if !name.is_empty() => Ok((name.to_string(), expr.to_string())),
        _ => Err(format!("expected `name=expression`, found `{}`", s)),
    }
}

impl Cli {
    /// Initializes the `tracing` subscriber from the verbosity flags, unless `RUST_LOG` is set.
    pub fn init_logging(&self) {
        use tracing_subscriber::{fmt, EnvFilter};

        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    /// The code format selected by the flags.
    pub fn code_format(&self) -> CodeFormat {
        CodeFormatBuilder::new()
            .literal_suffix(self.suffix.as_str())
            .scalar_name(self.scalar_name.as_str())
            .build()
    }
}
