//! Beta-binomial density explorer CLI.
//!
//! A thin reference caller for the engine: read parameters, evaluate once,
//! print the payload to stdout, exit. Logs go to stderr.

use bb_core::error::Error;
use bb_core::output::{render, OutputFormat};
use bb_core::params::DistributionParameters;
use bb_core::{engine, logging};
use clap::Parser;

/// Exit code for parameter-domain errors.
const EXIT_DOMAIN: i32 = 2;

/// Evaluate the beta-binomial PMF and CDF for one parameter set
#[derive(Parser)]
#[command(name = "bb", author, version, about)]
struct Cli {
    /// Number of trials
    #[arg(short, long, default_value_t = 10)]
    n: u32,

    /// Shape parameter alpha of the mixing Beta prior
    #[arg(short = 'a', long, default_value_t = 2.0)]
    alpha: f64,

    /// Shape parameter beta of the mixing Beta prior
    #[arg(short = 'b', long, default_value_t = 2.0)]
    beta: f64,

    /// Also evaluate the continuous Beta(alpha, beta) reference curves on
    /// this many evenly spaced points in [0, 1]
    #[arg(long, value_name = "POINTS")]
    beta_grid: Option<usize>,

    /// Output format
    #[arg(short = 'f', long, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Errors only
    #[arg(short, long)]
    quiet: bool,
}

fn run(cli: &Cli) -> bb_core::Result<String> {
    let params = DistributionParameters::new(cli.n, cli.alpha, cli.beta)?;
    let payload = engine::evaluate(&params, cli.beta_grid)?;
    render(&payload, cli.format)
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(rendered) => println!("{rendered}"),
        Err(err) => {
            eprintln!("error: {err}");
            let code = match err {
                Error::Domain { .. } => EXIT_DOMAIN,
                _ => 1,
            };
            std::process::exit(code);
        }
    }
}
