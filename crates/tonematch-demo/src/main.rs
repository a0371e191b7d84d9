//! Command-line front end for the matching engine.
//!
//! Feeds one or more skin samples through stabilization and palette
//! selection, then prints the palette either as a human-readable summary
//! or as JSON. Set `RUST_LOG=debug` to see the scoring trace.

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tonematch_core::{
    BRAND_COLORS, MatchError, PaletteResult, Strategy, median_skin_hex, select_palette_with,
    style_insight,
};

#[derive(Debug, Parser)]
#[command(name = "tonematch", about = "Match a skin tone to the brand palette")]
struct Args {
    /// One or more sampled skin colors (#RRGGBB).
    #[arg(required = true)]
    samples: Vec<String>,

    /// Selection strategy.
    #[arg(long, value_enum, default_value_t = StrategyArg::Weighted)]
    strategy: StrategyArg,

    /// Emit the result as JSON instead of a summary.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    Weighted,
    Nearest,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Weighted => Self::Weighted,
            StrategyArg::Nearest => Self::Nearest,
        }
    }
}

fn run(args: &Args) -> Result<PaletteResult, MatchError> {
    let base = median_skin_hex(&args.samples)?;
    debug!(%base, samples = args.samples.len(), "stabilized skin tone");
    select_palette_with(args.strategy.into(), &base, &BRAND_COLORS)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let result = match run(&args) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        let insight = style_insight(result.style);
        println!("{} — {}", insight.display_name, insight.title);
        for c in &result.colors {
            println!("  {:>2}  {}  {}  [{}]", c.id, c.hex, c.name, c.style.label());
        }
        println!("{}", insight.cta);
    }
    ExitCode::SUCCESS
}
