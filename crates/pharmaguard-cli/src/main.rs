//! PharmaGuard CLI - headless runs of the landing-page hero animation

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{config, parse_time, render, simulate, HeroArgs};

#[derive(Parser)]
#[command(name = "pharmaguard")]
#[command(about = "Simulate and render the PharmaGuard hero particle animation", long_about = None)]
#[command(version)]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the animation headless and report how it ended
    Simulate {
        #[command(flatten)]
        hero: HeroArgs,

        /// Stop after this much simulated time
        #[arg(long, default_value = "60000", value_parser = parse_time)]
        max_ms: f64,

        /// Pace frames against the wall clock instead of simulating them
        #[arg(long)]
        realtime: bool,

        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = parse_format)]
        format: String,
    },

    /// Render the frame on screen at a given time to a PNG image
    Render {
        #[command(flatten)]
        hero: HeroArgs,

        /// Timestamp to capture; defaults to the settled frame
        #[arg(long, value_parser = parse_time)]
        at: Option<f64>,

        /// Output image path
        #[arg(short, long, default_value = "hero.png")]
        output: String,

        /// Opaque background color (#rrggbb); transparent when omitted
        #[arg(long)]
        background: Option<String>,
    },

    /// Print the default configuration, or validate a config file
    Config {
        /// Config file to validate instead of printing defaults
        #[arg(long)]
        check: Option<String>,
    },
}

fn parse_format(s: &str) -> Result<String, String> {
    match s {
        "text" | "json" => Ok(s.to_string()),
        _ => Err(format!("unknown format '{}'; valid values: text, json", s)),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Simulate {
            hero,
            max_ms,
            realtime,
            format,
        } => simulate::run(simulate::SimulateArgs {
            hero,
            max_ms,
            realtime,
            format,
        }),
        Commands::Render {
            hero,
            at,
            output,
            background,
        } => render::run(render::RenderArgs {
            hero,
            at,
            output,
            background,
        }),
        Commands::Config { check } => config::run(check.as_deref()),
    }
}
