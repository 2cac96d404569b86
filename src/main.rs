mod cli;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands, NeighbourhoodArgs, SeriesArgs};
use rusty_districts::data::neighbourhood::ParseOptions;
use rusty_districts::data::{export, loader};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let env = env_logger::Env::default()
        .default_filter_or(cli.log_level());
    env_logger::Builder::from_env(env).init();

    match &cli.command {
        Commands::Series(args) => run_series(args),
        Commands::Neighbourhoods(args) => run_neighbourhoods(args),
    }
}

fn run_series(args: &SeriesArgs) -> Result<ExitCode> {
    let data = loader::load_series(&args.input)?;

    match data.x_range() {
        Some((lo, hi)) => println!("{} records, x in [{lo}, {hi}]", data.len()),
        None => println!("no records in {}", args.input.display()),
    }
    for j in 0..data.max_width() {
        let points = data.column(j).len();
        log::debug!("y column {j}: {points} points");
    }

    if let Some(path) = &args.json {
        export::write_json(&data, path)?;
    }
    Ok(ExitCode::SUCCESS)
}

fn run_neighbourhoods(args: &NeighbourhoodArgs) -> Result<ExitCode> {
    let options = ParseOptions {
        track_index: !args.no_index,
    };
    let report = loader::load_neighbourhoods(&args.input, &options)?;
    let map = &report.neighbourhoods;

    for (name, entry) in map.iter() {
        let label = entry.index.map(|i| format!("{i}. ")).unwrap_or_default();
        println!("{label}{name} ({} points)", entry.coordinates.len());
    }
    if let Some(b) = map.bounds() {
        log::info!(
            "extent: x [{}, {}], y [{}, {}]",
            b.min_x,
            b.max_x,
            b.min_y,
            b.max_y
        );
    }

    if let Some(path) = &args.json {
        export::write_json(&report, path)?;
    }
    if let Some(path) = &args.csv {
        export::write_neighbourhoods_csv_file(map, path)?;
    }

    if report.has_warnings() {
        eprintln!("{} warnings, see log for details", report.warnings.len());
        if args.strict {
            return Ok(ExitCode::FAILURE);
        }
    }
    Ok(ExitCode::SUCCESS)
}
