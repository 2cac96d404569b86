use std::path::PathBuf;

/// Parse series and neighbourhood data files for plotting
#[derive(clap::Parser, Debug)]
#[command(name = "rusty-districts", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Read an x/y series file (`x y1 y2 ...` per line)
    Series(SeriesArgs),

    /// Read a neighbourhood outline file
    Neighbourhoods(NeighbourhoodArgs),
}

#[derive(clap::Args, Debug)]
pub struct SeriesArgs {
    /// Input series file, e.g. plenty.data
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Write the parsed series as JSON
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub json: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct NeighbourhoodArgs {
    /// Input neighbourhood file, e.g. natural_neighbourhoods.dat
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Do not assign sequential indices to names
    #[arg(long)]
    pub no_index: bool,

    /// Write neighbourhoods and warnings as JSON
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub json: Option<PathBuf>,

    /// Write one `name,index,vertex,x,y` row per coordinate
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub csv: Option<PathBuf>,

    /// Exit with failure if anything was skipped
    #[arg(long)]
    pub strict: bool,
}

impl Cli {
    /// Default log filter for the requested verbosity; `RUST_LOG` wins.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
