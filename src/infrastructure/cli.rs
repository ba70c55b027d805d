use std::path::PathBuf;

use clap::Parser;

use crate::domain::route::Route;
use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 10.0,
        value_parser = positive_rate
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0,
        value_parser = positive_rate
    )]
    pub frame_rate: f64,

    #[arg(
        short,
        long,
        value_name = "PATH",
        help = "Page to open: /, /solar, /wind or /dmfc",
        default_value = "/"
    )]
    pub route: Route,

    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Dataset to show instead of the bundled one"
    )]
    pub dataset: Option<PathBuf>,

    #[arg(long, help = "Show every section immediately")]
    pub no_reveal: bool,

    #[arg(long, help = "Validate the dataset, print a summary and exit")]
    pub check: bool,
}

fn positive_rate(s: &str) -> Result<f64, String> {
    let rate: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if rate.is_finite() && rate > 0.0 {
        Ok(rate)
    } else {
        Err(format!("{s} is not a positive number"))
    }
}
