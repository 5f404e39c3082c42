use airframe_aero::noise::{combine_airframe_engine, decibel_sum};
use clap::Parser;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Combine noise levels on the decibel scale"
)]
struct Cli {
    /// Airframe level in dB (e.g. EPNL)
    #[arg(long, conflicts_with = "levels")]
    airframe: Option<f64>,

    /// Engine level in dB
    #[arg(long, requires = "airframe")]
    engine: Option<f64>,

    /// Leave the engine contribution out of the total
    #[arg(long, default_value_t = false)]
    no_engine: bool,

    /// Arbitrary list of independent source levels in dB
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    levels: Vec<f64>,
}

fn main() -> anyhow::Result<()> {
    airframe_aero::init_tracing();
    let cli = Cli::parse();

    let total = match (cli.airframe, cli.engine) {
        (Some(airframe), Some(engine)) => combine_airframe_engine(airframe, engine, !cli.no_engine)?,
        (Some(airframe), None) => decibel_sum(&[airframe])?,
        (None, _) => decibel_sum(&cli.levels)?,
    };

    println!("{:.3}", total);
    Ok(())
}
