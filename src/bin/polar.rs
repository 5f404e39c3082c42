use std::path::{Path, PathBuf};

use airframe_aero::case::{self, CaseResult};
use airframe_aero::config::{CaseConfig, find_case, load_cases};
use airframe_aero::export::{polar, summary};
use airframe_aero::regression;
use airframe_aero::units::rad_to_deg;
use clap::Parser;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Blend AERODAS pre/post-stall curves into aircraft lift and drag polars"
)]
struct Cli {
    /// Case file (YAML list or TOML) or directory of TOML cases
    #[arg(long, default_value = "configs/cases")]
    cases: PathBuf,

    /// Only evaluate the named case (case-insensitive)
    #[arg(long)]
    name: Option<String>,

    /// Polar CSV output; `-` writes to stdout. Requires a single case.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Also write a `<stem>_summary.json` sidecar next to the CSV file
    #[arg(long, default_value_t = false, requires = "output")]
    summary: bool,

    /// Compare results against each case's truth block and fail on deviation
    #[arg(long, default_value_t = false)]
    check_truth: bool,
}

fn main() -> anyhow::Result<()> {
    airframe_aero::init_tracing();
    let cli = Cli::parse();

    let catalog = load_cases(&cli.cases)?;
    let selected: Vec<&CaseConfig> = match &cli.name {
        Some(name) => vec![
            find_case(&catalog, name)
                .ok_or_else(|| anyhow::anyhow!("case '{}' not found in {}", name, cli.cases.display()))?,
        ],
        None => catalog.iter().collect(),
    };
    if selected.is_empty() {
        anyhow::bail!("no cases found in {}", cli.cases.display());
    }
    if cli.output.is_some() && selected.len() > 1 {
        anyhow::bail!("--output needs a single case; pick one with --name");
    }
    if cli.summary && cli.output.as_deref() == Some(Path::new("-")) {
        anyhow::bail!("--summary needs a file --output, not stdout");
    }

    // Nothing is written until every selected case has evaluated.
    let results = selected
        .iter()
        .map(|config| case::evaluate(config))
        .collect::<Result<Vec<_>, _>>()?;

    let mut failures = Vec::new();
    for (config, result) in selected.iter().zip(&results) {
        match &cli.output {
            Some(path) => write_outputs(result, path, cli.summary)?,
            None => print_table(result),
        }

        if cli.check_truth {
            match &config.truth {
                Some(truth) => {
                    let report = regression::check(result, truth)?;
                    eprint!("{report}");
                    if !report.passed() {
                        failures.push(report.case);
                    }
                }
                None => eprintln!("{}: no truth values stored, skipped", result.name),
            }
        }
    }

    if !failures.is_empty() {
        anyhow::bail!("truth check failed for: {}", failures.join(", "));
    }
    Ok(())
}

fn write_outputs(result: &CaseResult, path: &Path, with_summary: bool) -> anyhow::Result<()> {
    let rows = polar::rows(
        &result.alpha_rad,
        &result.aggregate.lift_coefficient,
        &result.aggregate.drag_coefficient,
    )?;
    polar::write_polar(polar::writer_for_path(path)?, &rows)?;

    if with_summary {
        let sidecar = summary::sidecar_path(path);
        summary::write_summary(&sidecar, &summary::summarize(&result.name, &rows))?;
    }
    Ok(())
}

fn print_table(result: &CaseResult) {
    println!("=== {} ===", result.name);
    println!("{:>10} {:>12} {:>12}", "alpha_deg", "CL", "CD");
    for ((alpha, cl), cd) in result
        .alpha_rad
        .iter()
        .zip(&result.aggregate.lift_coefficient)
        .zip(&result.aggregate.drag_coefficient)
    {
        println!("{:>10.3} {:>12.6} {:>12.6}", rad_to_deg(*alpha), cl, cd);
    }
}
