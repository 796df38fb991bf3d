//! FDSHA - Fuzzy Deterministic Seismic Hazard Analysis
//!
//! Command-line front end: one analysis from flags, or an interactive loop.

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use fdsha::{EngineConfig, FdshaEngine, HazardVerdict, Inputs, Outputs, Term};

#[derive(Parser, Debug)]
#[command(name = "fdsha", version, about = "Fuzzy deterministic seismic hazard analysis", long_about = None)]
struct Cli {
    /// Maximum magnitude (Mmax, typically 4.5 to 8.5)
    #[arg(short, long, allow_negative_numbers = true)]
    magnitude: Option<f64>,

    /// Source-to-site distance in km (R, typically 0 to 200)
    #[arg(short = 'r', long, allow_negative_numbers = true)]
    distance: Option<f64>,

    /// Fault type index (F, e.g. thrust 0.08, normal -0.08)
    #[arg(short = 'f', long, allow_negative_numbers = true)]
    fault_index: Option<f64>,

    /// TOML file with engine settings
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of intervals used to integrate the PGA centroid (overrides the config file)
    #[arg(long)]
    resolution: Option<usize>,

    /// Print each analysis as a JSON object
    #[arg(long)]
    json: bool,

    /// Verbose logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Report {
    #[serde(flatten)]
    inputs: Inputs,
    pga: f64,
    verdict: HazardVerdict,
    aggregated: BTreeMap<&'static str, f64>,
}

impl Report {
    fn new(inputs: Inputs, outputs: &Outputs) -> Self {
        Report {
            inputs,
            pga: outputs.pga(),
            verdict: outputs.verdict(),
            aggregated: outputs
                .aggregated()
                .iter()
                .map(|(term, alpha)| (term.name(), alpha))
                .collect(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => EngineConfig::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => EngineConfig::default(),
    };

    if let Some(resolution) = cli.resolution {
        config.resolution = resolution;
    }

    let engine = FdshaEngine::with_config(&config).context("building inference engine")?;

    match (cli.magnitude, cli.distance, cli.fault_index) {
        (Some(magnitude), Some(distance), Some(fault_index)) => {
            let inputs = Inputs::new(magnitude, distance, fault_index);
            let mut stdout = io::stdout().lock();

            report(&mut stdout, &engine, inputs, cli.json)?;
        },
        (None, None, None) => interactive(&engine, cli.json)?,
        _ => bail!("--magnitude, --distance and --fault-index must be given together"),
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn report(out: &mut impl Write, engine: &FdshaEngine, inputs: Inputs, json: bool) -> Result<()> {
    let outputs = engine.eval(&inputs);

    if json {
        let line = serde_json::to_string(&Report::new(inputs, &outputs))?;
        writeln!(out, "{line}")?;
        return Ok(());
    }

    writeln!(out, "\n--- ANALYSIS RESULT ---")?;
    writeln!(out, "Inputs Used:")?;
    writeln!(out, "  - Mmax (Magnitude): {}", inputs.magnitude)?;
    writeln!(out, "  - R (Distance):     {} km", inputs.distance)?;
    writeln!(out, "  - F (Fault Index):  {}", inputs.fault_index)?;
    if let Some((term, alpha)) = outputs.aggregated().dominant() {
        writeln!(out, "\nDominant consequent: {term} (alpha {alpha:.3})")?;
    } else {
        writeln!(out, "\nNo rule fired; using the middle of the PGA range")?;
    }
    writeln!(out, "Calculated Peak Ground Acceleration (PGA): {:.4} g", outputs.pga())?;
    writeln!(out, "Final Hazard Verdict: {}", outputs.verdict())?;
    writeln!(out, "-----------------------")?;

    Ok(())
}

fn interactive(engine: &FdshaEngine, json: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout().lock();

    writeln!(stdout, " Fuzzy Deterministic Seismic Hazard Analysis (FDSHA) ")?;

    loop {
        let prompts = [
            "Enter Maximum Magnitude (Mmax, typically 4.5 to 8.5): ",
            "Enter Source-to-Site Distance (R, in km, typically 0 to 200): ",
            "Enter Fault Type Index (F, e.g., Thrust: 0.08, Normal: -0.08): ",
        ];
        let mut values = [0.; 3];

        for (value, prompt) in values.iter_mut().zip(prompts) {
            match prompt_f64(&mut lines, &mut stdout, prompt)? {
                Some(v) => *value = v,
                None => return Ok(()),
            }
        }

        let [magnitude, distance, fault_index] = values;

        report(&mut stdout, engine, Inputs::new(magnitude, distance, fault_index), json)?;

        write!(
            stdout,
            "\nDo you want to run another analysis? (Enter 'y' to continue, any other key to end): "
        )?;
        stdout.flush()?;

        let answer = match lines.next() {
            Some(line) => line.context("reading answer")?,
            None => String::new(),
        };

        if !answer.trim().to_lowercase().starts_with('y') {
            break;
        }
    }

    writeln!(stdout, "\nProgram ended.")?;

    Ok(())
}

/// Prompts until a finite number is entered. `None` on end of input.
fn prompt_f64(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    out: &mut impl Write,
    prompt: &str,
) -> Result<Option<f64>> {
    loop {
        write!(out, "{prompt}")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let line = line.context("reading input")?;

        match line.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => return Ok(Some(value)),
            _ => {
                tracing::debug!(input = %line.trim(), "rejected non-numeric input");
                writeln!(out, "Invalid input. Please enter a number.")?;
            },
        }
    }
}
