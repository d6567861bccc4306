mod report;

use bd_analysis::{
    AnalysisError, LifetimeOptions, LifetimePredictor, ModelValidator, StressFactorAnalysis,
};
use bd_models::{ModelSpec, StressParameters};
use bd_study::{Study, StudyError};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bd-cli")]
#[command(about = "Battery degradation CLI - lifetime, stress and validation analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate time and cycles to end of life for one operating point
    Lifetime {
        /// Degradation model to use
        #[arg(long, value_enum, default_value_t = ModelKind::SemiEmpirical)]
        model: ModelKind,
        /// Cell temperature in °C
        #[arg(long)]
        temperature: f64,
        /// Average equivalent full cycles per day
        #[arg(long, default_value_t = 1.0)]
        cycles_per_day: f64,
        /// Retention fraction at end of life
        #[arg(long, default_value_t = 0.8)]
        eol: f64,
        /// Simulated horizon in years
        #[arg(long, default_value_t = 30)]
        max_years: u32,
        #[command(flatten)]
        stress: StressArgs,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Compare lifetimes of every scenario in a study file
    Compare {
        /// Path to the study YAML file
        study_path: PathBuf,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Run every stress sweep in a study file
    Sweep {
        /// Path to the study YAML file
        study_path: PathBuf,
        /// Print JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Compute RMSE and MAPE between two comma-separated series
    Metrics {
        /// Predicted values
        #[arg(long, value_delimiter = ',', required = true)]
        predicted: Vec<f64>,
        /// Reference (measured) values
        #[arg(long, value_delimiter = ',', required = true)]
        actual: Vec<f64>,
    },
    /// Validate study file syntax and structure
    Check {
        /// Path to the study YAML file
        study_path: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModelKind {
    Empirical,
    SemiEmpirical,
    Mechanistic,
}

impl ModelKind {
    fn spec(self) -> ModelSpec {
        match self {
            Self::Empirical => ModelSpec::empirical(),
            Self::SemiEmpirical => ModelSpec::semi_empirical(),
            Self::Mechanistic => ModelSpec::mechanistic(),
        }
    }
}

#[derive(clap::Args)]
struct StressArgs {
    /// Average state of charge (0-1)
    #[arg(long)]
    soc: Option<f64>,
    /// Depth of discharge (0-1)
    #[arg(long)]
    dod: Option<f64>,
    /// C-rate
    #[arg(long)]
    c_rate: Option<f64>,
}

impl StressArgs {
    fn to_stress(&self) -> StressParameters {
        StressParameters {
            soc_avg: self.soc,
            dod: self.dod,
            c_rate: self.c_rate,
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Study(#[from] StudyError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Lifetime {
            model,
            temperature,
            cycles_per_day,
            eol,
            max_years,
            stress,
            json,
        } => {
            let options = LifetimeOptions {
                cycles_per_day,
                eol_threshold: eol,
                max_years,
            };
            cmd_lifetime(model, temperature, &options, &stress.to_stress(), json)
        }
        Commands::Compare { study_path, json } => cmd_compare(&study_path, json),
        Commands::Sweep { study_path, json } => cmd_sweep(&study_path, json),
        Commands::Metrics { predicted, actual } => cmd_metrics(&predicted, &actual),
        Commands::Check { study_path } => cmd_check(&study_path),
    }
}

fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn load_study(path: &Path) -> CliResult<Study> {
    tracing::info!(path = %path.display(), "loading study");
    Ok(bd_study::load_yaml(path)?)
}

fn cmd_lifetime(
    kind: ModelKind,
    temperature: f64,
    options: &LifetimeOptions,
    stress: &StressParameters,
    json: bool,
) -> CliResult<()> {
    let model = kind.spec().build();
    let predictor = LifetimePredictor::new(&*model);
    let eol = predictor.estimate_lifetime(temperature, options, stress)?;

    if json {
        return print_json(&eol);
    }

    println!("Model:        {}", model.name());
    println!("Temperature:  {temperature:.1} °C");
    println!("EOL at:       {:.0}% retention", options.eol_threshold * 100.0);
    match (eol.years(), eol.cycles()) {
        (Some(years), Some(cycles)) => {
            println!("Lifetime:     {years:.1} years");
            println!("Cycles:       {cycles:.0}");
        }
        _ => println!("Lifetime:     >{} years (not reached)", options.max_years),
    }
    Ok(())
}

fn cmd_compare(study_path: &Path, json: bool) -> CliResult<()> {
    let study = load_study(study_path)?;
    let model = study.model.build();
    let options = study.lifetime_options();

    let predictor = LifetimePredictor::new(&*model);
    let comparison = predictor.compare_scenarios(&study.scenario_set()?, &options)?;

    if json {
        return print_json(&comparison);
    }
    println!("{} ({})", study.name, model.name());
    print!("{}", report::comparison_table(&comparison, options.cycles_per_day));
    Ok(())
}

fn cmd_sweep(study_path: &Path, json: bool) -> CliResult<()> {
    let study = load_study(study_path)?;
    let model = study.model.build();
    let analysis = StressFactorAnalysis::new(&*model);

    let mut results = Vec::with_capacity(study.sweeps.len());
    for sweep in &study.sweeps {
        results.push(analysis.sweep(
            sweep.variable,
            &sweep.sweep_values(),
            sweep.temperature,
            &sweep.options(),
            &sweep.stress,
        )?);
    }

    if json {
        return print_json(&results);
    }
    for result in &results {
        println!("{}", report::sweep_table(result));
    }
    Ok(())
}

fn cmd_metrics(predicted: &[f64], actual: &[f64]) -> CliResult<()> {
    // Metrics do not depend on the wrapped model.
    let model = ModelSpec::default().build();
    let validator = ModelValidator::new(&*model);

    println!("RMSE: {:.6}", validator.calculate_rmse(predicted, actual)?);
    match validator.calculate_mape(predicted, actual) {
        Ok(mape) => println!("MAPE: {mape:.4} %"),
        Err(e) => println!("MAPE: undefined ({e})"),
    }
    Ok(())
}

fn cmd_check(study_path: &Path) -> CliResult<()> {
    println!("Validating study: {}", study_path.display());
    let study = load_study(study_path)?;
    println!("✓ Study is valid");
    println!(
        "  {} scenario(s), {} sweep(s)",
        study.scenarios.len(),
        study.sweeps.len()
    );
    Ok(())
}
