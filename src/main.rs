use std::io::{
    self,
    BufWriter,
    Write
};
use std::path::PathBuf;

use anyhow::{
    Context,
    Result,
    anyhow
};
use clap::{
    Parser,
    Subcommand
};
use tracing::info;

use mathnotes::configuration::Configuration;
use mathnotes::manager::manager::IManager;
use mathnotes::math::series::functionprovider::StandardFunctionProvider;
use mathnotes::math::series::seriesevaluator::SeriesEvaluator;
use mathnotes::math::series::seriestable::SeriesTable;
use mathnotes::math::series::termfunction::SeriesKind;
use mathnotes::notebook::export::{
    write_curve_csv,
    write_population_csv,
    write_surface_csv
};
use mathnotes::notebook::seriessetting::SeriesSetting;

#[derive(Parser)]
#[command(
    name = "mathnotes",
    version,
    about = "Maclaurin tables, spirals, log horns and predator/prey populations"
)]
struct Cli {
    /// JSON file of named notebook settings (built-in defaults when omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a table of Maclaurin partial sums against the true value
    Series {
        /// Named series setting
        #[arg(short, long, conflicts_with_all = ["kind", "x", "terms"])]
        setting: Option<String>,

        /// Series to expand: exp, sin, cos, sinh, cosh, ln_1p, atan
        #[arg(short, long, value_parser = parse_series_kind, requires_all = ["x", "terms"])]
        kind: Option<SeriesKind>,

        /// Evaluation point
        #[arg(short, long, allow_negative_numbers = true)]
        x: Option<f64>,

        /// Number of terms to sum
        #[arg(short, long)]
        terms: Option<usize>,

        /// Digits after the decimal point
        #[arg(short, long, default_value = "12")]
        precision: usize,
    },

    /// Sample a spiral as x,y CSV
    Spiral {
        #[arg(short, long)]
        setting: String,
    },

    /// Sample the log horn surface as i,j,x,y,z CSV
    Horn {
        #[arg(short, long)]
        setting: String,
    },

    /// Integrate a Lotka-Volterra system as t,prey,predator CSV
    Population {
        #[arg(short, long)]
        setting: String,
    },

    /// List the available settings
    List,
}

fn parse_series_kind(name: &str) -> Result<SeriesKind, String> {
    SeriesKind::parse(name).ok_or_else(|| {
        let known: Vec<&str> = SeriesKind::ALL.iter().map(|kind| kind.reference_name()).collect();
        format!("unknown series '{}', expected one of {}", name, known.join(", "))
    })
}

fn load_configuration(path: Option<PathBuf>) -> Result<Configuration> {
    match path {
        Some(path) => {
            let config = Configuration::new();
            config
                .from_path(&path)
                .with_context(|| format!("failed to load configuration from {}", path.display()))?;
            Ok(config)
        }
        None => Configuration::default_notebooks().context("built-in configuration is invalid"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let config = load_configuration(cli.config)?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command {
        Commands::Series { setting, kind, x, terms, precision } => {
            let series_setting = match (setting, kind, x, terms) {
                (Some(name), _, _, _) => config.series_setting_manager().get(&name)?,
                (None, Some(kind), Some(x), Some(terms)) => SeriesSetting::new(kind, x, terms),
                _ => return Err(anyhow!("either --setting or all of --kind, --x and --terms are required")),
            };
            let evaluator = SeriesEvaluator::new(StandardFunctionProvider::new());
            let result = series_setting.evaluate(&evaluator)?;
            info!(function = result.function_name(), rows = result.len(), "rendering series table");
            write!(out, "{}", SeriesTable::new(&result).with_precision(precision))?;
        }
        Commands::Spiral { setting } => {
            let spiral_setting = config.spiral_setting_manager().get(&setting)?;
            write_curve_csv(&mut out, &spiral_setting.sample())?;
        }
        Commands::Horn { setting } => {
            let horn_setting = config.log_horn_setting_manager().get(&setting)?;
            write_surface_csv(&mut out, &horn_setting.sample())?;
        }
        Commands::Population { setting } => {
            let population_setting = config.lotka_volterra_setting_manager().get(&setting)?;
            write_population_csv(&mut out, &population_setting.solve()?)?;
        }
        Commands::List => {
            for (section, name) in config.setting_names() {
                writeln!(out, "{section}\t{name}")?;
            }
        }
    }

    out.flush()?;
    Ok(())
}
