use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use facemetric_core::tips::list_tips;
use facemetric_core::{
    analyze_detection, styling_tips, AnalysisData, DetectionResult, FaceShape, ManualMeasurements,
};
use facemetric_store::{AnalysisSource, HistoryStore};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod config;
mod output;

use config::Config;

#[derive(Parser)]
#[command(name = "facemetric", about = "Face shape and golden-ratio analysis")]
struct Cli {
    /// User whose history is read or written (default: $FACEMETRIC_USER, then $USER)
    #[arg(long, global = true)]
    user: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a face-mesh detection result (JSON file, or "-" for stdin)
    Analyze {
        file: PathBuf,
        /// How the image was obtained
        #[arg(long, value_enum, default_value_t = ImageSource::Upload)]
        source: ImageSource,
        /// Append the result to history
        #[arg(long)]
        save: bool,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Classify from hand-taken measurements (any shared unit)
    Manual {
        #[arg(long, allow_hyphen_values = true)]
        face_length: String,
        #[arg(long, allow_hyphen_values = true)]
        cheek_width: String,
        #[arg(long, allow_hyphen_values = true)]
        jaw_width: String,
        #[arg(long, allow_hyphen_values = true)]
        forehead_width: String,
        /// Append the result to history
        #[arg(long)]
        save: bool,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List past analyses, newest first
    History {
        /// Maximum number of records (default: $FACEMETRIC_HISTORY_LIMIT or 50)
        #[arg(short, long)]
        limit: Option<usize>,
        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete all past analyses for the user
    ClearHistory,
    /// Show styling tips for a face shape, or for every shape
    Tips {
        /// Shape name, e.g. "oval" or "HEART"; omit to list all
        shape: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ImageSource {
    Camera,
    Upload,
}

impl From<ImageSource> for AnalysisSource {
    fn from(src: ImageSource) -> Self {
        match src {
            ImageSource::Camera => AnalysisSource::Camera,
            ImageSource::Upload => AnalysisSource::Upload,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env();
    config.override_user(cli.user);
    tracing::debug!(db = %config.db_path.display(), user = %config.user, "configuration loaded");

    match cli.command {
        Commands::Analyze {
            file,
            source,
            save,
            json,
        } => {
            let raw = read_input(&file)?;
            let detection = DetectionResult::from_json(&raw)
                .with_context(|| format!("failed to parse {}", file.display()))?;
            let Some(data) = analyze_detection(&detection) else {
                bail!("no face detected");
            };
            if data.shape == FaceShape::Unknown {
                tracing::warn!("face mesh has too few landmarks; reporting sentinel result");
            }
            report(&data, true, json)?;
            if save {
                save_result(&config, &data, source.into())?;
            }
        }
        Commands::Manual {
            face_length,
            cheek_width,
            jaw_width,
            forehead_width,
            save,
            json,
        } => {
            let measurements =
                ManualMeasurements::parse(&face_length, &cheek_width, &jaw_width, &forehead_width)
                    .context("invalid measurements")?;
            let data = measurements.analyze();
            report(&data, false, json)?;
            if save {
                save_result(&config, &data, AnalysisSource::Manual)?;
            }
        }
        Commands::History { limit, json } => {
            let store = open_store(&config)?;
            let items = store.recent(&config.user, limit.unwrap_or(config.history_limit))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else {
                print!("{}", output::render_history(&items));
            }
        }
        Commands::ClearHistory => {
            let store = open_store(&config)?;
            let removed = store.clear(&config.user)?;
            println!("Removed {removed} record(s) for {}", config.user);
        }
        Commands::Tips { shape: None } => {
            print!("{}", output::render_all_tips(list_tips()));
        }
        Commands::Tips { shape: Some(shape) } => {
            let shape: FaceShape = shape.parse()?;
            let tips = styling_tips(shape)
                .with_context(|| format!("no styling tips for {shape}"))?;
            print!("{}", output::render_tips(tips));
        }
    }

    Ok(())
}

fn read_input(file: &Path) -> Result<String> {
    if file.as_os_str() == "-" {
        std::io::read_to_string(std::io::stdin()).context("failed to read stdin")
    } else {
        std::fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))
    }
}

fn report(data: &AnalysisData, measured: bool, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(data)?);
    } else {
        print!("{}", output::render_analysis(data, measured));
    }
    Ok(())
}

fn open_store(config: &Config) -> Result<HistoryStore> {
    HistoryStore::open(&config.db_path)
        .with_context(|| format!("failed to open history at {}", config.db_path.display()))
}

fn save_result(config: &Config, data: &AnalysisData, source: AnalysisSource) -> Result<()> {
    let store = open_store(config)?;
    let item = store.add(&config.user, data, source)?;
    println!("Saved as {}", item.id);
    Ok(())
}
