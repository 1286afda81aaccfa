//! Galactic Analytics - CLI Entry Point
//!
//! Thin collaborator over the library, standing in for the original UI
//! layer: it selects a file, sequences the analysis state through the
//! pipeline, renders highlights, and manages the stored history.

use std::path::Path;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tokio::sync::mpsc;

use galactic_analytics::{
    AnalysisState, AnalysisStatus, ConfigService, CsvAnalysisService, HistoryStore,
    NewHistoryItem, SelectedFile, SettingsUpdate,
};
use galactic_analytics_core::{is_csv_file, AnalysisStreamEvent};

#[derive(Parser)]
#[command(name = "galactic-analytics")]
#[command(about = "Intergalactic spend analytics for CSV files")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a CSV file against the aggregation endpoint
    Analyze {
        /// Path to the CSV file
        file: std::path::PathBuf,
    },
    /// Manage the stored analysis history
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },
    /// Show or update the configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum HistoryCommands {
    /// List past analyses, newest first
    List,
    /// Remove one history entry by id
    Remove { id: String },
    /// Clear the entire history
    Clear,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the resolved configuration
    Show,
    /// Set the analysis endpoint host
    SetHost { host: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze { file } => run_analysis(&file).await,
        Commands::History { command } => run_history(command),
        Commands::Config { command } => run_config(command),
    }
}

/// Drive one analysis: sequence the state container through processing,
/// stream the pipeline, record the attempt in history, and render the
/// outcome. Failed analyses are recorded too, without highlights.
async fn run_analysis(path: &Path) -> anyhow::Result<ExitCode> {
    let file = SelectedFile::from_path(path)?;
    if !is_csv_file(&file.name) {
        anyhow::bail!("{} is not a CSV file", file.name);
    }

    let config = ConfigService::new()?;
    let history = HistoryStore::new()?;
    let service = CsvAnalysisService::new(config.api_host());

    let mut state = AnalysisState::new();
    state.set_file(Some(file.clone()));
    state.set_status(AnalysisStatus::Processing);

    let (tx, mut rx) = mpsc::channel(16);
    service.analyze(&file, tx).await;

    let mut record_highlights = None;
    while let Some(event) = rx.recv().await {
        match event {
            AnalysisStreamEvent::Data {
                highlights,
                highlights_to_store,
            } => {
                state.set_highlights(highlights_to_store);
                record_highlights = Some(highlights);
            }
            AnalysisStreamEvent::Complete => {
                state.set_status(AnalysisStatus::Completed);
            }
            AnalysisStreamEvent::Error { error } => {
                state.set_error(Some(error.to_string()));
                state.set_status(AnalysisStatus::Error);
            }
        }
    }

    let item = history.add_to_history(NewHistoryItem {
        file_name: file.name.clone(),
        highlights: record_highlights,
    })?;
    tracing::debug!(id = %item.id, "analysis recorded in history");

    if state.status() == AnalysisStatus::Completed {
        println!("Highlights for {}:", file.name);
        for highlight in state.highlights() {
            println!("  {:>12}  {}", highlight.title, highlight.description);
        }
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!(
            "Analysis failed: {}",
            state.error().unwrap_or("unknown error")
        );
        Ok(ExitCode::FAILURE)
    }
}

fn run_history(command: HistoryCommands) -> anyhow::Result<ExitCode> {
    let store = HistoryStore::new()?;
    match command {
        HistoryCommands::List => {
            let history = store.get_history();
            if history.is_empty() {
                println!("No analyses recorded yet.");
            }
            for item in history {
                let when = chrono::DateTime::from_timestamp_millis(item.timestamp)
                    .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                    .unwrap_or_else(|| "unknown time".to_string());
                let outcome = if item.is_successful() {
                    "processed"
                } else {
                    "failed"
                };
                println!("{}  {}  {:9}  {}", item.id, when, outcome, item.file_name);
            }
        }
        HistoryCommands::Remove { id } => {
            store.remove_from_history(&id)?;
            println!("Removed {id} from history.");
        }
        HistoryCommands::Clear => {
            store.clear_history()?;
            println!("History cleared.");
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn run_config(command: ConfigCommands) -> anyhow::Result<ExitCode> {
    let mut config = ConfigService::new()?;
    match command {
        ConfigCommands::Show => {
            println!("api_host = {}", config.api_host());
        }
        ConfigCommands::SetHost { host } => {
            let updated = config.update_config(SettingsUpdate {
                api_host: Some(host),
            })?;
            println!("api_host = {}", updated.api_host);
        }
    }
    Ok(ExitCode::SUCCESS)
}
