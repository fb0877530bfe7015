//! Perfume Lab CLI
//!
//! Command-line front end over the same tables and forms as the browser app:
//! - List a collection
//! - Create a record
//! - Show dashboard counts
//! - Generate a config file

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use perfume_lab::config::{generate_default_config, Config, LogFormat, LoggingConfig};
use perfume_lab::http::HttpClient;
use perfume_lab::section::Collection;
use perfume_lab::state::{load_all, Counts, DashboardState, LoadOutcome, RecordTableSession};

#[derive(Parser)]
#[command(name = "perfume-lab")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Manage ingredients, solvents, formulas and batches")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend URL (overrides config and PERFUME_LAB_BACKEND_URL)
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List a collection
    List {
        /// ingredient, solvent, formula or batch
        collection: Collection,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Create a record
    Create {
        /// ingredient, solvent, formula or batch
        collection: Collection,
        /// Fields in key=value format
        fields: Vec<String>,
    },

    /// Show record counts for every collection
    Stats,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.backend_url {
        config.backend.base_url = url.clone();
    }

    init_logging(&config.logging);

    match cli.command {
        Commands::List { collection, format } => {
            let client = HttpClient::new(&config.backend)?;
            let mut session = RecordTableSession::new(client, collection);

            if session.reload().await != LoadOutcome::Applied {
                bail!(
                    "{}",
                    session.state().error().unwrap_or("Failed to load collection")
                );
            }

            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(session.state().rows())?);
                }
                OutputFormat::Table => print_collection(&session),
            }
        }

        Commands::Create { collection, fields } => {
            let client = HttpClient::new(&config.backend)?;
            let mut session = RecordTableSession::new(client, collection);
            if session.reload().await != LoadOutcome::Applied {
                bail!(
                    "{}",
                    session.state().error().unwrap_or("Failed to load collection")
                );
            }

            session.open_form();
            for field in &fields {
                let (key, value) = field
                    .split_once('=')
                    .with_context(|| format!("Expected key=value, got '{}'", field))?;
                session.edit(key.trim(), value)?;
            }

            let (_, refresh) = session.submit().await?;
            println!("{} created.", collection.singular());

            if refresh != LoadOutcome::Applied {
                bail!(
                    "Created, but refreshing the table failed: {}",
                    session.state().error().unwrap_or("unknown error")
                );
            }

            println!();
            print_collection(&session);
        }

        Commands::Stats => {
            let client = HttpClient::new(&config.backend)?;
            let mut dashboard = DashboardState::new();

            if let Some(ticket) = dashboard.begin_initial_load() {
                let result = load_all(&client).await;
                if !dashboard.finish_load(ticket, result) {
                    bail!("{}", dashboard.error().unwrap_or("Failed to load collections"));
                }
            }

            print_counts(&dashboard.counts());
        }

        Commands::Config { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("perfume_lab={}", config.level)));

    let registry = tracing_subscriber::registry().with(filter);
    match config.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

fn print_collection<B: perfume_lab::Backend>(session: &RecordTableSession<B>) {
    let collection = session.state().collection();
    let view = session.state().view();

    if view.is_empty() {
        let (title, subtitle) = collection.empty_state();
        println!("{}", title);
        println!("{}", subtitle);
        println!();
        println!("Create one with:");
        println!("  perfume-lab create {} key=value ...", collection.singular().to_lowercase());
        return;
    }

    print!("{}", view.to_text());
}

fn print_counts(counts: &Counts) {
    for (title, count) in counts.cards() {
        println!("{:<12} {}", title, count);
    }
}
