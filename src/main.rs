use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use casewatch::export::ReportFormat;
use casewatch::parser::{extract_fields, ExtractorConfig};
use casewatch::render::render_text;
use casewatch::server::{serve, AppState};
use casewatch::{CaseQuery, CaseService, HttpFetcher, QueryStore, ReportStore, Settings};

#[derive(Parser)]
#[command(name = "casewatch", version, about = "Court case-status lookup and extraction")]
struct Cli {
    /// TOML settings file
    #[arg(long, global = true, env = "CASEWATCH_CONFIG")]
    config: Option<PathBuf>,

    /// SQLite database path (overrides the settings file)
    #[arg(long, global = true, env = "CASEWATCH_DB")]
    db: Option<PathBuf>,

    /// Court search page URL (overrides the settings file)
    #[arg(long, global = true, env = "CASEWATCH_COURT_URL")]
    court_url: Option<String>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the web front end
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Search the court site and store the result page
    Search {
        #[arg(long)]
        case_type: String,
        #[arg(long)]
        number: String,
        #[arg(long)]
        year: String,
    },
    /// Show the fields extracted from a stored query
    Show {
        id: i64,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Write a report for a stored query to the downloads directory
    Export {
        id: i64,
        #[arg(long, default_value = "md")]
        format: String,
    },
    /// Extract fields from a local HTML file and print them as JSON
    Extract {
        file: PathBuf,
        #[arg(long)]
        base_url: Option<String>,
        /// Use the reduced heuristics (labels and dates only)
        #[arg(long)]
        basic: bool,
    },
    /// List recent queries
    List {
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .filter_module("selectors", log::LevelFilter::Warn)
        .filter_module("html5ever", log::LevelFilter::Error)
        .parse_default_env()
        .init();
}

fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };
    if let Some(db) = &cli.db {
        settings = settings.with_database_path(db);
    }
    if let Some(url) = &cli.court_url {
        settings = settings.with_court_url(url);
    }
    settings.validate()?;
    Ok(settings)
}

fn build_service(settings: &Settings) -> anyhow::Result<CaseService> {
    let fetcher = HttpFetcher::from_settings(settings)?;
    let store = QueryStore::open(&settings.database_path)?;
    let reports = ReportStore::new(&settings.downloads_dir)?;
    Ok(CaseService::new(Arc::new(fetcher), store, reports)
        .with_max_stored_chars(settings.max_stored_chars))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let settings = load_settings(&cli)?;

    match &cli.command {
        Command::Serve { host, port } => {
            let host = host.clone().unwrap_or_else(|| settings.host.clone());
            let port = port.unwrap_or(settings.port);
            let settings = settings.with_bind(host, port);
            let service = Arc::new(build_service(&settings)?);
            let state = AppState::new(service, settings.court_url.clone());
            serve(state, &settings.host, settings.port).await?;
        }
        Command::Search {
            case_type,
            number,
            year,
        } => {
            let service = build_service(&settings)?;
            let id = service
                .submit(CaseQuery::new(case_type.as_str(), number.as_str(), year.as_str()))
                .await?;
            println!("Stored query #{}", id);
            if let Some(view) = service.lookup(id)? {
                print!("{}", render_text(&view.fields));
            }
            for line in service.stats().summary_lines() {
                log::info!("{}", line);
            }
        }
        Command::Show { id, json } => {
            let service = build_service(&settings)?;
            let Some(view) = service.lookup(*id)? else {
                bail!("No record found for query {}", id);
            };
            if *json {
                println!("{}", serde_json::to_string_pretty(&view.fields)?);
            } else {
                println!(
                    "Query #{}: {} {}/{} ({})\n",
                    view.record.id,
                    view.record.case_type,
                    view.record.case_number,
                    view.record.case_year,
                    view.record.created_at.to_rfc3339()
                );
                print!("{}", render_text(&view.fields));
            }
        }
        Command::Export { id, format } => {
            let format: ReportFormat = format.parse()?;
            let service = build_service(&settings)?;
            let Some(report) = service.export(*id, format)? else {
                bail!("No record found for query {}", id);
            };
            println!("Wrote {}", report.path.display());
        }
        Command::Extract {
            file,
            base_url,
            basic,
        } => {
            let html = std::fs::read_to_string(file)
                .with_context(|| format!("reading {}", file.display()))?;
            let config = if *basic {
                ExtractorConfig::basic()
            } else {
                ExtractorConfig::default()
            };
            let fields = extract_fields(&html, base_url.as_deref(), &config);
            println!("{}", serde_json::to_string_pretty(&fields)?);
        }
        Command::List { limit } => {
            let store = QueryStore::open(&settings.database_path)?;
            for query in store.recent(*limit)? {
                println!(
                    "#{:<5} {:<12} {:<10} {:<6} {}",
                    query.id,
                    query.case_type,
                    query.case_number,
                    query.case_year,
                    query.created_at.format("%Y-%m-%d %H:%M")
                );
            }
        }
    }

    Ok(())
}
