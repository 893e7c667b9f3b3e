use catalog::Catalog;
use clap::{Parser, Subcommand};
use gallery::{filter, group_by_event, Gallery, ViewMode};
use std::path::{Path, PathBuf};
use tracing_appender::rolling;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

mod browse;
mod config;
mod render;

#[derive(Parser)]
#[command(
    name = "gallery_cli",
    author,
    version,
    about = "Photo gallery browser CLI"
)]
struct Cli {
    /// Override log level (e.g. info, debug)
    #[arg(long)]
    log_level: Option<String>,
    /// Path to the photo catalog JSON file
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Override the maximum number of photos printed by list commands
    #[arg(long)]
    list_limit: Option<usize>,
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Log span open/close events
    #[arg(long)]
    trace_spans: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List photos matching the given filters
    List {
        /// Case-insensitive text matched against title, description and tags
        #[arg(long, default_value = "")]
        search: String,
        /// Category key, or "all"
        #[arg(long, default_value = gallery::ALL_CATEGORIES)]
        category: String,
        /// Restrict to photos of one event
        #[arg(long)]
        event: Option<String>,
        /// Maximum number of photos to display
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show event groups with their photo counts
    Events,
    /// Show category keys and labels
    Categories,
    /// Show catalog statistics
    Stats,
    /// Show a single photo as JSON
    Show {
        /// ID of the photo
        id: String,
    },
    /// Write the catalog to a JSON file
    Export {
        /// Path to the export file
        #[arg(long)]
        file: PathBuf,
    },
    /// Write the effective configuration to the config file
    SaveConfig,
    /// Interactive browsing session reading commands from stdin
    Browse,
}

fn load_catalog(path: &Path) -> Result<Option<Catalog>, Box<dyn std::error::Error>> {
    if !path.exists() {
        println!("No catalog found at {:?}", path);
        return Ok(None);
    }
    Ok(Some(Catalog::load(path)?))
}

#[cfg_attr(feature = "trace-spans", tracing::instrument)]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let overrides = config::AppConfigOverrides {
        log_level: cli.log_level.clone(),
        catalog_path: cli.catalog.clone(),
        list_limit: cli.list_limit,
        trace_spans: cli.trace_spans,
    };
    let cfg = config::AppConfig::load_from(cli.config.clone()).apply_overrides(&overrides);
    std::fs::create_dir_all(&cfg.data_dir)?;
    let file_appender = rolling::daily(&cfg.data_dir, "gallery.log");
    let (file_writer, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(cfg.log_level.clone()))
        .with_span_events(if cfg.trace_spans { FmtSpan::CLOSE } else { FmtSpan::NONE })
        .with_writer(std::io::stderr.and(file_writer))
        .init();

    match cli.command {
        Commands::SaveConfig => {
            let path = cli.config.clone().unwrap_or_else(config::default_config_path);
            cfg.save_to(Some(path.clone()))?;
            println!("Config saved to {:?}", path);
        }
        Commands::List { search, category, event, limit } => {
            let Some(catalog) = load_catalog(&cfg.catalog_path)? else {
                return Ok(());
            };
            let visible = filter(catalog.photos(), &search, &category, event.as_deref());
            let max = limit.unwrap_or(cfg.list_limit);
            for photo in visible.iter().take(max) {
                println!("{} - {}", photo.id, photo.title);
            }
            println!("{}", render::found_line(visible.len()));
        }
        Commands::Events => {
            let Some(catalog) = load_catalog(&cfg.catalog_path)? else {
                return Ok(());
            };
            for group in group_by_event(catalog.photos()).iter() {
                println!("{} ({} photos)", group.name, group.photos.len());
            }
        }
        Commands::Categories => {
            let Some(catalog) = load_catalog(&cfg.catalog_path)? else {
                return Ok(());
            };
            for (key, label) in catalog.categories().iter() {
                println!("{}: {}", key, label);
            }
        }
        Commands::Stats => {
            let Some(catalog) = load_catalog(&cfg.catalog_path)? else {
                return Ok(());
            };
            let stats = Gallery::new(&catalog).stats();
            println!("Total photos: {}", stats.total_photos);
            println!("Events: {}", stats.events);
            println!("Categories: {}", stats.categories);
        }
        Commands::Show { id } => {
            let Some(catalog) = load_catalog(&cfg.catalog_path)? else {
                return Ok(());
            };
            if let Some(photo) = catalog.photo(&id) {
                println!("{}", serde_json::to_string_pretty(photo)?);
            } else {
                println!("Photo not found: {}", id);
            }
        }
        Commands::Export { file } => {
            let Some(catalog) = load_catalog(&cfg.catalog_path)? else {
                return Ok(());
            };
            catalog.export(&file)?;
            println!("Exported to {:?}", file);
        }
        Commands::Browse => {
            let Some(catalog) = load_catalog(&cfg.catalog_path)? else {
                return Ok(());
            };
            let view_mode = cfg.view_mode.parse::<ViewMode>().unwrap_or_else(|e| {
                tracing::warn!("{}, falling back to grid", e);
                ViewMode::Grid
            });
            let mut gallery = Gallery::new(&catalog).with_view_mode(view_mode);
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            browse::run(&mut gallery, stdin.lock(), &mut stdout, cfg.list_limit)?;
        }
    }

    Ok(())
}
