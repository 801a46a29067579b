mod cli;

use cli::{Args, DEFAULT_BASE_URL, DEFAULT_CACHE_DIR};
use pakket_status::adapters::inbound::InteractiveSession;
use pakket_status::adapters::outbound::console::StderrProgressReporter;
use pakket_status::adapters::outbound::network::HttpInventoryClient;
use pakket_status::adapters::outbound::storage::{FileSystemCacheStore, InMemoryCacheStore};
use pakket_status::adapters::outbound::view::DocumentView;
use pakket_status::application::dto::{FilterFlag, OutputFormat, StatusQuery};
use pakket_status::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use pakket_status::application::use_cases::TableController;
use pakket_status::config::{self, ConfigFile};
use pakket_status::dashboard::services::SEARCH_DEBOUNCE;
use pakket_status::ports::outbound::{CacheStore, ProgressReporter};
use pakket_status::shared::error::ExitCode;
use pakket_status::shared::Result;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // clap exits with InvalidArguments (2) on its own
    let args = Args::parse_args();

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Effective settings after merging config file and command line
#[derive(Debug, Clone, PartialEq)]
struct Settings {
    base_url: String,
    cache_dir: PathBuf,
    no_cache: bool,
    format: OutputFormat,
    output: Option<PathBuf>,
    source_link_base: Option<String>,
    debounce: Duration,
    query: StatusQuery,
    offline: bool,
    interactive: bool,
}

impl Settings {
    /// Command-line values win over the config file, which wins over defaults.
    /// Filter flags are additive: a flag enabled anywhere stays enabled.
    fn resolve(args: Args, config: ConfigFile) -> Result<Self> {
        let format = match (args.format, config.format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(configured)) => configured.parse().map_err(anyhow::Error::msg)?,
            (None, None) => OutputFormat::default(),
        };

        let mut query = StatusQuery {
            search: config.search.unwrap_or_default(),
            only_broken: config.only_broken.unwrap_or(false),
            only_outdated: config.only_outdated.unwrap_or(false),
            only_noncpan: config.only_noncpan.unwrap_or(false),
        };
        if let Some(url) = args.query.as_deref() {
            let seeded = StatusQuery::from_url(url);
            if !seeded.search.is_empty() {
                query.search = seeded.search.clone();
            }
            for flag in FilterFlag::ALL {
                if seeded.flag(flag) {
                    query.set_flag(flag, true);
                }
            }
        }
        if let Some(search) = args.search {
            query.search = search;
        }
        for (flag, enabled) in [
            (FilterFlag::Broken, args.broken),
            (FilterFlag::Outdated, args.outdated),
            (FilterFlag::NonCpan, args.noncpan),
        ] {
            if enabled {
                query.set_flag(flag, true);
            }
        }

        Ok(Self {
            base_url: args
                .base_url
                .or(config.base_url)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            cache_dir: args
                .cache_dir
                .or(config.cache_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_DIR)),
            no_cache: args.no_cache,
            format,
            output: args.output,
            source_link_base: args.source_link_base.or(config.source_link_base),
            debounce: config
                .debounce_ms
                .map(Duration::from_millis)
                .unwrap_or(SEARCH_DEBOUNCE),
            query,
            offline: args.offline,
            interactive: args.interactive,
        })
    }
}

async fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let settings = Settings::resolve(args, config)?;

    if settings.no_cache {
        render(&settings, InMemoryCacheStore::new()).await
    } else {
        let cache_store = FileSystemCacheStore::new(settings.cache_dir.clone())?;
        render(&settings, cache_store).await
    }
}

/// Explicit `--config` must exist; otherwise the working directory is searched
fn load_config(explicit: Option<&Path>) -> Result<ConfigFile> {
    match explicit {
        Some(path) => config::load_config_from_path(path),
        None => match config::discover_config(Path::new("."))? {
            Some(discovered) => {
                eprintln!(
                    "📄 Auto-discovered config file: {}",
                    config::CONFIG_FILENAME
                );
                Ok(discovered)
            }
            None => Ok(ConfigFile::default()),
        },
    }
}

async fn render<CS: CacheStore>(settings: &Settings, cache_store: CS) -> Result<()> {
    let progress_reporter = StderrProgressReporter::new();
    let formatter = FormatterFactory::create(settings.format, settings.source_link_base.as_deref());

    let mut controller = TableController::new(
        cache_store,
        DocumentView::new(),
        formatter,
        StderrProgressReporter::new(),
        settings.query.clone(),
    );

    let cached = controller.load_cached();
    if settings.offline {
        if !cached {
            progress_reporter.report_error(
                "⚠️  Warning: No cached inventory available; the table will be empty.",
            );
        }
    } else {
        let client = HttpInventoryClient::new(&settings.base_url)?;
        controller.refresh(&client).await;
    }

    if settings.interactive {
        progress_reporter.report(
            "⌨️  Interactive mode: search <text> | broken|outdated|noncpan on|off | select <name> <version> | show | quit",
        );
        let mut session = InteractiveSession::new(settings.debounce, &progress_reporter);
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        session.run(&mut controller, stdin).await?;
    }

    progress_reporter.report(FormatterFactory::progress_message(settings.format));
    let document = controller.render_document()?;

    let presenter = PresenterFactory::create(PresenterType::from_output(settings.output.clone()));
    presenter.present(&document)?;

    Ok(())
}
