mod browse;
mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use connectyou_core::{CategoryFilter, ProductFilter, Timeframe};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "connectyou")]
#[command(about = "Connect You local store locator")]
struct Cli {
    /// Fetch data from the store API instead of the local seed set.
    #[arg(long, global = true)]
    remote: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Landing page.
    Home,
    /// List stores matching a search.
    Stores {
        /// Case-insensitive text matched against name and address.
        #[arg(long, short, default_value = "")]
        query: String,
        /// Category to show, or `all`.
        #[arg(long = "type", short = 't', default_value = "all")]
        category: CategoryFilter,
    },
    /// Show matching stores on the map.
    Map {
        #[arg(long, short, default_value = "")]
        query: String,
        #[arg(long = "type", short = 't', default_value = "all")]
        category: CategoryFilter,
        /// Print a GeoJSON feature collection instead of a static map URL.
        #[arg(long)]
        geojson: bool,
    },
    /// List the store categories.
    Categories,
    /// Product catalog.
    Products {
        /// `all`, `groceries` or `books`; matched ignoring case.
        #[arg(long, short, default_value = "all")]
        category: ProductFilter,
    },
    /// Aggregate store analytics.
    Analytics,
    /// Placeholder platform or shop dashboard.
    Dashboard {
        #[arg(value_enum, default_value_t = DashboardKind::Platform)]
        kind: DashboardKind,
        /// `week`, `month` or `year`.
        #[arg(long, default_value = "month")]
        timeframe: Timeframe,
    },
    /// Send feedback to the store API.
    Feedback {
        #[arg(long)]
        rating: u8,
        #[arg(long)]
        comment: String,
        #[arg(long)]
        store: Option<i64>,
    },
    /// Interactive search: each input line is the search box content.
    Browse {
        #[arg(long = "type", short = 't', default_value = "all")]
        category: CategoryFilter,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DashboardKind {
    Platform,
    Shop,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = connectyou_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let remote = cli.remote;
    match cli.command {
        None | Some(Commands::Home) => commands::run_home(),
        Some(Commands::Stores { query, category }) => {
            commands::run_stores(&config, remote, query, category).await?;
        }
        Some(Commands::Map {
            query,
            category,
            geojson,
        }) => commands::run_map(&config, remote, query, category, geojson).await?,
        Some(Commands::Categories) => commands::run_categories(&config, remote).await?,
        Some(Commands::Products { category }) => commands::run_products(&category),
        Some(Commands::Analytics) => commands::run_analytics(&config, remote).await?,
        Some(Commands::Dashboard { kind, timeframe }) => {
            commands::run_dashboard(kind, timeframe);
        }
        Some(Commands::Feedback {
            rating,
            comment,
            store,
        }) => commands::run_feedback(&config, rating, comment, store).await?,
        Some(Commands::Browse { category }) => {
            browse::run_browse(&config, remote, category).await?;
        }
    }

    Ok(())
}
