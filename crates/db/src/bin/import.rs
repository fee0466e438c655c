//! Import a legacy content export into the database.
//!
//! ```text
//! lokanta-import export.json --replace
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lokanta_core::locale::{validate_locale_code, BASE_LOCALE};
use lokanta_db::import::{clear_content, import_legacy, LegacyExport};

#[derive(Parser, Debug)]
#[command(name = "lokanta-import", about = "Import a legacy content export (categories, menu items, reviews)")]
struct Args {
    /// JSON file with `categories`, `menuItems` and `reviews` arrays.
    file: PathBuf,

    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Locale stored in the unsuffixed legacy fields (`name`, `description`).
    #[arg(long, env = "BASE_LOCALE", default_value = BASE_LOCALE)]
    base_locale: String,

    /// Delete existing categories, menu items and reviews first.
    #[arg(long)]
    replace: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lokanta_import=info,lokanta_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    validate_locale_code(&args.base_locale)
        .with_context(|| format!("invalid base locale '{}'", args.base_locale))?;

    let raw = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let export: LegacyExport = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a legacy export", args.file.display()))?;
    tracing::info!(
        categories = export.categories.len(),
        menu_items = export.menu_items.len(),
        reviews = export.reviews.len(),
        "Loaded legacy export",
    );

    let pool = lokanta_db::create_pool(&args.database_url)
        .await
        .context("failed to connect to database")?;
    lokanta_db::run_migrations(&pool)
        .await
        .context("failed to run database migrations")?;

    if args.replace {
        clear_content(&pool).await.context("failed to clear existing content")?;
    }

    let summary = import_legacy(&pool, &export, &args.base_locale)
        .await
        .context("import aborted")?;
    tracing::info!(?summary, "Done");

    Ok(())
}
