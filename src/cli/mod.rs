mod commands;
pub mod error;
pub mod utils;

use std::path::PathBuf;

use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::error::CliResult;
use crate::cli::utils::parse_timestamp;
use crate::db::{NewShoppingListItem, ShoppingListItemPatch, SqliteDatabase};
use crate::paths::get_db_path;

#[derive(Parser)]
#[command(name = "shopping-list")]
#[command(author, version, about = "Shopping list CLI", long_about = None)]
pub struct Cli {
    /// Database file path (defaults to XDG data directory: ~/.local/share/shopping-list/shopping_list.db)
    #[arg(long, global = true, env = "SHOPPING_LIST_DB")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all items
    List {
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Show a single item
    Get {
        /// Item ID
        id: i64,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Add an item
    Add {
        /// Item name
        #[arg(long)]
        name: String,
        /// Price as a decimal string, e.g. 12.00
        #[arg(long)]
        price: String,
        /// Category label, e.g. Main or Snack
        #[arg(long)]
        category: String,
        /// When the item was added (RFC 3339 or YYYY-MM-DD, defaults to now)
        #[arg(long)]
        date_added: Option<String>,
        /// Mark the item as checked
        #[arg(long)]
        checked: bool,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Update fields of an item
    Update {
        /// Item ID
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        price: Option<String>,
        #[arg(long)]
        category: Option<String>,
        /// RFC 3339 or YYYY-MM-DD
        #[arg(long)]
        date_added: Option<String>,
        /// true or false
        #[arg(long)]
        checked: Option<bool>,
    },
    /// Delete an item
    Delete {
        /// Item ID
        id: i64,
    },
}

/// Initialize tracing subscriber with env filter
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shopping_list=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

pub async fn run() -> miette::Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        // Show help when no command provided
        let _ = Cli::parse_from(["shopping-list", "--help"]);
        return Ok(());
    };

    init_tracing();

    let db_path = cli.db.unwrap_or_else(get_db_path);
    debug!(path = %db_path.display(), "opening database");

    let db = SqliteDatabase::open(&db_path).await?;
    db.migrate().await?;

    let output = execute(&db, command).await;
    db.close().await;

    println!("{}", output?);
    Ok(())
}

async fn execute(db: &SqliteDatabase, command: Commands) -> CliResult<String> {
    let pool = db.pool();

    match command {
        Commands::List { format } => commands::item::list_items(pool, &format).await,
        Commands::Get { id, format } => commands::item::get_item(pool, id, &format).await,
        Commands::Add {
            name,
            price,
            category,
            date_added,
            checked,
            format,
        } => {
            let date_added = match date_added {
                Some(s) => parse_timestamp(&s)?,
                None => Utc::now(),
            };
            let item = NewShoppingListItem {
                name,
                date_added,
                price,
                category,
                checked: checked.then_some(true),
            };
            commands::item::add_item(pool, &item, &format).await
        }
        Commands::Update {
            id,
            name,
            price,
            category,
            date_added,
            checked,
        } => {
            let patch = ShoppingListItemPatch {
                name,
                date_added: date_added.as_deref().map(parse_timestamp).transpose()?,
                price,
                category,
                checked,
            };
            commands::item::update_item(pool, id, &patch).await
        }
        Commands::Delete { id } => commands::item::delete_item(pool, id).await,
    }
}
