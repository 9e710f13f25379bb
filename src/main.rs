use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use permit_leads::bookmarks::BookmarkStore;
use permit_leads::config::load_config;
use permit_leads::fetch::{fetch_permits, save_snapshot, DEFAULT_DATASET_URL};
use permit_leads::filter::CATEGORY_FILTERS;
use permit_leads::freshness::is_fresh;
use permit_leads::ingest::load_snapshot;
use permit_leads::pipeline::{build_view, ViewState};
use permit_leads::types::{Lead, SortKey};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "permit-leads")]
#[command(about = "High-value building permit lead finder", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Working directory holding tracking/ state
    #[arg(long, default_value = ".", global = true)]
    root: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the latest permit snapshot from the city data portal
    Fetch {
        /// Dataset endpoint
        #[arg(long, default_value = DEFAULT_DATASET_URL)]
        url: String,

        /// Snapshot output path
        #[arg(short, long, default_value = "chicago_permits.csv")]
        out: PathBuf,
    },

    /// List qualified leads from a snapshot
    List {
        /// Snapshot CSV path
        #[arg(required = true)]
        snapshot: PathBuf,

        /// Free-text search over category, description, and street name
        #[arg(short, long, default_value = "")]
        query: String,

        /// Category filter ("All" disables)
        #[arg(short, long, default_value = "All")]
        category: String,

        /// Sort key (cost or date)
        #[arg(short, long, default_value = "cost")]
        sort: SortKey,

        /// Show bookmarked leads only
        #[arg(long)]
        bookmarks_only: bool,

        /// Pages of output to show (each page grows the window one step)
        #[arg(short, long, default_value = "1")]
        pages: usize,
    },

    /// Toggle a bookmark for a lead id
    Bookmark {
        #[arg(required = true)]
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch { url, out } => {
            let rows = fetch_permits(&url).await?;
            save_snapshot(&out, &rows)?;
            println!("Success! File saved: {}", out.display());
        }

        Commands::List {
            snapshot,
            query,
            category,
            sort,
            bookmarks_only,
            pages,
        } => {
            let config = load_config(&cli.root)?;
            let bookmarks = BookmarkStore::load(&cli.root)?;
            let leads = load_snapshot(&snapshot)?;
            println!("Loaded {} permits from {}", leads.len(), snapshot.display());

            let mut state = ViewState::new(&config);
            state.set_search(&query);
            state.set_category(&category);
            state.set_bookmarks_only(bookmarks_only);
            state.set_sort_key(sort);
            for _ in 1..pages {
                state.show_more();
            }

            let view = build_view(&leads, &state, &bookmarks, config.min_lead_value);
            println!(
                "{} qualified leads match ({} shown)\n",
                view.total_matches(),
                view.visible().len()
            );

            if view.total_matches() == 0 {
                println!("No leads matched. Category filters: {}", CATEGORY_FILTERS.join(", "));
            }

            let now = Utc::now().naive_utc();
            for lead in view.visible() {
                print_lead(lead, &bookmarks, now);
            }
        }

        Commands::Bookmark { id } => {
            let mut bookmarks = BookmarkStore::load(&cli.root)?;
            if bookmarks.toggle(&id)? {
                println!("Bookmarked {}", id);
            } else {
                println!("Removed bookmark {}", id);
            }
            println!("{} bookmarks saved", bookmarks.len());
        }
    }

    Ok(())
}

fn print_lead(lead: &Lead, bookmarks: &BookmarkStore, now: chrono::NaiveDateTime) {
    let marker = if bookmarks.contains(&lead.id) { "*" } else { " " };
    let fresh = if is_fresh(lead.issued_at, now) {
        " [new]"
    } else {
        ""
    };
    let issued = lead
        .issued_at
        .map(|ts| ts.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "unknown".to_string());

    println!(
        "{} {:<12} ${:<12.0} {:<10} {} {} | {} | {}{}",
        marker,
        lead.id,
        lead.cost,
        issued,
        lead.street_number,
        lead.street_name,
        lead.contact_name,
        truncate(&lead.description, 60),
        fresh
    );
}

/// Clip long descriptions for single-line table output
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let clipped: String = text.chars().take(max_chars).collect();
    format!("{}...", clipped)
}
