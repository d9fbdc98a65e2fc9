use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use range_pager::config::{Config, Overrides};
use range_pager::{compute, render};

/// Print the pagination links for a page of a long list
#[derive(Parser, Debug)]
#[command(name = "range-pager")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Total number of items
    #[arg(short, long, value_name = "N")]
    total: u64,

    /// Current page (out-of-range values are clamped)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    current: Option<i64>,

    /// Items per page
    #[arg(long, value_name = "N")]
    page_size: Option<u64>,

    /// Number of page links around the current page
    #[arg(long, value_name = "N")]
    mid_range: Option<u64>,

    /// Page count above which the window is used
    #[arg(long, value_name = "N")]
    limit: Option<u64>,

    /// Link URL template, `%n` is replaced by the page number
    #[arg(long, value_name = "TEMPLATE")]
    url: Option<String>,

    /// Omit previous/next links
    #[arg(long)]
    no_prev_next: bool,

    /// Omit first/last links
    #[arg(long)]
    no_first_last: bool,

    /// Place the trailing gap marker at window position mid-range - 1
    #[arg(long)]
    legacy_gap: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Html,
    Json,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Parse CLI arguments
    let args = Args::parse();

    let overrides = Overrides {
        total: Some(args.total),
        current: args.current,
        page_size: args.page_size,
        mid_range: args.mid_range,
        limit: args.limit,
        url: args.url,
        hide_prev_next: args.no_prev_next,
        hide_first_last: args.no_first_last,
        legacy_gap: args.legacy_gap,
    };

    // Load configuration
    let config = Config::load(args.config.as_ref(), &overrides)?;

    info!(
        "Configuration loaded: total={} page_size={} pages={}",
        config.pagination.total,
        config.pagination.page_size,
        config.pagination.total_pages()
    );

    let links = compute(&config.pagination);
    debug!(links = links.len(), format = ?args.format, "Computed links");

    let out = match args.format {
        Format::Text => render::text(&links),
        Format::Html => render::html(&links, &config.render),
        Format::Json => serde_json::to_string_pretty(&links)?,
    };
    println!("{}", out);

    Ok(())
}
