//! selectcat CLI - render and inspect category trees from data files
//!
//! Usage: selectcat <COMMAND>
//!
//! Commands:
//!   render  Render the category selector markup for a namespace
//!   tree    Print the flattened name -> depth payload as JSON
//!   scan    Extract category links from a page text file

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use selectcat::config::load_or_default;
use selectcat::{
    build_edit_view, extract_page_categories, tree_payload, MemoryCategorySource, Messages,
    PageContext,
};

/// selectcat - selectable category tree for wiki page editing
#[derive(Parser, Debug)]
#[command(name = "selectcat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the category selector markup for a namespace
    Render {
        /// Path to the category data file
        #[arg(short, long, default_value = "categories.toml")]
        data: PathBuf,

        /// Path to the configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Namespace to render for
        #[arg(short, long, default_value = "main")]
        namespace: String,

        /// Page text file whose category links pre-check the tree
        #[arg(short, long)]
        page: Option<PathBuf>,

        /// Pre-check these names instead of scanning the page text
        #[arg(long = "selected")]
        selected: Vec<String>,

        /// Render a flat multi-select regardless of configuration
        #[arg(long)]
        flat: bool,
    },

    /// Print the flattened name -> depth payload as JSON
    Tree {
        /// Path to the category data file
        #[arg(short, long, default_value = "categories.toml")]
        data: PathBuf,

        /// Path to the configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Namespace to build the payload for
        #[arg(short, long, default_value = "main")]
        namespace: String,
    },

    /// Extract category links from a page text file
    Scan {
        /// Page text file to scan
        #[arg(short, long)]
        page: PathBuf,

        /// Localized category-namespace keyword
        #[arg(short, long, default_value = "Category")]
        keyword: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Render {
            data,
            config,
            namespace,
            page,
            selected,
            flat,
        } => run_render(
            &data,
            config.as_deref(),
            &namespace,
            page.as_deref(),
            &selected,
            flat,
        ),
        Commands::Tree {
            data,
            config,
            namespace,
        } => run_tree(&data, config.as_deref(), &namespace),
        Commands::Scan { page, keyword } => run_scan(&page, &keyword),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_render(
    data: &std::path::Path,
    config: Option<&std::path::Path>,
    namespace: &str,
    page: Option<&std::path::Path>,
    selected: &[String],
    flat: bool,
) -> Result<()> {
    let source = MemoryCategorySource::load(data)
        .with_context(|| format!("loading category data from {}", data.display()))?;
    let mut config = load_or_default(config);
    if flat {
        config.render_mode = selectcat::RenderMode::Flat;
    }
    let page_text = match page {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading page text from {}", path.display()))?,
        None => String::new(),
    };
    let submitted = (!selected.is_empty()).then_some(selected);

    let view = build_edit_view(
        &source,
        &config,
        &Messages::default(),
        &PageContext::article(namespace),
        &page_text,
        submitted,
    )?;

    match view {
        Some(view) => print!("{}", view.markup),
        None => eprintln!("selector is not active in namespace '{namespace}'"),
    }
    Ok(())
}

fn run_tree(
    data: &std::path::Path,
    config: Option<&std::path::Path>,
    namespace: &str,
) -> Result<()> {
    let source = MemoryCategorySource::load(data)
        .with_context(|| format!("loading category data from {}", data.display()))?;
    let config = load_or_default(config);

    match tree_payload(&source, &config, namespace)? {
        Some(payload) => println!("{}", serde_json::to_string_pretty(&payload)?),
        None => eprintln!("selector is not active in namespace '{namespace}'"),
    }
    Ok(())
}

fn run_scan(page: &std::path::Path, keyword: &str) -> Result<()> {
    let page_text = std::fs::read_to_string(page)
        .with_context(|| format!("reading page text from {}", page.display()))?;

    let (found, cleaned) = extract_page_categories(&page_text, keyword);
    let mut categories: Vec<String> = found.iter().map(|name| name.to_string()).collect();
    categories.sort();

    let result = serde_json::json!({
        "categories": categories,
        "text": cleaned,
    });
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
