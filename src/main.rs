//! classview - Entry Point

use clap::Parser;
use classview::model::DataSelector;
use classview::table::options::is_valid_page_size;
use classview::table::schema::is_sortable;
use classview::table::COLUMN_COUNT;
use classview::view::{CliArgs, ColorConfig};
use std::path::PathBuf;
use tracing::info;

/// classview - browse classroom project records in the terminal
#[derive(Parser, Debug)]
#[command(name = "classview")]
#[command(version)]
#[command(about = "TUI table for browsing classroom project records")]
pub struct Args {
    /// Path to the JSON payload (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Start with search query active
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort by column index (0-11) on startup
    #[arg(long, value_parser = parse_sort_column)]
    pub sort: Option<usize>,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,

    /// Show the classrooms of a region instead of all projects
    #[arg(long)]
    pub region: Option<String>,

    /// Rows per page
    #[arg(long, value_parser = parse_rows_per_page)]
    pub rows_per_page: Option<usize>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn parse_sort_column(value: &str) -> Result<usize, String> {
    let column: usize = value
        .parse()
        .map_err(|_| format!("'{value}' is not a column index"))?;
    if column >= COLUMN_COUNT {
        return Err(format!("column must be 0-{}", COLUMN_COUNT - 1));
    }
    if !is_sortable(column) {
        return Err(format!("column {column} cannot be sorted"));
    }
    Ok(column)
}

fn parse_rows_per_page(value: &str) -> Result<usize, String> {
    let size: usize = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if !is_valid_page_size(size) {
        return Err(format!("{size} is not one of the offered page sizes"));
    }
    Ok(size)
}

/// Page title and payload list for the requested screen.
fn screen(region: Option<&str>) -> (String, DataSelector) {
    match region {
        Some(region) => (
            format!("Třídy z regionu {region}"),
            DataSelector::RegionClassrooms,
        ),
        None => ("Projekty".to_string(), DataSelector::Classrooms),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = classview::config::load_config_with_precedence(args.config.clone())?;
        let merged = classview::config::merge_config(config_file);
        let with_env = classview::config::apply_env_overrides(merged);
        classview::config::apply_cli_overrides(
            with_env,
            args.rows_per_page,
            args.sort,
            args.desc,
            args.no_color,
        )
    };

    classview::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    // Detect input source (file or stdin)
    let input_source = classview::source::detect_input_source(args.file.clone())?;

    let (title, selector) = screen(args.region.as_deref());
    let cli_args = CliArgs {
        title,
        selector,
        search: args.search.clone(),
        sort: config.sort,
        rows_per_page: config.rows_per_page,
        color: ColorConfig::from_env_and_args(config.no_color),
    };

    classview::view::run_with_source(input_source, cli_args)?;

    Ok(())
}
