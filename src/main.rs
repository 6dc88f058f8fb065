//! History Timeline - Entry Point

use chrono::{TimeZone, Utc};
use clap::Parser;
use history_timeline::config::{ResolvedConfig, TimezoneSetting};
use history_timeline::model::{AppError, CommitOrder};
use history_timeline::parser::{parse_pages, ParsedPages};
use history_timeline::state::HistoryTimeline;
use history_timeline::timeline::TimelineBuilder;
use history_timeline::view::timeline_text;
use history_timeline::view_state::RowIndex;
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

/// History Timeline - render a paginated version history as timeline rows
#[derive(Parser, Debug)]
#[command(name = "history-timeline")]
#[command(version)]
#[command(about = "Render paginated version history pages as day-separated timeline rows")]
pub struct Args {
    /// Path to the pages file: JSONL, one page per line, or a JSON array of pages
    /// (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Order number of the commit to mark as selected
    #[arg(short, long, allow_negative_numbers = true)]
    pub selected: Option<i64>,

    /// Commits previewed by a collapsed folded group
    #[arg(long)]
    pub column_limit: Option<usize>,

    /// Expand the folded group at this row index (repeatable)
    #[arg(short, long = "expand", value_name = "INDEX")]
    pub expand: Vec<usize>,

    /// Expand every folded group
    #[arg(long)]
    pub expand_all: bool,

    /// Use UTC calendar days instead of local time
    #[arg(long)]
    pub utc: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let (config, env_warnings) = {
        let config_file =
            history_timeline::config::load_config_with_precedence(args.config.clone())?;
        let merged = history_timeline::config::merge_config(config_file);
        let (with_env, env_warnings) = history_timeline::config::apply_env_overrides(merged);

        // Flags only override when explicitly set
        let timezone_override = args.utc.then_some(TimezoneSetting::Utc);
        let expand_all_override = args.expand_all.then_some(true);

        let resolved = history_timeline::config::apply_cli_overrides(
            with_env,
            args.column_limit,
            timezone_override,
            expand_all_override,
        );
        (resolved, env_warnings)
    };

    history_timeline::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");
    for warning in &env_warnings {
        warn!("{}", warning);
    }

    let input_source = history_timeline::source::detect_input_source(args.file.clone())?;
    let input = input_source.read_to_string().map_err(AppError::from)?;
    let parsed = parse_pages(&input);

    let selected = args.selected.map(CommitOrder::new);
    let output = match config.timezone {
        TimezoneSetting::Local => render(
            HistoryTimeline::local(selected),
            parsed,
            &args.expand,
            &config,
            env_warnings,
        ),
        TimezoneSetting::Utc => render(
            HistoryTimeline::new(TimelineBuilder::new(Utc), selected),
            parsed,
            &args.expand,
            &config,
            env_warnings,
        ),
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes()).map_err(AppError::from)?;
    stdout.flush().map_err(AppError::from)?;

    Ok(())
}

/// Feed every page into `timeline`, apply fold requests and render the result.
///
/// `warnings` carries problems found before rendering; they lead the summary.
fn render<Tz: TimeZone>(
    mut timeline: HistoryTimeline<Tz>,
    parsed: ParsedPages,
    expand: &[usize],
    config: &ResolvedConfig,
    mut warnings: Vec<String>,
) -> String {
    warnings.extend(parsed.errors.iter().map(ToString::to_string));

    for (page_number, page) in parsed.pages.into_iter().enumerate() {
        let report = timeline.apply_page(page);
        warnings.extend(
            report
                .skipped
                .iter()
                .map(|err| format!("page {}: {}", page_number + 1, err)),
        );
    }

    if config.expand_all {
        timeline.set_all_folds(true);
    }
    // Set, never flip: groups opened by --expand-all stay open
    for &index in expand {
        if let Err(err) = timeline.toggle_fold(RowIndex::new(index), true) {
            warn!(error = %err, "Ignoring expand request");
            warnings.push(err.to_string());
        }
    }

    let mut output = timeline_text(&timeline, config.column_limit, 0);
    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }
    if !warnings.is_empty() {
        output.push_str(&format!("\n{} warning(s):\n", warnings.len()));
        for warning in &warnings {
            output.push_str("  ");
            output.push_str(warning);
            output.push('\n');
        }
    }
    output
}
