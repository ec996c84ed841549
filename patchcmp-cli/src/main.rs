use clap::Parser;
use patchcmp::io::load_image;
use patchcmp::{
    ColorMode, ComparisonResult, DispatchPolicy, Metric, Mode, ResultSet, SearchConfig,
    SearchStatus, Searcher,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "patchcmp CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum MetricConfig {
    Mse,
    Mae,
    SsimProxy,
}

impl From<MetricConfig> for Metric {
    fn from(value: MetricConfig) -> Self {
        match value {
            MetricConfig::Mse => Metric::Mse,
            MetricConfig::Mae => Metric::Mae,
            MetricConfig::SsimProxy => Metric::SsimProxy,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ModeConfig {
    PreferA,
    PreferB,
}

impl From<ModeConfig> for Mode {
    fn from(value: ModeConfig) -> Self {
        match value {
            ModeConfig::PreferA => Mode::PreferA,
            ModeConfig::PreferB => Mode::PreferB,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ColorModeConfig {
    FullColor,
    SingleChannel,
}

impl From<ColorModeConfig> for ColorMode {
    fn from(value: ColorModeConfig) -> Self {
        match value {
            ColorModeConfig::FullColor => ColorMode::FullColor,
            ColorModeConfig::SingleChannel => ColorMode::SingleChannel,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum DispatchConfig {
    Auto,
    Sequential,
    Parallel,
}

impl From<DispatchConfig> for DispatchPolicy {
    fn from(value: DispatchConfig) -> Self {
        match value {
            DispatchConfig::Auto => DispatchPolicy::Auto,
            DispatchConfig::Sequential => DispatchPolicy::Sequential,
            DispatchConfig::Parallel => DispatchPolicy::Parallel,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct SearchConfigJson {
    window_size: usize,
    grid_size: usize,
    metric: MetricConfig,
    mode: ModeConfig,
    color_mode: ColorModeConfig,
    dispatch: DispatchConfig,
    parallel_threshold: usize,
}

impl Default for SearchConfigJson {
    fn default() -> Self {
        let cfg = SearchConfig::default();
        Self {
            window_size: cfg.window_size,
            grid_size: cfg.grid_size,
            metric: MetricConfig::Mse,
            mode: ModeConfig::PreferA,
            color_mode: ColorModeConfig::FullColor,
            dispatch: DispatchConfig::Auto,
            parallel_threshold: cfg.parallel_threshold,
        }
    }
}

impl From<SearchConfigJson> for SearchConfig {
    fn from(value: SearchConfigJson) -> Self {
        Self {
            window_size: value.window_size,
            grid_size: value.grid_size,
            metric: value.metric.into(),
            mode: value.mode.into(),
            color_mode: value.color_mode.into(),
            dispatch: value.dispatch.into(),
            parallel_threshold: value.parallel_threshold,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Config {
    candidate_a_path: String,
    candidate_b_path: String,
    ground_truth_path: String,
    output_path: Option<String>,
    limit: Option<usize>,
    search: SearchConfigJson,
}

#[derive(Debug, Serialize)]
struct CellRecord {
    gx: usize,
    gy: usize,
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
}

#[derive(Debug, Serialize)]
struct ResultRecord {
    x: usize,
    y: usize,
    score: f64,
    dist_a_gt: f64,
    dist_b_gt: f64,
    gap: f64,
    cell: CellRecord,
}

impl ResultRecord {
    fn new(result: &ComparisonResult, set: &ResultSet) -> Self {
        let cell = set.cell_of(result);
        let bounds = cell.bounds(set.grid_size());
        Self {
            x: result.x,
            y: result.y,
            score: result.score,
            dist_a_gt: result.dist_a_gt,
            dist_b_gt: result.dist_b_gt,
            gap: result.gap(),
            cell: CellRecord {
                gx: cell.gx,
                gy: cell.gy,
                x0: bounds.x0,
                y0: bounds.y0,
                x1: bounds.x1,
                y1: bounds.y1,
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct StatsRecord {
    candidates: usize,
    valid: usize,
    cells: usize,
    parallel: bool,
}

#[derive(Debug, Serialize)]
struct Output {
    status: &'static str,
    stats: StatsRecord,
    best: Option<ResultRecord>,
    results: Vec<ResultRecord>,
}

fn status_label(status: SearchStatus) -> &'static str {
    match status {
        SearchStatus::Found => "found",
        SearchStatus::NoCandidates => "no_candidates",
        SearchStatus::NoValidComparisons => "no_valid_comparisons",
    }
}

fn build_output(set: &ResultSet, limit: Option<usize>) -> Output {
    let stats = set.stats();
    let take = limit.unwrap_or(set.len());
    Output {
        status: status_label(set.status()),
        stats: StatsRecord {
            candidates: stats.candidates,
            valid: stats.valid,
            cells: stats.cells,
            parallel: stats.parallel,
        },
        best: set.best().map(|r| ResultRecord::new(r, set)),
        results: set
            .iter()
            .take(take)
            .map(|r| ResultRecord::new(r, set))
            .collect(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("patchcmp=info".parse()?))
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.candidate_a_path.is_empty()
        || config.candidate_b_path.is_empty()
        || config.ground_truth_path.is_empty()
    {
        return Err(
            "candidate_a_path, candidate_b_path and ground_truth_path must be set in the config"
                .into(),
        );
    }
    if config.limit == Some(0) {
        return Err("limit must be at least 1".into());
    }

    let a = load_image(&config.candidate_a_path)?;
    let b = load_image(&config.candidate_b_path)?;
    let gt = load_image(&config.ground_truth_path)?;
    tracing::info!(
        a = %format!("{}x{}x{}", a.width(), a.height(), a.channels()),
        b = %format!("{}x{}x{}", b.width(), b.height(), b.channels()),
        gt = %format!("{}x{}x{}", gt.width(), gt.height(), gt.channels()),
        "images loaded"
    );

    let searcher = Searcher::new().with_config(config.search.into());
    let results = searcher.search(a.view(), b.view(), gt.view())?;

    let output = build_output(&results, config.limit);
    let json = serde_json::to_string_pretty(&output)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{build_output, Config, EXAMPLE_JSON, SCHEMA_JSON};
    use patchcmp::{ColorMode, ComparisonResult, Metric, Mode, ResultSet, SearchConfig};

    #[test]
    fn example_config_parses() {
        let config: Config = serde_json::from_str(EXAMPLE_JSON).unwrap();
        assert!(!config.candidate_a_path.is_empty());
        let cfg: SearchConfig = config.search.into();
        assert_eq!(cfg.window_size, 64);
        assert_eq!(cfg.grid_size, 20);
        assert_eq!(cfg.metric, Metric::Mae);
        assert_eq!(cfg.mode, Mode::PreferB);
        assert_eq!(cfg.color_mode, ColorMode::SingleChannel);
    }

    #[test]
    fn schema_is_valid_json() {
        let schema: serde_json::Value = serde_json::from_str(SCHEMA_JSON).unwrap();
        assert_eq!(schema["type"], "object");
    }

    #[test]
    fn missing_fields_use_library_defaults() {
        let config: Config = serde_json::from_str(r#"{"search": {"metric": "ssim_proxy"}}"#).unwrap();
        let cfg: SearchConfig = config.search.into();
        let defaults = SearchConfig::default();
        assert_eq!(cfg.window_size, defaults.window_size);
        assert_eq!(cfg.grid_size, defaults.grid_size);
        assert_eq!(cfg.metric, Metric::SsimProxy);
        assert!(config.limit.is_none());
    }

    #[test]
    fn output_respects_limit_and_reports_cells() {
        let results = (0..3)
            .map(|i| ComparisonResult {
                x: i * 25,
                y: 5,
                score: i as f64,
                dist_a_gt: 1.0,
                dist_b_gt: 1.0 + i as f64,
            })
            .collect();
        let set = ResultSet::from_ranked(results, 20);
        let output = build_output(&set, Some(2));
        assert_eq!(output.status, "found");
        assert_eq!(output.results.len(), 2);
        let best = output.best.unwrap();
        assert_eq!((best.x, best.cell.gx, best.cell.x0, best.cell.x1), (50, 2, 40, 59));
        assert_eq!(best.gap, 2.0);
    }
}
