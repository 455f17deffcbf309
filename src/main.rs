use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use simgroup::input;
use simgroup_core::{pipeline, GroupingConfig, RecordStore};

/// Group items by feature-vector similarity
#[derive(Parser, Debug)]
#[command(name = "simgroup")]
#[command(about = "Groups items by feature-vector similarity using repeated sort passes", long_about = None)]
struct Args {
    /// File containing a JSON array of records with feature vectors
    #[arg(short, long)]
    file: PathBuf,

    /// Number of nearby records from every sorting pass to consider for adjacency
    #[arg(short, long, default_value_t = 10)]
    pool_size: usize,

    /// Maximum number of final adjacencies to track per record
    #[arg(short, long, default_value_t = 4)]
    adjacencies: usize,

    /// Threshold for per-dimension difference to consider for the pool
    #[arg(short, long, default_value_t = 20.0)]
    threshold: f64,

    /// Threshold for average difference to consider non-adjacent (lower makes more groups)
    #[arg(short = 'T', long, default_value_t = 4000.0)]
    adj_threshold: f64,

    /// Only process a limited number of records from the input file (0 = unlimited)
    #[arg(short, long, default_value_t = 0)]
    limit: usize,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Loading records from {:?}", args.file);
    let records = input::load_records(&args.file, args.limit)?;
    info!("Loaded {} records", records.len());

    let entries = records.into_iter().map(|r| (r.file, r.features)).collect();
    let mut store = RecordStore::from_entries(entries)?;

    let config = GroupingConfig {
        pool_size: args.pool_size,
        adjacencies: args.adjacencies,
        threshold: args.threshold,
        adj_threshold: args.adj_threshold,
    };
    let summary = pipeline::run(&mut store, &config)?;

    println!("{} groups", summary.groups);
    for (group, size) in &summary.sizes {
        println!("group {}: {} members", group, size);
    }

    Ok(())
}
