use media_analytics::chart::ChartTable;
use media_analytics::config::Config;
use media_analytics::payload::RawAnalytics;
use media_analytics::series;
use std::io::Read;

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "media_analytics=info".into()),
        )
        .init();

    // First arg is the raw analytics JSON file (stdin when absent),
    // second is an optional config file.
    let input_path = std::env::args().nth(1);
    let config_path = std::env::args().nth(2);
    let config = Config::load(config_path.as_deref().map(std::path::Path::new));

    let raw_json = match &input_path {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::error!(path = %path, error = %e, "Failed to read input");
                std::process::exit(1);
            }
        },
        None => {
            let mut buf = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
                tracing::error!(error = %e, "Failed to read stdin");
                std::process::exit(1);
            }
            buf
        }
    };

    let raw: RawAnalytics = match serde_json::from_str(&raw_json) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::error!(error = %e, "Input is not a raw analytics payload");
            std::process::exit(1);
        }
    };

    let series = match series::normalize(&raw) {
        Ok(series) => series,
        Err(e) => {
            tracing::error!(error = %e, "Rejected analytics payload");
            std::process::exit(1);
        }
    };

    tracing::info!(
        total_views = series.total_views,
        total_size = series.total_size,
        days = series.views_per_day.len(),
        "Normalized analytics"
    );

    let table = ChartTable::from_series(&series, &config.date_label, &config.views_label);
    let report = serde_json::json!({
        "total_size": series.total_size,
        "total_views": series.total_views,
        "views_per_day": table,
    });

    let out = if config.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    };
    match out {
        Ok(json) => println!("{json}"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize report");
            std::process::exit(1);
        }
    }
}
