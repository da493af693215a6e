//! `visita` CLI: expands a recurrence request (JSON on stdin or a file
//! argument) into its visit schedule and prints the dates as JSON.

use std::io::Read;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

use visita_core::config::load_config;
use visita_recur::{ExpansionOptions, RecurrenceRequest, expand_visits, validate_request};

fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();

    let config = load_config()?;

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping info");
    }

    let request = read_request()?;
    validate_request(&request)?;

    let options = ExpansionOptions::default().with_period_cap(config.schedule.period_cap);
    let dates = expand_visits(&request, options);

    tracing::info!(
        frequency = %request.frequency,
        start_date = %request.start_date,
        count = dates.len(),
        "schedule expanded"
    );

    println!("{}", serde_json::to_string_pretty(&dates)?);

    Ok(())
}

/// Reads the recurrence request from the first argument (a file path) or,
/// absent one, from stdin.
fn read_request() -> anyhow::Result<RecurrenceRequest> {
    let raw = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read request file {path}"))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read request from stdin")?;
            buffer
        }
    };

    serde_json::from_str(&raw).context("failed to parse recurrence request JSON")
}
