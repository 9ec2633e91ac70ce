use std::io::{Read, Write};

use anyhow::Context;
use clap::Parser;
use mozvcard_core::config::{Settings, load_config};
use mozvcard_rfc::rfc::vcard::{FoldWidth, VCardWriter, parse_contacts};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

mod args;

use args::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let config = load_config()?;

    tracing::debug!(config = ?config, "Configuration loaded");

    let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    if let Ok(filter) = EnvFilter::try_new(level) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %level, "Invalid log level, keeping info");
    }

    let writer = select_writer(cli.fold_width, &config)?;
    let input = read_input(&cli)?;
    let contacts = parse_contacts(&input)?;

    tracing::info!(
        contacts = contacts.len(),
        fold_width = writer.width().get(),
        "Converting contacts"
    );

    let output = writer.write_all(&contacts);

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(())
}

/// `--fold-width` replaces the configured width, so the configured value is
/// only validated when no override is given.
fn select_writer(fold_width: Option<usize>, config: &Settings) -> anyhow::Result<VCardWriter> {
    let writer = match fold_width {
        Some(width) => VCardWriter::new(FoldWidth::new(width)?),
        None => VCardWriter::from_settings(config)?,
    };
    Ok(writer)
}

fn read_input(cli: &Cli) -> anyhow::Result<String> {
    if let Some(path) = cli.input_path() {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read stdin")?;
    Ok(input)
}
