use anyhow::Context;
use cardfolio_core::import::{CanonicalField, ColumnMapping};
use cardfolio_core::{AllocationPreset, EraPreset, PortfolioContext};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    // logs go to stderr so stdout stays pure JSON
    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false).with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}

/// Applies configured presets. Unknown names are logged and ignored.
pub fn apply_presets(context: &PortfolioContext, config: &Config) -> anyhow::Result<()> {
    if let Some(name) = &config.allocation_preset {
        match name.parse::<AllocationPreset>() {
            Ok(preset) => context.set_allocation_preset(preset)?,
            Err(e) => tracing::warn!("{}; keeping the default allocation target", e),
        }
    }
    if let Some(name) = &config.era_preset {
        match name.parse::<EraPreset>() {
            Ok(preset) => context.set_era_preset(preset)?,
            Err(e) => tracing::warn!("{}; keeping the default era target", e),
        }
    }
    Ok(())
}

/// Lists every canonical field with the header it was mapped to.
pub fn format_column_diagnostic(mapping: &ColumnMapping) -> String {
    let mut lines = vec![format!("Detected headers: {}", mapping.headers.join(", "))];
    for field in CanonicalField::ALL {
        let requirement = if field.is_required() { "required" } else { "optional" };
        let source = mapping.get(field).unwrap_or("not found");
        lines.push(format!("  {} ({}): {}", field.label(), requirement, source));
    }
    lines.join("\n")
}

/// Loads the configured file, prints diagnostics to stderr and returns the
/// dashboard JSON. Fails only when there is no file to read.
pub async fn run(config: &Config) -> anyhow::Result<String> {
    let path = config
        .csv_path
        .as_ref()
        .context("no CSV file given; pass a path or set CF_CSV_PATH")?;

    let context = PortfolioContext::default();
    apply_presets(&context, config)?;

    let snapshot = context
        .upload_file(path)
        .await
        .with_context(|| format!("could not read {}", path.display()))?;

    for warning in &snapshot.validation.warnings {
        eprintln!("warning: {}", warning);
    }
    if !snapshot.validation.is_valid {
        for error in &snapshot.validation.errors {
            eprintln!("error: {}", error);
        }
        eprintln!("{}", format_column_diagnostic(&snapshot.detected_columns));
    }

    let dashboard = context.dashboard()?;
    let json = if config.pretty {
        serde_json::to_string_pretty(&dashboard)?
    } else {
        serde_json::to_string(&dashboard)?
    };
    Ok(json)
}
