//! Warchief - Headless balance preview
//!
//! Scores the starter ability and item catalog with the same functions the
//! editor panels call, using the thresholds from the user's settings file.

mod preview;
mod settings;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use warchief_game::catalog::{starter_abilities, starter_items};

use crate::preview::PreviewReport;
use crate::settings::EditorSettings;

fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting Warchief balance preview...");

    let settings = EditorSettings::load().context("Invalid settings file")?;
    if EditorSettings::settings_path().is_some_and(|p| !p.exists()) {
        if let Err(e) = settings.save() {
            warn!("Could not write default settings: {:#}", e);
        }
    }

    settings
        .sentience
        .validate()
        .context("Invalid sentience thresholds in settings")?;
    info!(
        "Sentience thresholds: imbued {:.1}, sentient {:.1}",
        settings.sentience.imbued, settings.sentience.sentient
    );

    let report = PreviewReport::build(
        &starter_abilities(),
        &starter_items(),
        &settings.sentience,
        &settings.preview,
    );
    report.log(&settings.preview);

    let downgraded = report.items.iter().filter(|l| l.downgraded()).count();
    if downgraded > 0 {
        warn!("{} item(s) hold a tier their power level no longer supports", downgraded);
    }

    Ok(())
}
