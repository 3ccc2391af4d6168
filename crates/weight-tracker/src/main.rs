mod bootstrap;

use anyhow::Result;
use tracker_core::interaction::Interaction;
use tracker_core::models::Dataset;
use tracker_core::report::classify_delta;
use tracker_core::settings::Settings;
use tracker_core::TrackerError;
use tracker_store::WeightStore;
use tracker_ui::console::ConsoleInteraction;

fn main() -> Result<()> {
    let settings = Settings::load_with_last_used();

    bootstrap::ensure_directories()?;
    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("Weight Tracker v{} starting", env!("CARGO_PKG_VERSION"));

    let data_file = settings
        .data_file
        .clone()
        .unwrap_or_else(bootstrap::default_data_file);
    tracing::info!("Weight log: {}", data_file.display());

    let store = WeightStore::new(data_file);
    let mut interaction = ConsoleInteraction::new(&settings.theme);

    run(&store, &mut interaction, &settings)?;
    Ok(())
}

/// Single-shot control flow: collect an optional weight, record it and
/// report the delta, then always render the chart.
fn run(
    store: &WeightStore,
    interaction: &mut dyn Interaction,
    settings: &Settings,
) -> tracker_core::Result<()> {
    let weight = if settings.view_only {
        None
    } else if let Some(value) = settings.weight {
        if !value.is_finite() {
            return Err(TrackerError::InvalidInput(value.to_string()));
        }
        Some(value)
    } else {
        interaction.prompt_weight()?
    };

    if let Some(value) = weight {
        let result = store.append_and_reconcile(value)?;
        // The first-ever entry has nothing to compare against: no message.
        if let Some(report) = classify_delta(&result) {
            interaction.show_message(&report);
        }
    }

    let dataset = match store.load_all() {
        Ok(ds) => ds,
        // Nothing recorded yet: the chart view shows its empty-state notice.
        Err(TrackerError::EmptyDataset(_)) => Dataset::empty(),
        Err(e) => return Err(e),
    };
    interaction.show_chart(&dataset)
}

// ── Tests ──────────────────────────────────────────────────────────────────────
