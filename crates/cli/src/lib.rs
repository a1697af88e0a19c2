//! `partial` demo driver: load users, project them, show one record before
//! and after.

use std::io::Write;
use std::time::Instant;

use anyhow::Context;
use tracing::{info, warn};

use partial_core::{Page, ProjectedRecord};
use partial_infra::{Config, fixtures};
use partial_users::User;

/// Loads the configured fixture, projects it and writes the report to `out`.
///
/// A fixture that cannot be loaded is fatal; everything past that point only
/// affects what gets printed.
pub fn run<W: Write>(config: &Config, out: &mut W) -> anyhow::Result<()> {
    let users: Page<User> = fixtures::load_page(&config.source)
        .with_context(|| format!("failed to load users from {}", config.source.display()))?;

    let started = Instant::now();
    let partial = users.project(&config.fields);
    info!(
        records = partial.len(),
        requested = config.fields.len(),
        elapsed_s = started.elapsed().as_secs_f64(),
        "projection done"
    );

    report(config, &users, &partial, out)
}

fn report<W: Write>(
    config: &Config,
    users: &Page<User>,
    partial: &Page<ProjectedRecord>,
    out: &mut W,
) -> anyhow::Result<()> {
    let selected = config.record_index(partial.len()).and_then(|index| {
        Some((index, partial.payload().get(index)?, users.payload().get(index)?))
    });

    let Some((index, narrowed, original)) = selected else {
        warn!(records = partial.len(), record = ?config.record, "no record to show");
        writeln!(out, "Projection produced no record to show.")?;
        return Ok(());
    };

    writeln!(out, "Record {index} in payload is:")?;
    writeln!(out, "Partial:")?;
    writeln!(out, "{}", serde_json::to_string_pretty(narrowed)?)?;
    writeln!(out, "Original:")?;
    writeln!(out, "{}", serde_json::to_string_pretty(original)?)?;
    Ok(())
}
