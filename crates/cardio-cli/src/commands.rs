//! Subcommand implementations.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use tracing::info;

use cardio_model::{FieldKind, Schema};
use cardio_predict::AgeThresholdClassifier;
use cardio_server::{AppState, serve};

use crate::cli::ServeArgs;

pub fn run_serve(args: &ServeArgs) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", args.host, args.port))?;
    let classifier = match args.age_threshold {
        Some(threshold) => AgeThresholdClassifier::new(threshold),
        None => AgeThresholdClassifier::default(),
    };
    info!(
        threshold = classifier.threshold(),
        "starting screening server"
    );
    let state = AppState::new(Schema::clinical(), Arc::new(classifier));
    let runtime = tokio::runtime::Runtime::new().context("start async runtime")?;
    runtime
        .block_on(serve(addr, state))
        .context("screening server stopped")
}

pub fn run_fields() -> Result<()> {
    let schema = Schema::clinical();
    let mut table = Table::new();
    table.set_header(vec!["Field", "Label", "Rule"]);
    apply_table_style(&mut table);
    for spec in schema.fields() {
        table.add_row(vec![
            spec.name.clone(),
            spec.label.clone(),
            describe_rule(&spec.kind),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn describe_rule(kind: &FieldKind) -> String {
    match kind {
        FieldKind::Categorical { values } => format!("one of: {}", values.join(", ")),
        FieldKind::IntegerRange { min, max } => format!("integer between {min} and {max}"),
        FieldKind::RealRange { min, max } => format!("number between {min} and {max}"),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}
