//! Renderings of a built graph
//!
//! `build_report` resolves the App root and prints what got wired;
//! `inspect_report` lists scopes and bindings without constructing anything.

use std::fmt::Write as _;

use tracing::info;
use wgb_domain::error::{Error, Result};
use wgb_infrastructure::config::AppConfig;
use wgb_infrastructure::di::{GraphDescription, ObjectGraph, TopologyGraphExt, build_from_config};
use wgb_infrastructure::error_ext::ErrorContext;

/// Build the graph, resolve the App and render the wired tree
///
/// The output lists the App tree, then every shuttle through the
/// `allShuttles` aggregator, then every connection.
pub fn build_report(config: &AppConfig) -> Result<String> {
    let graph = build_from_config(config)?;
    let app = graph.app()?;
    let shuttles = graph.all_shuttles()?;
    let connections = graph.connections()?;
    info!(
        resolved = graph.resolved_count(),
        constructed = graph.construction_count(),
        "App resolved"
    );

    let mut out = app.to_string();
    write_line(&mut out, "All shuttles:")?;
    for shuttle in &shuttles {
        write_line(&mut out, &format!("  {shuttle}"))?;
    }
    write_line(&mut out, "All connections:")?;
    for connection in &connections {
        write_line(&mut out, &format!("  {connection}"))?;
    }
    Ok(out)
}

/// Build the graph without resolving and render its inventory
pub fn inspect_report(config: &AppConfig, json: bool) -> Result<String> {
    let mut config = config.clone();
    config.graph.eager = false;
    let graph = build_from_config(&config)?;
    let description = graph.describe();

    if json {
        return serde_json::to_string_pretty(&description)
            .context("Failed to serialize graph description");
    }
    render_description(&graph, &description)
}

fn render_description(graph: &ObjectGraph, description: &GraphDescription) -> Result<String> {
    let mut out = String::new();
    for scope in &description.scopes {
        write_line(&mut out, &scope.label)?;
        for binding in &scope.bindings {
            write_line(
                &mut out,
                &format!(
                    "  bind    {} <- {}({})",
                    binding.identity,
                    binding.recipe,
                    binding.args.join(", ")
                ),
            )?;
        }
        for aggregator in &scope.aggregators {
            write_line(
                &mut out,
                &format!(
                    "  collect {} <- {}[{}]",
                    aggregator.identity,
                    aggregator.member_kind,
                    aggregator.contributions.join(", ")
                ),
            )?;
        }
        for exposed in &scope.exposed {
            write_line(&mut out, &format!("  expose  {exposed}"))?;
        }
    }
    write_line(
        &mut out,
        &format!(
            "{} scopes, {} identities, {} bindings",
            description.scopes.len(),
            graph.identities().len(),
            description.binding_count()
        ),
    )?;
    Ok(out)
}

fn write_line(out: &mut String, line: &str) -> Result<()> {
    writeln!(out, "{line}").map_err(|e| Error::internal(format!("Failed to render report: {e}")))
}
