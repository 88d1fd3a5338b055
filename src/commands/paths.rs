//! `shortpath paths` command

use std::time::Instant;

use crate::cli::{OutputFormat, PathsArgs};
use shortpath_core::error::Result;
use shortpath_core::format::{path_to_json, render_path_human};
use shortpath_core::graph::{compute_shortest_paths, load_graph, GraphProvider, PathResult};
use shortpath_core::trace_time;

use super::dispatch::CommandContext;

/// Execute the paths command
pub fn execute(ctx: &CommandContext, args: &PathsArgs) -> Result<()> {
    let start = Instant::now();

    if args.delimiter.as_deref() == Some("") {
        shortpath_core::bail_usage!("--delimiter must not be empty");
    }

    let graph = load_graph(&args.graph)?;
    let source = args.source.unwrap_or(ctx.config.graph.source);

    if ctx.cli.verbose {
        tracing::debug!(
            elapsed = ?ctx.start.elapsed(),
            vertices = graph.num_vertices(),
            edges = graph.edge_count(),
            source,
            "load_graph"
        );
    }

    let shortest = compute_shortest_paths(&graph, source)?;
    trace_time!(start, "compute_shortest_paths");

    let results: Vec<PathResult> = match args.target {
        Some(target) => vec![shortest.path_to(target)?],
        None => shortest.all_paths()?,
    };

    match ctx.cli.format {
        OutputFormat::Human => {
            let delimiter = args
                .delimiter
                .as_deref()
                .unwrap_or(ctx.config.output.delimiter.as_str());
            for result in &results {
                println!("{}", render_path_human(result, delimiter));
            }
        }
        OutputFormat::Json => {
            let paths: Vec<serde_json::Value> = results.iter().map(path_to_json).collect();
            let output = serde_json::json!({
                "source": source,
                "vertices": graph.num_vertices(),
                "paths": paths,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
