//! `shortpath ladder` command

use std::path::PathBuf;

use crate::cli::{LadderArgs, OutputFormat};
use shortpath_core::error::Result;
use shortpath_core::format::{ladder_to_json, render_ladder_human};
use shortpath_core::ladder::{generate_word_ladder, load_words, normalize_word};

use super::dispatch::CommandContext;

/// Execute the ladder command
pub fn execute(ctx: &CommandContext, args: &LadderArgs) -> Result<()> {
    let dictionary_path = args
        .dictionary
        .clone()
        .unwrap_or_else(|| PathBuf::from(&ctx.config.ladder.dictionary));
    let max_edits = args
        .max_edits
        .unwrap_or(ctx.config.ladder.max_edit_distance);

    let dictionary = load_words(&dictionary_path)?;

    if ctx.cli.verbose {
        tracing::debug!(
            elapsed = ?ctx.start.elapsed(),
            words = dictionary.len(),
            max_edits,
            "load_dictionary"
        );
    }

    let start = normalize_word(&args.start, "start")?;
    let end = normalize_word(&args.end, "end")?;
    let ladder = generate_word_ladder(&start, &end, &dictionary, max_edits)?;

    match ctx.cli.format {
        OutputFormat::Human => {
            println!("{}", render_ladder_human(ladder.as_deref()));
        }
        OutputFormat::Json => {
            let output = ladder_to_json(&start, &end, ladder.as_deref());
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
