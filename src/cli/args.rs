use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct PathsArgs {
    /// Edge-list graph file: vertex count, then `src dst weight` triples
    pub graph: PathBuf,

    /// Source vertex (defaults to `graph.source` from config, else 0)
    #[arg(long, short)]
    pub source: Option<usize>,

    /// Only report the path to this vertex
    #[arg(long, short)]
    pub target: Option<usize>,

    /// Separator between path vertices (overrides `output.delimiter`)
    #[arg(long)]
    pub delimiter: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct LadderArgs {
    /// Word to start from
    pub start: String,

    /// Word to reach
    pub end: String,

    /// Dictionary file (overrides `ladder.dictionary`)
    #[arg(long, short)]
    pub dictionary: Option<PathBuf>,

    /// Maximum edits between consecutive words (overrides `ladder.max_edit_distance`)
    #[arg(long)]
    pub max_edits: Option<usize>,
}
