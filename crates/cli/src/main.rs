use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use overlap::{parse_rectangles, write_matrix, MatrixKind};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "overlap")]
#[command(about = "Pairwise overlap matrix for named axis-aligned rectangles")]
struct Cmd {
    /// Input file: one `<name> <x1> <y1> <x2> <y2>` record per line
    input: PathBuf,
    /// Output file for the tab-separated N×N matrix
    output: PathBuf,
    /// Emit intersection areas instead of 0/1 flags
    #[arg(long)]
    areas: bool,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let kind = if cmd.areas {
        MatrixKind::Areas
    } else {
        MatrixKind::Flags
    };
    run(&cmd.input, &cmd.output, kind)
}

fn run(input: &Path, output: &Path, kind: MatrixKind) -> Result<()> {
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let set = parse_rectangles(text.lines())?;
    tracing::info!(rectangles = set.len(), kind = ?kind, "parsed input");

    let file =
        File::create(output).with_context(|| format!("creating {}", output.display()))?;
    let mut out = BufWriter::new(file);
    write_matrix(&set, kind, &mut out)?;
    out.flush()?;
    Ok(())
}
