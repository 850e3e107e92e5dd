// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ExamPack contributors

//! Command-line entry point: export or check an exam package JSON file.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use exampack::{DirectorySink, ExportConfig, export_and_deliver, load_exam, normalize, validate};

#[derive(Parser, Debug)]
#[command(
    name = "exampack",
    version,
    about = "Export a generated exam package to a single .docx document."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the document and save it into a directory.
    Export(ExportArgs),
    /// Validate a package and report warnings without writing anything.
    Check(CheckArgs),
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Exam package JSON as produced by the content provider.
    input: PathBuf,
    /// Directory the document is written to.
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
    /// TOML file overriding header lines, option labels and layout.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Open the saved document afterwards.
    #[arg(long)]
    open: bool,
}

#[derive(Args, Debug)]
struct CheckArgs {
    input: PathBuf,
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("exampack=info")),
        )
        .init();

    match Cli::parse().command {
        Command::Export(args) => run_export(args),
        Command::Check(args) => run_check(args),
    }
}

fn run_export(args: ExportArgs) -> Result<()> {
    let config = ExportConfig::load(args.config.as_deref())?;
    let exam = normalize(load_exam(&args.input)?);
    let mut sink = DirectorySink::new(args.out_dir).open_after_save(args.open);

    let saved = export_and_deliver(&exam, &config, &mut sink)?;
    println!("{}", saved.display());
    Ok(())
}

fn run_check(args: CheckArgs) -> Result<()> {
    let config = ExportConfig::load(args.config.as_deref())?;
    let exam = load_exam(&args.input)?;
    let report = validate(&exam, &config.labels())?;

    println!(
        "{}: {} questions, {} analyses, {} sections",
        exam.title,
        report.question_count(),
        exam.question_analyses.len(),
        exam.sections.len()
    );
    for warning in report.warnings() {
        println!("warning: {warning}");
    }
    Ok(())
}
