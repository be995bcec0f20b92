use anyhow::{Context, Result};
use chrono::Local;
use clap::Args;
use colored::Colorize;
use formdoc_interchange::{export, export_file_name, to_json_string, write_string};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Input document file (interchange JSON)
    pub input: PathBuf,

    /// Output file; defaults to the date-stamped convention
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: ExportArgs) -> Result<()> {
    let doc = super::load_document(&args.input)?;

    let payload = to_json_string(&export(&doc))?;
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(export_file_name(Local::now())));
    write_string(&output, &payload).with_context(|| format!("writing {}", output.display()))?;

    println!(
        "{} exported {} section(s), {} component(s) → {}",
        "✓".green(),
        doc.sections.len(),
        doc.visible_components().len(),
        output.display()
    );
    Ok(())
}
