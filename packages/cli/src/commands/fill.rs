use anyhow::{Context, Result};
use clap::Args;
use formdoc_fill::{flatten_sections, FillSession, ValueMap};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct FillArgs {
    /// Input document file (interchange JSON)
    pub input: PathBuf,

    /// JSON map of variable name → value (string, string array, or flag array)
    #[arg(long)]
    pub values: PathBuf,

    /// Section ids to exclude from the preview (repeatable)
    #[arg(long = "skip-section")]
    pub skip_sections: Vec<String>,

    /// Print the rendered rich form instead of flattened text
    #[arg(long)]
    pub html: bool,
}

pub fn run(args: FillArgs) -> Result<()> {
    let doc = super::load_document(&args.input)?;

    let raw = formdoc_interchange::read_to_string(&args.values)
        .with_context(|| format!("reading {}", args.values.display()))?;
    let values: ValueMap =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", args.values.display()))?;

    let mut session = FillSession::new(doc.snapshot());
    for (name, value) in values {
        session.set_value(name, value);
    }
    for section_id in &args.skip_sections {
        session.set_section_enabled(section_id, false);
    }

    let preview = session.generate_preview();
    if args.html {
        println!("{}", preview);
    } else {
        println!("{}", flatten_sections(&session.rendered_blocks()));
    }
    Ok(())
}
