use anyhow::Result;
use clap::Args;
use colored::Colorize;
use formdoc_content::scan;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Input document file (interchange JSON)
    pub input: PathBuf,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let doc = super::load_document(&args.input)?;

    let visible = doc.visible_components();
    let orphans: Vec<&str> = doc
        .store
        .iter()
        .filter(|c| !visible.iter().any(|v| v.id == c.id))
        .map(|c| c.id.as_str())
        .collect();
    let dangling: Vec<String> = doc
        .sections
        .iter()
        .flat_map(|s| scan(&s.content))
        .filter(|id| !doc.store.contains(id))
        .map(str::to_string)
        .collect();

    println!("{} {}", "✓".green(), args.input.display());
    println!("  sections:   {}", doc.sections.len());
    for section in &doc.sections {
        let state = if section.enabled { "enabled" } else { "disabled" };
        println!("    {} [{}] {}", section.id, state, section.title);
    }
    println!("  components: {} visible", visible.len());
    for component in &visible {
        println!(
            "    {} ({}) \"{}\"",
            component.id,
            component.kind.as_str(),
            component.label
        );
    }
    if !orphans.is_empty() {
        println!(
            "  {} orphaned store entr{}: {}",
            "!".yellow(),
            if orphans.len() == 1 { "y" } else { "ies" },
            orphans.join(", ")
        );
    }
    if !dangling.is_empty() {
        println!(
            "  {} dangling marker(s): {}",
            "!".yellow(),
            dangling.join(", ")
        );
    }
    Ok(())
}
