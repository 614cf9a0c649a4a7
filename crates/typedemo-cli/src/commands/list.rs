use anyhow::Result;

use typedemo_core::ScriptRegistry;

pub fn run(registry: &ScriptRegistry, json: bool) -> Result<()> {
    let summaries = registry.summaries();

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if summaries.is_empty() {
        println!("No demos registered.");
        return Ok(());
    }

    println!("Demos ({}):\n", summaries.len());

    let width = summaries.iter().map(|s| s.id.len()).max().unwrap_or(0);
    for summary in &summaries {
        println!(
            "  {:<width$}  {:>3} lines  {:>4} chars",
            summary.id,
            summary.lines,
            summary.chars,
            width = width
        );
    }

    Ok(())
}
