use anyhow::Result;

use typedemo_core::ScriptRegistry;

pub fn run(registry: &ScriptRegistry, demo: &str) -> Result<()> {
    let script = registry.require(demo)?;
    println!("{}", script.full_text());
    Ok(())
}
