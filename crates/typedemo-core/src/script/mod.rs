mod builtin;
mod models;
mod registry;

pub use models::{LineRecord, Script, ScriptSummary};
pub use registry::ScriptRegistry;
