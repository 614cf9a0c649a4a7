use std::collections::BTreeMap;

use super::builtin;
use super::models::{LineRecord, Script, ScriptSummary};
use crate::{Error, Result};

/// Static mapping from demo identifier to its script
///
/// Scripts are fixed once the registry is built. There is no way to add,
/// replace or remove a script afterwards.
#[derive(Debug, Clone, Default)]
pub struct ScriptRegistry {
    scripts: BTreeMap<String, Script>,
}

impl ScriptRegistry {
    /// Registry holding the scripts shipped with the player
    pub fn builtin() -> Self {
        builtin::all()
            .into_iter()
            .map(|(id, script)| (id.to_string(), script))
            .collect()
    }

    /// Add a script while building a registry
    pub fn with_script(mut self, id: impl Into<String>, lines: Vec<LineRecord>) -> Self {
        self.scripts.insert(id.into(), Script::new(lines));
        self
    }

    /// Look up the script for a demo, `None` when nothing is registered
    pub fn get_script(&self, demo_id: &str) -> Option<&Script> {
        self.scripts.get(demo_id)
    }

    /// Like `get_script`, but reports unknown identifiers as an error
    pub fn require(&self, demo_id: &str) -> Result<&Script> {
        self.get_script(demo_id)
            .ok_or_else(|| Error::MissingScript(demo_id.to_string()))
    }

    pub fn contains(&self, demo_id: &str) -> bool {
        self.scripts.contains_key(demo_id)
    }

    /// Registered identifiers in sorted order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.scripts.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }

    pub fn summaries(&self) -> Vec<ScriptSummary> {
        self.scripts
            .iter()
            .map(|(id, script)| ScriptSummary {
                id: id.clone(),
                lines: script.len(),
                chars: script.char_count(),
            })
            .collect()
    }
}

impl FromIterator<(String, Script)> for ScriptRegistry {
    fn from_iter<I: IntoIterator<Item = (String, Script)>>(iter: I) -> Self {
        Self {
            scripts: iter.into_iter().collect(),
        }
    }
}
