use std::time::Duration;

use serde::Serialize;

/// One pre-scripted line of a typing demo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    text: String,
    /// `text` split into chars once, so a tick indexes in O(1)
    chars: Box<[char]>,
    /// Delay per revealed character. For `reveal_whole` lines the engine
    /// uses its own fixed pause instead.
    pub speed: Duration,
    /// Rendered with the emphasis style (generated code)
    pub emphasize: bool,
    /// Show the whole text in one write ("selected" code)
    pub reveal_whole: bool,
}

impl LineRecord {
    /// A plain line typed one character every `speed_ms`
    pub fn typed(text: impl Into<String>, speed_ms: u64) -> Self {
        let text = text.into();
        Self {
            chars: text.chars().collect(),
            text,
            speed: Duration::from_millis(speed_ms),
            emphasize: false,
            reveal_whole: false,
        }
    }

    /// An emphasized line typed one character every `speed_ms`
    pub fn emphasized(text: impl Into<String>, speed_ms: u64) -> Self {
        Self {
            emphasize: true,
            ..Self::typed(text, speed_ms)
        }
    }

    /// A line that appears all at once
    pub fn whole(text: impl Into<String>, speed_ms: u64) -> Self {
        Self {
            reveal_whole: true,
            ..Self::typed(text, speed_ms)
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters (not bytes)
    pub fn char_len(&self) -> usize {
        self.chars.len()
    }

    /// Character at `index`, counting chars rather than bytes
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }
}

/// Ordered, immutable sequence of lines for one demo
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    lines: Vec<LineRecord>,
}

impl Script {
    pub fn new(lines: Vec<LineRecord>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[LineRecord] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&LineRecord> {
        self.lines.get(index)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Text as it reads once every line has been revealed
    pub fn full_text(&self) -> String {
        self.lines.iter().map(|l| l.text()).collect()
    }

    /// Total characters across all lines
    pub fn char_count(&self) -> usize {
        self.lines.iter().map(LineRecord::char_len).sum()
    }
}

impl FromIterator<LineRecord> for Script {
    fn from_iter<I: IntoIterator<Item = LineRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Listing entry for a registered script
#[derive(Debug, Clone, Serialize)]
pub struct ScriptSummary {
    pub id: String,
    pub lines: usize,
    pub chars: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_len_counts_scalars() {
        let line = LineRecord::typed("💬 사용자", 80);
        assert_eq!(line.char_len(), 5);
        assert!(line.text().len() > 5);
        assert_eq!(line.char_at(0), Some('💬'));
        assert_eq!(line.char_at(4), Some('자'));
        assert_eq!(line.char_at(5), None);
    }

    #[test]
    fn test_full_text_concatenates() {
        let script: Script = [
            LineRecord::typed("def f(", 80),
            LineRecord::emphasized("x):", 120),
        ]
        .into_iter()
        .collect();
        assert_eq!(script.full_text(), "def f(x):");
        assert_eq!(script.char_count(), 9);
        assert_eq!(script.len(), 2);
    }

    #[test]
    fn test_constructors_set_flags() {
        let whole = LineRecord::whole("fn f() {}", 100);
        assert!(whole.reveal_whole);
        assert!(!whole.emphasize);
        let emph = LineRecord::emphasized("x", 120);
        assert!(emph.emphasize);
        assert_eq!(emph.speed, Duration::from_millis(120));
    }
}
