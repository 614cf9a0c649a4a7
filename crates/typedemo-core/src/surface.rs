//! Output surfaces the typing engine renders into
//!
//! Every demo identifier owns exactly one surface, found by appending
//! [`SURFACE_SUFFIX`] to the identifier. A surface is a flat list of
//! per-line segments plus an optional trailing cursor marker.

use std::collections::BTreeMap;

/// Suffix binding a demo identifier to its surface name
pub const SURFACE_SUFFIX: &str = "-code";

/// Glyph used by [`OutputSurface::render_plain`] for the cursor marker
pub const CURSOR_GLYPH: char = '▌';

/// Surface name for a demo identifier ("chat-agent" -> "chat-agent-code")
pub fn surface_name(demo_id: &str) -> String {
    format!("{demo_id}{SURFACE_SUFFIX}")
}

/// How a segment is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentStyle {
    Plain,
    Emphasized,
    /// Whole-line reveal shown as a text selection
    Selected,
}

/// Rendering target for one script line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Index of the script line this segment renders
    pub line: usize,
    pub text: String,
    pub style: SegmentStyle,
}

#[derive(Debug, Clone)]
pub struct OutputSurface {
    name: String,
    segments: Vec<Segment>,
    cursor: bool,
    /// Bumped on every mutation
    revision: u64,
}

impl OutputSurface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            segments: Vec::new(),
            cursor: false,
            revision: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn has_cursor(&self) -> bool {
        self.cursor
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// No text and no cursor
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty() && !self.cursor
    }

    pub fn clear(&mut self) {
        if self.is_empty() {
            return;
        }
        self.segments.clear();
        self.cursor = false;
        self.bump();
    }

    /// Start the rendering target for `line` with its first text
    pub fn open_line(&mut self, line: usize, text: &str, style: SegmentStyle) {
        self.segments.push(Segment {
            line,
            text: text.to_string(),
            style,
        });
        self.bump();
    }

    /// Append one character to the target for `line`.
    /// Returns false when that line has no target yet.
    pub fn append_char(&mut self, line: usize, ch: char) -> bool {
        match self.segments.iter_mut().rev().find(|s| s.line == line) {
            Some(segment) => {
                segment.text.push(ch);
                self.bump();
                true
            }
            None => false,
        }
    }

    /// Drop any existing cursor marker and put a fresh one at the end
    pub fn place_cursor(&mut self) {
        self.cursor = true;
        self.bump();
    }

    pub fn remove_cursor(&mut self) {
        if self.cursor {
            self.cursor = false;
            self.bump();
        }
    }

    /// Visible text without the cursor marker
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Visible text with the cursor marker appended when present
    pub fn render_plain(&self) -> String {
        let mut out = self.text();
        if self.cursor {
            out.push(CURSOR_GLYPH);
        }
        out
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}

/// Every output surface in the current view, by name
#[derive(Debug, Clone, Default)]
pub struct SurfaceSet {
    surfaces: BTreeMap<String, OutputSurface>,
}

impl SurfaceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// One surface for every given demo identifier
    pub fn for_demos<'a>(demo_ids: impl IntoIterator<Item = &'a str>) -> Self {
        let mut set = Self::new();
        for id in demo_ids {
            set.insert(OutputSurface::new(surface_name(id)));
        }
        set
    }

    pub fn insert(&mut self, surface: OutputSurface) {
        self.surfaces.insert(surface.name().to_string(), surface);
    }

    pub fn remove(&mut self, name: &str) -> Option<OutputSurface> {
        self.surfaces.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&OutputSurface> {
        self.surfaces.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut OutputSurface> {
        self.surfaces.get_mut(name)
    }

    /// Surface bound to a demo identifier
    pub fn for_demo(&self, demo_id: &str) -> Option<&OutputSurface> {
        self.get(&surface_name(demo_id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &OutputSurface> {
        self.surfaces.values()
    }

    pub fn clear_all(&mut self) {
        for surface in self.surfaces.values_mut() {
            surface.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_name_suffix() {
        assert_eq!(surface_name("chat-agent"), "chat-agent-code");
    }

    #[test]
    fn test_cursor_trails_text() {
        let mut surface = OutputSurface::new("tab-code");
        surface.open_line(0, "a", SegmentStyle::Plain);
        surface.place_cursor();
        assert_eq!(surface.render_plain(), "a▌");

        assert!(surface.append_char(0, 'b'));
        surface.place_cursor();
        assert_eq!(surface.render_plain(), "ab▌");

        surface.remove_cursor();
        assert_eq!(surface.render_plain(), "ab");
    }

    #[test]
    fn test_append_without_target_fails() {
        let mut surface = OutputSurface::new("x-code");
        assert!(!surface.append_char(3, 'z'));
        assert!(surface.is_empty());
    }

    #[test]
    fn test_clear_only_bumps_when_dirty() {
        let mut surface = OutputSurface::new("x-code");
        surface.clear();
        assert_eq!(surface.revision(), 0);

        surface.open_line(0, "q", SegmentStyle::Emphasized);
        surface.clear();
        assert!(surface.is_empty());
        assert_eq!(surface.revision(), 2);
    }

    #[test]
    fn test_clear_all() {
        let mut set = SurfaceSet::for_demos(["tab", "chat-ask"]);
        set.get_mut("tab-code").unwrap().open_line(0, "t", SegmentStyle::Plain);
        set.get_mut("chat-ask-code").unwrap().place_cursor();

        set.clear_all();
        assert!(set.iter().all(OutputSurface::is_empty));
        assert!(set.for_demo("tab").is_some());
        assert!(set.for_demo("rules").is_none());
    }
}
