use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;
use typedemo_core::selector::ChatMode;
use typedemo_core::surface::{OutputSurface, SegmentStyle, CURSOR_GLYPH};

use crate::app::App;
use crate::theme::Theme;

pub struct DemoViewWidget;

impl DemoViewWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let block = Block::default()
            .title(format!(" {} ", app.view_title()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg0));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let code_area = if app.selector.on_chat_tab() {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Min(1)])
                .split(inner);
            render_mode_bar(frame, chunks[0], app);
            chunks[1]
        } else {
            inner
        };

        let lines = match app.current_surface() {
            Some(surface) => segment_lines(surface, theme, app.cursor_visible()),
            None => vec![Line::from(Span::styled(
                "(no script for this demo)",
                Style::default().fg(theme.grey1),
            ))],
        };

        // Wrap here so the row count is exact, then keep the cursor in view
        let rows = wrap_lines(lines, code_area.width);
        let scroll = u16::try_from(rows.len())
            .unwrap_or(u16::MAX)
            .saturating_sub(code_area.height);

        frame.render_widget(Paragraph::new(rows).scroll((scroll, 0)), code_area);
    }
}

fn render_mode_bar(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let mut spans = Vec::with_capacity(ChatMode::ALL.len() * 2);
    for mode in ChatMode::ALL {
        let style = if mode == app.selector.mode() {
            Style::default()
                .fg(theme.bg0)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.grey2)
        };
        spans.push(Span::styled(format!(" {} ", mode.display_name()), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Turn a surface into styled terminal lines
///
/// Segments are concatenated and broken on `\n`; the cursor marker is
/// appended to the last line while `cursor_visible` holds.
pub fn segment_lines(
    surface: &OutputSurface,
    theme: &Theme,
    cursor_visible: bool,
) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = vec![Line::default()];

    for segment in surface.segments() {
        let style = match segment.style {
            SegmentStyle::Plain => Style::default().fg(theme.fg0),
            SegmentStyle::Emphasized => Style::default()
                .fg(theme.emphasis)
                .add_modifier(Modifier::BOLD),
            SegmentStyle::Selected => Style::default().fg(theme.fg1).bg(theme.selection),
        };

        for (i, part) in segment.text.split('\n').enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            if !part.is_empty() {
                if let Some(line) = lines.last_mut() {
                    line.spans.push(Span::styled(part.to_string(), style));
                }
            }
        }
    }

    if surface.has_cursor() {
        let glyph = if cursor_visible { CURSOR_GLYPH } else { ' ' };
        if let Some(line) = lines.last_mut() {
            line.spans.push(Span::styled(
                glyph.to_string(),
                Style::default().fg(theme.accent),
            ));
        }
    }

    lines
}

/// Break lines into rows at most `width` columns wide, character by character
fn wrap_lines(lines: Vec<Line<'static>>, width: u16) -> Vec<Line<'static>> {
    let width = usize::from(width.max(1));
    let mut rows = Vec::with_capacity(lines.len());

    for line in lines {
        let mut row: Vec<Span<'static>> = Vec::new();
        let mut row_width = 0;

        for span in line.spans {
            let mut chunk = String::new();
            for ch in span.content.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if row_width > 0 && row_width + ch_width > width {
                    if !chunk.is_empty() {
                        row.push(Span::styled(std::mem::take(&mut chunk), span.style));
                    }
                    rows.push(Line::from(std::mem::take(&mut row)));
                    row_width = 0;
                }
                chunk.push(ch);
                row_width += ch_width;
            }
            if !chunk.is_empty() {
                row.push(Span::styled(chunk, span.style));
            }
        }

        rows.push(Line::from(row));
    }

    rows
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use ratatui::{backend::TestBackend, Terminal};
    use typedemo_core::{AppConfig, ScriptRegistry};

    use super::*;

    fn plain(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| &*s.content).collect::<String>())
            .collect()
    }

    #[test]
    fn test_segments_split_on_newlines() {
        let mut surface = OutputSurface::new("tab-code");
        surface.open_line(0, "fn main() {\n", SegmentStyle::Plain);
        surface.open_line(1, "    run()", SegmentStyle::Emphasized);
        surface.place_cursor();

        let theme = Theme::default();
        let lines = segment_lines(&surface, &theme, true);
        assert_eq!(plain(&lines), vec!["fn main() {", "    run()▌"]);
        assert_eq!(lines[1].spans[0].style.fg, Some(theme.emphasis));
    }

    #[test]
    fn test_hidden_cursor_keeps_width() {
        let mut surface = OutputSurface::new("tab-code");
        surface.open_line(0, "x", SegmentStyle::Plain);
        surface.place_cursor();

        let lines = segment_lines(&surface, &Theme::default(), false);
        assert_eq!(plain(&lines), vec!["x "]);
    }

    #[test]
    fn test_selected_segment_has_background() {
        let mut surface = OutputSurface::new("inline-code");
        surface.open_line(0, "whole line", SegmentStyle::Selected);

        let theme = Theme::default();
        let lines = segment_lines(&surface, &theme, true);
        assert_eq!(lines[0].spans[0].style.bg, Some(theme.selection));
    }

    #[test]
    fn test_empty_surface() {
        let surface = OutputSurface::new("tab-code");
        let lines = segment_lines(&surface, &Theme::default(), true);
        assert_eq!(plain(&lines), vec![""]);
    }

    #[test]
    fn test_wrap_lines_splits_by_display_width() {
        let lines = vec![
            Line::from(vec![
                Span::raw("abcd"),
                Span::styled("ef", Style::default().fg(ratatui::style::Color::Red)),
            ]),
            Line::from("한글"),
        ];
        let rows = wrap_lines(lines, 3);
        assert_eq!(plain(&rows), vec!["abc", "def", "한", "글"]);
        assert_eq!(rows[1].spans.len(), 2);
        assert_eq!(rows[1].spans[1].style.fg, Some(ratatui::style::Color::Red));
    }

    #[test]
    fn test_cursor_stays_visible_when_lines_wrap() {
        let mut config = AppConfig::default();
        config.ui.cursor_blink_ms = 0;
        let mut app = App::new(
            Arc::new(config),
            Arc::new(ScriptRegistry::builtin()),
            Theme::default(),
        )
        .unwrap();

        app.handle_action(crate::input::Action::Restart);
        let mut now = Duration::ZERO;
        while app.current_surface().unwrap().text().chars().count() < 200 {
            now = app.engine.next_deadline().unwrap();
            app.update_at(now);
        }
        assert!(app.current_surface().unwrap().has_cursor(), "stopped at {now:?}");

        let mut terminal = Terminal::new(TestBackend::new(30, 8)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                DemoViewWidget::render(frame, area, &app);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        assert!(buffer
            .content()
            .iter()
            .any(|cell| cell.symbol() == CURSOR_GLYPH.to_string()));
    }
}
