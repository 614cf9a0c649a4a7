use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let state = match app.engine.session(&app.selector.active_demo_id()) {
            Some(session) if session.is_active() => "TYPING",
            Some(session) if session.has_pending() => "WAITING",
            _ => "IDLE",
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            format!(
                " {} | {} | loops: {}",
                state,
                app.selector.active_demo_id(),
                app.loops
            )
        };

        let help_hint = " q:quit h/l:tab j/k:mode r:restart ?:help ";
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(theme.fg0).bg(theme.bg2),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey2).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
