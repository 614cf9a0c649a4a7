use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::Theme;

const BINDINGS: &[(&str, &str)] = &[
    ("h / ← / S-Tab", "previous tab"),
    ("l / → / Tab", "next tab"),
    ("1-7", "jump to tab"),
    ("k / ↑", "previous chat mode"),
    ("j / ↓", "next chat mode"),
    ("r", "restart demo"),
    ("s", "stop all demos"),
    ("?", "toggle help"),
    ("q / C-c", "quit"),
];

pub struct HelpWidget;

impl HelpWidget {
    /// Render the key binding overlay centered on the frame
    pub fn render(frame: &mut Frame, theme: &Theme) {
        let area = frame.area();
        let popup_width = 44u16.min(area.width.saturating_sub(4));
        let popup_height = (BINDINGS.len() as u16 + 4).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));

        let mut lines = vec![Line::default()];
        lines.extend(BINDINGS.iter().map(|(keys, what)| {
            Line::from(vec![
                Span::styled(
                    format!(" {:<16}", keys),
                    Style::default()
                        .fg(theme.emphasis)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*what, Style::default().fg(theme.fg0)),
            ])
        }));

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
