use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
    Frame,
};

use crate::app::App;

pub struct TabBarWidget;

impl TabBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let titles: Vec<Line> = app
            .selector
            .tabs()
            .iter()
            .enumerate()
            .map(|(i, tab)| {
                Line::from(vec![
                    Span::styled(format!("{} ", i + 1), Style::default().fg(theme.grey1)),
                    Span::raw(tab.label),
                ])
            })
            .collect();

        let tabs = Tabs::new(titles)
            .select(app.selector.active_tab_index())
            .block(
                Block::default()
                    .title(" typedemo ")
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(theme.grey1))
                    .style(Style::default().bg(theme.bg0)),
            )
            .style(Style::default().fg(theme.fg0))
            .highlight_style(
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .divider(Span::styled("│", Style::default().fg(theme.grey1)));

        frame.render_widget(tabs, area);
    }
}
