use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tracing::info;

use typedemo_core::{AppConfig, ScriptRegistry};
use typedemo_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    load_theme,
    widgets::{DemoViewWidget, HelpWidget, StatusBarWidget, TabBarWidget},
};

pub async fn run(
    mut config: AppConfig,
    registry: Arc<ScriptRegistry>,
    tab: Option<String>,
    mode: Option<String>,
) -> Result<()> {
    // Command line picks override the configured start
    if let Some(tab) = tab {
        config.selector.initial_tab = tab;
    }
    if let Some(mode) = mode {
        config.selector.initial_mode = mode;
    }
    let config = Arc::new(config);

    // Validate before touching the terminal so errors stay readable
    let theme = load_theme(&config.ui.theme);
    let mut app = App::new(config.clone(), registry, theme)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("typedemo"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app, &config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, config: &AppConfig) -> Result<()> {
    let event_handler = EventHandler::new(config.ui.tick_rate_ms);

    app.start();
    info!(demo = %app.selector.active_demo_id(), "Player started");

    // Main loop
    loop {
        app.update();

        terminal.draw(|frame| {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(2), // Tabs
                    Constraint::Min(1),    // Demo
                    Constraint::Length(1), // Status bar
                ])
                .split(frame.area());

            TabBarWidget::render(frame, layout[0], app);
            DemoViewWidget::render(frame, layout[1], app);
            StatusBarWidget::render(frame, layout[2], app);

            if app.help_visible {
                HelpWidget::render(frame, &app.theme);
            }
        })?;

        // Wake up early when the next character is due before the next tick
        let timeout = app
            .time_to_next_deadline()
            .unwrap_or_else(|| event_handler.tick_rate());

        if let Some(event) = event_handler.next_within(timeout)? {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, app.help_visible);
                    app.handle_action(action);
                }
                AppEvent::Resize(_, _) => {
                    terminal.autoresize()?;
                }
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
