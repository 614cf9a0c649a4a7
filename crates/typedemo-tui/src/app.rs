use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::debug;
use typedemo_core::config::AppConfig;
use typedemo_core::engine::{EngineEvent, Timings, TypingEngine};
use typedemo_core::script::ScriptRegistry;
use typedemo_core::surface::OutputSurface;
use typedemo_core::DemoSelector;

use crate::input::Action;
use crate::theme::Theme;

/// Application state
pub struct App {
    /// Configuration
    pub config: Arc<AppConfig>,
    /// Runtime theme
    pub theme: Theme,
    /// Typing engine holding every demo surface
    pub engine: TypingEngine,
    /// Tab and chat mode state
    pub selector: DemoSelector,
    /// Should quit
    pub should_quit: bool,
    /// Help overlay shown
    pub help_visible: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Completed loops of the active demo
    pub loops: u32,
    /// Wall-clock origin of the engine's logical time
    origin: Instant,
}

impl App {
    pub fn new(config: Arc<AppConfig>, registry: Arc<ScriptRegistry>, theme: Theme) -> Result<Self> {
        let selector = DemoSelector::from_config(&config.selector)?;
        let engine = TypingEngine::new(registry).with_timings(Timings::from(&config.engine));

        Ok(Self {
            config,
            theme,
            engine,
            selector,
            should_quit: false,
            help_visible: false,
            status_message: None,
            loops: 0,
            origin: Instant::now(),
        })
    }

    /// Schedule the first demo after the startup delay
    pub fn start(&mut self) {
        self.selector.activate_initial(&mut self.engine);
    }

    /// Logical time since the app started
    pub fn elapsed(&self) -> Duration {
        self.origin.elapsed()
    }

    /// Let the engine catch up with the wall clock
    pub fn update(&mut self) -> usize {
        self.update_at(self.elapsed())
    }

    /// Let the engine run every continuation due by `now`
    pub fn update_at(&mut self, now: Duration) -> usize {
        let fired = self.engine.advance_to(now);
        for event in self.engine.drain_events() {
            match event {
                EngineEvent::Finished { demo_id } => {
                    self.loops += 1;
                    debug!(%demo_id, loops = self.loops, "Demo finished");
                }
                EngineEvent::Started { .. } => self.clear_status(),
                _ => {}
            }
        }
        fired
    }

    /// How long the event loop may block before the engine needs a frame
    pub fn time_to_next_deadline(&self) -> Option<Duration> {
        self.engine
            .next_deadline()
            .map(|due| due.saturating_sub(self.elapsed()))
    }

    /// Surface of the demo currently on screen
    pub fn current_surface(&self) -> Option<&OutputSurface> {
        self.engine.surface(&self.selector.active_demo_id())
    }

    /// Whether the blinking cursor marker is in its visible phase
    pub fn cursor_visible_at(&self, now: Duration) -> bool {
        let period = self.config.ui.cursor_blink_ms;
        if period == 0 {
            return true;
        }
        (now.as_millis() / u128::from(period)) % 2 == 0
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible_at(self.elapsed())
    }

    /// Heading for the demo view
    pub fn view_title(&self) -> &'static str {
        if self.selector.on_chat_tab() {
            self.selector.mode().title()
        } else {
            self.selector.active_tab().label
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Apply an input action
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleHelp => self.help_visible = !self.help_visible,
            Action::NextTab => {
                self.selector.next_tab(&mut self.engine);
                self.loops = 0;
            }
            Action::PrevTab => {
                self.selector.prev_tab(&mut self.engine);
                self.loops = 0;
            }
            Action::SelectTab(index) => {
                if index < self.selector.tabs().len() {
                    self.selector.select_tab_index(&mut self.engine, index);
                    self.loops = 0;
                }
            }
            Action::NextMode => {
                if self.selector.next_mode(&mut self.engine).is_some() {
                    self.loops = 0;
                }
            }
            Action::PrevMode => {
                if self.selector.prev_mode(&mut self.engine).is_some() {
                    self.loops = 0;
                }
            }
            Action::Restart => {
                self.selector.restart(&mut self.engine);
                self.loops = 0;
            }
            Action::StopAll => {
                self.engine.stop_all();
                self.set_status("Stopped (r to restart)");
            }
            Action::None => {}
        }
    }
}
