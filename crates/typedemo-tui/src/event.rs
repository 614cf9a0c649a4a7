use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms.max(1)),
        }
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    /// Poll for the next event, waiting at most `timeout` (capped at one tick)
    ///
    /// Use the time until the engine's next deadline so a typed character
    /// shows up on time instead of on the next tick boundary.
    pub fn next_within(&self, timeout: Duration) -> Result<Option<AppEvent>> {
        if event::poll(timeout.min(self.tick_rate))? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events, ignore release events
                    if key.kind == KeyEventKind::Press {
                        Ok(Some(AppEvent::Key(key)))
                    } else {
                        Ok(None)
                    }
                }
                Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
                _ => Ok(None),
            }
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}
