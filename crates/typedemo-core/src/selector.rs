use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use tracing::info;

use crate::config::SelectorConfig;
use crate::engine::TypingEngine;
use crate::{Error, Result};

/// Tab whose demo depends on the chat mode
pub const CHAT_TAB: &str = "chat";

/// A feature tab of the showcase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoTab {
    pub id: &'static str,
    pub label: &'static str,
}

pub const TABS: &[DemoTab] = &[
    DemoTab { id: "tab", label: "Tab" },
    DemoTab { id: CHAT_TAB, label: "Chat" },
    DemoTab { id: "rules", label: "Rules" },
    DemoTab { id: "inline", label: "Inline Edit" },
    DemoTab { id: "context", label: "Context" },
    DemoTab { id: "mcp", label: "MCP" },
    DemoTab { id: "mermaid", label: "Mermaid" },
];

/// Chat tab modes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ChatMode {
    #[default]
    Agent,
    Ask,
    Manual,
}

impl ChatMode {
    pub const ALL: [ChatMode; 3] = [ChatMode::Agent, ChatMode::Ask, ChatMode::Manual];

    pub fn id(self) -> &'static str {
        match self {
            ChatMode::Agent => "agent",
            ChatMode::Ask => "ask",
            ChatMode::Manual => "manual",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ChatMode::Agent => "Agent 모드",
            ChatMode::Ask => "Ask 모드",
            ChatMode::Manual => "Manual 모드",
        }
    }

    /// Heading shown above the chat demo
    pub fn title(self) -> &'static str {
        match self {
            ChatMode::Agent => "Agent 모드 실사용 예시",
            ChatMode::Ask => "Ask 모드 실사용 예시",
            ChatMode::Manual => "Manual 모드 실사용 예시",
        }
    }

    /// Demo identifier played on the chat tab in this mode
    pub fn demo_id(self) -> String {
        format!("{CHAT_TAB}-{}", self.id())
    }

    fn index(self) -> usize {
        match self {
            ChatMode::Agent => 0,
            ChatMode::Ask => 1,
            ChatMode::Manual => 2,
        }
    }
}

impl fmt::Display for ChatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ChatMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ChatMode::ALL
            .into_iter()
            .find(|mode| mode.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownMode(s.to_string()))
    }
}

/// Demo identifier shown for a tab in a given chat mode
///
/// The chat tab plays `chat-<mode>`; every other tab plays its own id.
pub fn resolve_demo(tab_id: &str, mode: ChatMode) -> String {
    if tab_id == CHAT_TAB {
        mode.demo_id()
    } else {
        tab_id.to_string()
    }
}

/// Decides which demo is active and tells the engine about changes
///
/// Every switch makes the new demo active, stops all sessions and asks the
/// engine for a deferred start of the new demo.
#[derive(Debug, Clone)]
pub struct DemoSelector {
    active_tab: usize,
    mode: ChatMode,
    initial_delay: Duration,
    tab_switch_delay: Duration,
    mode_switch_delay: Duration,
}

impl Default for DemoSelector {
    fn default() -> Self {
        Self {
            active_tab: 0,
            mode: ChatMode::default(),
            initial_delay: Duration::from_millis(1000),
            tab_switch_delay: Duration::from_millis(100),
            mode_switch_delay: Duration::from_millis(300),
        }
    }
}

impl DemoSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &SelectorConfig) -> Result<Self> {
        Ok(Self {
            active_tab: tab_index(&config.initial_tab)?,
            mode: config.initial_mode.parse()?,
            initial_delay: Duration::from_millis(config.initial_delay_ms),
            tab_switch_delay: Duration::from_millis(config.tab_switch_delay_ms),
            mode_switch_delay: Duration::from_millis(config.mode_switch_delay_ms),
        })
    }

    pub fn tabs(&self) -> &'static [DemoTab] {
        TABS
    }

    pub fn active_tab(&self) -> &'static DemoTab {
        &TABS[self.active_tab]
    }

    pub fn active_tab_index(&self) -> usize {
        self.active_tab
    }

    pub fn mode(&self) -> ChatMode {
        self.mode
    }

    pub fn on_chat_tab(&self) -> bool {
        self.active_tab().id == CHAT_TAB
    }

    /// Demo identifier for the current tab and mode
    pub fn active_demo_id(&self) -> String {
        resolve_demo(self.active_tab().id, self.mode)
    }

    /// Show the initial tab after the startup delay
    pub fn activate_initial(&self, engine: &mut TypingEngine) -> String {
        let demo_id = self.active_demo_id();
        info!(%demo_id, "Activating initial demo");
        engine.set_active_demo(&demo_id);
        engine.schedule_start(&demo_id, self.initial_delay);
        demo_id
    }

    pub fn select_tab(&mut self, engine: &mut TypingEngine, tab_id: &str) -> Result<String> {
        let index = tab_index(tab_id)?;
        Ok(self.select_tab_index(engine, index))
    }

    /// Switch to the tab at `index`, clamped to the last tab
    pub fn select_tab_index(&mut self, engine: &mut TypingEngine, index: usize) -> String {
        self.active_tab = index.min(TABS.len() - 1);
        self.switch(engine, self.tab_switch_delay)
    }

    pub fn next_tab(&mut self, engine: &mut TypingEngine) -> String {
        self.select_tab_index(engine, (self.active_tab + 1) % TABS.len())
    }

    pub fn prev_tab(&mut self, engine: &mut TypingEngine) -> String {
        self.select_tab_index(engine, (self.active_tab + TABS.len() - 1) % TABS.len())
    }

    /// Change the chat mode. The demo only restarts when the chat tab is
    /// showing; returns the restarted demo in that case.
    pub fn select_mode(&mut self, engine: &mut TypingEngine, mode: ChatMode) -> Option<String> {
        self.mode = mode;
        if self.on_chat_tab() {
            Some(self.switch(engine, self.mode_switch_delay))
        } else {
            None
        }
    }

    /// Next mode, staying on the last one
    pub fn next_mode(&mut self, engine: &mut TypingEngine) -> Option<String> {
        let index = (self.mode.index() + 1).min(ChatMode::ALL.len() - 1);
        self.step_mode(engine, index)
    }

    /// Previous mode, staying on the first one
    pub fn prev_mode(&mut self, engine: &mut TypingEngine) -> Option<String> {
        let index = self.mode.index().saturating_sub(1);
        self.step_mode(engine, index)
    }

    /// Type the active demo again from the start, right away
    pub fn restart(&self, engine: &mut TypingEngine) -> String {
        let demo_id = self.active_demo_id();
        engine.set_active_demo(&demo_id);
        engine.start(&demo_id);
        demo_id
    }

    fn step_mode(&mut self, engine: &mut TypingEngine, index: usize) -> Option<String> {
        let mode = ChatMode::ALL[index];
        if mode == self.mode {
            return None;
        }
        self.select_mode(engine, mode)
    }

    fn switch(&self, engine: &mut TypingEngine, delay: Duration) -> String {
        let demo_id = self.active_demo_id();
        info!(%demo_id, "Switching demo");
        engine.set_active_demo(&demo_id);
        engine.stop_all();
        engine.schedule_start(&demo_id, delay);
        demo_id
    }
}

fn tab_index(tab_id: &str) -> Result<usize> {
    TABS.iter()
        .position(|tab| tab.id == tab_id)
        .ok_or_else(|| Error::UnknownTab(tab_id.to_string()))
}
