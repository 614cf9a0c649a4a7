use tokio::sync::{mpsc, watch};
use tokio::time::Instant;
use tracing::{debug, info, warn};

use super::typing::{EngineEvent, TypingEngine};
use crate::selector::{ChatMode, DemoSelector};

/// Requests a front-end can send to a running driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverCommand {
    SelectTab(String),
    SelectMode(ChatMode),
    NextTab,
    PrevTab,
    NextMode,
    PrevMode,
    Restart,
    StopAll,
}

/// Runs a typing engine against the tokio clock
///
/// The engine itself only knows logical time. The driver sleeps until the
/// engine's next deadline, advances it, and forwards engine events.
pub struct EngineDriver {
    engine: TypingEngine,
    selector: DemoSelector,
    event_tx: Option<mpsc::UnboundedSender<EngineEvent>>,
}

impl EngineDriver {
    pub fn new(engine: TypingEngine, selector: DemoSelector) -> Self {
        Self {
            engine,
            selector,
            event_tx: None,
        }
    }

    /// Set the channel engine events are forwarded to
    pub fn with_event_sender(mut self, tx: mpsc::UnboundedSender<EngineEvent>) -> Self {
        self.event_tx = Some(tx);
        self
    }

    pub fn engine(&self) -> &TypingEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut TypingEngine {
        &mut self.engine
    }

    pub fn selector(&self) -> &DemoSelector {
        &self.selector
    }

    /// Run until shutdown is signalled or the command channel closes,
    /// handing the engine back for inspection
    pub async fn run(
        mut self,
        mut commands: mpsc::UnboundedReceiver<DriverCommand>,
        mut shutdown: watch::Receiver<bool>,
    ) -> TypingEngine {
        let origin = Instant::now();
        let base = self.engine.now();
        let logical_now = move || base + origin.elapsed();

        info!("Typing driver started");

        loop {
            self.forward_events();

            let deadline = self
                .engine
                .next_deadline()
                .map(|due| origin + due.saturating_sub(base));
            let sleep = async move {
                match deadline {
                    Some(at) => tokio::time::sleep_until(at).await,
                    None => std::future::pending::<()>().await,
                }
            };

            tokio::select! {
                result = shutdown.changed() => {
                    if result.is_err() || *shutdown.borrow() {
                        info!("Typing driver received shutdown signal");
                        break;
                    }
                }

                command = commands.recv() => {
                    let Some(command) = command else {
                        debug!("Command channel closed");
                        break;
                    };
                    self.engine.advance_to(logical_now());
                    self.apply(command);
                }

                _ = sleep => {
                    self.engine.advance_to(logical_now());
                }
            }
        }

        self.forward_events();
        info!("Typing driver stopped");
        self.engine
    }

    fn apply(&mut self, command: DriverCommand) {
        debug!(?command, "Applying driver command");
        let engine = &mut self.engine;
        match command {
            DriverCommand::SelectTab(tab) => {
                if let Err(e) = self.selector.select_tab(engine, &tab) {
                    warn!("Ignoring tab switch: {}", e);
                }
            }
            DriverCommand::SelectMode(mode) => {
                self.selector.select_mode(engine, mode);
            }
            DriverCommand::NextTab => {
                self.selector.next_tab(engine);
            }
            DriverCommand::PrevTab => {
                self.selector.prev_tab(engine);
            }
            DriverCommand::NextMode => {
                self.selector.next_mode(engine);
            }
            DriverCommand::PrevMode => {
                self.selector.prev_mode(engine);
            }
            DriverCommand::Restart => {
                self.selector.restart(engine);
            }
            DriverCommand::StopAll => engine.stop_all(),
        }
    }

    fn forward_events(&mut self) {
        let events = self.engine.drain_events();
        if let Some(ref tx) = self.event_tx {
            for event in events {
                if tx.send(event).is_err() {
                    warn!("Failed to send engine event: receiver dropped");
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::script::{LineRecord, ScriptRegistry};

    fn driver_for(registry: ScriptRegistry) -> (EngineDriver, mpsc::UnboundedReceiver<EngineEvent>) {
        let engine = TypingEngine::new(Arc::new(registry));
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let driver = EngineDriver::new(engine, DemoSelector::new()).with_event_sender(event_tx);
        (driver, event_rx)
    }

    #[tokio::test(start_paused = true)]
    async fn test_driver_plays_script_in_real_time() {
        let registry = ScriptRegistry::default().with_script("tab", vec![LineRecord::typed("ab", 80)]);
        let (mut driver, mut events) = driver_for(registry);
        driver.engine_mut().set_active_demo("tab");
        driver.engine_mut().start("tab");

        let (_cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let started = Instant::now();
        let handle = tokio::spawn(driver.run(cmd_rx, shutdown_rx));

        let mut reveals = Vec::new();
        while let Some(event) = events.recv().await {
            match event {
                EngineEvent::Revealed { text, .. } => reveals.push((text, started.elapsed())),
                EngineEvent::Finished { .. } => break,
                _ => {}
            }
        }

        assert_eq!(reveals.len(), 2);
        assert_eq!(reveals[0].0, "a");
        assert_eq!(reveals[1].0, "b");
        let gap = reveals[1].1 - reveals[0].1;
        assert!(gap >= Duration::from_millis(80) && gap < Duration::from_millis(90), "{gap:?}");

        shutdown_tx.send(true).unwrap();
        let engine = handle.await.unwrap();
        assert_eq!(engine.surface("tab").unwrap().render_plain(), "ab");
    }

    #[tokio::test(start_paused = true)]
    async fn test_driver_applies_tab_switch() {
        let (driver, mut events) = driver_for(ScriptRegistry::builtin());
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = tokio::spawn(driver.run(cmd_rx, shutdown_rx));

        cmd_tx.send(DriverCommand::SelectTab("mcp".into())).unwrap();

        let mut seen = Vec::new();
        while let Some(event) = events.recv().await {
            let done = matches!(event, EngineEvent::Revealed { .. });
            seen.push(event);
            if done {
                break;
            }
        }
        assert_eq!(seen[0], EngineEvent::Stopped);
        assert_eq!(seen[1], EngineEvent::Started { demo_id: "mcp".into() });

        shutdown_tx.send(true).unwrap();
        let engine = handle.await.unwrap();
        assert_eq!(engine.active_demo(), Some("mcp"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_driver_stops_when_commands_close() {
        let (driver, _events) = driver_for(ScriptRegistry::builtin());
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<DriverCommand>();
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);
        drop(cmd_tx);

        let result = tokio::time::timeout(Duration::from_secs(1), driver.run(cmd_rx, shutdown_rx)).await;
        assert!(result.is_ok());
    }
}
