use std::io::{self, Write};
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

use typedemo_core::engine::{EngineDriver, EngineEvent, Timings, TypingEngine};
use typedemo_core::{AppConfig, DemoSelector, ScriptRegistry};

/// Type one demo to stdout until Ctrl-C or `loops` complete loops
pub async fn run(
    config: Arc<AppConfig>,
    registry: Arc<ScriptRegistry>,
    demo: &str,
    loops: Option<u32>,
) -> Result<()> {
    // Fail on typos instead of silently printing nothing
    registry.require(demo)?;

    let mut engine = TypingEngine::new(registry).with_timings(Timings::from(&config.engine));
    engine.set_active_demo(demo);
    engine.start(demo);

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let (_command_tx, command_rx) = mpsc::unbounded_channel();
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let driver = EngineDriver::new(engine, DemoSelector::new()).with_event_sender(event_tx);
    let handle = tokio::spawn(driver.run(command_rx, shutdown_rx));

    info!(demo, ?loops, "Playing demo");

    let mut stdout = io::stdout();
    let mut completed = 0u32;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                debug!("Interrupted");
                break;
            }
            event = event_rx.recv() => {
                let Some(event) = event else { break };
                match event {
                    EngineEvent::Revealed { text, .. } => {
                        write!(stdout, "{}", text)?;
                        stdout.flush()?;
                    }
                    EngineEvent::Finished { .. } => {
                        completed += 1;
                        writeln!(stdout)?;
                        if loops.is_some_and(|n| completed >= n) {
                            break;
                        }
                        writeln!(stdout, "---")?;
                    }
                    EngineEvent::Started { .. } | EngineEvent::Stopped => {}
                }
            }
        }
    }

    // The driver may already be gone if the channel closed
    let _ = shutdown_tx.send(true);
    handle.await?;

    if completed > 0 {
        debug!(completed, "Playback finished");
    }
    Ok(())
}
