//! Typing-demo animation engine
//!
//! Reveals a script into its output surface one unit per tick, keeps a
//! cursor marker after the last revealed character and loops the script
//! after a pause.
//!
//! # Layers
//!
//! - `step` - pure tick function `(script, position) -> Step`
//! - `timer` - logical-time timer queue with cancellable handles
//! - `session` - per-demo session record
//! - `typing` - `TypingEngine`, applies steps to surfaces and timers
//! - `driver` - tokio task that runs an engine against the real clock
//!
//! # Cancellation
//!
//! A demo has at most one pending continuation. `start` and `stop_all`
//! cancel it through its handle; a continuation that fires after its demo
//! stopped being the active one ends the session without rescheduling.
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//! use typedemo_core::{engine::TypingEngine, script::ScriptRegistry};
//!
//! let mut engine = TypingEngine::new(Arc::new(ScriptRegistry::builtin()));
//! engine.set_active_demo("tab");
//! engine.start("tab");
//!
//! // Every frame, let logical time catch up
//! engine.advance_by(Duration::from_millis(16));
//! let text = engine.surface("tab").map(|s| s.render_plain());
//! ```

mod driver;
mod session;
pub mod step;
mod timer;
mod typing;

pub use driver::{DriverCommand, EngineDriver};
pub use session::Session;
pub use step::{Cursor, Timings};
pub use timer::{TimerId, TimerQueue};
pub use typing::{EngineEvent, Tick, TickKind, TypingEngine};
