pub mod config;
pub mod engine;
pub mod error;
pub mod script;
pub mod selector;
pub mod surface;

pub use config::AppConfig;
pub use engine::{EngineEvent, TypingEngine};
pub use error::{Error, Result};
pub use script::ScriptRegistry;
pub use selector::{ChatMode, DemoSelector};
