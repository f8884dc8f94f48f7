pub mod types;
pub mod error;
pub mod config;
pub mod engine;

pub use types::*;

// Re-export commonly used types
pub use config::{load_first_available, ConfigError, FileProvider, LoadedMapping, MappingLoader, MappingProvider, StaticProvider};
pub use error::{Error, Result};
pub use engine::{EventSink, KeyAction, KeyEvent, RecordingSink, RemapEngine, SinkEvent};
