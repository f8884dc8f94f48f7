//! KeyRemap Engine - layered key-event remapping
//!
//! Physical key transitions come in through [`RemapEngine`], which tracks held
//! keys, coordinates the real modifiers, resolves the active layer from the
//! held triggers and emits the mapped result into an [`EventSink`].

mod clock;
mod dispatch;
mod engine;
mod layer;
mod modifiers;
mod output;
mod sequence;
mod state;
mod tracker;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use engine::RemapEngine;
pub use layer::{resolve_layer, Trigger, TriggerHold, TriggerKeys};
pub use modifiers::{ModifierCoordinator, ModifierState};
pub use output::{EventSink, KeyAction, KeyEvent, RecordingSink, SinkEvent};
pub use sequence::SequenceExecutor;
pub use state::EngineState;
pub use tracker::{HeldKey, KeyTracker, PendingRecord};

// Re-export error types
pub use crate::error::{Error, Result};
