//! Runs an event script through a [`RemapEngine`] and collects what the
//! engine emits.

use keyremap_core::engine::{ManualClock, TriggerKeys};
use keyremap_core::{MappingTable, RecordingSink, RemapEngine, SinkEvent};
use log::{debug, warn};

use crate::parser::{Script, ScriptCommand};

pub struct Replayer {
    engine: RemapEngine<RecordingSink>,
    clock: ManualClock,
    last_time: u64,
}

impl Replayer {
    pub fn new(mapping: MappingTable) -> Self {
        let clock = ManualClock::new(0);
        let mut engine = RemapEngine::with_clock(mapping, clock.clone());
        engine.start_session(RecordingSink::new());
        Self {
            engine,
            clock,
            last_time: 0,
        }
    }

    pub fn with_triggers(mut self, triggers: TriggerKeys) -> Self {
        self.engine = self.engine.with_triggers(triggers);
        self
    }

    /// Feed one command and return the events it produced. `end` finishes the
    /// session, so its result holds the cleanup events, and then opens a
    /// fresh one for the commands that follow.
    pub fn step(&mut self, command: &ScriptCommand) -> Vec<SinkEvent> {
        match *command {
            ScriptCommand::Down(key, time) => {
                self.advance_clock(time);
                let consumed = self.engine.on_key_down(key, time);
                debug!("{} consumed={}", command, consumed);
                self.drain()
            }
            ScriptCommand::Up(key, time) => {
                self.advance_clock(time);
                let consumed = self.engine.on_key_up(key, time);
                debug!("{} consumed={}", command, consumed);
                self.drain()
            }
            ScriptCommand::End => {
                let events = self.engine.end_session().map(|mut sink| sink.take()).unwrap_or_default();
                self.engine.start_session(RecordingSink::new());
                events
            }
        }
    }

    /// Feed a whole script, concatenating the output of every command.
    pub fn run(&mut self, script: &Script) -> Vec<SinkEvent> {
        script.commands.iter().flat_map(|command| self.step(command)).collect()
    }

    pub fn engine(&self) -> &RemapEngine<RecordingSink> {
        &self.engine
    }

    fn advance_clock(&mut self, time: u64) {
        if time < self.last_time {
            warn!("script time goes backwards: {} after {}", time, self.last_time);
        }
        self.last_time = time;
        self.clock.set(time);
    }

    fn drain(&mut self) -> Vec<SinkEvent> {
        self.engine.sink_mut().map(RecordingSink::take).unwrap_or_default()
    }
}
