use std::fmt;

use keyremap_core::KeyCode;

/// A parsed event script
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    pub commands: Vec<ScriptCommand>,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptCommand {
    /// Physical press at the given time in milliseconds
    Down(KeyCode, u64),
    /// Physical release at the given time in milliseconds
    Up(KeyCode, u64),
    /// End the input session
    End,
}

impl fmt::Display for ScriptCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptCommand::Down(key, time) => write!(f, "down {} {}", key, time),
            ScriptCommand::Up(key, time) => write!(f, "up {} {}", key, time),
            ScriptCommand::End => write!(f, "end"),
        }
    }
}
