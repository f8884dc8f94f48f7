use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("Line {line}: unexpected input '{text}'")]
    Lex { line: usize, text: String },

    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Line {line}: unknown key name '{name}'")]
    UnknownKey { line: usize, name: String },
}

impl ScriptError {
    pub fn line(&self) -> usize {
        match self {
            ScriptError::Lex { line, .. }
            | ScriptError::Parse { line, .. }
            | ScriptError::UnknownKey { line, .. } => *line,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScriptError>;
