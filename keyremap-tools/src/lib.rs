pub mod error;
pub mod lexer;
pub mod parser;
pub mod replay;

pub use error::ScriptError;
pub use parser::{Script, ScriptCommand};
pub use replay::Replayer;

use std::fs::read_to_string;
use std::path::Path;

use anyhow::Context;
use keyremap_core::{load_first_available, FileProvider, LoadedMapping, StaticProvider};

pub fn parse_script(input: &str) -> Result<Script, ScriptError> {
    parser::Parser::new(input).parse()
}

pub fn load_script_file(path: &Path) -> anyhow::Result<Script> {
    let input = read_to_string(path).with_context(|| format!("cannot read script {}", path.display()))?;
    parse_script(&input).with_context(|| format!("invalid script {}", path.display()))
}

/// Resolve the mapping the way the replay tool does: the given file, then the
/// bundled default, then an empty table.
pub fn load_mapping(path: Option<&Path>) -> LoadedMapping {
    let bundled = StaticProvider::bundled();
    match path {
        Some(path) => {
            let file = FileProvider::new(path);
            load_first_available(&[&file, &bundled])
        }
        None => load_first_available(&[&bundled]),
    }
}
