mod ast;
mod parser;

pub use ast::{Script, ScriptCommand};
pub use parser::Parser;
