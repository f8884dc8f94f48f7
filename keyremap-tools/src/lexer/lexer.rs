use logos::{Lexer as LogosLexer, Logos};

use super::Token;
use crate::error::{Result, ScriptError};

pub struct Lexer<'a> {
    inner: LogosLexer<'a, Token>,
    current_line: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        // A leading BOM would otherwise surface as an unexpected token
        let input = input.strip_prefix('\u{feff}').unwrap_or(input);
        Self {
            inner: Token::lexer(input),
            current_line: 1,
        }
    }

    /// Next token, or `None` at end of input. The line counter advances
    /// after a `Newline` token has been handed out, so a newline is reported
    /// on the line it terminates.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        match self.inner.next() {
            Some(Ok(token)) => {
                if token == Token::Newline {
                    let line = self.current_line;
                    self.current_line += 1;
                    log::trace!("line {}: newline", line);
                }
                Ok(Some(token))
            }
            Some(Err(_)) => Err(ScriptError::Lex {
                line: self.current_line,
                text: self.inner.slice().to_string(),
            }),
            None => Ok(None),
        }
    }

    /// Line of the most recently returned non-newline token.
    pub fn current_line(&self) -> usize {
        self.current_line
    }

    pub fn collect_all(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }
}
