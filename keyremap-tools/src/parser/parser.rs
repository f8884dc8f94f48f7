use keyremap_core::KeyCode;

use super::ast::*;
use crate::error::{Result, ScriptError};
use crate::lexer::{Lexer, Token};

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current_token: Option<Token>,
    current_line: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lexer: Lexer::new(input),
            current_token: None,
            current_line: 1,
        }
    }

    pub fn parse(&mut self) -> Result<Script> {
        let mut script = Script::new();
        self.advance()?;

        while let Some(token) = self.current_token.clone() {
            match token {
                Token::Newline => self.advance()?,
                Token::Down => {
                    self.advance()?;
                    let (key, time) = self.parse_key_event()?;
                    script.commands.push(ScriptCommand::Down(key, time));
                }
                Token::Up => {
                    self.advance()?;
                    let (key, time) = self.parse_key_event()?;
                    script.commands.push(ScriptCommand::Up(key, time));
                }
                Token::End => {
                    self.advance()?;
                    self.expect_line_end("end")?;
                    script.commands.push(ScriptCommand::End);
                }
                other => {
                    return Err(self.error(format!("expected 'down', 'up' or 'end', found {:?}", other)));
                }
            }
        }

        Ok(script)
    }

    fn parse_key_event(&mut self) -> Result<(KeyCode, u64)> {
        let key = self.parse_key()?;
        let time = match self.current_token.take() {
            Some(Token::Number(time)) => time,
            Some(other) => return Err(self.error(format!("expected a timestamp, found {:?}", other))),
            None => return Err(self.error("expected a timestamp, found end of input".to_string())),
        };
        self.advance()?;
        self.expect_line_end("key event")?;
        Ok((key, time))
    }

    fn parse_key(&mut self) -> Result<KeyCode> {
        // Digit keys may be written bare, which lexes as a number
        let name = match self.current_token.take() {
            Some(Token::Ident(name)) => name,
            Some(Token::Number(n)) => n.to_string(),
            Some(other) => return Err(self.error(format!("expected a key name, found {:?}", other))),
            None => return Err(self.error("expected a key name, found end of input".to_string())),
        };

        let key = KeyCode::from_name(&name).ok_or_else(|| ScriptError::UnknownKey {
            line: self.current_line,
            name,
        })?;
        self.advance()?;
        Ok(key)
    }

    fn expect_line_end(&mut self, what: &str) -> Result<()> {
        match &self.current_token {
            None | Some(Token::Newline) => Ok(()),
            Some(other) => Err(self.error(format!("unexpected {:?} after {}", other, what))),
        }
    }

    fn advance(&mut self) -> Result<()> {
        self.current_line = self.lexer.current_line();
        self.current_token = self.lexer.next_token()?;
        Ok(())
    }

    fn error(&self, message: String) -> ScriptError {
        ScriptError::Parse {
            line: self.current_line,
            message,
        }
    }
}
