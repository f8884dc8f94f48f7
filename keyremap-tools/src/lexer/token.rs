use logos::Logos;

#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    // Comments and inline whitespace (skipped)
    #[regex(r"#[^\n]*", logos::skip)]
    #[regex(r"[ \t\r]+", logos::skip)]
    Comment,

    // Commands
    #[token("down")]
    Down,

    #[token("up")]
    Up,

    #[token("end")]
    End,

    // Timestamps in milliseconds
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<u64>().ok())]
    Number(u64),

    // Key names
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),

    #[token("\n")]
    Newline,
}
