//! Token types produced by the lexer.

use std::fmt;

use moon_ir::{Position, Positioned};

/// Token kinds.
///
/// Literal payloads are already decoded: numbers are `f64`, strings have
/// their escapes resolved and their delimiters removed.
#[derive(Clone, PartialEq, Debug)]
pub enum TokenKind {
    // Keywords
    And,
    Break,
    Do,
    Else,
    ElseIf,
    End,
    False,
    For,
    Function,
    If,
    In,
    Local,
    Nil,
    Not,
    Or,
    Repeat,
    Return,
    Then,
    True,
    Until,
    While,

    // Literals
    Name(String),
    Number(f64),
    String(String),

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    Hash,
    EqEq,
    TildeEq,
    LtEq,
    GtEq,
    Lt,
    Gt,
    Eq,

    // Delimiters
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semicolon,
    Colon,
    Comma,
    Dot,
    DotDot,
    DotDotDot,

    /// End of input. Every token list ends with exactly one.
    Eof,
}

impl TokenKind {
    /// Keyword text for a name, if the name is reserved.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        let kind = match text {
            "and" => TokenKind::And,
            "break" => TokenKind::Break,
            "do" => TokenKind::Do,
            "else" => TokenKind::Else,
            "elseif" => TokenKind::ElseIf,
            "end" => TokenKind::End,
            "false" => TokenKind::False,
            "for" => TokenKind::For,
            "function" => TokenKind::Function,
            "if" => TokenKind::If,
            "in" => TokenKind::In,
            "local" => TokenKind::Local,
            "nil" => TokenKind::Nil,
            "not" => TokenKind::Not,
            "or" => TokenKind::Or,
            "repeat" => TokenKind::Repeat,
            "return" => TokenKind::Return,
            "then" => TokenKind::Then,
            "true" => TokenKind::True,
            "until" => TokenKind::Until,
            "while" => TokenKind::While,
            _ => return None,
        };
        Some(kind)
    }

    /// Source text of fixed tokens; `None` for names, literals and EOF.
    pub fn as_fixed_str(&self) -> Option<&'static str> {
        let text = match self {
            TokenKind::And => "and",
            TokenKind::Break => "break",
            TokenKind::Do => "do",
            TokenKind::Else => "else",
            TokenKind::ElseIf => "elseif",
            TokenKind::End => "end",
            TokenKind::False => "false",
            TokenKind::For => "for",
            TokenKind::Function => "function",
            TokenKind::If => "if",
            TokenKind::In => "in",
            TokenKind::Local => "local",
            TokenKind::Nil => "nil",
            TokenKind::Not => "not",
            TokenKind::Or => "or",
            TokenKind::Repeat => "repeat",
            TokenKind::Return => "return",
            TokenKind::Then => "then",
            TokenKind::True => "true",
            TokenKind::Until => "until",
            TokenKind::While => "while",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Caret => "^",
            TokenKind::Hash => "#",
            TokenKind::EqEq => "==",
            TokenKind::TildeEq => "~=",
            TokenKind::LtEq => "<=",
            TokenKind::GtEq => ">=",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Eq => "=",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::DotDot => "..",
            TokenKind::DotDotDot => "...",
            TokenKind::Name(_) | TokenKind::Number(_) | TokenKind::String(_) | TokenKind::Eof => {
                return None
            }
        };
        Some(text)
    }

    /// Whether two kinds are the same token, ignoring literal payloads.
    pub fn same_kind(&self, other: &TokenKind) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    pub fn is_eof(&self) -> bool {
        matches!(self, TokenKind::Eof)
    }
}

impl fmt::Display for TokenKind {
    /// Renders the token the way error messages quote it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Name(name) => write!(f, "name `{name}`"),
            TokenKind::Number(_) => write!(f, "number"),
            TokenKind::String(_) => write!(f, "string"),
            TokenKind::Eof => write!(f, "end of file"),
            fixed => match fixed.as_fixed_str() {
                Some(text) => write!(f, "`{text}`"),
                None => write!(f, "{fixed:?}"),
            },
        }
    }
}

/// A token with the position of its first character.
#[derive(Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: Position,
}

impl Token {
    pub fn new(kind: TokenKind, pos: Position) -> Self {
        Token { kind, pos }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.pos)
    }
}

impl Positioned for Token {
    fn position(&self) -> Position {
        self.pos
    }
}

/// Lexed source, terminated by an [`TokenKind::Eof`] token.
#[derive(Clone, PartialEq, Debug)]
pub struct TokenList {
    tokens: Vec<Token>,
    /// Where each dropped comment (or `#` first line) starts.
    comments: Vec<Position>,
}

impl TokenList {
    /// Wrap `tokens`, appending an EOF at `eof_pos` unless one is present.
    pub fn new(mut tokens: Vec<Token>, eof_pos: Position) -> Self {
        if !tokens.last().is_some_and(|t| t.kind.is_eof()) {
            tokens.push(Token::new(TokenKind::Eof, eof_pos));
        }
        TokenList {
            tokens,
            comments: Vec::new(),
        }
    }

    /// Record the start positions of comments dropped while lexing.
    #[must_use]
    pub fn with_comments(mut self, comments: Vec<Position>) -> Self {
        self.comments = comments;
        self
    }

    /// Start positions of the comments in the source, in order.
    pub fn comments(&self) -> &[Position] {
        &self.comments
    }

    /// Number of tokens, including the final EOF.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Never true: the EOF token is always present.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token at `index`, or the EOF token when past the end.
    pub fn get(&self, index: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[index.min(last)]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Kinds only, handy for assertions.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind.clone()).collect()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
