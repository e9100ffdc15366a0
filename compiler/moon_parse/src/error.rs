//! Parse errors.
//!
//! Parsing stops at the first error. A [`ParseError`] records what was wrong
//! ([`ParseErrorKind`]), where ([`Position`]), and which construct the parser
//! was inside ([`ErrorContext`]) for "while parsing X" labels.

use moon_diagnostic::{Diagnostic, ErrorCode};
use moon_ir::{Position, Positioned};
use moon_lexer::{LexError, LexErrorKind, TokenKind};
use thiserror::Error;

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ParseErrorKind {
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: TokenKind },

    #[error("expected expression, found {found}")]
    ExpectedExpression { found: TokenKind },

    #[error("expected name, found {found}")]
    ExpectedName { found: TokenKind },

    /// Left of `=` is neither a variable nor a table access.
    #[error("cannot assign to {found}")]
    NotAssignable { found: &'static str },

    #[error("{found} cannot be used as a statement")]
    NotAStatement { found: &'static str },

    #[error("`return` must be the last statement of its block, found {found}")]
    ReturnNotLast { found: TokenKind },

    #[error("method call syntax `a:b()` is not supported")]
    MethodCallUnsupported,

    #[error("cannot use `...` outside a variadic function")]
    VarargsOutsideVariadic,

    #[error("{0}")]
    Lex(LexErrorKind),
}

impl ParseErrorKind {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ParseErrorKind::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::ExpectedExpression { .. } => ErrorCode::E1002,
            ParseErrorKind::ExpectedName { .. } => ErrorCode::E1003,
            ParseErrorKind::NotAssignable { .. } => ErrorCode::E1004,
            ParseErrorKind::NotAStatement { .. } => ErrorCode::E1005,
            ParseErrorKind::ReturnNotLast { .. } => ErrorCode::E1006,
            ParseErrorKind::MethodCallUnsupported => ErrorCode::E1007,
            ParseErrorKind::VarargsOutsideVariadic => ErrorCode::E1008,
            ParseErrorKind::Lex(kind) => match kind {
                LexErrorKind::UnterminatedString => ErrorCode::E0001,
                LexErrorKind::InvalidCharacter => ErrorCode::E0002,
                LexErrorKind::MalformedNumber => ErrorCode::E0003,
                LexErrorKind::UnterminatedLongString => ErrorCode::E0004,
                LexErrorKind::InvalidEscape => ErrorCode::E0005,
                LexErrorKind::UnterminatedComment => ErrorCode::E0006,
            },
        }
    }

    /// Actionable advice, when there is any.
    fn hint(&self) -> Option<&'static str> {
        match self {
            ParseErrorKind::MethodCallUnsupported => {
                Some("pass the receiver explicitly: `a.b(a, ...)`")
            }
            ParseErrorKind::ReturnNotLast { .. } => {
                Some("to return early, wrap it in a block: `do return end`")
            }
            ParseErrorKind::VarargsOutsideVariadic => {
                Some("add `...` to the enclosing function's parameter list")
            }
            _ => None,
        }
    }
}

/// The construct being parsed when an error occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    IfStatement,
    WhileLoop,
    RepeatLoop,
    NumericFor,
    GenericFor,
    DoBlock,
    FunctionDefinition,
    LocalDeclaration,
    Assignment,
    ReturnStatement,
    CallArguments,
    TableConstructor,
    Expression,
}

impl ErrorContext {
    /// Phrase for "while parsing {description}".
    pub fn description(self) -> &'static str {
        match self {
            Self::IfStatement => "an if statement",
            Self::WhileLoop => "a while loop",
            Self::RepeatLoop => "a repeat loop",
            Self::NumericFor => "a numeric for loop",
            Self::GenericFor => "a generic for loop",
            Self::DoBlock => "a do block",
            Self::FunctionDefinition => "a function definition",
            Self::LocalDeclaration => "a local declaration",
            Self::Assignment => "an assignment",
            Self::ReturnStatement => "a return statement",
            Self::CallArguments => "call arguments",
            Self::TableConstructor => "a table constructor",
            Self::Expression => "an expression",
        }
    }
}

/// A syntax error at a source position.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{kind} at line {}, column {}", .pos.line(), .pos.column())]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub pos: Position,
    /// Innermost construct being parsed, if any.
    pub context: Option<ErrorContext>,
}

impl ParseError {
    #[cold]
    pub fn new(kind: ParseErrorKind, pos: Position) -> Self {
        ParseError {
            kind,
            pos,
            context: None,
        }
    }

    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    pub fn error_code(&self) -> ErrorCode {
        self.kind.error_code()
    }

    /// Convert to a diagnostic for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match self.context {
            Some(context) => format!("while parsing {}", context.description()),
            None => "here".to_string(),
        };
        let diag = Diagnostic::error(self.error_code())
            .with_message(self.kind.to_string())
            .with_label(self.pos, label);
        match self.kind.hint() {
            Some(hint) => diag.with_suggestion(hint),
            None => diag,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::new(ParseErrorKind::Lex(err.kind), err.pos)
    }
}

impl Positioned for ParseError {
    fn position(&self) -> Position {
        self.pos
    }
}
