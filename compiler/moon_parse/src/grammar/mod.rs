//! Grammar Modules
//!
//! Each module extends `Parser` with methods for specific productions:
//!
//! - [`stmt`]: blocks and statements, including the `function` and `local
//!   function` desugarings
//! - [`expr`]: priority climbing over binary operators, primary and suffixed
//!   expressions, call arguments
//! - [`function`]: parameter lists and function bodies
//! - [`table`]: table constructors

mod expr;
mod function;
mod stmt;
mod table;

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    /// Run `f`, tagging an error it returns with `context` unless a more
    /// deeply nested production already did.
    pub(crate) fn with_context<T>(
        &mut self,
        context: ErrorContext,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        f(self).map_err(|err| match err.context {
            Some(_) => err,
            None => err.with_context(context),
        })
    }
}
