//! Stack growth for recursive tree code.
//!
//! The parser, the printer and any tree walker recurse once per nesting
//! level, so source such as `((((...))))` or a long `a .. b .. c ..` chain
//! can exhaust a thread's stack. Wrapping each recursive step in
//! [`ensure_sufficient_stack`] moves the work onto a freshly allocated
//! segment whenever the current one runs low.
//!
//! On `wasm32` the wrapper calls straight through.

/// Grow when less than this much stack remains (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated segment (1MB).
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the current one is
/// close to exhausted.
///
/// ```text
/// fn parse_unary(&mut self) -> Result<Expr, ParseError> {
///     ensure_sufficient_stack(|| self.parse_unary_inner())
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
