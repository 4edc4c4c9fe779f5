//! Utility macros for the evaluator.
//!
//! - `MK_TOKEN!` - Creates a Token instance, looking up its precedence
//! - `MK_SPAN!` - Creates a Span over a byte range of the input line

/// Creates a Token instance.
///
/// The precedence is taken from the precedence table when the token is
/// built, so every token is self-describing afterwards.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's lexeme
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            precedence: $crate::parser::lookups::precedence_of($kind),
            span: $span,
        }
    };
}

/// Creates a Span from `$start` to `$end` (byte offsets) in `$file`.
#[macro_export]
macro_rules! MK_SPAN {
    ($start:expr, $end:expr, $file:expr) => {
        Span {
            start: Position($start as u32, Rc::clone(&$file)),
            end: Position($end as u32, Rc::clone(&$file)),
        }
    };
}
