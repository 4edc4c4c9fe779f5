//! Parser module producing a postfix program.
//!
//! This module contains the Pratt parser that transforms a stream of
//! tokens into a postfix (Reverse Polish) program. It handles:
//!
//! - Operator precedence via the precedence table
//! - Prefix rules (numbers, unary minus, grouping)
//! - Infix rules (`+`, `-`, `*`, `/`), all left-associative
//!
//! Operands are emitted before the operators that act on them, so the
//! resulting program runs directly on a stack machine.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stream;
