//! The evaluation stack emitted by the parser.
//!
//! A program is an append-only sequence of symbols in postfix order. It
//! is produced by the parser, inspected by tests and the disassembler,
//! and executed by the stack machine in `vm`.

pub mod disassemble;
pub mod program;
