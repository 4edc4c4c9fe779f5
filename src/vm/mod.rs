//! Stack machine executing postfix programs.
//!
//! Constants are pushed; every operator pops its operands and pushes the
//! result. A well-formed program leaves exactly one value behind.

pub mod machine;
