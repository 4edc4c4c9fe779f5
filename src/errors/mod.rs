//! Error types and error handling for the evaluator.
//!
//! This module defines the error types shared by every phase. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for tokenizing, parsing and execution
//! - Error formatting and display functionality

pub mod errors;

#[cfg(test)]
mod tests;
