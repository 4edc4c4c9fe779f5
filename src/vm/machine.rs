use log::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    program::program::{Program, Symbol},
    Position,
};

/// Maximum number of values on the stack at any time.
pub const STACK_MAX: usize = 256;

#[derive(Debug, Default)]
pub struct Machine {
    stack: Vec<f64>,
}

impl Machine {
    pub fn new() -> Self {
        Machine {
            stack: Vec::with_capacity(STACK_MAX),
        }
    }

    /// Executes `program` on an empty stack and returns its single result.
    pub fn run(&mut self, program: &Program) -> Result<f64, Error> {
        self.stack.clear();

        for symbol in program.symbols() {
            self.step(*symbol)?;
            trace!("{:<8} {}", symbol.to_string(), self.dump_stack());
        }

        match self.stack.len() {
            1 => self.pop(),
            remaining => Err(runtime_error(ErrorImpl::MalformedProgram { remaining })),
        }
    }

    pub fn step(&mut self, symbol: Symbol) -> Result<(), Error> {
        match symbol {
            Symbol::Constant(value) => self.push(value),
            Symbol::Negate => {
                let value = self.pop()?;
                self.push(-value)
            }
            Symbol::Add => self.binary(|left, right| left + right),
            Symbol::Subtract => self.binary(|left, right| left - right),
            Symbol::Multiply => self.binary(|left, right| left * right),
            Symbol::Divide => self.binary(|left, right| left / right),
        }
    }

    pub fn push(&mut self, value: f64) -> Result<(), Error> {
        if self.stack.len() >= STACK_MAX {
            return Err(runtime_error(ErrorImpl::StackOverflow { limit: STACK_MAX }));
        }
        self.stack.push(value);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<f64, Error> {
        self.stack
            .pop()
            .ok_or_else(|| runtime_error(ErrorImpl::StackUnderflow))
    }

    pub fn peek(&self) -> Option<f64> {
        self.stack.last().copied()
    }

    /// Renders the stack bottom to top, e.g. `[ 1 ][ 2 ]`.
    pub fn dump_stack(&self) -> String {
        self.stack
            .iter()
            .map(|value| format!("[ {} ]", value))
            .collect()
    }

    fn binary(&mut self, op: fn(f64, f64) -> f64) -> Result<(), Error> {
        // Right operand is on top
        let right = self.pop()?;
        let left = self.pop()?;
        self.push(op(left, right))
    }
}

fn runtime_error(error: ErrorImpl) -> Error {
    Error::new(error, Position::null())
}
