use std::fmt::Display;

/// One entry of a postfix program.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Symbol {
    Constant(f64),
    Add,
    Subtract,
    Multiply,
    Divide,
    Negate,
}

impl Symbol {
    /// Opcode-style name used by the disassembler.
    pub fn name(&self) -> &'static str {
        match self {
            Symbol::Constant(_) => "CONSTANT",
            Symbol::Add => "ADD",
            Symbol::Subtract => "SUBTRACT",
            Symbol::Multiply => "MULTIPLY",
            Symbol::Divide => "DIVIDE",
            Symbol::Negate => "NEGATE",
        }
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Constant(value) => write!(f, "{}", value),
            Symbol::Add => write!(f, "+"),
            Symbol::Subtract => write!(f, "-"),
            Symbol::Multiply => write!(f, "*"),
            Symbol::Divide => write!(f, "/"),
            Symbol::Negate => write!(f, "neg"),
        }
    }
}

/// Postfix output of one parse. Symbols are only ever appended.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Program {
    symbols: Vec<Symbol>,
}

impl Program {
    pub fn new() -> Self {
        Program { symbols: vec![] }
    }

    pub fn emit(&mut self, symbol: Symbol) {
        self.symbols.push(symbol);
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn into_symbols(self) -> Vec<Symbol> {
        self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, symbol) in self.symbols.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

impl From<Vec<Symbol>> for Program {
    fn from(symbols: Vec<Symbol>) -> Self {
        Program { symbols }
    }
}
