use super::program::{Program, Symbol};

/// Renders `program` one symbol per line, each prefixed by its offset.
///
/// ```text
/// == shell ==
/// 0000 CONSTANT         '1'
/// 0001 NEGATE
/// ```
pub fn disassemble(program: &Program, name: &str) -> String {
    let mut out = format!("== {} ==\n", name);

    for (offset, symbol) in program.symbols().iter().enumerate() {
        out.push_str(&disassemble_symbol(symbol, offset));
        out.push('\n');
    }

    out
}

pub fn disassemble_symbol(symbol: &Symbol, offset: usize) -> String {
    match symbol {
        Symbol::Constant(value) => format!("{:04} {:<16} '{}'", offset, symbol.name(), value),
        _ => format!("{:04} {}", offset, symbol.name()),
    }
}
