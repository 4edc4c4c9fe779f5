use structopt::{clap::AppSettings, StructOpt};

#[derive(StructOpt, Debug)]
#[structopt(
    name = "pratt",
    about = "Evaluates arithmetic expressions with a Pratt parser",
    setting = AppSettings::AllowNegativeNumbers
)]
pub struct Options {
    /// Print the postfix program and its disassembly before evaluating.
    #[structopt(short, long)]
    pub dump: bool,

    /// Output verbosity.
    /// Default: warnings (or RUST_LOG).
    /// -v: info.
    /// -vv: debug.
    /// -vvv: trace.
    #[structopt(short, parse(from_occurrences))]
    pub verbosity: u8,

    /// Expression to evaluate once instead of starting the REPL.
    /// Tokens must be separated by spaces; separate words are joined
    /// with a single space, so `pratt 1 + 2` evaluates `1 + 2`.
    pub expression: Vec<String>,
}

impl Options {
    /// The one-shot expression, if any words were given.
    pub fn expression(&self) -> Option<String> {
        if self.expression.is_empty() {
            None
        } else {
            Some(self.expression.join(" "))
        }
    }

    pub fn filter_level(&self) -> Option<log::LevelFilter> {
        match self.verbosity {
            0 => None,
            1 => Some(log::LevelFilter::Info),
            2 => Some(log::LevelFilter::Debug),
            _ => Some(log::LevelFilter::Trace),
        }
    }
}
