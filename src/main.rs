use std::io::{self, BufRead, Write};

use log::{debug, error, info};
use options::Options;
use pratt::{
    compile, format_error, program::disassemble::disassemble, vm::machine::Machine, SHELL_SOURCE,
};
use structopt::StructOpt;

mod options;

fn init_logger(options: &Options) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = options.filter_level() {
        builder.filter_level(level);
    }
    builder.init();
}

/// Handles one line; every line gets its own parse and its own machine.
fn run_line(line: &str, dump: bool) -> bool {
    let result = compile(line, None).and_then(|program| {
        if dump {
            println!("{}", program);
            print!("{}", disassemble(&program, SHELL_SOURCE));
        }
        Machine::new().run(&program)
    });

    match result {
        Ok(value) => {
            println!("{}", value);
            true
        }
        Err(error) => {
            debug!("{}", error);
            print!("{}", format_error(&error, line));
            false
        }
    }
}

fn main() {
    let options = Options::from_args();
    init_logger(&options);

    if let Some(expression) = options.expression() {
        if !run_line(&expression, options.dump) {
            std::process::exit(1);
        }
        return;
    }

    info!("starting repl");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("pratt> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(error)) => {
                error!("failed to read input: {}", error);
                break;
            }
            None => break,
        };

        let line = line.trim_end();
        if line == "q" {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        run_line(line, options.dump);
    }
}
