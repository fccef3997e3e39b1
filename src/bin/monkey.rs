extern crate getopts;
extern crate rmonkey;

use rmonkey::format;
use rmonkey::lexer::Lexer;
use rmonkey::session::{self, Session};
use rmonkey::token::Token;

use getopts::Options;
use std::env;
use std::fs;
use std::io::{self, BufRead, Write};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optflag("h", "help", "print this help menu");
    opts.optflag("l", "lex", "display tokens produced by the lexer");
    opts.optflag("p", "parse", "display the program produced by the parser");
    opts.optflag(
        "F",
        "format",
        "print the program as canonical source instead of evaluating it",
    );
    opts.optopt("f", "file", "evaluate source read from FILE", "FILE");
    opts.optopt(
        "d",
        "max-depth",
        "fail instead of nesting more than N function calls",
        "N",
    );

    let matches = opts.parse(&args[1..]).map_err(|err| err.to_string())?;

    if matches.opt_present("h") {
        let brief = format!("Usage: {} [options] ['let five = 5; five']", program);
        print!("{}", opts.usage(&brief));
        return Ok(());
    }

    let mut session = match matches.opt_str("d") {
        Some(n) => Session::with_max_depth(
            n.parse()
                .map_err(|err| format!("invalid max depth {:?}: {}", n, err))?,
        ),
        None => Session::new(),
    };

    let flags = Flags {
        lex: matches.opt_present("l"),
        parse: matches.opt_present("p"),
        format: matches.opt_present("F"),
    };

    // Source comes from a file or the free arguments; with neither, start a
    // REPL instead.
    let source = match matches.opt_str("f") {
        Some(path) => fs::read_to_string(&path).map_err(|err| format!("{}: {}", path, err))?,
        None if !matches.free.is_empty() => matches.free.join(" "),
        None => return repl(&mut session, flags),
    };

    if !run(&mut session, &source, flags) {
        process::exit(1);
    }

    Ok(())
}

// Which stages of processing to display for each chunk of source.
#[derive(Clone, Copy)]
struct Flags {
    lex: bool,
    parse: bool,
    format: bool,
}

// Evaluates (or formats) one chunk of source, printing its value or
// diagnostics. Returns whether it succeeded.
fn run(session: &mut Session, source: &str, flags: Flags) -> bool {
    if flags.lex {
        dump_tokens(source);
    }

    if flags.parse || flags.format {
        match session::parse(source) {
            Ok(prog) if flags.format => {
                println!("{}", format::format(&prog));
                return true;
            }
            Ok(prog) => {
                println!("parser:");
                for s in prog.statements {
                    println!("  - {}", s);
                }
                println!();
            }
            // Evaluation below reports the syntax errors, unless formatting.
            Err(errs) if flags.format => {
                for err in errs {
                    eprintln!("{}", err);
                }
                return false;
            }
            Err(_) => {}
        }
    }

    match session.evaluate(source) {
        Ok(value) => {
            println!("{}", value);
            true
        }
        Err(diagnostics) => {
            for d in diagnostics {
                eprintln!("{}", d);
            }
            false
        }
    }
}

fn dump_tokens(input: &str) {
    println!("lexer:");

    for (t, pos) in Lexer::new(input) {
        if t == Token::Eof {
            break;
        }

        println!("  - {}: {}", pos, t);
    }

    println!();
}

fn repl(session: &mut Session, flags: Flags) -> Result<(), String> {
    println!("Welcome to Monkey! Type .quit to exit.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!(">> ");
        io::stdout().flush().map_err(|err| err.to_string())?;

        let line = match lines.next() {
            Some(line) => line.map_err(|err| err.to_string())?,
            // EOF.
            None => break,
        };

        match line.trim() {
            ".quit" => break,
            "" => continue,
            input => {
                run(session, input, flags);
            }
        }
    }

    println!();
    Ok(())
}
