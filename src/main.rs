use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use calcula::interpreter::{environment::Environment, value::core::Value};
use clap::Parser;

/// calcula evaluates arithmetic over scalars, vectors, matrices and
/// rationals, one statement per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates every line of a file instead of starting an interactive
    /// session.
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Rejects `=` on names that are already bound.
    #[arg(short, long)]
    strict: bool,

    /// Pipe mode only prints the last value that was computed. Without a
    /// file, the statements are read from stdin without a prompt.
    #[arg(short, long)]
    pipe_mode: bool,
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let mut env = if args.strict { Environment::strict() } else { Environment::new() };

    let result = match &args.file {
        Some(path) => {
            let source = fs::read_to_string(path).unwrap_or_else(|_| {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          path.display());
                std::process::exit(1);
            });
            run_lines(source.lines().map(|line| Ok(line.to_string())), &mut env, args.pipe_mode)
        },
        None if args.pipe_mode => run_lines(io::stdin().lock().lines(), &mut env, true),
        None => repl(&mut env),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Installs a stderr subscriber when `RUST_LOG` is set.
///
/// Enable with `RUST_LOG=calcula=debug` or `RUST_LOG=calcula=trace`.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

/// Evaluates every statement line, reporting errors and moving on.
///
/// Blank lines and `//` comments are skipped. In pipe mode only the last
/// successful value is printed.
fn run_lines<I>(lines: I, env: &mut Environment, pipe_mode: bool) -> io::Result<()>
    where I: Iterator<Item = io::Result<String>>
{
    let mut last: Option<Value> = None;

    for (index, line) in lines.enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("//") {
            continue;
        }

        match env.evaluate_on_line(&line, index + 1) {
            Ok(value) if pipe_mode => last = Some(value),
            Ok(value) => println!("{value}"),
            Err(e) => eprintln!("{e}"),
        }
    }

    if let Some(value) = last {
        println!("{value}");
    }
    Ok(())
}

/// Reads statements from stdin until `exit`, `quit` or end of input.
fn repl(env: &mut Environment) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();
    let mut number = 0;

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            writeln!(stdout)?;
            return Ok(());
        }
        number += 1;

        let statement = line.trim_end_matches(['\n', '\r']);
        match statement.trim() {
            "exit" | "quit" => return Ok(()),
            "" => continue,
            _ => {},
        }

        match env.evaluate_on_line(statement, number) {
            Ok(value) => writeln!(stdout, "{value}")?,
            Err(e) => eprintln!("{e}"),
        }
    }
}
