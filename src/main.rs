use std::env;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, IsTerminal, Write};
use std::process;

use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

use lines::{Action, Error, Input, Interpreter, Invocation, Parser};

fn main() {
    let args: Vec<String> = env::args().collect();

    if let Err(e) = run(&args[1..]) {
        eprintln!("lines: {}", e);
        if e.is_config() {
            eprintln!("Use --help to see valid options.");
        }
        process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), Error> {
    let invocation = Parser::new(args.iter().cloned()).parse()?;

    match invocation.action {
        Action::Help => {
            print_help();
            return Ok(());
        }
        Action::Version => {
            println!("lines {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Action::Run => {}
    }

    init_logging(invocation.verbose);
    trace!("Full CLI args: {:?}", args);
    for (index, command) in invocation.commands.iter().enumerate() {
        debug!(index, "{}", command);
    }

    let stdout = io::stdout();
    let mut output = BufWriter::new(stdout.lock());
    execute(&invocation, &mut output)
}

fn execute<W: Write>(invocation: &Invocation, output: &mut W) -> Result<(), Error> {
    let mut interpreter = Interpreter::new(&invocation.commands);

    let stats = match &invocation.input {
        Input::Stdin => {
            let stdin = io::stdin();
            interpreter.run(stdin.lock(), output)?
        }
        Input::File(path) => {
            let file = File::open(path).map_err(|e| Error::open(path, e))?;
            interpreter.run(BufReader::new(file), output)?
        }
    };

    debug!(
        lines_read = stats.lines_read,
        lines_emitted = stats.lines_emitted,
        bytes_read = stats.bytes_read,
        bytes_emitted = stats.bytes_emitted,
        "done"
    );
    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over `-v`
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(verbose >= 2)
        .init();
}

fn print_help() {
    println!(
        r#"Usage: lines [OPTIONS] [FILE]

Select lines from FILE (default: stdin) with a sequence of commands.
Commands run in the order given; lines are printed while passing is on.
Once all commands are done, the remaining lines follow the last state.

Commands:
  -p, --pass         Turn passing on
  -x, --reject       Turn passing off
  -t, --toggle       Flip passing
  -m, --move N       Advance to line index N (0-based)
  -j, --jump N       Advance by N lines
  -f, --find TAG     Advance to the next line starting with TAG
  -s, --skip TAG     Like --find, but also consume the matching line

Range mode:
  -l, --left N       First line to select (1-based)
  -r, --right N      Last line to select (default: none)
  -i, --invert       Exclude the range instead

Options:
  -v, --verbose      Log progress to stderr (repeat for more)
  -h, --help         Print this help message
      --version      Print version information

Examples:
  lines -l 10 -r 20 file.txt
  lines -s BEGIN -p -f END -x notes.txt
  lines -p -j 5 -x < file.txt
"#
    );
}
