//! Command-line front end: `enigma CONFIG [INPUT [OUTPUT]]`.
//!
//! CONFIG names a machine-description file. INPUT, when present, names a
//! file of setting and message lines; otherwise records come from
//! standard input. OUTPUT, when present, receives the converted lines;
//! otherwise they go to standard output. Converted lines are written as
//! they are produced, so everything before a bad record still comes out.
//! Any error prints `Error: <message>` on standard error and exits with
//! status 1.

use std::env;
use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::process;

use enigma::{MachineConfig, Session};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() || args.len() > 3 {
        eprintln!("Usage: enigma CONFIG [INPUT [OUTPUT]]");
        process::exit(1);
    }
    if let Err(err) = run(&args) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
    let config_text = fs::read_to_string(&args[0])
        .map_err(|err| format!("could not open {}: {}", args[0], err))?;
    let config = MachineConfig::parse(&config_text)?;
    let mut session = Session::new(config)?;

    let input = match args.get(1) {
        Some(path) => fs::read_to_string(path)
            .map_err(|err| format!("could not open {}: {}", path, err))?,
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        }
    };

    let mut output: Box<dyn Write> = match args.get(2) {
        Some(path) => Box::new(
            fs::File::create(path)
                .map_err(|err| format!("could not open {}: {}", path, err))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    for line in input.lines() {
        if let Some(converted) = session.process_line(line)? {
            writeln!(output, "{}", converted)?;
        }
    }
    Ok(())
}
