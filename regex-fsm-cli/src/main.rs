use std::process;

use anyhow::Context;
use regex_fsm::{Builder, CompiledPattern};

const USAGE: &str = "\
Usage: regex-fsm <COMMAND>

Commands:
  graph <pattern>                          Print the compiled state graph
  match [--vacuous] <pattern> <input>...   Match pattern against each input

Options:
  --vacuous    Let repetition states absorb input characters
  -h, --help   Print this help message

Set RUST_LOG=debug (or trace) to see compiler and matcher diagnostics.";

enum Command {
    Graph { pattern: String },
    Match { pattern: String, inputs: Vec<String>, vacuous: bool },
    Help,
}

fn parse_args(args: Vec<String>) -> anyhow::Result<Command> {
    let mut args = args.into_iter();
    let command = match args.next() {
        Some(command) => command,
        None => anyhow::bail!("missing command"),
    };
    match command.as_str() {
        "-h" | "--help" => Ok(Command::Help),
        "graph" => {
            let pattern = args.next().context("graph: missing <pattern>")?;
            if let Some(extra) = args.next() {
                anyhow::bail!("graph: unexpected argument {:?}", extra);
            }
            Ok(Command::Graph { pattern })
        }
        "match" => {
            let mut vacuous = false;
            let mut positional = Vec::new();
            for arg in args {
                match arg.as_str() {
                    "--vacuous" => vacuous = true,
                    _ => positional.push(arg),
                }
            }
            let mut positional = positional.into_iter();
            let pattern = positional.next().context("match: missing <pattern>")?;
            let inputs: Vec<String> = positional.collect();
            if inputs.is_empty() {
                anyhow::bail!("match: missing <input>");
            }
            Ok(Command::Match { pattern, inputs, vacuous })
        }
        other => anyhow::bail!("unknown command {:?}", other),
    }
}

fn compile(pattern: &str, vacuous: bool) -> anyhow::Result<CompiledPattern> {
    Builder::new()
        .vacuous_repetition(vacuous)
        .build(pattern)
        .with_context(|| format!("failed to compile pattern {:?}", pattern))
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Help => println!("{}", USAGE),
        Command::Graph { pattern } => {
            let compiled = compile(&pattern, false)?;
            print!("{:?}", compiled.graph());
        }
        Command::Match { pattern, inputs, vacuous } => {
            let compiled = compile(&pattern, vacuous)?;
            for input in inputs.iter() {
                let verdict =
                    if compiled.matches(input) { "MATCH" } else { "NO_MATCH" };
                println!("{:<8} {}", verdict, input);
            }
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let command = match parse_args(std::env::args().skip(1).collect()) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {:#}\n\n{}", err, USAGE);
            process::exit(2);
        }
    };
    if let Err(err) = run(command) {
        eprintln!("error: {:#}", err);
        process::exit(2);
    }
}
