//! Line-oriented driver for [`RankSet`]: reads one line of whitespace
//! separated `op value` pairs from stdin, runs them against a single set,
//! and prints the query results space-separated on one line.
//!
//! Ops: `k <key>` inserts, `m <rank>` selects the rank-th smallest key
//! (1-indexed), `n <key>` counts keys strictly less than `key`. The line
//! is validated in full before anything touches the set; insert and
//! select failures abort the run with a message on stderr.

use std::io::{self, BufRead as _};
use std::process::ExitCode;

use rank_tree::{DuplicateKey, OutOfRange, RankSet};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
enum CommandError {
    #[error("given command line is empty")]
    EmptyLine,
    #[error("wrong number of tokens given: {0}; expected an even count")]
    OddTokenCount(usize),
    #[error("token '{0}' is not a valid argument")]
    InvalidToken(String),
    #[error(transparent)]
    DuplicateKey(#[from] DuplicateKey),
    #[error(transparent)]
    OutOfRange(#[from] OutOfRange),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Insert(i32),
    Select(usize),
    CountLess(i32),
}

fn parse(line: &str) -> Result<Vec<Command>, CommandError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(CommandError::EmptyLine);
    }
    if tokens.len() % 2 != 0 {
        return Err(CommandError::OddTokenCount(tokens.len()));
    }

    let mut commands = Vec::with_capacity(tokens.len() / 2);
    for pair in tokens.chunks_exact(2) {
        let (op, arg) = (pair[0], pair[1]);
        if !matches!(op, "k" | "m" | "n") {
            return Err(CommandError::InvalidToken(op.to_owned()));
        }
        let value: i32 = arg
            .parse()
            .map_err(|_| CommandError::InvalidToken(arg.to_owned()))?;
        commands.push(match op {
            "k" => Command::Insert(value),
            // A non-positive token cannot name a rank; rank 0 is always
            // out of range.
            "m" => Command::Select(usize::try_from(value).unwrap_or(0)),
            _ => Command::CountLess(value),
        });
    }
    Ok(commands)
}

fn execute(commands: &[Command]) -> Result<String, CommandError> {
    let mut set = RankSet::new();
    let mut output = String::new();
    for &command in commands {
        match command {
            Command::Insert(key) => set.insert(key)?,
            Command::Select(rank) => {
                output.push_str(&format!("{} ", set.select(rank)?));
            }
            Command::CountLess(key) => {
                output.push_str(&format!("{} ", set.count_less(&key)));
            }
        }
    }
    Ok(output)
}

fn main() -> ExitCode {
    let mut line = String::new();
    if let Err(err) = io::stdin().lock().read_line(&mut line) {
        eprintln!("failed to read input: {err}");
        return ExitCode::FAILURE;
    }
    match parse(&line).and_then(|commands| execute(&commands)) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
