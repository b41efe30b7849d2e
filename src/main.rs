use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{anyhow, bail, Result};
use big_mul::BigUint;

/// Longest accepted input line, newline excluded.
const MAX_LINE_LEN: usize = 4095;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let first = read_operand(&mut input, "Enter first (decimal) number: ")?;
    let second = read_operand(&mut input, "Enter second (decimal) number: ")?;

    let invalid = || anyhow!("Invalid input. Please enter decimal digits only.");
    let a: BigUint = first.parse().map_err(|_| invalid())?;
    let b: BigUint = second.parse().map_err(|_| invalid())?;

    println!("Result (hex): {}", (&a * &b).to_hex());
    Ok(())
}

/// Prompts on stdout and reads one line. EOF, an I/O failure, or a line past
/// [`MAX_LINE_LEN`] is an input error; no arithmetic happens after one.
fn read_operand(input: &mut impl BufRead, prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush().map_err(|_| anyhow!("Input error."))?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|_| anyhow!("Input error."))?;
    if read == 0 {
        bail!("Input error.");
    }
    if line.trim_end_matches(['\r', '\n']).len() > MAX_LINE_LEN {
        bail!("Input error.");
    }
    Ok(line)
}
