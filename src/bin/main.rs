use pascal_scanner::{Scanner, TokenKind};
use std::{
    env,
    io::{self, Write},
};

fn main() -> io::Result<()> {
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    let args: Vec<String> = env::args().collect();
    match args.len() {
        1 => run_prompt(&mut stdout, &mut stderr)?,
        2 => run_file(args[1].as_str(), &mut stdout, &mut stderr)?,
        _ => {
            writeln!(stdout, "Usage: pascal-scan [source]")?;
            std::process::exit(64);
        },
    };

    Ok(())
}

fn run_file(path: &str, out: &mut impl Write, err_out: &mut impl Write) -> io::Result<()> {
    let contents = std::fs::read_to_string(path)?;
    if !run(contents.as_str(), out, err_out)? {
        std::process::exit(65);
    }
    Ok(())
}

fn run_prompt(out: &mut impl Write, err_out: &mut impl Write) -> io::Result<()> {
    let mut buffer = String::new();
    let stdin = io::stdin();

    loop {
        write!(out, "> ")?;
        out.flush()?;

        buffer.clear();

        let num_bytes = stdin.read_line(&mut buffer)?;
        if num_bytes == 0 { break };

        run(buffer.as_str(), out, err_out)?;
    }

    Ok(())
}

/// Prints every token of `source`. Returns `false` if scanning stopped on an error.
fn run(source: &str, out: &mut impl Write, err_out: &mut impl Write) -> io::Result<bool> {
    let mut scanner = Scanner::new(source);
    loop {
        match scanner.next_token() {
            Ok(token) => {
                writeln!(out, "{}", token)?;
                if token.kind() == TokenKind::EndOfInput {
                    return Ok(true);
                }
            },
            Err(e) => {
                writeln!(err_out, "{}", e)?;
                return Ok(false);
            },
        }
    }
}
