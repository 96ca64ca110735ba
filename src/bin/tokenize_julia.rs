//! Tokenize Julia from stdin and print each line's tokens on stdout.
//!
//! Each output line holds the state the input line started in, then
//! `Type(length) "lexeme"` for every token. Stops at the first line that fails.
//!
//! An optional argument names the state to start in (default `TopLevelContent`).
//! Log output is controlled by `RUST_LOG`.
//!
//! ```ignore
//! <script.jl tokenize_julia
//! <tail.jl tokenize_julia InsideDoubleQuoteString
//! ```

use std::io::{BufRead, ErrorKind, Write};

use tokenize_julia::{tokenize_line, LineState, INITIAL_LINE_STATE};

fn main() -> std::io::Result<()> {
    // install global collector configured based on RUST_LOG env var.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut state = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<LineState>()
            .map_err(|e| std::io::Error::new(ErrorKind::InvalidInput, e))?,
        None => INITIAL_LINE_STATE,
    };

    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();

    for (i, line) in stdin.lines().enumerate() {
        let line = line?;
        let result = tokenize_line(&line, state).map_err(|err| err.at_line(i + 1))?;

        write!(stdout, "{}:", state)?;
        let mut chars = line.chars();
        for token in &result.tokens {
            let lexeme: String = chars.by_ref().take(token.length).collect();
            write!(stdout, " {} {:?}", token, lexeme)?;
        }
        writeln!(stdout)?;

        state = result.state;
    }
    tracing::debug!(%state, "end of input");
    Ok(())
}
