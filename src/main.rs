// ============================================================================
// Money Words CLI
// Reads amounts from stdin and prints them in English words
// ============================================================================

use money_words::prelude::*;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = PromptSession::new(stdin.lock(), stdout.lock());

    match session.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("I/O error: {}", err);
            ExitCode::FAILURE
        }
    }
}
