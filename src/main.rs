// file: src/main.rs
// version: 2.1.0
// guid: c81d5a3e-0f47-4b92-a6e3-58b9d2c7e104

//! qwr - main entry point

use qwr::{
    cli::{self, Invocation},
    logging::logger,
    Result,
};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("[Error]: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let tokens = cli::tokenize(std::env::args_os().skip(1));
    let invocation = cli::interpret(&tokens)?;

    if let Invocation::Launch { options, .. } = &invocation {
        logger::init_logger(options.verbosity)?;
    }

    cli::run_invocation(invocation).await
}
