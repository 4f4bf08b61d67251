use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use composedot::{ComposeDotOptions, run_main};
use composedot_error::{Error, Result};

#[derive(Parser, Debug)]
#[command(
    name = "composedot",
    about = "composedot: draw a docker-compose file as a Graphviz graph",
    version
)]
pub struct Cli {
    /// Compose file to convert
    #[arg(value_name = "FILE")]
    input: PathBuf,
}

pub fn run(args: Cli) -> Result<()> {
    let total_start = Instant::now();

    let opts = ComposeDotOptions::new(args.input);
    let output = run_main(&opts)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    let total_secs = total_start.elapsed().as_secs_f64();
    tracing::info!(total_secs, "complete");
    Ok(())
}

fn fail(err: &Error) -> ExitCode {
    eprintln!("Error: {err}");
    tracing::error!(error = %err, "execution failed");
    ExitCode::from(err.exit_code() as u8)
}

pub fn main() -> ExitCode {
    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let args = match Cli::try_parse() {
        Ok(args) => args,
        // --help and --version
        Err(err) if !err.use_stderr() => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            return fail(&Error::usage(err.to_string()).with_operation("cli::parse"));
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fail(&err),
    }
}
