mod cli;

use std::io::{self, BufWriter};
use std::process::ExitCode;

use anyhow::Context;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use cli::CheckerArgs;
use domain_checker::{check_request, read_request, read_request_from_file};

fn main() -> ExitCode {
    let args = CheckerArgs::from_env();

    // Logs go to stderr; stdout carries only verdicts. Level is overridden by `RUST_LOG`.
    let filter = if args.quiet {
        EnvFilter::default().add_directive(LevelFilter::OFF.into())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match check(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn check(args: &CheckerArgs) -> anyhow::Result<()> {
    let options = args.input_options();

    let request = match &args.input {
        Some(path) => read_request_from_file(path, &options)
            .with_context(|| format!("reading {}", path.display()))?,
        None => read_request(io::stdin().lock(), &options).context("reading stdin")?,
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    check_request(request, &mut out).context("writing verdicts")
}
