use anyhow::Context;
use clap::Parser;
use match_cli::cli::Cli;
use match_cli::driver;
use match_core::prelude::Engine;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let mut engine = Engine::new();
    let stdout = io::stdout();
    let stderr = io::stderr();

    match &cli.input {
        Some(path) => {
            let reader = BufReader::new(
                File::open(path).with_context(|| format!("opening input {}", path.display()))?,
            );
            run_with_output(&mut engine, reader, &cli, stdout, stderr)?;
        }
        None => {
            let reader = BufReader::new(io::stdin());
            run_with_output(&mut engine, reader, &cli, stdout, stderr)?;
        }
    }

    Ok(())
}

fn run_with_output(
    engine: &mut Engine,
    reader: impl io::BufRead,
    cli: &Cli,
    stdout: io::Stdout,
    stderr: io::Stderr,
) -> anyhow::Result<()> {
    match &cli.output {
        Some(path) => {
            let writer = BufWriter::new(
                File::create(path)
                    .with_context(|| format!("creating output {}", path.display()))?,
            );
            driver::run(engine, reader, writer, stderr.lock(), cli.propagate_bad_id)
        }
        None => driver::run(
            engine,
            reader,
            stdout.lock(),
            stderr.lock(),
            cli.propagate_bad_id,
        ),
    }
}
