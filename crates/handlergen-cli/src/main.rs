//! handlergen CLI entrypoint
//! Parses command-line arguments and dispatches to the core generator.

// Internal imports (std, crate)
use std::path::PathBuf;
use std::process::ExitCode;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use handlergen_core::{Config, OutputMode};
use tracing_subscriber::EnvFilter;

/// Regenerate HTTP handler scaffolding from the bundled discovery document
#[derive(Parser, Debug)]
#[command(name = "handlergen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// YAML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Destination of the generated file (overrides the configuration)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the generated source instead of writing it
    #[arg(long, conflicts_with = "check")]
    stdout: bool,

    /// Fail if the generated file is missing or out of date
    #[arg(long)]
    check: bool,
}

impl Cli {
    fn mode(&self) -> OutputMode {
        if self.check {
            OutputMode::Check
        } else if self.stdout {
            OutputMode::DryRun
        } else {
            OutputMode::Write
        }
    }

    fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => Config::default(),
        };
        if let Some(output) = &self.output {
            config.output_path = Some(output.clone());
        }
        Ok(config)
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.load_config()?;
    let mode = cli.mode();

    let generated = handlergen_core::generate(&config, mode).with_context(|| {
        format!(
            "Failed to generate handlers for {}",
            config.resolve_output_path().display()
        )
    })?;

    if mode == OutputMode::DryRun {
        print!("{}", generated.source);
    } else {
        tracing::info!(
            handlers = generated.handler_count,
            path = %generated.path.display(),
            "Generation finished"
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
