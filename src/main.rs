//! android-template-hook CLI entry point
//!
//! Post-generation hook for the Android Hello World project template.

use android_template_hook::cli::args::Args;
use android_template_hook::version::get_build_info;
use android_template_hook::{build_hook, HookConfig, HookOutcome, EXIT_SETUP_FAULT};

use anyhow::Context as _;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if !e.use_stderr() => {
            // --help
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(EXIT_SETUP_FAULT);
        }
    };

    if args.version {
        println!("{}", get_build_info());
        return ExitCode::SUCCESS;
    }

    // RUST_LOG wins over -v
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter())),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run(HookConfig::from_args(&args)) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_SETUP_FAULT)
        }
    }
}

fn run(config: HookConfig) -> anyhow::Result<HookOutcome> {
    let project_dir = config.project_dir.clone();
    build_hook(config)
        .run()
        .with_context(|| format!("post-generation hook aborted in {}", project_dir.display()))
}
