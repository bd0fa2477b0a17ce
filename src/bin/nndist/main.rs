use std::process::ExitCode;

mod cli;
mod commands;
mod config;
mod display;
mod io;
mod util;

use io::{ArgSelector, PromptSelector};

fn main() -> ExitCode {
    let cli = cli::parse();
    init_logging(cli.verbose);

    let ctx = display::Context::detect()
        .with_quiet(cli.quiet)
        .with_prompt(!cli.no_prompt);

    if ctx.interactive {
        display::print_banner();
    }

    let mut selector = ArgSelector::new(cli.input, cli.output);
    if ctx.can_prompt {
        selector = selector.with_fallback(PromptSelector::terminal());
    }

    match commands::run_scan(&cli.scan, &mut selector, ctx) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            display::print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
