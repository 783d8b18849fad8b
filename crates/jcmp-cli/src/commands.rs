use std::process::ExitCode;

use anyhow::Context;
use colored::Colorize;

use jcmp_diff::compare;
use jcmp_render::render_report;
use jcmp_server::{CompareServer, ServerConfig};

use crate::cli::{Cli, Command, CompareArgs, ServeArgs};
use crate::input::load_value;

pub fn run_command(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Command::Compare(args) => cmd_compare(args),
        Command::Serve(args) => cmd_serve(args),
    }
}

fn cmd_compare(args: CompareArgs) -> anyhow::Result<ExitCode> {
    let actual = load_value(&args.actual).context("parsing actual JSON")?;
    let expected = load_value(&args.expected).context("parsing expected JSON")?;

    let comparison = compare(&actual, &expected);
    tracing::debug!(mismatch = comparison.has_mismatch(), "comparison finished");
    print!("{}", render_report(&comparison, !args.no_color));

    // Shell convention: differences are a non-zero exit.
    if comparison.has_mismatch() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<ExitCode> {
    let config = ServerConfig {
        bind_addr: args
            .bind
            .parse()
            .with_context(|| format!("invalid bind address {}", args.bind))?,
        colorize: !args.no_color,
    };

    println!("{} jcmp comparison server", "▶".green().bold());
    println!("  Listening on {}", format!("http://{}", config.bind_addr).bold());
    println!("  POST /compare with {{\"actual\": ..., \"expected\": ...}}");

    tracing::info!(bind = %config.bind_addr, colorize = config.colorize, "starting server");
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;
    runtime.block_on(CompareServer::new(config).serve())?;
    Ok(ExitCode::SUCCESS)
}
