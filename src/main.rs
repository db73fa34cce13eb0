use blogfront::cli::{handle_command, Cli, CommandStatus};
use blogfront::startup::{init_tracing, BlogClient, BlogConfig};

use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let mut config =
        BlogConfig::load(cli.config.as_deref()).wrap_err("Failed to load configuration")?;
    if let Some(api) = &cli.api {
        config = config.with_api_origin(api.as_str());
        config.validate()?;
    }

    init_tracing(&config.log_filter, cli.verbose);

    let client = BlogClient::bootstrap(config)?;

    // One request in flight at a time per view; a single thread is enough.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let status = runtime.block_on(handle_command(&client, &cli.command))?;

    Ok(match status {
        CommandStatus::Done => ExitCode::SUCCESS,
        CommandStatus::Rejected => ExitCode::from(1),
        CommandStatus::Failed => ExitCode::from(2),
    })
}
